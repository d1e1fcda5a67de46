use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage<'a> {
    pub result: &'a str,
    pub tips: &'a [String],
    pub resume_tips: &'a [String],
}
