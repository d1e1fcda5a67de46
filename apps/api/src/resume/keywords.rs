//! Resume keyword checker.

/// Checked in this order; plain substring containment, so "internship"
/// also matches "internships".
pub const RESUME_KEYWORDS: [&str; 6] = [
    "python",
    "machine learning",
    "project",
    "internship",
    "sql",
    "communication",
];

pub const NOT_UPLOADED_TIP: &str = "ℹ️ Resume not uploaded for analysis.";
pub const UNREADABLE_TIP: &str = "⚠️ Unable to read resume content. Try another file.";
pub const STRONG_RESUME_TIP: &str = "✅ Resume looks strong and relevant.";

pub fn missing_keyword_tip(keyword: &str) -> String {
    format!("➕ Consider adding '{keyword}' to your resume.")
}

/// Tips for lower-cased resume text. Blank text reads as unreadable.
pub fn keyword_tips(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![UNREADABLE_TIP.to_string()];
    }

    let tips: Vec<String> = RESUME_KEYWORDS
        .iter()
        .filter(|keyword| !text.contains(*keyword))
        .map(|keyword| missing_keyword_tip(keyword))
        .collect();

    if tips.is_empty() {
        vec![STRONG_RESUME_TIP.to_string()]
    } else {
        tips
    }
}
