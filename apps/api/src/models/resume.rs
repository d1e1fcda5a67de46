use bytes::Bytes;
/// An uploaded resume, held only for the lifetime of the request.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    /// Already passed through `secure_filename`.
    pub filename: String,
    pub bytes: Bytes,
}

/// Extracted text plus the keyword-gap tips shown to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeAnalysis {
    /// Lower-cased; empty when nothing was uploaded or extraction failed.
    pub text: String,
    pub tips: Vec<String>,
}
