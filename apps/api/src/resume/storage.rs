//! Upload persistence.
//!
//! Files land in the upload directory under their sanitized name. Two
//! concurrent uploads with the same name race, and the later write wins.

use std::path::{Path, PathBuf};

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::models::resume::ResumeDocument;

/// Used when sanitizing leaves nothing behind, e.g. "../.." or "简历".
const FALLBACK_FILENAME: &str = "resume";

/// Reduces a client-supplied filename to a flat, ASCII-only name that is safe
/// to join onto the upload directory.
///
/// The name is NFKD-normalized so accented letters keep their base letter,
/// then non-ASCII characters are dropped, path separators become spaces, runs of
/// whitespace collapse to `_`, anything outside `[A-Za-z0-9_.-]` is removed and
/// leading/trailing `.` and `_` are stripped.
pub fn secure_filename(raw: &str) -> String {
    let ascii: String = raw
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == '_');
    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Writes the upload to `<upload_dir>/<filename>`, creating the directory if
/// needed, and returns the written path.
pub async fn persist_upload(upload_dir: &Path, doc: &ResumeDocument) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(upload_dir).await?;
    let path = upload_dir.join(&doc.filename);
    tokio::fs::write(&path, &doc.bytes).await?;
    debug!("Stored upload {} ({} bytes)", path.display(), doc.bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_plain_name_is_unchanged() {
        assert_eq!(secure_filename("resume.pdf"), "resume.pdf");
        assert_eq!(secure_filename("Jane-Doe_CV.v2.docx"), "Jane-Doe_CV.v2.docx");
    }

    #[test]
    fn test_whitespace_becomes_underscore() {
        assert_eq!(secure_filename("My  Resume 2024.pdf"), "My_Resume_2024.pdf");
    }

    #[test]
    fn test_path_components_are_flattened() {
        assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(secure_filename("C:\\Users\\me\\cv.docx"), "C_Users_me_cv.docx");
    }

    #[test]
    fn test_accents_fold_and_symbols_are_dropped() {
        assert_eq!(secure_filename("résumé (final)!.pdf"), "resume_final.pdf");
        assert_eq!(secure_filename("Ångström CV.docx"), "Angstrom_CV.docx");
    }

    #[test]
    fn test_nothing_left_falls_back() {
        assert_eq!(secure_filename("../.."), "resume");
        assert_eq!(secure_filename("简历"), "resume");
    }

    #[tokio::test]
    async fn test_persist_creates_directory_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let upload_dir = root.path().join("uploads");

        let first = ResumeDocument {
            filename: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"first"),
        };
        let path = persist_upload(&upload_dir, &first).await.unwrap();
        assert_eq!(path, upload_dir.join("cv.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        let second = ResumeDocument {
            filename: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"second"),
        };
        persist_upload(&upload_dir, &second).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }
}
