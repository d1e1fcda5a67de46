// Resume analysis: persist the upload, extract its text, check keyword coverage.
// Extraction failures degrade to the "unable to read" tip; only storage
// failures (disk full, permissions) surface to the caller.

pub mod extract;
pub mod keywords;
pub mod storage;

use std::path::Path;

use tracing::warn;

use crate::models::resume::{ResumeAnalysis, ResumeDocument};
use extract::extract_resume_text_blocking;
use keywords::{keyword_tips, NOT_UPLOADED_TIP};
use storage::persist_upload;

pub async fn analyze_resume(
    upload_dir: &Path,
    resume: Option<&ResumeDocument>,
) -> std::io::Result<ResumeAnalysis> {
    let Some(doc) = resume else {
        return Ok(ResumeAnalysis {
            text: String::new(),
            tips: vec![NOT_UPLOADED_TIP.to_string()],
        });
    };

    let path = persist_upload(upload_dir, doc).await?;

    let text = match extract_resume_text_blocking(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume extraction failed for {}: {e}", doc.filename);
            String::new()
        }
    };

    Ok(ResumeAnalysis {
        tips: keyword_tips(&text),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use super::keywords::{STRONG_RESUME_TIP, UNREADABLE_TIP};

    #[tokio::test]
    async fn test_no_upload_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = analyze_resume(dir.path(), None).await.unwrap();
        assert_eq!(analysis.tips, vec![NOT_UPLOADED_TIP]);
        assert!(analysis.text.is_empty());
        // nothing is written when there is no upload
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_upload_is_unreadable_but_stored() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");
        let doc = ResumeDocument {
            filename: "cv.pdf".to_string(),
            bytes: Bytes::from_static(b"%PDF-1.4 garbage"),
        };
        let analysis = analyze_resume(&upload_dir, Some(&doc)).await.unwrap();
        assert_eq!(analysis.tips, vec![UNREADABLE_TIP]);
        assert!(analysis.text.is_empty());
        assert!(upload_dir.join("cv.pdf").exists());
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let doc = ResumeDocument {
            filename: "cv.txt".to_string(),
            bytes: Bytes::from_static(b"python machine learning project internship sql communication"),
        };
        let analysis = analyze_resume(dir.path(), Some(&doc)).await.unwrap();
        assert_eq!(analysis.tips, vec![UNREADABLE_TIP]);
    }

    #[tokio::test]
    async fn test_readable_docx_is_checked_for_keywords() {
        use docx_rs::{Docx, Paragraph, Run};
        use std::io::Cursor;

        let mut buf = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Python, SQL")))
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Machine Learning Project")),
            )
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Internship; Communication")),
            )
            .build()
            .pack(&mut buf)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let doc = ResumeDocument {
            filename: "cv.docx".to_string(),
            bytes: Bytes::from(buf.into_inner()),
        };
        let analysis = analyze_resume(dir.path(), Some(&doc)).await.unwrap();
        assert_eq!(analysis.tips, vec![STRONG_RESUME_TIP]);
        assert!(analysis.text.starts_with("python, sql "));
    }
}
