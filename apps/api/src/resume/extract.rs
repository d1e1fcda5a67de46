//! Resume text extraction for PDF and DOCX uploads.
//!
//! Every failure is reported as an `ExtractionError`; callers decide how to
//! degrade. Parsing is CPU-bound, so the async entry point runs on the
//! blocking pool, which also contains parser panics.

use std::path::{Path, PathBuf};

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("cannot read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("extractor panicked: {0}")]
    Panicked(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Case-insensitive on the extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "docx" => Some(ResumeFormat::Docx),
            _ => None,
        }
    }
}

/// Reads the stored upload back from disk and returns its lower-cased text.
pub fn extract_resume_text(path: &Path) -> Result<String, ExtractionError> {
    let format = ResumeFormat::from_path(path)
        .ok_or_else(|| ExtractionError::UnsupportedFormat(path.display().to_string()))?;
    let bytes = std::fs::read(path)?;

    let text = match format {
        ResumeFormat::Pdf => extract_pdf_text(&bytes)?,
        ResumeFormat::Docx => extract_docx_text(&bytes)?,
    };
    debug!("Extracted {} chars from {}", text.len(), path.display());
    Ok(text.to_lowercase())
}

/// `extract_resume_text` on the blocking pool. A parser panic becomes
/// `ExtractionError::Panicked` instead of taking the request down.
pub async fn extract_resume_text_blocking(path: PathBuf) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_resume_text(&path))
        .await
        .map_err(|e| ExtractionError::Panicked(e.to_string()))?
}

/// Page texts concatenated in page order. A page that fails to decode
/// contributes nothing; only an unloadable document is an error.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("Skipping unreadable PDF page {page_number}: {e}"),
        }
    }

    if text.trim().is_empty() {
        // lopdf ignores ToUnicode maps; pdf-extract decodes them.
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(full) => return Ok(full),
            Err(e) => warn!("pdf-extract fallback failed: {e}"),
        }
    }
    Ok(text)
}

/// Top-level paragraphs, each followed by a single space.
fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(format!("{e:?}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push(' ');
        }
    }
    Ok(text)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

// Hyperlinks wrap their own runs, so they are walked like the paragraph itself.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}
