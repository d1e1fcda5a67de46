//! Form-input parsing for `POST /predict`.
//!
//! The browser form posts `multipart/form-data` because of the optional resume
//! upload; plain `application/x-www-form-urlencoded` posts are accepted too.
//! Other bodies carry no fields and fail as missing input.
//! Parsing is all-or-nothing: one bad field rejects the whole submission.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form,
};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::placement::PlacementFeatures;
use crate::models::resume::ResumeDocument;
use crate::resume::storage::secure_filename;

pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("missing field '{0}'")]
    Missing(&'static str),

    #[error("field '{field}' is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Raw submission: text fields in arrival order plus the optional resume file.
#[derive(Debug, Default)]
pub struct PredictSubmission {
    pub fields: Vec<(String, String)>,
    pub resume: Option<ResumeDocument>,
}

impl PredictSubmission {
    /// First value wins when a field is repeated.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn parse_features(&self) -> Result<PlacementFeatures, InvalidInputError> {
        Ok(PlacementFeatures {
            cgpa: self.number("cgpa")?,
            internships: self.number("internships")?,
            projects: self.number("projects")?,
            skills: self.number("skills")?,
            communication: self.number("communication")?,
            backlogs: self.number("backlogs")?,
            aptitude: self.number("aptitude")?,
        })
    }

    fn number<T: std::str::FromStr>(&self, field: &'static str) -> Result<T, InvalidInputError> {
        let raw = self.field(field).ok_or(InvalidInputError::Missing(field))?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| InvalidInputError::NotNumeric {
                field,
                value: raw.to_string(),
            })
    }
}

#[async_trait]
impl<S> FromRequest<S> for PredictSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(PredictSubmission {
                fields,
                resume: None,
            });
        }

        // Any other body carries no form fields; parsing then reports them missing.
        if !content_type.starts_with("multipart/form-data") {
            return Ok(PredictSubmission::default());
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let mut submission = PredictSubmission::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            if name == RESUME_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(malformed)?;
                // Browsers send an empty part with filename="" when no file was chosen.
                if !file_name.is_empty() && submission.resume.is_none() {
                    submission.resume = Some(ResumeDocument {
                        filename: secure_filename(&file_name),
                        bytes,
                    });
                }
            } else {
                let value = field.text().await.map_err(malformed)?;
                submission.fields.push((name, value));
            }
        }

        Ok(submission)
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> Response {
    AppError::MalformedForm(e.to_string()).into_response()
}
