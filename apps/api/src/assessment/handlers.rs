//! Axum route handlers for the placement form.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::info;

use crate::assessment::advice::generate_advice;
use crate::assessment::form::PredictSubmission;
use crate::errors::AppError;
use crate::render::{IndexPage, ResultPage};
use crate::resume::analyze_resume;
use crate::state::AppState;

/// GET /
pub async fn handle_home() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage {}.render()?))
}

/// POST /predict
///
/// An unparseable field short-circuits to the plain-text invalid-input
/// response before the classifier runs.
pub async fn handle_predict(
    State(state): State<AppState>,
    submission: PredictSubmission,
) -> Result<Html<String>, AppError> {
    let features = submission.parse_features()?;

    let placement = state.classifier.predict(&features.to_vector());
    let tips = generate_advice(&features);
    let resume = analyze_resume(&state.config.upload_dir, submission.resume.as_ref()).await?;

    info!(
        placement = ?placement,
        advice = tips.len(),
        resume_tips = resume.tips.len(),
        resume_chars = resume.text.len(),
        uploaded = submission.resume.is_some(),
        "Prediction served"
    );

    let page = ResultPage {
        result: placement.display(),
        tips: &tips,
        resume_tips: &resume.tips,
    };
    Ok(Html(page.render()?))
}
