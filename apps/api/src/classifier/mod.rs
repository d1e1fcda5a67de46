//! Placement classifier — the single point of entry for model inference.
//!
//! The fitted estimator is exported to JSON once, loaded at startup and shared
//! read-only across requests as `Arc<dyn PlacementClassifier>`. A missing or
//! malformed artifact is fatal: the service never starts without a model.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::models::placement::{FeatureVector, Placement};

pub mod estimator;

use estimator::{ArtifactClassifier, ModelArtifact};

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model was fitted on columns {found:?}, expected cgpa, internships, projects, skills, communication, backlogs, aptitude")]
    FeatureOrder { found: Vec<String> },

    #[error("logistic regression needs 7 coefficients, artifact has {found}")]
    CoefficientCount { found: usize },

    #[error("random forest has no trees")]
    EmptyForest,

    #[error("tree {tree} is malformed: {reason}")]
    InvalidTree { tree: usize, reason: String },
}

/// Binary placement model. Implement this to swap backends without touching
/// the handlers.
pub trait PlacementClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Placement;

    /// Short backend name for logs and the health probe.
    fn kind(&self) -> &'static str;
}

/// Reads, parses and validates the artifact at `path`.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn PlacementClassifier>, ModelLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let classifier = parse_classifier(&raw)?;
    info!(
        "Loaded {} classifier from {}",
        classifier.kind(),
        path.display()
    );
    Ok(Arc::new(classifier))
}

pub fn parse_classifier(raw: &str) -> Result<ArtifactClassifier, ModelLoadError> {
    let artifact: ModelArtifact = serde_json::from_str(raw)?;
    ArtifactClassifier::try_from(artifact)
}
