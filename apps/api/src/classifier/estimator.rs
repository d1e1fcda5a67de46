//! JSON export format for fitted scikit-learn estimators, and inference over it.

use serde::Deserialize;

use crate::classifier::{ModelLoadError, PlacementClassifier};
use crate::models::placement::{FeatureVector, Placement, FEATURE_COUNT, FEATURE_NAMES};

/// On-disk artifact. `feature_names` is optional but checked when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    RandomForest {
        trees: Vec<DecisionTree>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// Splits send `x[feature] <= threshold` left. Leaves carry P(class 1).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

/// A validated estimator. Construct through `TryFrom<ModelArtifact>`.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    estimator: Estimator,
}

impl TryFrom<ModelArtifact> for ArtifactClassifier {
    type Error = ModelLoadError;

    fn try_from(artifact: ModelArtifact) -> Result<Self, Self::Error> {
        if let Some(names) = &artifact.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES) {
                return Err(ModelLoadError::FeatureOrder {
                    found: names.clone(),
                });
            }
        }

        match &artifact.estimator {
            Estimator::LogisticRegression { coefficients, .. } => {
                if coefficients.len() != FEATURE_COUNT {
                    return Err(ModelLoadError::CoefficientCount {
                        found: coefficients.len(),
                    });
                }
            }
            Estimator::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err(ModelLoadError::EmptyForest);
                }
                for (index, tree) in trees.iter().enumerate() {
                    validate_tree(tree).map_err(|reason| ModelLoadError::InvalidTree {
                        tree: index,
                        reason,
                    })?;
                }
            }
        }

        Ok(Self {
            estimator: artifact.estimator,
        })
    }
}

/// Children must point strictly forward, which rules out cycles and makes
/// every walk terminate at a leaf.
fn validate_tree(tree: &DecisionTree) -> Result<(), String> {
    if tree.nodes.is_empty() {
        return Err("no nodes".to_string());
    }
    let len = tree.nodes.len();
    for (index, node) in tree.nodes.iter().enumerate() {
        match *node {
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => {
                if feature >= FEATURE_COUNT {
                    return Err(format!("node {index} splits on unknown feature {feature}"));
                }
                for child in [left, right] {
                    if child <= index || child >= len {
                        return Err(format!("node {index} has invalid child {child}"));
                    }
                }
            }
            TreeNode::Leaf { leaf } => {
                if !(0.0..=1.0).contains(&leaf) {
                    return Err(format!("leaf {index} probability {leaf} outside [0, 1]"));
                }
            }
        }
    }
    Ok(())
}

impl DecisionTree {
    fn probability(&self, features: &FeatureVector) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { leaf } => return leaf,
            }
        }
    }
}

impl ArtifactClassifier {
    fn label(&self, features: &FeatureVector) -> u8 {
        match &self.estimator {
            Estimator::LogisticRegression {
                coefficients,
                intercept,
            } => {
                let decision: f64 = intercept
                    + coefficients
                        .iter()
                        .zip(features.iter())
                        .map(|(w, x)| w * x)
                        .sum::<f64>();
                u8::from(decision > 0.0)
            }
            Estimator::RandomForest { trees } => {
                let mean = trees.iter().map(|t| t.probability(features)).sum::<f64>()
                    / trees.len() as f64;
                // argmax picks class 0 on an exact tie
                u8::from(mean > 0.5)
            }
        }
    }
}

impl PlacementClassifier for ArtifactClassifier {
    fn predict(&self, features: &FeatureVector) -> Placement {
        Placement::from_label(self.label(features))
    }

    fn kind(&self) -> &'static str {
        match self.estimator {
            Estimator::LogisticRegression { .. } => "logistic_regression",
            Estimator::RandomForest { .. } => "random_forest",
        }
    }
}
