/// Column order the classifier was fitted on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "cgpa",
    "internships",
    "projects",
    "skills",
    "communication",
    "backlogs",
    "aptitude",
];

pub const FEATURE_COUNT: usize = 7;

/// Fixed-order numeric input handed to the classifier.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// The seven metrics submitted through the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementFeatures {
    pub cgpa: f64,
    pub internships: i64,
    pub projects: i64,
    pub skills: i64,
    pub communication: i64,
    pub backlogs: i64,
    pub aptitude: i64,
}

impl PlacementFeatures {
    pub fn to_vector(&self) -> FeatureVector {
        [
            self.cgpa,
            self.internships as f64,
            self.projects as f64,
            self.skills as f64,
            self.communication as f64,
            self.backlogs as f64,
            self.aptitude as f64,
        ]
    }
}

/// Binary classifier outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed,
    NotPlaced,
}

impl Placement {
    /// Label 1 is the positive class; anything else reads as not placed.
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Placement::Placed
        } else {
            Placement::NotPlaced
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Placement::Placed => "Placed 🎉",
            Placement::NotPlaced => "Not Placed 😔",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_follows_fitted_column_order() {
        let features = PlacementFeatures {
            cgpa: 8.25,
            internships: 1,
            projects: 2,
            skills: 3,
            communication: 4,
            backlogs: 5,
            aptitude: 6,
        };
        assert_eq!(features.to_vector(), [8.25, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(Placement::from_label(1), Placement::Placed);
        assert_eq!(Placement::from_label(0), Placement::NotPlaced);
        assert_eq!(Placement::from_label(1).display(), "Placed 🎉");
        assert_eq!(Placement::from_label(0).display(), "Not Placed 😔");
    }
}
