//! Advice generator — fixed threshold rules over the submitted metrics.

use crate::models::placement::PlacementFeatures;

const MIN_CGPA: f64 = 7.0;
const MIN_PROJECTS: i64 = 2;
const MIN_COMMUNICATION: i64 = 3;
const MIN_APTITUDE: i64 = 60;

pub const CGPA_TIP: &str = "📘 Improve CGPA (target ≥ 7.5).";
pub const INTERNSHIP_TIP: &str = "🏢 Complete at least one internship.";
pub const PROJECTS_TIP: &str = "💻 Build more practical projects.";
pub const COMMUNICATION_TIP: &str = "🗣️ Improve communication skills.";
pub const APTITUDE_TIP: &str = "🧠 Practice aptitude & reasoning.";
pub const BACKLOGS_TIP: &str = "⚠️ Clear backlogs as early as possible.";
pub const WELL_PREPARED_TIP: &str = "✅ You are well-prepared. Focus on mock interviews.";

/// Returns one tip per triggered rule, in rule order. Never empty.
pub fn generate_advice(features: &PlacementFeatures) -> Vec<String> {
    let rules: [(bool, &str); 6] = [
        (features.cgpa < MIN_CGPA, CGPA_TIP),
        (features.internships == 0, INTERNSHIP_TIP),
        (features.projects < MIN_PROJECTS, PROJECTS_TIP),
        (features.communication < MIN_COMMUNICATION, COMMUNICATION_TIP),
        (features.aptitude < MIN_APTITUDE, APTITUDE_TIP),
        (features.backlogs > 0, BACKLOGS_TIP),
    ];

    let mut tips: Vec<String> = rules
        .iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, tip)| tip.to_string())
        .collect();

    if tips.is_empty() {
        tips.push(WELL_PREPARED_TIP.to_string());
    }
    tips
}
