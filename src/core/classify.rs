use serde::{Deserialize, Serialize};

/// Display tier for a map marker, derived from a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Bucket a match score into a marker tier.
///
/// Thresholds are inclusive on the low end of each tier:
/// 10..=14 is High, 5..=9 is Medium, 0..=4 is Low.
#[inline]
pub fn classify(score: u8) -> Tier {
    if score >= 10 {
        Tier::High
    } else if score >= 5 {
        Tier::Medium
    } else {
        Tier::Low
    }
}
