use crate::models::{Category, UserData};
use serde::{Deserialize, Serialize};

/// Maximum achievable score: seven categories, two directions each.
pub const MAX_SCORE: u8 = 14;

/// Explanation line when the viewer has not submitted their own record.
pub const NO_VIEWER_DATA: &str = "no viewer data submitted";

/// Explanation line when no category produces a point.
pub const NO_DIRECT_MATCHES: &str = "no direct matches found";

/// Result of scoring one candidate against the viewer.
///
/// Derived fresh on every comparison, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub explanations: Vec<String>,
}

/// Score a candidate record against the viewer's record.
///
/// Iterates the seven categories in declaration order. For each category
/// one point is awarded when the viewer offers what the candidate
/// requests, and independently one point when the viewer requests what
/// the candidate offers; the offer line precedes the request line within
/// a category. Scoring is directional: one call scores the viewer
/// relative to the candidate, so `score(a, b)` need not equal
/// `score(b, a)`.
///
/// Total function: absent flags read as `false`, an absent viewer scores
/// zero with a fixed explanation.
pub fn score(viewer: Option<&UserData>, candidate: &UserData) -> MatchResult {
    let Some(viewer) = viewer else {
        return MatchResult {
            score: 0,
            explanations: vec![NO_VIEWER_DATA.to_string()],
        };
    };

    let mut points = 0u8;
    let mut explanations = Vec::new();

    for category in Category::ALL {
        if viewer.offers.get(category) && candidate.requests.get(category) {
            points += 1;
            explanations.push(format!(
                "you can offer {} to the selected user",
                category.name()
            ));
        }
        if viewer.requests.get(category) && candidate.offers.get(category) {
            points += 1;
            explanations.push(format!(
                "you can request {} from the selected user",
                category.name()
            ));
        }
    }

    if explanations.is_empty() {
        explanations.push(NO_DIRECT_MATCHES.to_string());
    }

    MatchResult {
        score: points,
        explanations,
    }
}
