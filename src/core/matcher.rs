use crate::core::classify::{classify, Tier};
use crate::core::coordinates::{normalize, Coordinate};
use crate::core::geo::{haversine_distance, initial_bearing};
use crate::core::scoring::score;
use crate::models::{UserData, UserRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One candidate placed on the map, scored against the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: Uuid,
    pub position: Coordinate,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "bearingDeg")]
    pub bearing_deg: Option<f64>,
    pub score: u8,
    pub tier: Tier,
    pub explanations: Vec<String>,
    #[serde(rename = "userData")]
    pub user_data: UserData,
}

/// Result of evaluating the full candidate list
#[derive(Debug)]
pub struct EvaluationResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Evaluate every fetched candidate against the viewer's record.
///
/// The candidate list is fetched once by the caller; scoring then runs
/// synchronously over the returned list. The viewer's own record is
/// excluded from the candidates. Distance and bearing are filled in only
/// when the viewer's stored coordinate text is placeable.
///
/// Stored coordinates were validated at submission time; a record whose
/// text no longer parses cannot be placed on the map and is skipped with
/// a warning rather than pinned to (0,0).
pub fn evaluate(viewer: Option<&UserRecord>, candidates: Vec<UserRecord>) -> EvaluationResult {
    let total_candidates = candidates.len();

    let viewer_data: Option<&UserData> = viewer.map(|record| &record.user_data);
    let viewer_position: Option<Coordinate> = viewer.and_then(|record| {
        match normalize(&record.coordinates) {
            Ok(position) => Some(position),
            Err(e) => {
                tracing::warn!("Viewer {} has unplaceable coordinates: {}", record.id, e);
                None
            }
        }
    });

    let mut matches: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|candidate| viewer.map(|v| v.id) != Some(candidate.id))
        .filter_map(|candidate| {
            let position = match normalize(&candidate.coordinates) {
                Ok(position) => position,
                Err(e) => {
                    tracing::warn!("Skipping unplaceable candidate {}: {}", candidate.id, e);
                    return None;
                }
            };

            let result = score(viewer_data, &candidate.user_data);
            let tier = classify(result.score);

            let distance_km = viewer_position
                .as_ref()
                .map(|from| haversine_distance(from, &position));
            let bearing_deg = viewer_position
                .as_ref()
                .map(|from| initial_bearing(from, &position));

            Some(ScoredCandidate {
                id: candidate.id,
                position,
                distance_km,
                bearing_deg,
                score: result.score,
                tier,
                explanations: result.explanations,
                user_data: candidate.user_data,
            })
        })
        .collect();

    // Sort by score (descending) and then by distance (ascending)
    matches.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            let da = a.distance_km.unwrap_or(f64::MAX);
            let db = b.distance_km.unwrap_or(f64::MAX);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    EvaluationResult {
        matches,
        total_candidates,
    }
}
