// Core algorithm exports
pub mod classify;
pub mod coordinates;
pub mod geo;
pub mod matcher;
pub mod scoring;

pub use classify::{classify, Tier};
pub use coordinates::{normalize, to_dms, Coordinate, FormatError};
pub use geo::{haversine_distance, initial_bearing};
pub use matcher::{evaluate, EvaluationResult, ScoredCandidate};
pub use scoring::{score, MatchResult, MAX_SCORE};
