//! Needmap - Geo matching service for the multi-need map app
//!
//! This library provides the core computations behind the multi-need map:
//! coordinate normalization (decimal and DMS notations), directional
//! compatibility scoring over the seven need categories, and marker tier
//! classification, together with the record store and HTTP layer around
//! them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify, normalize, score, Coordinate, FormatError, MatchResult, Tier};
pub use crate::models::{Category, CategorySet, UserData, UserRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let coordinate = normalize("40.7128, -74.0060").unwrap();
        assert_eq!(coordinate.latitude, 40.7128);
        assert_eq!(classify(12), Tier::High);
    }
}
