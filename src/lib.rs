//! Radar Match - compatibility engine for the Radar proximity dating app
//!
//! This library decides whether two nearby users are mutually compatible and
//! tracks what the user did with each prospect. Evaluation runs hard gates
//! first, then weighted soft signals.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{haversine_distance, is_within_radius, LifecycleError, MatchBook, Matcher, Prospect};
pub use crate::models::{MatchEvaluation, MatchRecord, HistoryEntry, Preferences, Profile, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(haversine_distance(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
        assert_eq!(Matcher::default().weights().max_score(), 150.0);
    }
}
