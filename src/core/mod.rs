// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod lifecycle;
pub mod matcher;
pub mod scoring;

pub use distance::{haversine_distance, is_within_radius};
pub use filters::{first_failed_gate, matches_age_range, matches_gender_preference};
pub use lifecycle::{LifecycleError, MatchBook, Prospect};
pub use matcher::{Matcher, MATCH_THRESHOLD};
pub use scoring::{
    calculate_hobby_overlap, calculate_lifestyle_score, calculate_personality_compatibility,
    calculate_soft_signals, SoftSignals,
};
