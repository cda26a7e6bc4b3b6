// Model exports
pub mod domain;
pub mod records;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityPreference, AgeRange, Gender, GenderPreference, Lifestyle, Location, PetPreference,
    Preferences, Profile, RadiusLimits, RelationshipType, ScoringWeights, SmokingPreference,
    SubscriptionTier,
};
pub use records::{HistoryEntry, MatchCandidate, MatchRecord, MatchStatus};
pub use requests::{EvaluateRequest, Participant};
pub use responses::{EvaluateResponse, MatchEvaluation};
