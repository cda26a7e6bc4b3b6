use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Preferences, Profile, SubscriptionTier};

/// One side of an evaluation: a profile and the preferences that go with it
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Participant {
    #[validate(nested)]
    pub profile: Profile,
    #[validate(nested)]
    pub preferences: Preferences,
}

/// Request to evaluate a single candidate pair
///
/// ```json
/// {
///   "self": { "profile": { ... }, "preferences": { ... } },
///   "other": { "profile": { ... }, "preferences": { ... } },
///   "tier": "free"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[serde(rename = "self")]
    #[validate(nested)]
    pub self_user: Participant,
    #[validate(nested)]
    pub other: Participant,
    #[serde(default)]
    pub tier: SubscriptionTier,
}
