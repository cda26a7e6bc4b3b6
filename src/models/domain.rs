use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};

use crate::core::distance::haversine_distance;

/// Gender a user lists on their own profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// The preference value that names this gender, if any.
    ///
    /// `Neutral` has no preference counterpart, and no profile gender maps
    /// to `GenderPreference::NonBinary`.
    pub fn as_preference(self) -> Option<GenderPreference> {
        match self {
            Gender::Male => Some(GenderPreference::Male),
            Gender::Female => Some(GenderPreference::Female),
            Gender::Neutral => None,
        }
    }
}

/// Which genders a user wants to be matched with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenderPreference {
    Male,
    Female,
    NonBinary,
    All,
}

impl GenderPreference {
    /// Whether this preference accepts someone of the given gender
    #[inline]
    pub fn accepts(self, gender: Gender) -> bool {
        self == GenderPreference::All || gender.as_preference() == Some(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipType {
    LongTerm,
    ShortTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SmokingPreference {
    Smoking,
    NonSmoking,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityPreference {
    Active,
    Inactive,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetPreference {
    Cat,
    Dog,
    Both,
    None,
}

/// Lifestyle preferences used for the soft lifestyle signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifestyle {
    #[serde(default)]
    pub relationship_type: Option<RelationshipType>,
    pub smoking: SmokingPreference,
    pub activity: ActivityPreference,
    pub pet_preference: PetPreference,
}

impl Default for Lifestyle {
    fn default() -> Self {
        Self {
            relationship_type: Some(RelationshipType::LongTerm),
            smoking: SmokingPreference::NonSmoking,
            activity: ActivityPreference::Active,
            pet_preference: PetPreference::Dog,
        }
    }
}

/// A latitude/longitude pair in signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to another location in meters
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// User profile with the fields the compatibility engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub uid: String,
    #[serde(default)]
    pub name: String,
    pub gender: Gender,
    #[validate(range(min = 1))]
    pub age: u8,
    #[serde(default)]
    pub hobbies: BTreeSet<String>,
    #[serde(default)]
    #[validate(range(max = 100))]
    pub personality: Option<u8>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Inclusive age bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_age_range"))]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 35 }
    }
}

fn validate_age_range(range: &AgeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// User matching preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub gender_preference: GenderPreference,
    #[validate(nested)]
    pub age_range: AgeRange,
    /// Search radius in meters
    #[serde(default = "default_distance_radius")]
    #[validate(range(exclusive_min = 0.0))]
    pub distance_radius: f64,
    #[serde(default)]
    pub lifestyle: Lifestyle,
}

fn default_distance_radius() -> f64 {
    75.0
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            gender_preference: GenderPreference::Female,
            age_range: AgeRange::default(),
            distance_radius: default_distance_radius(),
            lifestyle: Lifestyle::default(),
        }
    }
}

/// Subscription tier, which bounds the search radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

impl SubscriptionTier {
    /// Largest radius in meters this tier may search
    pub fn max_radius(self, limits: &RadiusLimits) -> f64 {
        match self {
            SubscriptionTier::Free => limits.free_max,
            SubscriptionTier::Premium => limits.premium_max,
        }
    }

    /// Clamp a requested radius into this tier's allowed band
    pub fn clamp_radius(self, requested: f64, limits: &RadiusLimits) -> f64 {
        let max = self.max_radius(limits);
        if requested.is_nan() {
            return max;
        }
        requested.clamp(limits.min, max)
    }
}

/// Radius bounds for each subscription tier, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusLimits {
    pub min: f64,
    pub free_max: f64,
    pub premium_max: f64,
}

impl Default for RadiusLimits {
    fn default() -> Self {
        Self {
            min: 10.0,
            free_max: 50.0,
            premium_max: 100.0,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub gender: f64,
    pub age: f64,
    pub lifestyle: f64,
    pub hobbies: f64,
    pub personality: f64,
}

impl ScoringWeights {
    /// Highest score an evaluation can reach
    pub fn max_score(&self) -> f64 {
        self.gender + self.age + self.lifestyle + self.hobbies + self.personality
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gender: 100.0,
            age: 20.0,
            lifestyle: 15.0,
            hobbies: 10.0,
            personality: 5.0,
        }
    }
}
