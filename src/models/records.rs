use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Preferences, Profile};

/// Outcome of a decision on a prospect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Greeted,
    Ignored,
}

/// Nearby user surfaced by discovery, not yet scored or acted upon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub profile: Profile,
    pub preferences: Preferences,
    /// Distance reading in meters at discovery time
    pub distance: f64,
    pub seen_at: DateTime<Utc>,
}

impl MatchCandidate {
    pub fn remote_uid(&self) -> &str {
        &self.profile.uid
    }
}

/// Persisted record of a greeted prospect.
///
/// Everything except `can_rematch` is a snapshot frozen at decision time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    id: Uuid,
    uid: String,
    name: String,
    age: u8,
    profile_image: Option<String>,
    timestamp: DateTime<Utc>,
    #[serde(skip_deserializing, default = "greeted")]
    status: MatchStatus,
    distance: f64,
    #[serde(default = "default_can_rematch")]
    pub can_rematch: bool,
}

fn default_can_rematch() -> bool {
    true
}

fn greeted() -> MatchStatus {
    MatchStatus::Greeted
}

impl MatchRecord {
    pub(crate) fn snapshot(id: Uuid, candidate: &MatchCandidate, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            uid: candidate.profile.uid.clone(),
            name: candidate.profile.name.clone(),
            age: candidate.profile.age,
            profile_image: candidate.profile.profile_image.clone(),
            timestamp,
            status: MatchStatus::Greeted,
            distance: candidate.distance,
            can_rematch: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Distance in meters when the match was made
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

/// Audit-trail entry for every decision, greeted or ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub uid: String,
    pub timestamp: DateTime<Utc>,
    pub status: MatchStatus,
}
