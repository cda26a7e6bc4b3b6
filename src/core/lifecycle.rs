use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{HistoryEntry, MatchCandidate, MatchEvaluation, MatchRecord, MatchStatus};

/// Errors that can occur when addressing recorded matches
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Match not found: {0}")]
    MatchNotFound(Uuid),
}

/// A scored candidate awaiting the user's decision.
///
/// Only a positive evaluation yields a prospect. `greet` and `ignore` take
/// the prospect by value, so each one is decided exactly once.
#[derive(Debug, Clone)]
pub struct Prospect {
    id: Uuid,
    candidate: MatchCandidate,
    evaluation: MatchEvaluation,
}

impl Prospect {
    /// Returns `None` when the evaluation is not a match
    pub fn new(candidate: MatchCandidate, evaluation: MatchEvaluation) -> Option<Self> {
        if !evaluation.is_match {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            candidate,
            evaluation,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn candidate(&self) -> &MatchCandidate {
        &self.candidate
    }

    pub fn evaluation(&self) -> &MatchEvaluation {
        &self.evaluation
    }
}

/// A user's recorded matches and decision history, both newest-first
#[derive(Debug, Clone, Default)]
pub struct MatchBook {
    matches: VecDeque<MatchRecord>,
    history: VecDeque<HistoryEntry>,
}

impl MatchBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Greet a prospect, recording a match and its history entry
    pub fn greet(&mut self, prospect: Prospect) -> &MatchRecord {
        self.greet_at(prospect, Utc::now())
    }

    /// Greet a prospect with an explicit decision time
    pub fn greet_at(&mut self, prospect: Prospect, timestamp: DateTime<Utc>) -> &MatchRecord {
        let record = MatchRecord::snapshot(prospect.id, &prospect.candidate, timestamp);
        let entry = HistoryEntry {
            id: prospect.id,
            uid: record.uid().to_string(),
            timestamp,
            status: MatchStatus::Greeted,
        };

        tracing::info!(
            match_id = %prospect.id,
            uid = %record.uid(),
            score = prospect.evaluation.score,
            "Prospect greeted"
        );

        self.history.push_front(entry);
        self.matches.push_front(record);
        &self.matches[0]
    }

    /// Ignore a prospect, recording only a history entry
    pub fn ignore(&mut self, prospect: Prospect) -> &HistoryEntry {
        self.ignore_at(prospect, Utc::now())
    }

    /// Ignore a prospect with an explicit decision time
    pub fn ignore_at(&mut self, prospect: Prospect, timestamp: DateTime<Utc>) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: prospect.id,
            uid: prospect.candidate.profile.uid,
            timestamp,
            status: MatchStatus::Ignored,
        };

        tracing::info!(match_id = %entry.id, uid = %entry.uid, "Prospect ignored");

        self.history.push_front(entry);
        &self.history[0]
    }

    /// Allow or forbid a future rematch with the user behind a match
    pub fn set_can_rematch(&mut self, id: Uuid, can_rematch: bool) -> Result<(), LifecycleError> {
        let record = self
            .matches
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or(LifecycleError::MatchNotFound(id))?;

        record.can_rematch = can_rematch;
        tracing::debug!(match_id = %id, can_rematch, "Rematch permission updated");
        Ok(())
    }

    /// Unmatch: drop a match record. Its history entry stays.
    pub fn remove_match(&mut self, id: Uuid) -> Result<MatchRecord, LifecycleError> {
        let index = self
            .matches
            .iter()
            .position(|m| m.id() == id)
            .ok_or(LifecycleError::MatchNotFound(id))?;

        tracing::info!(match_id = %id, "Match removed");
        self.matches
            .remove(index)
            .ok_or(LifecycleError::MatchNotFound(id))
    }

    /// Drop every match record, keeping the history
    pub fn clear_matches(&mut self) {
        self.matches.clear();
    }

    pub fn find_match(&self, id: Uuid) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.id() == id)
    }

    /// Match records, newest first
    pub fn matches(&self) -> &VecDeque<MatchRecord> {
        &self.matches
    }

    /// Every decision, newest first
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }
}
