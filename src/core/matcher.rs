use crate::core::{
    distance::is_within_radius,
    filters::first_failed_gate,
    lifecycle::Prospect,
    scoring::calculate_soft_signals,
};
use crate::models::{MatchCandidate, MatchEvaluation, Preferences, Profile, ScoringWeights};

/// Share of the maximum score a pair must reach to count as a match
pub const MATCH_THRESHOLD: f64 = 0.7;

/// Compatibility scorer
///
/// # Pipeline Stages
/// 1. Hard gates (gender, then age), each failing to a zero score
/// 2. Gate weights credited in full
/// 3. Soft signals (lifestyle, hobbies, personality) weighted and summed
/// 4. Threshold decision
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Evaluate whether two users are mutually compatible
    ///
    /// # Arguments
    /// * `self_profile` / `self_prefs` - The evaluating user
    /// * `other_profile` / `other_prefs` - The candidate
    ///
    /// Missing hobbies or personality never fail the evaluation; they score
    /// the neutral midpoint.
    pub fn evaluate(
        &self,
        self_profile: &Profile,
        self_prefs: &Preferences,
        other_profile: &Profile,
        other_prefs: &Preferences,
    ) -> MatchEvaluation {
        let max_score = self.weights.max_score();

        if let Some(gate) = first_failed_gate(self_profile, self_prefs, other_profile, other_prefs) {
            tracing::trace!(gate, other = %other_profile.uid, "Hard gate failed");
            return MatchEvaluation::rejected(max_score);
        }

        let signals = calculate_soft_signals(self_profile, self_prefs, other_profile, other_prefs);

        let score = self.weights.gender
            + self.weights.age
            + signals.lifestyle * self.weights.lifestyle
            + signals.hobbies * self.weights.hobbies
            + signals.personality * self.weights.personality;

        let is_match = score >= max_score * MATCH_THRESHOLD;

        tracing::debug!(
            other = %other_profile.uid,
            lifestyle = signals.lifestyle,
            hobbies = signals.hobbies,
            personality = signals.personality,
            score,
            is_match,
            "Evaluated pair"
        );

        MatchEvaluation {
            is_match,
            score,
            max_score,
        }
    }

    /// Screen a discovered candidate
    ///
    /// Drops the candidate when it has no broadcast location, lies outside
    /// the user's radius, or does not evaluate as a match. Otherwise returns
    /// a prospect ready for the user's decision.
    ///
    /// Proximity is always recomputed from both locations.
    /// `MatchCandidate::distance` is the discovery reading kept for the match
    /// record and is never used as a stand-in for a missing location.
    pub fn screen(
        &self,
        self_profile: &Profile,
        self_prefs: &Preferences,
        candidate: MatchCandidate,
    ) -> Option<Prospect> {
        let Some(target) = candidate.profile.location else {
            tracing::trace!(other = %candidate.profile.uid, "Candidate has no location");
            return None;
        };

        if !is_within_radius(
            self_profile.location.as_ref(),
            target.latitude,
            target.longitude,
            self_prefs.distance_radius,
        ) {
            tracing::trace!(other = %candidate.profile.uid, "Candidate outside radius");
            return None;
        }

        let evaluation = self.evaluate(
            self_profile,
            self_prefs,
            &candidate.profile,
            &candidate.preferences,
        );

        Prospect::new(candidate, evaluation)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
