use std::collections::BTreeSet;

use crate::models::{
    ActivityPreference, Lifestyle, PetPreference, Preferences, Profile, SmokingPreference,
};

/// Contribution used when a soft signal has nothing to compare
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Graded compatibility signals, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftSignals {
    pub lifestyle: f64,
    pub hobbies: f64,
    pub personality: f64,
}

/// Compute every soft signal for a pair that already passed the hard gates
pub fn calculate_soft_signals(
    self_profile: &Profile,
    self_prefs: &Preferences,
    other_profile: &Profile,
    other_prefs: &Preferences,
) -> SoftSignals {
    SoftSignals {
        lifestyle: calculate_lifestyle_score(&self_prefs.lifestyle, &other_prefs.lifestyle),
        hobbies: calculate_hobby_overlap(&self_profile.hobbies, &other_profile.hobbies),
        personality: calculate_personality_compatibility(
            self_profile.personality,
            other_profile.personality,
        ),
    }
}

/// Calculate lifestyle compatibility (0-1)
///
/// A dimension counts only when both sides state a comparable value:
/// - relationship type: both present
/// - smoking, activity: neither side is `any`
/// - pets: neither side is `both` or `none`
pub fn calculate_lifestyle_score(mine: &Lifestyle, theirs: &Lifestyle) -> f64 {
    let dimensions = [
        match (mine.relationship_type, theirs.relationship_type) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        },
        comparable_smoking(mine.smoking, theirs.smoking),
        comparable_activity(mine.activity, theirs.activity),
        comparable_pets(mine.pet_preference, theirs.pet_preference),
    ];

    let (matched, considered) = dimensions
        .iter()
        .flatten()
        .fold((0u32, 0u32), |(matched, considered), &same| {
            (matched + same as u32, considered + 1)
        });

    if considered == 0 {
        return NEUTRAL_SCORE;
    }
    matched as f64 / considered as f64
}

#[inline]
fn comparable_smoking(a: SmokingPreference, b: SmokingPreference) -> Option<bool> {
    if a == SmokingPreference::Any || b == SmokingPreference::Any {
        return None;
    }
    Some(a == b)
}

#[inline]
fn comparable_activity(a: ActivityPreference, b: ActivityPreference) -> Option<bool> {
    if a == ActivityPreference::Any || b == ActivityPreference::Any {
        return None;
    }
    Some(a == b)
}

#[inline]
fn comparable_pets(a: PetPreference, b: PetPreference) -> Option<bool> {
    let open = |p: PetPreference| matches!(p, PetPreference::Both | PetPreference::None);
    if open(a) || open(b) {
        return None;
    }
    Some(a == b)
}

/// Calculate hobby overlap (0-1)
///
/// Shared hobbies divided by the size of the smaller set, so a set fully
/// contained in the other scores 1.0.
pub fn calculate_hobby_overlap(mine: &BTreeSet<String>, theirs: &BTreeSet<String>) -> f64 {
    if mine.is_empty() || theirs.is_empty() {
        return NEUTRAL_SCORE;
    }

    let shared = mine.intersection(theirs).count();
    shared as f64 / mine.len().min(theirs.len()) as f64
}

/// Calculate personality compatibility (0-1)
/// 0 difference = 1.0, 100 difference = 0.0
#[inline]
pub fn calculate_personality_compatibility(mine: Option<u8>, theirs: Option<u8>) -> f64 {
    match (mine, theirs) {
        (Some(a), Some(b)) => 1.0 - f64::from(a.abs_diff(b)) / 100.0,
        _ => NEUTRAL_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RelationshipType;

    fn hobbies(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lifestyle(
        relationship_type: Option<RelationshipType>,
        smoking: SmokingPreference,
        activity: ActivityPreference,
        pet_preference: PetPreference,
    ) -> Lifestyle {
        Lifestyle {
            relationship_type,
            smoking,
            activity,
            pet_preference,
        }
    }

    #[test]
    fn test_lifestyle_all_matching() {
        let a = Lifestyle::default();
        assert_eq!(calculate_lifestyle_score(&a, &a), 1.0);
    }

    #[test]
    fn test_lifestyle_partial() {
        let a = lifestyle(
            Some(RelationshipType::LongTerm),
            SmokingPreference::NonSmoking,
            ActivityPreference::Active,
            PetPreference::Dog,
        );
        let b = lifestyle(
            Some(RelationshipType::LongTerm),
            SmokingPreference::Smoking,
            ActivityPreference::Any,
            PetPreference::Cat,
        );

        // relationship matches, smoking differs, activity skipped, pets differ
        let score = calculate_lifestyle_score(&a, &b);
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lifestyle_nothing_comparable_is_neutral() {
        let a = lifestyle(
            None,
            SmokingPreference::Any,
            ActivityPreference::Active,
            PetPreference::Both,
        );
        let b = lifestyle(
            Some(RelationshipType::ShortTerm),
            SmokingPreference::NonSmoking,
            ActivityPreference::Any,
            PetPreference::Dog,
        );

        assert_eq!(calculate_lifestyle_score(&a, &b), NEUTRAL_SCORE);
    }

    #[test]
    fn test_pet_none_excludes_dimension() {
        let a = lifestyle(None, SmokingPreference::Any, ActivityPreference::Any, PetPreference::None);
        let b = lifestyle(None, SmokingPreference::Any, ActivityPreference::Any, PetPreference::None);

        // Equal values, but `none` is never compared
        assert_eq!(calculate_lifestyle_score(&a, &b), NEUTRAL_SCORE);
    }

    #[test]
    fn test_hobby_overlap_uses_smaller_set() {
        let small = hobbies(&["hiking", "chess"]);
        let large = hobbies(&["hiking", "chess", "climbing", "jazz"]);

        assert_eq!(calculate_hobby_overlap(&small, &large), 1.0);
        assert_eq!(calculate_hobby_overlap(&large, &small), 1.0);
    }

    #[test]
    fn test_hobby_overlap_empty_is_neutral() {
        let some = hobbies(&["hiking"]);
        assert_eq!(calculate_hobby_overlap(&BTreeSet::new(), &some), NEUTRAL_SCORE);
        assert_eq!(calculate_hobby_overlap(&some, &BTreeSet::new()), NEUTRAL_SCORE);
    }

    #[test]
    fn test_hobby_overlap_disjoint() {
        let a = hobbies(&["hiking", "chess", "jazz"]);
        let b = hobbies(&["yoga", "cooking", "film"]);
        assert_eq!(calculate_hobby_overlap(&a, &b), 0.0);
    }

    #[test]
    fn test_personality_compatibility() {
        assert_eq!(calculate_personality_compatibility(Some(50), Some(50)), 1.0);
        assert_eq!(calculate_personality_compatibility(Some(0), Some(100)), 0.0);
        assert!((calculate_personality_compatibility(Some(80), Some(60)) - 0.8).abs() < 1e-12);
        assert_eq!(calculate_personality_compatibility(None, Some(60)), NEUTRAL_SCORE);
    }
}
