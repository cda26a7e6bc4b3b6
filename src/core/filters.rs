use crate::models::{Preferences, Profile};

/// A pass/fail eligibility check between two users
pub type Gate = fn(&Profile, &Preferences, &Profile, &Preferences) -> bool;

/// Hard gates in evaluation order, with the name used in logs
pub const HARD_GATES: [(&str, Gate); 2] = [
    ("gender", matches_gender_preference),
    ("age", matches_age_range),
];

/// Check that each side's gender preference accepts the other's gender
///
/// Both directions must hold.
#[inline]
pub fn matches_gender_preference(
    self_profile: &Profile,
    self_prefs: &Preferences,
    other_profile: &Profile,
    other_prefs: &Preferences,
) -> bool {
    self_prefs.gender_preference.accepts(other_profile.gender)
        && other_prefs.gender_preference.accepts(self_profile.gender)
}

/// Check that each side's age falls within the other's preferred range
///
/// Both directions must hold; bounds are inclusive.
#[inline]
pub fn matches_age_range(
    self_profile: &Profile,
    self_prefs: &Preferences,
    other_profile: &Profile,
    other_prefs: &Preferences,
) -> bool {
    self_prefs.age_range.contains(other_profile.age)
        && other_prefs.age_range.contains(self_profile.age)
}

/// Name of the first hard gate the pair fails, if any
pub fn first_failed_gate(
    self_profile: &Profile,
    self_prefs: &Preferences,
    other_profile: &Profile,
    other_prefs: &Preferences,
) -> Option<&'static str> {
    HARD_GATES
        .iter()
        .find(|(_, gate)| !gate(self_profile, self_prefs, other_profile, other_prefs))
        .map(|(name, _)| *name)
}
