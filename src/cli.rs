use std::io::Read;

use thiserror::Error;
use validator::Validate;

use crate::config::Settings;
use crate::core::{is_within_radius, Matcher};
use crate::models::{EvaluateRequest, EvaluateResponse};

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Parse and validate an evaluation request
pub fn read_request<R: Read>(reader: R) -> Result<EvaluateRequest, CliError> {
    let request: EvaluateRequest = serde_json::from_reader(reader)?;
    request.validate()?;
    Ok(request)
}

/// Evaluate one candidate pair the way discovery would
///
/// The requesting user's radius is clamped to their tier before the
/// proximity check. Compatibility is reported whether or not the pair is in
/// range.
pub fn evaluate(request: &EvaluateRequest, settings: &Settings, matcher: &Matcher) -> EvaluateResponse {
    let me = &request.self_user;
    let other = &request.other;

    let limits = settings.matching.radius_limits();
    let radius_meters = request
        .tier
        .clamp_radius(me.preferences.distance_radius, &limits);

    let (within_radius, distance_meters) = match other.profile.location {
        Some(target) => (
            is_within_radius(
                me.profile.location.as_ref(),
                target.latitude,
                target.longitude,
                radius_meters,
            ),
            me.profile.location.map(|origin| origin.distance_to(&target)),
        ),
        None => (false, None),
    };

    let evaluation = matcher.evaluate(
        &me.profile,
        &me.preferences,
        &other.profile,
        &other.preferences,
    );

    tracing::info!(
        self_uid = %me.profile.uid,
        other_uid = %other.profile.uid,
        within_radius,
        radius_meters,
        score = evaluation.score,
        is_match = evaluation.is_match,
        "Pair evaluated"
    );

    EvaluateResponse {
        within_radius,
        distance_meters,
        radius_meters,
        evaluation,
    }
}
