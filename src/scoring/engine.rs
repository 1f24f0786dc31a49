use super::config::ScoringConfig;
use crate::error::UserDataError;

/// Score a user from their purchase and visit counts.
///
/// The weighted sum `purchases * purchase_weight + visits * visit_weight`
/// is rounded half-to-even, so `2.5` scores 2 and `3.5` scores 4.
///
/// Counts come from parsed records and are never negative inside the
/// pipeline, but the scorer still rejects negative input so it can be
/// called on its own.
pub fn calculate_score(
    purchases: i64,
    visits: i64,
    config: &ScoringConfig,
) -> Result<i64, UserDataError> {
    if purchases < 0 {
        return Err(UserDataError::NegativeInput {
            field: "purchases",
            value: purchases,
        });
    }
    if visits < 0 {
        return Err(UserDataError::NegativeInput {
            field: "visits",
            value: visits,
        });
    }

    let weighted = weighted_sum(purchases, visits, config);
    let rounded = weighted.round_ties_even();

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !rounded.is_finite() || rounded >= i64::MAX as f64 {
        return Err(UserDataError::ScoreOutOfRange { purchases, visits });
    }

    Ok(rounded as i64)
}

/// Unrounded weighted sum of the two counts.
pub fn weighted_sum(purchases: i64, visits: i64, config: &ScoringConfig) -> f64 {
    purchases as f64 * config.purchase_weight() + visits as f64 * config.visit_weight()
}
