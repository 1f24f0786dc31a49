use serde::{Deserialize, Serialize};

use super::validation::check_values;
use crate::error::UserDataError;

pub const DEFAULT_PURCHASE_WEIGHT: f64 = 1.0;
pub const DEFAULT_VISIT_WEIGHT: f64 = 1.0;
pub const DEFAULT_SCORE_THRESHOLD: i64 = 0;
pub const DEFAULT_MIN_AGE: i64 = 18;

/// Validated scoring policy.
///
/// Only obtainable through [`ScoringConfig::new`], [`Default`] or
/// [`ScoringSettings::resolve`], so every instance satisfies the invariants:
/// both weights finite and non-negative, both thresholds non-negative.
/// There are no setters; build a new value to change the policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    purchase_weight: f64,
    visit_weight: f64,
    score_threshold: i64,
    min_age: i64,
}

impl ScoringConfig {
    pub fn new(
        purchase_weight: f64,
        visit_weight: f64,
        score_threshold: i64,
        min_age: i64,
    ) -> Result<Self, UserDataError> {
        let errors = check_values(
            Some(purchase_weight),
            Some(visit_weight),
            Some(score_threshold),
            Some(min_age),
        );
        if !errors.is_empty() {
            return Err(UserDataError::InvalidConfig { errors });
        }

        Ok(Self {
            purchase_weight,
            visit_weight,
            score_threshold,
            min_age,
        })
    }

    pub fn purchase_weight(&self) -> f64 {
        self.purchase_weight
    }

    pub fn visit_weight(&self) -> f64 {
        self.visit_weight
    }

    /// Scores must be strictly greater than this to be accepted.
    pub fn score_threshold(&self) -> i64 {
        self.score_threshold
    }

    /// Users at exactly this age are accepted.
    pub fn min_age(&self) -> i64 {
        self.min_age
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            purchase_weight: DEFAULT_PURCHASE_WEIGHT,
            visit_weight: DEFAULT_VISIT_WEIGHT,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            min_age: DEFAULT_MIN_AGE,
        }
    }
}

/// The `scoring:` section of the config file.
///
/// Every field is optional; missing fields fall back to the defaults when
/// the settings are resolved.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   purchase_weight: 10
///   visit_weight: 5
///   score_threshold: 100
///   min_age: 18
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringSettings {
    #[serde(default)]
    pub purchase_weight: Option<f64>,

    #[serde(default)]
    pub visit_weight: Option<f64>,

    #[serde(default)]
    pub score_threshold: Option<i64>,

    #[serde(default)]
    pub min_age: Option<i64>,
}

impl ScoringSettings {
    /// Layer `overrides` on top of these settings. Fields set in
    /// `overrides` win.
    pub fn with_overrides(self, overrides: ScoringSettings) -> Self {
        Self {
            purchase_weight: overrides.purchase_weight.or(self.purchase_weight),
            visit_weight: overrides.visit_weight.or(self.visit_weight),
            score_threshold: overrides.score_threshold.or(self.score_threshold),
            min_age: overrides.min_age.or(self.min_age),
        }
    }

    /// Fill in defaults and build a validated [`ScoringConfig`].
    pub fn resolve(&self) -> Result<ScoringConfig, UserDataError> {
        ScoringConfig::new(
            self.purchase_weight.unwrap_or(DEFAULT_PURCHASE_WEIGHT),
            self.visit_weight.unwrap_or(DEFAULT_VISIT_WEIGHT),
            self.score_threshold.unwrap_or(DEFAULT_SCORE_THRESHOLD),
            self.min_age.unwrap_or(DEFAULT_MIN_AGE),
        )
    }
}
