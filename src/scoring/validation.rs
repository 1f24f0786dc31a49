use super::config::ScoringSettings;

/// Validate the scoring section of the config file at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(settings: &ScoringSettings) -> Result<(), Vec<String>> {
    let errors = check_values(
        settings.purchase_weight,
        settings.visit_weight,
        settings.score_threshold,
        settings.min_age,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check whichever values are present. Shared with `ScoringConfig::new`,
/// which passes every value.
pub(crate) fn check_values(
    purchase_weight: Option<f64>,
    visit_weight: Option<f64>,
    score_threshold: Option<i64>,
    min_age: Option<i64>,
) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(weight) = purchase_weight {
        if let Some(problem) = weight_problem(weight) {
            errors.push(format!("scoring.purchase_weight: {}, got {}", problem, weight));
        }
    }

    if let Some(weight) = visit_weight {
        if let Some(problem) = weight_problem(weight) {
            errors.push(format!("scoring.visit_weight: {}, got {}", problem, weight));
        }
    }

    if let Some(threshold) = score_threshold {
        if threshold < 0 {
            errors.push(format!(
                "scoring.score_threshold: must be non-negative, got {}",
                threshold
            ));
        }
    }

    if let Some(age) = min_age {
        if age < 0 {
            errors.push(format!("scoring.min_age: must be non-negative, got {}", age));
        }
    }

    errors
}

fn weight_problem(weight: f64) -> Option<&'static str> {
    if !weight.is_finite() {
        Some("must be a finite number")
    } else if weight < 0.0 {
        Some("must be non-negative")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = ScoringSettings {
            purchase_weight: Some(10.0),
            visit_weight: Some(5.0),
            score_threshold: Some(100),
            min_age: Some(18),
        };
        assert!(validate_scoring(&settings).is_ok());
    }

    #[test]
    fn test_empty_settings() {
        assert!(validate_scoring(&ScoringSettings::default()).is_ok());
    }

    #[test]
    fn test_negative_purchase_weight() {
        let settings = ScoringSettings {
            purchase_weight: Some(-1.0),
            ..Default::default()
        };
        let errors = validate_scoring(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.purchase_weight"));
        assert!(errors[0].contains("non-negative"));
    }

    #[test]
    fn test_non_finite_visit_weight() {
        let settings = ScoringSettings {
            visit_weight: Some(f64::NEG_INFINITY),
            ..Default::default()
        };
        let errors = validate_scoring(&settings).unwrap_err();
        assert!(errors[0].contains("scoring.visit_weight"));
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_negative_thresholds() {
        let settings = ScoringSettings {
            score_threshold: Some(-1),
            min_age: Some(-18),
            ..Default::default()
        };
        let errors = validate_scoring(&settings).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("scoring.score_threshold"));
        assert!(errors[1].contains("scoring.min_age"));
    }

    #[test]
    fn test_collects_all_errors() {
        let settings = ScoringSettings {
            purchase_weight: Some(-10.0), // Error 1
            visit_weight: Some(f64::NAN), // Error 2
            score_threshold: None,
            min_age: Some(-1), // Error 3
        };
        let errors = validate_scoring(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
