use tracing::{debug, info};

use crate::records::{
    parse_row, ProcessingError, RawUserRow, RowErrorKind, ScoredUser, FIELD_SCORE,
};
use crate::scoring::{calculate_score, ScoringConfig};

/// Outcome of one pipeline run, handed to the report and export writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineResult {
    /// Records that passed both filters, in input order
    pub accepted: Vec<ScoredUser>,
    /// Rows that could not be parsed or scored, in input order
    pub errors: Vec<ProcessingError>,
    /// Parsed rows dropped by the age or score filter
    pub filtered: usize,
}

impl PipelineResult {
    /// Rows that did not make it into the accepted set, for any reason
    pub fn rejected(&self) -> usize {
        self.errors.len() + self.filtered
    }

    pub fn total_rows(&self) -> usize {
        self.accepted.len() + self.rejected()
    }

    /// Mean score of the accepted records, `None` when there are none
    pub fn average_score(&self) -> Option<f64> {
        if self.accepted.is_empty() {
            return None;
        }
        let total: f64 = self.accepted.iter().map(|u| u.score as f64).sum();
        Some(total / self.accepted.len() as f64)
    }
}

/// Parse, score and filter every row.
///
/// A record is kept when `age >= min_age` and `score > score_threshold`.
/// Bad rows end up in [`PipelineResult::errors`] and never stop the run.
pub fn process(rows: &[RawUserRow], config: &ScoringConfig) -> PipelineResult {
    let mut result = PipelineResult::default();

    for raw in rows {
        let record = match parse_row(raw) {
            Ok(record) => record,
            Err(e) => {
                debug!(row = raw.row, error = %e, "rejected row");
                result.errors.push(e);
                continue;
            }
        };

        let score = match calculate_score(
            i64::from(record.purchases),
            i64::from(record.visits),
            config,
        ) {
            Ok(score) => score,
            Err(e) => {
                debug!(row = raw.row, error = %e, "could not score row");
                result
                    .errors
                    .push(ProcessingError::new(raw, FIELD_SCORE, RowErrorKind::OutOfRange));
                continue;
            }
        };

        if i64::from(record.age) >= config.min_age() && score > config.score_threshold() {
            result.accepted.push(ScoredUser { record, score });
        } else {
            debug!(
                row = raw.row,
                user_id = %record.user_id,
                age = record.age,
                score,
                "filtered out"
            );
            result.filtered += 1;
        }
    }

    info!(
        rows = rows.len(),
        accepted = result.accepted.len(),
        errors = result.errors.len(),
        filtered = result.filtered,
        "processed rows"
    );
    result
}
