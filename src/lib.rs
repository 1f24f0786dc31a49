pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod records;
pub mod scoring;

pub use error::UserDataError;
pub use pipeline::{process, PipelineResult};
pub use records::{parse_row, ProcessingError, RawUserRow, ScoredUser, UserRecord};
pub use scoring::{calculate_score, ScoringConfig};
