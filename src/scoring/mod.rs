pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, weighted_sum};
pub use validation::validate_scoring;
