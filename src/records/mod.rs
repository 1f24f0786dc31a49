pub mod parser;
pub mod source;
pub mod types;

pub use parser::parse_row;
pub use source::{read_user_rows, read_user_rows_from};
pub use types::*;
