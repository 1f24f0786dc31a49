pub mod export;
pub mod formatter;

pub use export::{export_json, write_json, write_report};
pub use formatter::{
    format_rejections, format_report, format_summary, format_user_line, should_use_colors,
};
