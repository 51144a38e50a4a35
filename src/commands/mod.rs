//! CLI command implementations.
//!
//! Commands orchestrate the library components: load the dataset, build a
//! page report, print it, and write JSON/SVG outputs.

pub mod models;
pub mod page;
pub mod utils;

// Re-export main command functions
pub use models::{Page, PageArgs};
pub use page::{execute_dashboard, execute_page, render_page_charts, validate_args};
pub use utils::{display_version, validate_report_file};
