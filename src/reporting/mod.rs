pub mod formatter;

pub use formatter::{render_report, PROVENANCE_NOTICE};
