//! Leaderboard export — a rounded projection rendered as delimited text
//! and as a paginated summary document, independent of any presentation
//! layer.

pub mod delimited;
pub mod document;
pub mod projection;

pub use delimited::to_csv_bytes;
pub use document::render_summary;
pub use projection::{project, ExportRow};
