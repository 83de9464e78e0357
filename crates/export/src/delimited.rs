//! RFC-4180 delimited rendering of the export projection.

use crate::projection::ExportRow;
use insights_core::error::{InsightError, InsightResult};

const HEADER: [&str; 5] = ["name", "orders", "revenue", "total_payout", "roas"];

/// Header row followed by one row per entry, standard quoting rules,
/// returned as an owned byte buffer ready for download or disk. An empty
/// projection still gets its header row.
pub fn to_csv_bytes(rows: &[ExportRow]) -> InsightResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| InsightError::Io(e.into_error()))
}
