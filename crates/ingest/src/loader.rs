//! Typed CSV loading for the four campaign tables.
//!
//! All four inputs are mandatory; a missing file halts the run before any
//! table is opened. Header normalization and the payout `orders` rename
//! happen here, so downstream engines only ever see typed records.

use crate::normalize::{normalize_headers, rename_payout_orders, require_columns};
use insights_core::error::{InsightError, InsightResult};
use insights_core::types::{CampaignTables, TableKind};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locations of the four required input files.
#[derive(Debug, Clone)]
pub struct TablePaths {
    pub influencers: PathBuf,
    pub posts: PathBuf,
    pub tracking: PathBuf,
    pub payouts: PathBuf,
}

/// Minimum schema per table, checked against normalized headers. The payout
/// check runs against the source labels, before the `orders` rename.
fn required_columns(table: TableKind) -> &'static [&'static str] {
    match table {
        TableKind::Influencers => &["influencer_id", "name", "category", "gender", "platform"],
        TableKind::Posts => &["influencer_id", "platform", "likes", "comments"],
        TableKind::Tracking => &["influencer_id", "platform", "product", "orders", "revenue"],
        TableKind::Payouts => &["influencer_id", "orders", "total_payout"],
    }
}

/// Read one table from any byte source, normalizing headers and validating
/// the minimum schema before typed deserialization. Cells are trimmed; an
/// empty cell deserializes to `None`.
pub fn read_table<T, R>(source: R, table: TableKind) -> InsightResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut headers = normalize_headers(rdr.headers()?);
    require_columns(table, &headers, required_columns(table))?;
    if table == TableKind::Payouts {
        headers = rename_payout_orders(&headers);
    }
    rdr.set_headers(headers);

    let rows = rdr.deserialize().collect::<Result<Vec<T>, _>>()?;
    debug!(table = %table, rows = rows.len(), "table deserialized");
    Ok(rows)
}

/// Load the full campaign snapshot. Every path is checked up front so a
/// missing table halts the run before any computation starts.
pub fn load_tables(paths: &TablePaths) -> InsightResult<CampaignTables> {
    for (table, path) in [
        (TableKind::Influencers, &paths.influencers),
        (TableKind::Posts, &paths.posts),
        (TableKind::Tracking, &paths.tracking),
        (TableKind::Payouts, &paths.payouts),
    ] {
        if !path.is_file() {
            return Err(InsightError::MissingInput(table));
        }
    }

    let tables = CampaignTables {
        influencers: read_file(&paths.influencers, TableKind::Influencers)?,
        posts: read_file(&paths.posts, TableKind::Posts)?,
        tracking: read_file(&paths.tracking, TableKind::Tracking)?,
        payouts: read_file(&paths.payouts, TableKind::Payouts)?,
    };

    info!(
        influencers = tables.influencers.len(),
        posts = tables.posts.len(),
        tracking = tables.tracking.len(),
        payouts = tables.payouts.len(),
        "campaign tables loaded"
    );
    Ok(tables)
}

fn read_file<T: DeserializeOwned>(path: &Path, table: TableKind) -> InsightResult<Vec<T>> {
    let file = File::open(path)?;
    read_table(BufReader::new(file), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::types::{InfluencerRecord, PayoutRecord, PostRecord, TrackingRecord};

    #[test]
    fn test_tracking_headers_are_normalized() {
        let csv = " Influencer ID ,Platform,Product,Orders,Revenue\n\
                    inf_1,Instagram,Protein,10,1000\n";
        let rows: Vec<TrackingRecord> =
            read_table(csv.as_bytes(), TableKind::Tracking).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].influencer_id.as_deref(), Some("inf_1"));
        assert_eq!(rows[0].orders, Some(10));
        assert_eq!(rows[0].revenue, Some(1000.0));
    }

    #[test]
    fn test_payout_orders_column_is_renamed() {
        let csv = "influencer_id,orders,total_payout\ninf_1,12,500\n";
        let rows: Vec<PayoutRecord> = read_table(csv.as_bytes(), TableKind::Payouts).unwrap();
        assert_eq!(rows[0].payout_orders, Some(12));
        assert_eq!(rows[0].total_payout, Some(500.0));
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv = "influencer_id,platform,likes\ninf_1,Instagram,5\n";
        let err = read_table::<PostRecord, _>(csv.as_bytes(), TableKind::Posts).unwrap_err();
        match err {
            InsightError::Schema { table, column } => {
                assert_eq!(table, TableKind::Posts);
                assert_eq!(column, "comments");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_source_fails_schema_check() {
        let err = read_table::<InfluencerRecord, _>(&b""[..], TableKind::Influencers).unwrap_err();
        assert!(matches!(err, InsightError::Schema { .. }));
    }

    #[test]
    fn test_empty_cells_become_none() {
        let csv = "influencer_id,platform,likes,comments\n,Instagram,,3\n";
        let rows: Vec<PostRecord> = read_table(csv.as_bytes(), TableKind::Posts).unwrap();
        assert_eq!(rows[0].influencer_id, None);
        assert_eq!(rows[0].likes, None);
        assert_eq!(rows[0].comments, Some(3));
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let paths = TablePaths {
            influencers: PathBuf::from("/nonexistent/influencers.csv"),
            posts: PathBuf::from("/nonexistent/posts.csv"),
            tracking: PathBuf::from("/nonexistent/tracking.csv"),
            payouts: PathBuf::from("/nonexistent/payouts.csv"),
        };
        let err = load_tables(&paths).unwrap_err();
        assert!(matches!(
            err,
            InsightError::MissingInput(TableKind::Influencers)
        ));
    }
}
