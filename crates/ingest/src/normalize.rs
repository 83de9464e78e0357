//! Header canonicalization applied to every raw table before typed
//! deserialization.

use csv::StringRecord;
use insights_core::error::{InsightError, InsightResult};
use insights_core::types::TableKind;

/// Canonical form of a raw column label: trimmed, lowercased, internal
/// spaces replaced with underscores.
pub fn normalize_header(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Normalize every header in the record. Row data is never touched.
pub fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers.iter().map(normalize_header).collect()
}

/// The payout source reuses the label `orders` for a column that is not the
/// tracking orders count. It is renamed before any join can see it, so the
/// merge can neither overwrite nor suffix either column.
pub fn rename_payout_orders(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| if h == "orders" { "payout_orders" } else { h })
        .collect()
}

/// Every required column must be present after normalization; anything else
/// is a schema failure naming the table and the column. An empty source has
/// no headers at all and fails on the first required column.
pub fn require_columns(
    table: TableKind,
    headers: &StringRecord,
    required: &[&str],
) -> InsightResult<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(InsightError::Schema {
                table,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_forms() {
        assert_eq!(normalize_header("  Influencer ID "), "influencer_id");
        assert_eq!(normalize_header("Total Payout"), "total_payout");
        assert_eq!(normalize_header("revenue"), "revenue");
    }

    #[test]
    fn test_normalize_headers_record() {
        let raw = StringRecord::from(vec![" Influencer ID ", "NAME", "Total Payout"]);
        let normalized = normalize_headers(&raw);
        assert_eq!(
            normalized,
            StringRecord::from(vec!["influencer_id", "name", "total_payout"])
        );
    }

    #[test]
    fn test_payout_orders_rename_is_scoped() {
        let headers = StringRecord::from(vec!["influencer_id", "orders", "total_payout"]);
        let renamed = rename_payout_orders(&headers);
        assert_eq!(
            renamed,
            StringRecord::from(vec!["influencer_id", "payout_orders", "total_payout"])
        );
        // Only a literal `orders` label is renamed.
        let headers = StringRecord::from(vec!["payout_orders", "reorders"]);
        assert_eq!(rename_payout_orders(&headers), headers);
    }

    #[test]
    fn test_require_columns_names_missing_column() {
        let headers = StringRecord::from(vec!["influencer_id", "name"]);
        let err = require_columns(TableKind::Influencers, &headers, &["influencer_id", "gender"])
            .unwrap_err();
        match err {
            InsightError::Schema { table, column } => {
                assert_eq!(table, TableKind::Influencers);
                assert_eq!(column, "gender");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_headers_fail_schema_check() {
        let headers = StringRecord::new();
        assert!(require_columns(TableKind::Posts, &headers, &["influencer_id"]).is_err());
    }
}
