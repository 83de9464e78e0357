//! The shared export projection: both renderings are derived from the same
//! rounded view of the leaderboard.

use insights_reporting::LeaderboardEntry;
use serde::{Deserialize, Serialize};

/// One exportable leaderboard line. Numeric fields are rounded to two
/// decimal places; a missing name renders as an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: Option<String>,
    pub orders: u64,
    pub revenue: f64,
    pub total_payout: f64,
    pub roas: f64,
}

pub fn project(leaderboard: &[LeaderboardEntry]) -> Vec<ExportRow> {
    leaderboard
        .iter()
        .map(|e| ExportRow {
            name: e.name.clone(),
            orders: e.total_orders,
            revenue: round2(e.total_revenue),
            total_payout: round2(e.total_payout),
            roas: round2(e.roas),
        })
        .collect()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
