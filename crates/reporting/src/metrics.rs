//! Aggregate KPIs and the per-influencer leaderboard.

use crate::join::JoinedRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Campaign-wide totals over the current filtered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_payout: f64,
    pub roas: f64,
    pub roi: f64,
}

impl KpiSummary {
    /// Sum orders/revenue/payout with the explicit zero-for-null policy,
    /// then derive ROAS and ROI with the zero-denominator fallback.
    pub fn compute(rows: &[JoinedRow]) -> Self {
        let total_orders: u64 = rows.iter().map(|r| r.orders.unwrap_or(0)).sum();
        let total_revenue: f64 = rows.iter().map(|r| r.revenue.unwrap_or(0.0)).sum();
        let total_payout: f64 = rows.iter().map(|r| r.total_payout.unwrap_or(0.0)).sum();

        Self {
            total_orders,
            total_revenue,
            total_payout,
            roas: guarded_ratio(total_revenue, total_payout),
            roi: guarded_ratio(total_revenue - total_payout, total_payout),
        }
    }
}

/// Per-influencer aggregate, ranked by revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position after the revenue sort.
    pub rank: usize,
    pub influencer_id: Option<String>,
    pub name: Option<String>,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_payout: f64,
    pub roas: f64,
}

/// Group the filtered rows by (influencer_id, name) in first-seen order,
/// sum per group, and rank by revenue descending. The sort is stable, so
/// revenue ties keep their first-seen group order. Per-group ROAS divides
/// the summed revenue by the summed payout (never an average of per-row
/// ratios), with the same zero guard as the campaign totals — a group
/// without payout data still appears, with ROAS 0.
pub fn build_leaderboard(rows: &[JoinedRow]) -> Vec<LeaderboardEntry> {
    let mut index: HashMap<(Option<&str>, Option<&str>), usize> = HashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for row in rows {
        let key = (row.influencer_id.as_deref(), row.name.as_deref());
        let slot = *index.entry(key).or_insert_with(|| {
            entries.push(LeaderboardEntry {
                rank: 0,
                influencer_id: row.influencer_id.clone(),
                name: row.name.clone(),
                total_orders: 0,
                total_revenue: 0.0,
                total_payout: 0.0,
                roas: 0.0,
            });
            entries.len() - 1
        });
        let entry = &mut entries[slot];
        entry.total_orders += row.orders.unwrap_or(0);
        entry.total_revenue += row.revenue.unwrap_or(0.0);
        entry.total_payout += row.total_payout.unwrap_or(0.0);
    }

    entries.sort_by(|a, b| {
        b.total_revenue
            .partial_cmp(&a.total_revenue)
            .unwrap_or(Ordering::Equal)
    });
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
        entry.roas = guarded_ratio(entry.total_revenue, entry.total_payout);
    }
    entries
}

/// Ratios with a zero denominator resolve to 0 instead of raising or
/// producing an infinity.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
