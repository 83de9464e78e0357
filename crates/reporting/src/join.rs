//! Left join of tracking rows with influencer metadata and payout terms.

use insights_core::types::{InfluencerRecord, PayoutRecord, TrackingRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tracking row enriched with its (possibly absent) influencer and
/// payout matches. Unmatched sides stay `None` and aggregate as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedRow {
    pub influencer_id: Option<String>,
    pub platform: Option<String>,
    pub product: Option<String>,
    pub orders: Option<u64>,
    pub revenue: Option<f64>,
    // Influencer side
    pub name: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    // Payout side, `payout_orders` already renamed at ingest
    pub payout_orders: Option<u64>,
    pub total_payout: Option<f64>,
}

/// Multimap over a joinable key. Rows without a key are unreachable through
/// lookups, which is exactly the null-key semantics the join needs.
fn by_key<'a, T>(
    rows: &'a [T],
    key: impl Fn(&'a T) -> Option<&'a str>,
) -> HashMap<&'a str, Vec<&'a T>> {
    let mut map: HashMap<&str, Vec<&T>> = HashMap::new();
    for row in rows {
        if let Some(k) = key(row) {
            map.entry(k).or_default().push(row);
        }
    }
    map
}

/// `left_join(tracking, influencers)` then `left_join(result, payouts)`,
/// both on influencer id. Every tracking row appears at least once; a
/// duplicated id on the right side fans out, which is accepted as upstream
/// data quality rather than corrected here.
pub fn join_tables(
    tracking: &[TrackingRecord],
    influencers: &[InfluencerRecord],
    payouts: &[PayoutRecord],
) -> Vec<JoinedRow> {
    let influencers = by_key(influencers, |r| r.influencer_id.as_deref());
    let payouts = by_key(payouts, |r| r.influencer_id.as_deref());
    let no_influencer: Vec<&InfluencerRecord> = vec![];
    let no_payout: Vec<&PayoutRecord> = vec![];

    let mut joined = Vec::with_capacity(tracking.len());
    for row in tracking {
        let key = row.influencer_id.as_deref();
        let inf_matches = key
            .and_then(|k| influencers.get(k))
            .unwrap_or(&no_influencer);
        let pay_matches = key.and_then(|k| payouts.get(k)).unwrap_or(&no_payout);

        let inf_sides: Vec<Option<&InfluencerRecord>> = if inf_matches.is_empty() {
            vec![None]
        } else {
            inf_matches.iter().map(|r| Some(*r)).collect()
        };
        let pay_sides: Vec<Option<&PayoutRecord>> = if pay_matches.is_empty() {
            vec![None]
        } else {
            pay_matches.iter().map(|r| Some(*r)).collect()
        };

        for inf in &inf_sides {
            for pay in &pay_sides {
                joined.push(JoinedRow {
                    influencer_id: row.influencer_id.clone(),
                    platform: row.platform.clone(),
                    product: row.product.clone(),
                    orders: row.orders,
                    revenue: row.revenue,
                    name: inf.and_then(|r| r.name.clone()),
                    category: inf.and_then(|r| r.category.clone()),
                    gender: inf.and_then(|r| r.gender.clone()),
                    payout_orders: pay.and_then(|r| r.payout_orders),
                    total_payout: pay.and_then(|r| r.total_payout),
                });
            }
        }
    }
    joined
}
