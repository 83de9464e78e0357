use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The four input tables a campaign snapshot is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Influencers,
    Posts,
    Tracking,
    Payouts,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Influencers => "influencers",
            Self::Posts => "posts",
            Self::Tracking => "tracking",
            Self::Payouts => "payouts",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Influencer reference data for the campaign period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerRecord {
    #[serde(deserialize_with = "trimmed_opt")]
    pub influencer_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub platform: Option<String>,
}

/// A single published post with its engagement counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(deserialize_with = "trimmed_opt")]
    pub influencer_id: Option<String>,
    pub platform: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
}

/// One tracked conversion event/batch attributed to an influencer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRecord {
    #[serde(deserialize_with = "trimmed_opt")]
    pub influencer_id: Option<String>,
    pub platform: Option<String>,
    pub product: Option<String>,
    pub orders: Option<u64>,
    pub revenue: Option<f64>,
}

/// Payout terms per influencer. The source column `orders` is renamed to
/// `payout_orders` during ingest so it cannot collide with tracking orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRecord {
    #[serde(deserialize_with = "trimmed_opt")]
    pub influencer_id: Option<String>,
    pub payout_orders: Option<u64>,
    pub total_payout: Option<f64>,
}

/// One fully-loaded in-memory snapshot of the four campaign tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignTables {
    pub influencers: Vec<InfluencerRecord>,
    pub posts: Vec<PostRecord>,
    pub tracking: Vec<TrackingRecord>,
    pub payouts: Vec<PayoutRecord>,
}

/// Join keys are trimmed; an empty cell is an absent key, and an absent key
/// never matches anything.
fn trimmed_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
