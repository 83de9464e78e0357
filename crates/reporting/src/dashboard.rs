//! The full dashboard pipeline as a pure function over one campaign
//! snapshot — normalize-joined tables in, rendered-ready state out.

use crate::anomaly::poor_performers;
use crate::engagement::{top_posts, EngagementEntry};
use crate::filters::FilterSelection;
use crate::join::join_tables;
use crate::metrics::{build_leaderboard, KpiSummary, LeaderboardEntry};
use chrono::{DateTime, Utc};
use insights_core::config::AppConfig;
use insights_core::types::CampaignTables;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything a presentation layer needs for one dashboard render.
/// Recomputed from scratch on every filter change, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub kpis: KpiSummary,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub top_posts: Vec<EngagementEntry>,
    pub poor_roas: Vec<LeaderboardEntry>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardState {
    /// An empty leaderboard means the filters matched nothing (or the
    /// snapshot was empty) — a valid state rendered as a notice.
    pub fn has_data(&self) -> bool {
        !self.leaderboard.is_empty()
    }
}

/// Run the whole pipeline: join tracking with influencer and payout data,
/// apply the filter selections, aggregate KPIs and the leaderboard, rank
/// post engagement off the unfiltered snapshot, and flag poor performers.
pub fn compute(
    tables: &CampaignTables,
    filters: &FilterSelection,
    config: &AppConfig,
) -> DashboardState {
    let joined = join_tables(&tables.tracking, &tables.influencers, &tables.payouts);
    let filtered = filters.apply(&joined);
    info!(
        joined = joined.len(),
        filtered = filtered.len(),
        unrestricted = filters.is_unrestricted(),
        "campaign rows joined and filtered"
    );

    let kpis = KpiSummary::compute(&filtered);
    let leaderboard = build_leaderboard(&filtered);
    let poor_roas = poor_performers(&leaderboard, config.poor_roas_threshold);
    let top_posts = top_posts(&tables.posts, &tables.influencers, config.top_posts_limit);
    info!(
        influencers = leaderboard.len(),
        poor_performers = poor_roas.len(),
        "dashboard state computed"
    );

    DashboardState {
        kpis,
        leaderboard,
        top_posts,
        poor_roas,
        generated_at: Utc::now(),
    }
}
