//! Campaign analytics — table joins, filtering, KPI aggregation, the
//! influencer leaderboard, post engagement ranking, and poor-ROAS detection.

pub mod anomaly;
pub mod dashboard;
pub mod engagement;
pub mod filters;
pub mod join;
pub mod metrics;

pub use anomaly::poor_performers;
pub use dashboard::{compute, DashboardState};
pub use engagement::{top_posts, EngagementEntry};
pub use filters::{FilterOptions, FilterSelection};
pub use join::{join_tables, JoinedRow};
pub use metrics::{build_leaderboard, KpiSummary, LeaderboardEntry};
