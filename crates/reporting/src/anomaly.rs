//! Poor performer detection over the leaderboard.

use crate::metrics::LeaderboardEntry;

/// Leaderboard entries whose ROAS fell below `threshold`. An empty result
/// is a valid state, not an error; callers distinguish "no poor
/// performers" from "no data" via the leaderboard length.
pub fn poor_performers(leaderboard: &[LeaderboardEntry], threshold: f64) -> Vec<LeaderboardEntry> {
    leaderboard
        .iter()
        .filter(|e| e.roas < threshold)
        .cloned()
        .collect()
}
