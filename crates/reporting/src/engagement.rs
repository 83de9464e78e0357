//! Post engagement ranking — likes + comments, joined with influencer names.

use insights_core::types::{InfluencerRecord, PostRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A post with its derived engagement score and the owning influencer's
/// name when one matched. Chart data for the presentation layer: value is
/// `engagement`, grouped by `name`, colored by `platform`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementEntry {
    pub influencer_id: Option<String>,
    pub platform: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub engagement: u64,
    pub name: Option<String>,
}

/// Left-join posts to influencer names, score engagement, and keep the
/// top `limit` posts. The descending sort is stable, so engagement ties
/// keep their original post order. Unmatched posts are retained with a
/// null name; duplicated influencer ids fan out as in the main join.
pub fn top_posts(
    posts: &[PostRecord],
    influencers: &[InfluencerRecord],
    limit: usize,
) -> Vec<EngagementEntry> {
    let mut names: HashMap<&str, Vec<Option<&str>>> = HashMap::new();
    for inf in influencers {
        if let Some(id) = inf.influencer_id.as_deref() {
            names.entry(id).or_default().push(inf.name.as_deref());
        }
    }

    let mut entries: Vec<EngagementEntry> = Vec::with_capacity(posts.len());
    for post in posts {
        let engagement = post.likes.unwrap_or(0) + post.comments.unwrap_or(0);
        let matches: Vec<Option<&str>> = match post
            .influencer_id
            .as_deref()
            .and_then(|id| names.get(id))
        {
            Some(matched) => matched.clone(),
            None => vec![None],
        };
        for name in &matches {
            entries.push(EngagementEntry {
                influencer_id: post.influencer_id.clone(),
                platform: post.platform.clone(),
                likes: post.likes,
                comments: post.comments,
                engagement,
                name: name.map(String::from),
            });
        }
    }

    entries.sort_by(|a, b| b.engagement.cmp(&a.engagement));
    entries.truncate(limit);
    entries
}
