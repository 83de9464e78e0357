//! Inclusion filters over the joined table.

use crate::join::JoinedRow;
use insights_core::types::{InfluencerRecord, TrackingRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Four independent multi-value selections. An empty selection places no
/// restriction on its dimension; non-empty selections compose by AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub platforms: Vec<String>,
    pub products: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterSelection {
    pub fn is_unrestricted(&self) -> bool {
        self.platforms.is_empty()
            && self.products.is_empty()
            && self.categories.is_empty()
            && self.genders.is_empty()
    }

    /// A row passes a dimension when the selection is empty or its field
    /// value is a member of the selection. A `None` field fails any
    /// non-empty selection on that dimension.
    fn matches(&self, row: &JoinedRow) -> bool {
        dimension_matches(&self.platforms, row.platform.as_deref())
            && dimension_matches(&self.products, row.product.as_deref())
            && dimension_matches(&self.categories, row.category.as_deref())
            && dimension_matches(&self.genders, row.gender.as_deref())
    }

    /// Retain only the rows passing every non-empty selection. Filtering
    /// operates post-join so influencer attributes are available alongside
    /// tracking attributes.
    pub fn apply(&self, rows: &[JoinedRow]) -> Vec<JoinedRow> {
        if self.is_unrestricted() {
            return rows.to_vec();
        }
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn dimension_matches(selection: &[String], value: Option<&str>) -> bool {
    if selection.is_empty() {
        return true;
    }
    match value {
        Some(v) => selection.iter().any(|s| s == v),
        None => false,
    }
}

/// Distinct non-null values per filter dimension, for presentation layers
/// to offer as choices. Platform and product come from tracking, category
/// and gender from the influencer table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    pub platforms: Vec<String>,
    pub products: Vec<String>,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterOptions {
    pub fn from_tables(tracking: &[TrackingRecord], influencers: &[InfluencerRecord]) -> Self {
        Self {
            platforms: distinct(tracking.iter().map(|r| r.platform.as_deref())),
            products: distinct(tracking.iter().map(|r| r.product.as_deref())),
            categories: distinct(influencers.iter().map(|r| r.category.as_deref())),
            genders: distinct(influencers.iter().map(|r| r.gender.as_deref())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
