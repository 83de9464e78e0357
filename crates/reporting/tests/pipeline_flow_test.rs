//! End-to-end pipeline tests: CSV fixtures through ingest into the pure
//! dashboard computation.

use insights_core::config::AppConfig;
use insights_core::types::{
    CampaignTables, InfluencerRecord, PayoutRecord, PostRecord, TableKind, TrackingRecord,
};
use insights_ingest::read_table;
use insights_reporting::{compute, FilterSelection};

const INFLUENCERS_CSV: &str = "\
Influencer ID,Name,Category,Gender,Platform
inf_1,Asha,Fitness,F,Instagram
inf_2,Bela,Nutrition,F,YouTube
";

const POSTS_CSV: &str = "\
influencer_id,platform,likes,comments
inf_1,Instagram,120,30
inf_2,YouTube,80,10
inf_3,Twitter,300,50
";

const TRACKING_CSV: &str = "\
influencer_id,platform,product,orders,revenue
inf_1,Instagram,Protein,10,1000
inf_2,YouTube,Vitamins,5,200
";

const PAYOUTS_CSV: &str = "\
influencer_id,orders,total_payout
inf_1,10,500
";

fn load_fixture_tables() -> CampaignTables {
    CampaignTables {
        influencers: read_table::<InfluencerRecord, _>(
            INFLUENCERS_CSV.as_bytes(),
            TableKind::Influencers,
        )
        .unwrap(),
        posts: read_table::<PostRecord, _>(POSTS_CSV.as_bytes(), TableKind::Posts).unwrap(),
        tracking: read_table::<TrackingRecord, _>(TRACKING_CSV.as_bytes(), TableKind::Tracking)
            .unwrap(),
        payouts: read_table::<PayoutRecord, _>(PAYOUTS_CSV.as_bytes(), TableKind::Payouts).unwrap(),
    }
}

#[test]
fn test_reference_scenario_totals_and_roas() {
    let state = compute(
        &load_fixture_tables(),
        &FilterSelection::default(),
        &AppConfig::default(),
    );

    assert_eq!(state.kpis.total_orders, 15);
    assert_eq!(state.kpis.total_revenue, 1200.0);
    assert_eq!(state.kpis.total_payout, 500.0);

    assert_eq!(state.leaderboard.len(), 2);
    let asha = &state.leaderboard[0];
    assert_eq!(asha.name.as_deref(), Some("Asha"));
    assert_eq!(asha.rank, 1);
    assert_eq!(asha.roas, 2.0);
    let bela = &state.leaderboard[1];
    assert_eq!(bela.name.as_deref(), Some("Bela"));
    assert_eq!(bela.total_payout, 0.0);
    assert_eq!(bela.roas, 0.0);

    // Bela spends nothing, so she is not profitable under the threshold.
    assert_eq!(state.poor_roas.len(), 1);
    assert_eq!(state.poor_roas[0].name.as_deref(), Some("Bela"));
}

#[test]
fn test_filtering_never_grows_the_leaderboard() {
    let tables = load_fixture_tables();
    let config = AppConfig::default();
    let unfiltered = compute(&tables, &FilterSelection::default(), &config);

    let narrowings = [
        FilterSelection {
            platforms: vec!["Instagram".into()],
            ..Default::default()
        },
        FilterSelection {
            platforms: vec!["Instagram".into()],
            categories: vec!["Fitness".into()],
            ..Default::default()
        },
        FilterSelection {
            platforms: vec!["Instagram".into()],
            categories: vec!["Nutrition".into()],
            ..Default::default()
        },
    ];

    let mut previous = unfiltered.leaderboard.len();
    for filters in &narrowings {
        let state = compute(&tables, filters, &config);
        assert!(state.leaderboard.len() <= previous);
        previous = state.leaderboard.len();
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let tables = load_fixture_tables();
    let filters = FilterSelection {
        platforms: vec!["Instagram".into()],
        ..Default::default()
    };
    let config = AppConfig::default();

    let first = compute(&tables, &filters, &config);
    let second = compute(&tables, &filters, &config);
    assert_eq!(first.kpis, second.kpis);
    assert_eq!(first.leaderboard, second.leaderboard);
}

#[test]
fn test_zero_match_filter_yields_empty_dashboard() {
    let filters = FilterSelection {
        genders: vec!["M".into()],
        ..Default::default()
    };
    let state = compute(&load_fixture_tables(), &filters, &AppConfig::default());
    assert!(!state.has_data());
    assert!(state.poor_roas.is_empty());
    assert_eq!(state.kpis.total_orders, 0);
    assert_eq!(state.kpis.roas, 0.0);
    assert_eq!(state.kpis.roi, 0.0);
}

#[test]
fn test_payout_orders_survive_next_to_tracking_orders() {
    let tables = load_fixture_tables();
    let joined = insights_reporting::join_tables(
        &tables.tracking,
        &tables.influencers,
        &tables.payouts,
    );
    let asha = joined
        .iter()
        .find(|r| r.influencer_id.as_deref() == Some("inf_1"))
        .unwrap();
    assert_eq!(asha.orders, Some(10));
    assert_eq!(asha.payout_orders, Some(10));
    assert_eq!(asha.total_payout, Some(500.0));
}

#[test]
fn test_unmatched_post_ranks_with_null_name() {
    let state = compute(
        &load_fixture_tables(),
        &FilterSelection::default(),
        &AppConfig::default(),
    );
    // inf_3 has no influencer record but still tops the engagement ranking.
    assert_eq!(state.top_posts[0].engagement, 350);
    assert_eq!(state.top_posts[0].name, None);
    assert_eq!(state.top_posts.len(), 3);
}
