//! Plain-text rendering of the computed dashboard state.

use insights_core::config::AppConfig;
use insights_reporting::{DashboardState, LeaderboardEntry};
use std::fmt::Write;

pub fn render(state: &DashboardState, config: &AppConfig) -> String {
    let mut out = String::new();

    writeln!(out, "Campaign KPIs").unwrap();
    writeln!(out, "  Orders:  {}", group_digits(state.kpis.total_orders)).unwrap();
    writeln!(
        out,
        "  Revenue: {}",
        format_amount(state.kpis.total_revenue, &config.currency_symbol)
    )
    .unwrap();
    writeln!(
        out,
        "  ROAS: {:.2} | ROI: {:.2}",
        state.kpis.roas, state.kpis.roi
    )
    .unwrap();
    out.push('\n');

    writeln!(out, "Influencer Performance").unwrap();
    if state.has_data() {
        writeln!(
            out,
            "  {:>4}  {:<24} {:>8} {:>12} {:>12} {:>8}",
            "Rank", "Influencer", "Orders", "Revenue", "Payout", "ROAS"
        )
        .unwrap();
        for entry in &state.leaderboard {
            writeln!(
                out,
                "  {:>4}  {:<24} {:>8} {:>12.2} {:>12.2} {:>8.2}",
                entry.rank,
                display_name(entry),
                group_digits(entry.total_orders),
                entry.total_revenue,
                entry.total_payout,
                entry.roas
            )
            .unwrap();
        }
    } else {
        writeln!(out, "  No rows match the current filters.").unwrap();
    }
    out.push('\n');

    writeln!(out, "Top Posts by Engagement").unwrap();
    if state.top_posts.is_empty() {
        writeln!(out, "  No post data available.").unwrap();
    } else {
        for post in &state.top_posts {
            writeln!(
                out,
                "  {:<24} {:<12} {:>10}",
                post.name.as_deref().unwrap_or("(unknown)"),
                post.platform.as_deref().unwrap_or("(unknown)"),
                group_digits(post.engagement)
            )
            .unwrap();
        }
    }
    out.push('\n');

    writeln!(out, "Influencers with Poor ROI").unwrap();
    if state.poor_roas.is_empty() {
        writeln!(
            out,
            "  No influencers with ROAS < {:.2}",
            config.poor_roas_threshold
        )
        .unwrap();
    } else {
        for entry in &state.poor_roas {
            writeln!(
                out,
                "  {:<24} {:>12.2} {:>12.2} {:>8.2}",
                display_name(entry),
                entry.total_revenue,
                entry.total_payout,
                entry.roas
            )
            .unwrap();
        }
    }

    out
}

fn display_name(entry: &LeaderboardEntry) -> &str {
    entry.name.as_deref().unwrap_or("(unknown)")
}

/// Thousands separators, `12345` -> `12,345`.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit currency amount with thousands separators.
fn format_amount(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{}{}", symbol, group_digits((-rounded) as u64))
    } else {
        format!("{}{}", symbol, group_digits(rounded as u64))
    }
}
