//! Influencer campaign insights dashboard.
//!
//! Loads the four campaign tables, runs the analytics pipeline, renders the
//! result to stdout, and optionally writes the export artifacts.

use clap::Parser;
use insights_core::config::AppConfig;
use insights_ingest::{load_tables, TablePaths};
use insights_reporting::{compute, FilterOptions, FilterSelection};
use std::path::PathBuf;
use tracing::{info, warn};

mod render;

#[derive(Parser, Debug)]
#[command(name = "insights-dashboard")]
#[command(about = "Influencer campaign performance dashboard")]
#[command(version)]
struct Cli {
    /// Influencer reference data CSV
    #[arg(long, env = "INSIGHTS__INFLUENCERS_FILE", value_name = "PATH")]
    influencers: PathBuf,

    /// Post engagement CSV
    #[arg(long, env = "INSIGHTS__POSTS_FILE", value_name = "PATH")]
    posts: PathBuf,

    /// Conversion tracking CSV
    #[arg(long, env = "INSIGHTS__TRACKING_FILE", value_name = "PATH")]
    tracking: PathBuf,

    /// Payout CSV
    #[arg(long, env = "INSIGHTS__PAYOUTS_FILE", value_name = "PATH")]
    payouts: PathBuf,

    /// Keep only rows on this platform (repeatable)
    #[arg(long = "platform", value_name = "NAME")]
    platforms: Vec<String>,

    /// Keep only rows for this brand/product (repeatable)
    #[arg(long = "product", value_name = "NAME")]
    products: Vec<String>,

    /// Keep only influencers in this category (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Keep only influencers of this gender (repeatable)
    #[arg(long = "gender", value_name = "NAME")]
    genders: Vec<String>,

    /// Write the leaderboard as delimited text
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Write the paginated summary document
    #[arg(long, value_name = "PATH")]
    export_summary: Option<PathBuf>,

    /// Number of posts in the engagement ranking (overrides config)
    #[arg(long)]
    top_posts: Option<usize>,

    /// ROAS threshold for the poor performer table (overrides config)
    #[arg(long)]
    poor_roas_threshold: Option<f64>,

    /// List the filter values present in the data and exit
    #[arg(long, default_value_t = false)]
    list_filters: bool,

    /// Dump the computed dashboard state as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "insights_ingest=info,insights_reporting=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });
    if let Some(limit) = cli.top_posts {
        config.top_posts_limit = limit;
    }
    if let Some(threshold) = cli.poor_roas_threshold {
        config.poor_roas_threshold = threshold;
    }

    let paths = TablePaths {
        influencers: cli.influencers,
        posts: cli.posts,
        tracking: cli.tracking,
        payouts: cli.payouts,
    };
    let tables = match load_tables(&paths) {
        Ok(tables) => tables,
        Err(e) => {
            if e.is_fatal() {
                // No partial dashboard on a bad snapshot.
                eprintln!("Please supply all four campaign CSV files with their required columns.");
            }
            return Err(e.into());
        }
    };

    if cli.list_filters {
        let options = FilterOptions::from_tables(&tables.tracking, &tables.influencers);
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let filters = FilterSelection {
        platforms: cli.platforms,
        products: cli.products,
        categories: cli.categories,
        genders: cli.genders,
    };
    let state = compute(&tables, &filters, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render::render(&state, &config));
    }

    if cli.export_csv.is_some() || cli.export_summary.is_some() {
        let projection = insights_export::project(&state.leaderboard);
        if let Some(path) = &cli.export_csv {
            std::fs::write(path, insights_export::to_csv_bytes(&projection)?)?;
            info!(path = %path.display(), "leaderboard export written");
        }
        if let Some(path) = &cli.export_summary {
            std::fs::write(
                path,
                insights_export::render_summary(&projection, &config.summary),
            )?;
            info!(path = %path.display(), "summary document written");
        }
    }

    Ok(())
}
