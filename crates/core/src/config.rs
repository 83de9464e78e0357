use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with
/// the prefix `INSIGHTS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency symbol used by the rendered KPI summary.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Number of posts kept by the engagement ranking.
    #[serde(default = "default_top_posts_limit")]
    pub top_posts_limit: usize,
    /// Leaderboard entries with ROAS below this are flagged as poor performers.
    #[serde(default = "default_poor_roas_threshold")]
    pub poor_roas_threshold: f64,
    #[serde(default)]
    pub summary: SummaryDocConfig,
}

/// Layout of the exported summary document.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryDocConfig {
    #[serde(default = "default_summary_title")]
    pub title: String,
    /// Currency label printed before revenue amounts in the document body.
    #[serde(default = "default_currency_label")]
    pub currency_label: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

// Default functions
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_top_posts_limit() -> usize {
    10
}
fn default_poor_roas_threshold() -> f64 {
    1.0
}
fn default_summary_title() -> String {
    "Campaign Summary".to_string()
}
fn default_currency_label() -> String {
    "Rs.".to_string()
}
fn default_max_entries() -> usize {
    20
}
fn default_lines_per_page() -> usize {
    25
}

impl Default for SummaryDocConfig {
    fn default() -> Self {
        Self {
            title: default_summary_title(),
            currency_label: default_currency_label(),
            max_entries: default_max_entries(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            top_posts_limit: default_top_posts_limit(),
            poor_roas_threshold: default_poor_roas_threshold(),
            summary: SummaryDocConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("INSIGHTS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
