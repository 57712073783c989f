//! Command line and configuration for the `fine` host.
//!
//! Settings are layered: defaults, then an optional TOML file, then `FINE_*`
//! environment variables, then command-line flags.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use engine::{Currency, DEFAULT_MONTH_LOOKBACK, DateNormalizer};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/fine.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: String,
    pub timezone: String,
    pub month_lookback: u32,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            timezone: "Africa/Casablanca".to_string(),
            month_lookback: DEFAULT_MONTH_LOOKBACK,
            currency: Currency::default().code().to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fine", disable_version_flag = true)]
#[command(about = "Normalize spoken expense amounts and dates (French, Morocco)")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long, global = true)]
    pub level: Option<String>,
    /// Override timezone used for "today" (IANA name).
    #[arg(long, global = true)]
    pub timezone: Option<String>,
    /// Override how many months a bare day of month may search back.
    #[arg(long, global = true)]
    pub month_lookback: Option<u32>,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read an amount, e.g. `fine amount 1 234,56 dhs`.
    Amount(AmountArgs),
    /// Resolve a date, e.g. `fine date le 3 mars`.
    Date(DateArgs),
    /// Check a complete expense entry (what / when / how much).
    Entry(EntryArgs),
}

#[derive(Debug, Args)]
pub struct AmountArgs {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DateArgs {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Reference "today" (YYYY-MM-DD); defaults to today in the configured timezone.
    #[arg(long)]
    pub reference: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    /// Description of the expense.
    #[arg(long)]
    pub what: String,
    /// When it happened (e.g. "hier", "12 février").
    #[arg(long)]
    pub when: String,
    /// How much (e.g. "150,5 dh").
    #[arg(long)]
    pub how_much: String,
    /// Reference "today" (YYYY-MM-DD); defaults to today in the configured timezone.
    #[arg(long)]
    pub reference: Option<NaiveDate>,
}

/// Validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub level: String,
    pub timezone: Tz,
    pub month_lookback: u32,
    pub currency: Currency,
}

impl Settings {
    pub fn date_normalizer(&self) -> DateNormalizer {
        DateNormalizer::default().with_month_lookback(self.month_lookback)
    }

    /// `explicit`, or today in the configured timezone.
    pub fn reference_date(&self, explicit: Option<NaiveDate>) -> NaiveDate {
        explicit.unwrap_or_else(|| Utc::now().with_timezone(&self.timezone).date_naive())
    }
}

pub fn load(cli: &Cli) -> Result<Settings> {
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINE").try_parsing(true));
    let settings: AppConfig = builder.build()?.try_deserialize()?;

    validate(apply_overrides(settings, cli))
}

fn apply_overrides(mut settings: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(level) = &cli.level {
        settings.level = level.clone();
    }
    if let Some(timezone) = &cli.timezone {
        settings.timezone = timezone.clone();
    }
    if let Some(month_lookback) = cli.month_lookback {
        settings.month_lookback = month_lookback;
    }
    settings
}

fn validate(config: AppConfig) -> Result<Settings> {
    let timezone: Tz = config.timezone.parse().map_err(|err| {
        AppError::InvalidSetting(format!("timezone '{}': {err}", config.timezone))
    })?;
    if config.month_lookback == 0 {
        return Err(AppError::InvalidSetting(
            "month_lookback must be at least 1".to_string(),
        ));
    }
    let currency = Currency::try_from(config.currency.as_str())
        .map_err(|err| AppError::InvalidSetting(format!("currency: {err}")))?;

    Ok(Settings {
        level: config.level,
        timezone,
        month_lookback: config.month_lookback,
        currency,
    })
}
