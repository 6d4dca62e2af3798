//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogFormat;

/// Arguments for the calculator demo
#[derive(Debug, Parser)]
pub struct CalculatorArgs {
    /// Catalog fixture to load from `<fixtures>/catalog/<name>.yml`
    #[clap(short, long, default_value = "salon")]
    pub catalog: String,

    /// Fixtures directory
    #[clap(long, env = "SALON_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// File the session is restored from and saved to
    #[clap(short, long, env = "SALON_STATE_FILE")]
    pub state: Option<PathBuf>,

    /// Accept product ids that are not in the catalog
    #[clap(long)]
    pub free_text: bool,

    /// Brand to select
    #[clap(short, long)]
    pub brand: Option<String>,

    /// Product id to select
    #[clap(short, long)]
    pub product: Option<String>,

    /// Salon cost per unit, recorded as an override
    #[clap(long)]
    pub cost: Option<String>,

    /// Retail price per unit, recorded as an override
    #[clap(long)]
    pub price: Option<String>,

    /// Promotion length in days
    #[clap(short, long)]
    pub days: Option<String>,

    /// Number of stylists selling
    #[clap(long)]
    pub stylists: Option<String>,

    /// Units each stylist sells per day
    #[clap(short = 'u', long)]
    pub per_stylist: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[clap(long, env = "SALON_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[clap(long, env = "SALON_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
