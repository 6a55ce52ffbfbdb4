//! workdays - monthly working-day report
//!
//! Prints the number of working days in a month, the amount due at a given
//! day rate, and optionally the days themselves followed by the contractual
//! listing with bank holidays marked.
//!
//! ```text
//! workdays --month 12 --year 2018 --rate 344.83
//! workdays -m 5 -y 2021 --extra-holiday 2021-05-04 --no-list
//! ```

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wd_time::{Date, HolidaySet, Month, WorkingDaysCalculator};

mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use crate::config::ReportConfig;
use crate::report::MonthlyReport;

/// UK working days and day-rate totals for a month
#[derive(Parser, Debug)]
#[command(name = "workdays")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path (extension optional)
    #[arg(short, long, default_value = "workdays")]
    config: String,

    /// Month to report on (1-12)
    #[arg(short, long)]
    month: Option<u8>,

    /// Year to report on
    #[arg(short, long)]
    year: Option<i32>,

    /// Rate per working day
    #[arg(short, long)]
    rate: Option<f64>,

    /// Currency symbol
    #[arg(long)]
    currency: Option<String>,

    /// Only print the totals, not the individual days
    #[arg(long)]
    no_list: bool,

    /// Additional non-working date (YYYY-MM-DD); may be repeated
    #[arg(short = 'x', long = "extra-holiday")]
    extra_holidays: Vec<Date>,
}

impl Cli {
    /// Apply command-line overrides on top of file/env configuration.
    fn merge_into(&self, mut cfg: ReportConfig) -> ReportConfig {
        if let Some(month) = self.month {
            cfg.month = month;
        }
        if let Some(year) = self.year {
            cfg.year = year;
        }
        if let Some(rate) = self.rate {
            cfg.day_rate = rate;
        }
        if let Some(currency) = &self.currency {
            cfg.currency = currency.clone();
        }
        if self.no_list {
            cfg.list_days = false;
        }
        cfg
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = cli.merge_into(ReportConfig::load(&cli.config)?);
    debug!(?cfg, "resolved configuration");

    let month = Month::from_number(cfg.month).ok_or_else(|| {
        CliError::InvalidArgument(format!("month must be between 1 and 12, got {}", cfg.month))
    })?;
    if !cfg.day_rate.is_finite() || cfg.day_rate < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "day rate must be a non-negative number, got {}",
            cfg.day_rate
        )));
    }

    let extra: HolidaySet = cli.extra_holidays.iter().copied().collect();
    let calc = WorkingDaysCalculator::new();
    let report = MonthlyReport::build(
        &calc,
        cfg.year,
        month,
        cfg.day_rate,
        (!extra.is_empty()).then_some(&extra),
    )?;

    print!("{}", report.display(&cfg.currency, cfg.list_days));
    info!("report complete");
    Ok(())
}
