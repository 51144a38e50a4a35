//! Card Risk Dashboard CLI
//!
//! Fraud and risk analytics over credit-card transaction datasets.
//! Prints each dashboard page and optionally writes JSON reports and SVG charts.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use card_risk_dashboard::commands::{
    display_version, execute_dashboard, execute_page, validate_args, validate_report_file, Page,
    PageArgs,
};
use card_risk_dashboard::data::DatasetCache;
use card_risk_dashboard::utils::config::{DEFAULT_SOURCE, SOURCE_ENV_VAR};

/// Card Risk Dashboard - fraud analytics for card transactions
#[derive(Parser, Debug)]
#[command(name = "card-risk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Dataset CSV path or http(s) URL
    #[arg(short, long, global = true, env = SOURCE_ENV_VAR, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Output options shared by the page commands
#[derive(Args, Debug, Clone, Default)]
struct OutputOpts {
    /// Output path for the JSON report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for SVG charts
    #[arg(short, long)]
    charts: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Quick stats for the landing page
    Home {
        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Executive overview: KPIs, fraud timeline, amount distribution
    Overview {
        #[command(flatten)]
        out: OutputOpts,
    },

    /// Normal customer behaviour, optionally narrowed by amount and hour
    Transactions {
        #[command(flatten)]
        out: OutputOpts,

        /// Minimum transaction amount (inclusive)
        #[arg(long)]
        min_amount: Option<f64>,

        /// Maximum transaction amount (inclusive)
        #[arg(long)]
        max_amount: Option<f64>,

        /// Minimum hour of day (inclusive)
        #[arg(long)]
        min_hour: Option<f64>,

        /// Maximum hour of day (inclusive)
        #[arg(long)]
        max_hour: Option<f64>,
    },

    /// Fraud patterns and characteristics
    Fraud {
        #[command(flatten)]
        out: OutputOpts,
    },

    /// Risk indicators, risk matrix and savings estimate
    Risk {
        #[command(flatten)]
        out: OutputOpts,
    },

    /// Every page from a single dataset load
    Dashboard {
        /// Directory receiving one JSON report per page
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Directory for SVG charts
        #[arg(short, long)]
        charts: Option<PathBuf>,
    },

    /// Validate a page report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let base = PageArgs {
        source: cli.source,
        ..Default::default()
    };

    match cli.command {
        Commands::Home { output } => {
            let args = PageArgs {
                output_json: output,
                ..base
            };
            run_page(Page::Home, args)?;
        }

        Commands::Overview { out } => run_page(Page::Overview, with_outputs(base, out))?,

        Commands::Transactions {
            out,
            min_amount,
            max_amount,
            min_hour,
            max_hour,
        } => {
            let args = PageArgs {
                min_amount,
                max_amount,
                min_hour,
                max_hour,
                ..with_outputs(base, out)
            };
            run_page(Page::Transactions, args)?;
        }

        Commands::Fraud { out } => run_page(Page::Fraud, with_outputs(base, out))?,

        Commands::Risk { out } => run_page(Page::Risk, with_outputs(base, out))?,

        Commands::Dashboard { output_dir, charts } => {
            let args = PageArgs {
                charts_dir: charts,
                ..base
            };
            validate_args(&args)?;
            execute_dashboard(&args, output_dir.as_deref())?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate arguments, then build one page
///
/// **Private** - shared by the single-page commands
fn run_page(page: Page, args: PageArgs) -> Result<()> {
    validate_args(&args)?;

    let mut cache = DatasetCache::new();
    execute_page(page, &args, &mut cache)?;

    Ok(())
}

fn with_outputs(base: PageArgs, out: OutputOpts) -> PageArgs {
    PageArgs {
        output_json: out.output,
        charts_dir: out.charts,
        ..base
    }
}
