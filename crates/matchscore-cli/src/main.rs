// matchscore entry point.
//
// Startup sequence:
// 1. Parse flags
// 2. Load config (copying defaults on first run)
// 3. Initialize tracing from the logging section
// 4. Load the stats CSV, evaluate the match, print the report

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use matchscore_cli::app;
use matchscore_cli::config::{LoggingConfig, OutputFormat};
use tracing::{error, info};

/// Decide the winning team and standout player of a match from per-player stats
#[derive(Parser, Debug)]
#[command(name = "matchscore")]
struct Args {
    /// Directory containing config/ and defaults/
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Stats CSV to evaluate (overrides data.stats_csv)
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Report format (overrides output.format)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, copied) = app::load_config(&args.config_dir)?;
    init_tracing(&config.logging)?;
    for path in &copied {
        info!("Created {} from defaults", path.display());
    }

    match app::run(&args.config_dir, &config, args.stats.as_deref(), args.format) {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter;
/// output goes to `<log_dir>/matchscore.log` when a log directory is set,
/// otherwise to stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match logging.log_dir() {
        Some(dir) => {
            let log_file = open_log_file(dir)?;
            let subscriber = builder.with_writer(log_file).with_ansi(false).finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to set tracing subscriber")?;
        }
        None => {
            let subscriber = builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("failed to set tracing subscriber")?;
        }
    }

    Ok(())
}

fn open_log_file(dir: &Path) -> anyhow::Result<std::fs::File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    std::fs::File::create(dir.join("matchscore.log")).context("failed to create log file")
}
