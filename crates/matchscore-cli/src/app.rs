// Application flow: config -> CSV -> MatchSummary -> rendered report.

use std::path::{Path, PathBuf};

use anyhow::Context;
use matchscore_core::{MatchSummary, ScoreAggregator};
use tracing::info;

use crate::config::{self, Config, OutputFormat};
use crate::loader;
use crate::report;

/// Copy missing defaults into `<base_dir>/config` and load the result.
/// Also returns the files that were copied, so they can be logged once
/// tracing is up.
pub fn load_config(base_dir: &Path) -> anyhow::Result<(Config, Vec<PathBuf>)> {
    let copied = config::ensure_config_files(base_dir)
        .context("failed to initialize configuration")?;
    let config = config::load_config_from(base_dir).context("failed to load configuration")?;
    Ok((config, copied))
}

/// Resolve the stats CSV. An override is used as given; the configured path
/// is taken relative to `base_dir` unless absolute.
pub fn stats_path(base_dir: &Path, config: &Config, stats_override: Option<&Path>) -> PathBuf {
    if let Some(path) = stats_override {
        return path.to_path_buf();
    }
    let configured = PathBuf::from(&config.data.stats_csv);
    if configured.is_absolute() {
        configured
    } else {
        base_dir.join(configured)
    }
}

/// Evaluate one match file and render the summary.
pub fn run(
    base_dir: &Path,
    config: &Config,
    stats_override: Option<&Path>,
    format_override: Option<OutputFormat>,
) -> anyhow::Result<String> {
    let path = stats_path(base_dir, config, stats_override);
    let stats = loader::load_stats(&path).context("failed to load match statistics")?;

    let summary = MatchSummary::evaluate(&ScoreAggregator::new(), &stats)
        .with_context(|| format!("cannot evaluate match in {}", path.display()))?;
    info!(
        winner = summary.winning_team.as_deref().unwrap_or("draw"),
        standout = summary.standout_player.as_deref().unwrap_or("none"),
        "Match evaluated"
    );

    let format = format_override.unwrap_or(config.output.format);
    report::render(&summary, format).context("failed to render report")
}
