// Match statistics CSV loading.
//
// Expected header: number,name,team,goals,assists. Extra columns are ignored
// and malformed rows are skipped with a warning.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use matchscore_core::PlayerMatchStat;
use serde::Deserialize;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("no valid player rows in {path}")]
    Empty { path: String },
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStatRow {
    number: u32,
    name: String,
    team: String,
    goals: u32,
    assists: u32,
    /// Absorb any extra columns (minutes, cards, ...).
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Parse player rows from any reader. Rows with an empty name or team, or
/// with numbers that do not parse as non-negative integers, are skipped.
pub fn load_stats_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerMatchStat>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut stats = Vec::new();
    for result in reader.deserialize::<RawStatRow>() {
        match result {
            Ok(raw) => {
                if raw.name.is_empty() {
                    warn!("skipping row for player #{}: empty name", raw.number);
                    continue;
                }
                if raw.team.is_empty() {
                    warn!("skipping player '{}': empty team", raw.name);
                    continue;
                }
                stats.push(PlayerMatchStat::new(
                    raw.number,
                    raw.name,
                    raw.team,
                    raw.goals,
                    raw.assists,
                ));
            }
            Err(e) => {
                warn!("skipping malformed stats row: {}", e);
            }
        }
    }
    Ok(stats)
}

/// Load player rows from a CSV file. A file with no usable rows is an error,
/// since there is nothing to evaluate.
pub fn load_stats(path: &Path) -> Result<Vec<PlayerMatchStat>, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: display.clone(),
        source: e,
    })?;

    let stats = load_stats_from_reader(file).map_err(|e| LoadError::Csv {
        path: display.clone(),
        source: e,
    })?;

    if stats.is_empty() {
        return Err(LoadError::Empty { path: display });
    }

    info!("Loaded {} player rows from {}", stats.len(), path.display());
    Ok(stats)
}
