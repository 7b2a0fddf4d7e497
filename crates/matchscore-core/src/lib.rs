// Library root: match statistics model and the score aggregation rules
// (winning team, standout player).

pub mod aggregator;
pub mod error;
pub mod stats;
pub mod summary;

pub use aggregator::{compare_performance, rank_players, team_totals, MatchScorer, ScoreAggregator};
pub use error::ScoreError;
pub use stats::{PlayerMatchStat, TeamScore};
pub use summary::{summarize, MatchSummary};
