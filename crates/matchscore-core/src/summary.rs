// Serializable outcome of a single match.

use serde::{Deserialize, Serialize};

use crate::aggregator::{team_totals, ScoreAggregator};
use crate::error::ScoreError;
use crate::stats::{PlayerMatchStat, TeamScore};

/// Scoreline plus the two derived facts for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Goals per team, highest first.
    pub teams: Vec<TeamScore>,
    /// `None` when the match was drawn.
    pub winning_team: Option<String>,
    /// `None` when the top performance is shared.
    pub standout_player: Option<String>,
}

impl MatchSummary {
    /// Evaluate both rules over `records`. Fails with the first error either
    /// rule reports.
    pub fn evaluate(
        aggregator: &ScoreAggregator,
        records: &[PlayerMatchStat],
    ) -> Result<Self, ScoreError> {
        let winning_team = aggregator.determine_winning_team(records)?;
        let standout_player = aggregator.determine_standout_player(records)?;
        Ok(Self {
            teams: team_totals(records),
            winning_team,
            standout_player,
        })
    }

    pub fn is_draw(&self) -> bool {
        self.winning_team.is_none()
    }
}

/// Shorthand for `MatchSummary::evaluate` with a default aggregator.
pub fn summarize(records: &[PlayerMatchStat]) -> Result<MatchSummary, ScoreError> {
    MatchSummary::evaluate(&ScoreAggregator::new(), records)
}
