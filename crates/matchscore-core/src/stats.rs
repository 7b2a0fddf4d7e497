// Per-player match statistics and the per-team goal tally.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PlayerMatchStat
// ---------------------------------------------------------------------------

/// One player's line in a single match.
///
/// Immutable once built: fields are private and only exposed through
/// accessors. Equality and hashing cover all five fields. Name and team are
/// assumed non-empty; loaders check that before constructing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    player_number: u32,
    player_name: String,
    team: String,
    goals: u32,
    assists: u32,
}

impl PlayerMatchStat {
    pub fn new(
        player_number: u32,
        player_name: impl Into<String>,
        team: impl Into<String>,
        goals: u32,
        assists: u32,
    ) -> Self {
        Self {
            player_number,
            player_name: player_name.into(),
            team: team.into(),
            goals,
            assists,
        }
    }

    /// Jersey number. Informational only; never used in comparisons.
    pub fn player_number(&self) -> u32 {
        self.player_number
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn assists(&self) -> u32 {
        self.assists
    }

    /// The `(goals, assists)` pair players are ranked on.
    pub fn performance(&self) -> (u32, u32) {
        (self.goals, self.assists)
    }
}

// ---------------------------------------------------------------------------
// TeamScore
// ---------------------------------------------------------------------------

/// Total goals scored by one team across all of its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub team: String,
    pub goals: u64,
}
