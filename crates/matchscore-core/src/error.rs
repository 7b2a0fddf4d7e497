// Error taxonomy for score aggregation.
//
// A draw or a tie at the top is not an error: those come back as `Ok(None)`.

use thiserror::Error;

/// The number of distinct teams a single match must contain.
pub const EXPECTED_TEAM_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The caller passed no records.
    #[error("stats list must not be empty")]
    InvalidInput,

    /// The records do not describe a two-team match.
    #[error("expected exactly 2 teams, found {found}")]
    TeamCountUnexpected { found: usize },
}
