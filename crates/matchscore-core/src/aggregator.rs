// Score aggregation: winning team and standout player.
//
// Both rules are pure functions over a snapshot of records. "No winner" and
// "no standout" are `Ok(None)`; malformed input is a `ScoreError`.
//
// The standout ranking (goals first, assists as tie-break, any tie at the top
// left unresolved) is a product assumption that was never confirmed with the
// league. Change it here, not in callers.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::error::{ScoreError, EXPECTED_TEAM_COUNT};
use crate::stats::{PlayerMatchStat, TeamScore};

// ---------------------------------------------------------------------------
// Scoring seam
// ---------------------------------------------------------------------------

/// Decides the outcome of a single match from its per-player records.
pub trait MatchScorer<T> {
    /// Name of the team that won, or `None` for a draw.
    fn winning_team(&self, records: &[T]) -> Result<Option<String>, ScoreError>;

    /// Name of the single best player, or `None` when the top spot is shared.
    fn standout_player(&self, records: &[T]) -> Result<Option<String>, ScoreError>;
}

/// Stateless aggregator over `PlayerMatchStat` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAggregator;

impl ScoreAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Determine which team won the match.
    ///
    /// Algorithm:
    /// 1. Sum goals per team.
    /// 2. Reject anything other than exactly two teams.
    /// 3. A 0-0 result has no winner.
    /// 4. Otherwise the unique team holding the maximum wins; a level score
    ///    has no winner.
    pub fn determine_winning_team(
        &self,
        records: &[PlayerMatchStat],
    ) -> Result<Option<String>, ScoreError> {
        ensure_not_empty(records)?;

        let totals = goals_by_team(records);
        if totals.len() != EXPECTED_TEAM_COUNT {
            debug!(found = totals.len(), "unexpected number of teams");
            return Err(ScoreError::TeamCountUnexpected {
                found: totals.len(),
            });
        }

        let max = totals.values().copied().max().unwrap_or(0);
        if max == 0 {
            debug!("no goals scored, no winner");
            return Ok(None);
        }

        let mut leaders = totals
            .iter()
            .filter(|(_, goals)| **goals == max)
            .map(|(team, _)| *team);

        match (leaders.next(), leaders.next()) {
            (Some(team), None) => {
                debug!(team, goals = max, "winning team determined");
                Ok(Some(team.to_string()))
            }
            _ => {
                debug!(goals = max, "teams level, no winner");
                Ok(None)
            }
        }
    }

    /// Determine the standout player across the whole match, regardless of
    /// team.
    ///
    /// Players are ranked by goals, then assists, both descending. The leader
    /// is only returned when no other record shares its `(goals, assists)`
    /// pair.
    pub fn determine_standout_player(
        &self,
        records: &[PlayerMatchStat],
    ) -> Result<Option<String>, ScoreError> {
        ensure_not_empty(records)?;

        let ranked = rank_players(records);
        let Some(best) = ranked.first() else {
            return Err(ScoreError::InvalidInput);
        };

        let top = best.performance();
        let sharing_top = ranked.iter().filter(|p| p.performance() == top).count();

        if sharing_top != 1 {
            debug!(
                goals = top.0,
                assists = top.1,
                sharing_top,
                "top spot shared, no standout player"
            );
            return Ok(None);
        }

        debug!(
            player = best.player_name(),
            goals = top.0,
            assists = top.1,
            "standout player determined"
        );
        Ok(Some(best.player_name().to_string()))
    }
}

impl MatchScorer<PlayerMatchStat> for ScoreAggregator {
    fn winning_team(&self, records: &[PlayerMatchStat]) -> Result<Option<String>, ScoreError> {
        self.determine_winning_team(records)
    }

    fn standout_player(&self, records: &[PlayerMatchStat]) -> Result<Option<String>, ScoreError> {
        self.determine_standout_player(records)
    }
}

// ---------------------------------------------------------------------------
// Ranking and tallies
// ---------------------------------------------------------------------------

/// Order two records by performance: more goals first, then more assists.
pub fn compare_performance(a: &PlayerMatchStat, b: &PlayerMatchStat) -> Ordering {
    b.goals()
        .cmp(&a.goals())
        .then_with(|| b.assists().cmp(&a.assists()))
}

/// Return the records sorted best-first by `compare_performance`.
///
/// The sort is stable, so records with equal performance keep input order.
pub fn rank_players(records: &[PlayerMatchStat]) -> Vec<&PlayerMatchStat> {
    let mut ranked: Vec<&PlayerMatchStat> = records.iter().collect();
    ranked.sort_by(|a, b| compare_performance(a, b));
    ranked
}

/// Per-team goal totals, highest first (ties ordered by team name).
pub fn team_totals(records: &[PlayerMatchStat]) -> Vec<TeamScore> {
    let mut totals: Vec<TeamScore> = goals_by_team(records)
        .into_iter()
        .map(|(team, goals)| TeamScore {
            team: team.to_string(),
            goals,
        })
        .collect();
    totals.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.team.cmp(&b.team)));
    totals
}

fn goals_by_team(records: &[PlayerMatchStat]) -> HashMap<&str, u64> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        *totals.entry(record.team()).or_insert(0) += u64::from(record.goals());
    }
    totals
}

fn ensure_not_empty(records: &[PlayerMatchStat]) -> Result<(), ScoreError> {
    if records.is_empty() {
        return Err(ScoreError::InvalidInput);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
