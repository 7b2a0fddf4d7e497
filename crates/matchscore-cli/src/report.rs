// Rendering a MatchSummary for stdout.

use matchscore_core::MatchSummary;

use crate::config::OutputFormat;

pub fn render(summary: &MatchSummary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary),
        OutputFormat::Text => Ok(render_text(summary)),
    }
}

/// Plain-text report:
///
/// ```text
/// Scoreline: Blues 2 - Reds 1
/// Winner:    Blues
/// Standout:  Haaland
/// ```
pub fn render_text(summary: &MatchSummary) -> String {
    let scoreline = summary
        .teams
        .iter()
        .map(|t| format!("{} {}", t.team, t.goals))
        .collect::<Vec<_>>()
        .join(" - ");

    format!(
        "Scoreline: {}\nWinner:    {}\nStandout:  {}\n",
        scoreline,
        summary.winning_team.as_deref().unwrap_or("draw"),
        summary.standout_player.as_deref().unwrap_or("none"),
    )
}
