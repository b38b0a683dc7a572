// Prompt templates for the prediction assistant.
//
// The data snippet carries pre-computed numbers so the LLM focuses on
// phrasing rather than arithmetic. Whatever the pipeline could or could not
// resolve, some snippet is always produced.

use crate::predict::REMAINING_GAMES;
use crate::stats::TeamStats;

/// Snippet for a resolved stats row and a loaded model.
pub fn stats_snippet(season: &str, team: &str, stats: &TeamStats, predicted_wins: f64) -> String {
    format!(
        "For the {season} season, {team} have played {gp:.0} games with a win percentage of \
         {w_pct:.3}. Predicted wins in the remaining {REMAINING_GAMES} games: {predicted_wins:.1}. \
         Key stats: PTS: {pts:.1}, REB: {reb:.1}, AST: {ast:.1}.",
        gp = stats.gp,
        w_pct = stats.w_pct,
        pts = stats.pts,
        reb = stats.reb,
        ast = stats.ast,
    )
}

/// Snippet when the stats repository came up empty for the (team, season).
pub fn unavailable_snippet(team: &str, season: &str) -> String {
    format!(
        "Could not fetch mid-season stats for {team} in the {season} season \
         (or not enough games played)."
    )
}

/// Snippet when the prediction model could not be loaded.
pub fn model_unavailable_snippet() -> String {
    "Prediction model could not be loaded.".to_string()
}

/// System instruction embedding the computed data snippet.
pub fn system_prompt(data_snippet: &str) -> String {
    format!(
        "You are an NBA performance prediction assistant. Based on the team stats below, \
         generate a concise prediction for the team's performance in the remaining \
         {REMAINING_GAMES} games of the season. Use the following acronyms: GP (Games Played), \
         W_PCT (Win Percentage), PTS (Points), REB (Rebounds), AST (Assists).\n\
         Team stats:\n{data_snippet}\n\n\
         User query:"
    )
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> TeamStats {
        TeamStats {
            team_name: "Boston Celtics".to_string(),
            season: Some("2024-25".to_string()),
            gp: 55.0,
            w_pct: 0.7091,
            pts: 120.56,
            reb: 45.24,
            ast: 26.81,
        }
    }

    #[test]
    fn stats_snippet_formats_all_fields() {
        let s = stats_snippet("2024-25", "Boston Celtics", &stats(), 22.73);
        assert_eq!(
            s,
            "For the 2024-25 season, Boston Celtics have played 55 games with a win \
             percentage of 0.709. Predicted wins in the remaining 32 games: 22.7. \
             Key stats: PTS: 120.6, REB: 45.2, AST: 26.8."
        );
    }

    #[test]
    fn unavailable_snippet_names_team_and_season() {
        let s = unavailable_snippet("Atlanta Hawks", "2022-23");
        assert!(s.contains("Could not fetch"));
        assert!(s.contains("Atlanta Hawks"));
        assert!(s.contains("2022-23"));
    }

    #[test]
    fn system_prompt_embeds_snippet_and_legend() {
        let p = system_prompt("the snippet goes here");
        assert!(p.contains("the snippet goes here"));
        assert!(p.contains("W_PCT (Win Percentage)"));
        assert!(p.ends_with("User query:"));
    }
}
