// Answer generation: the full query-to-response pipeline.
//
// Resolves the query, fetches the mid-season snapshot, scores the model, and
// hands the composed summary to the chat client. Every failure inside the
// pipeline degrades to some explanatory text; this module never returns an
// error to the HTTP surface.

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm::{prompt, ChatClient};
use crate::predict::{predict_remaining_wins, WinsModel};
use crate::query;
use crate::stats;

/// Run the resolution → stats → prediction steps and compose the data
/// snippet for the given (team, season).
///
/// The stats store and model file are re-read on every call; there is no
/// caching layer, so the snippet always reflects the files on disk.
pub fn compose_data_snippet(config: &Config, team: &str, season: &str) -> String {
    let stats = stats::get_stats(
        Path::new(&config.data.stats_csv),
        team,
        season,
        f64::from(config.data.games_threshold),
    );

    match stats {
        None => prompt::unavailable_snippet(team, season),
        Some(stats) => match WinsModel::load(Path::new(&config.data.model)) {
            None => prompt::model_unavailable_snippet(),
            Some(model) => {
                let predicted = predict_remaining_wins(&stats, &model);
                prompt::stats_snippet(season, team, &stats, predicted)
            }
        },
    }
}

/// Answer a free-text query. Always returns some text: when the chat client
/// is disabled or its call fails, the data snippet itself is the answer.
pub async fn generate_response(config: &Config, chat: &ChatClient, user_query: &str) -> String {
    let resolution = query::resolve(user_query);
    info!(
        team = resolution.team,
        season = %resolution.season,
        "query resolved"
    );

    let snippet = compose_data_snippet(config, resolution.team, &resolution.season);
    let system = prompt::system_prompt(&snippet);

    match chat.complete(&system, user_query).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!("chat completion failed, answering with the data snippet: {e}");
            snippet
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
