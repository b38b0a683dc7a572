// Season stats repository.
//
// Reads a LeagueDashTeamStats-shaped CSV (one row per team, `TEAM_NAME` plus
// numeric stat columns, optionally a `Season` column) and resolves a single
// (team, season) row. The public boundary never raises: every failure mode is
// logged and collapses to `None`.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A mid-season statistics snapshot for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team_name: String,
    /// Season the row belongs to, when the store carries a `Season` column.
    pub season: Option<String>,
    pub gp: f64,
    pub w_pct: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Internal failure taxonomy. Logged at the repository boundary and collapsed
/// to an absent result; callers cannot distinguish the variants.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("stats source unavailable at {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },

    #[error("no stats row for {team} in {season}")]
    TeamSeasonNotFound { team: String, season: String },

    #[error("{team} has played {gp} games, below the {threshold} threshold")]
    InsufficientSample { team: String, gp: f64, threshold: f64 },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One CSV row. Stat columns default to 0 when absent so a sparse export
/// still parses; the `Season` column is optional entirely.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawSeasonRow {
    TEAM_NAME: String,
    #[serde(default)]
    Season: Option<String>,
    #[serde(default)]
    GP: f64,
    #[serde(default)]
    W_PCT: f64,
    #[serde(default)]
    PTS: f64,
    #[serde(default)]
    REB: f64,
    #[serde(default)]
    AST: f64,
    /// Absorb any extra columns the stats export includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

impl RawSeasonRow {
    fn into_stats(self) -> TeamStats {
        TeamStats {
            team_name: self.TEAM_NAME.trim().to_string(),
            season: self.Season.map(|s| s.trim().to_string()),
            gp: self.GP,
            w_pct: self.W_PCT,
            pts: self.PTS,
            reb: self.REB,
            ast: self.AST,
        }
    }
}

// ---------------------------------------------------------------------------
// Reader-based lookup (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn lookup_from_reader<R: Read>(
    rdr: R,
    team: &str,
    season: &str,
    games_threshold: f64,
) -> Result<TeamStats, StatsError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let team_lower = team.to_lowercase();

    for result in reader.deserialize::<RawSeasonRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed stats row: {e}");
                continue;
            }
        };

        // Season filter is a no-op for rows without a season value, so a
        // store lacking the column degrades to cross-season data.
        if let Some(row_season) = raw.Season.as_deref() {
            if row_season.trim() != season {
                continue;
            }
        }

        if raw.TEAM_NAME.trim().to_lowercase() != team_lower {
            continue;
        }

        // First matching row wins; duplicates behind it are ignored.
        let stats = raw.into_stats();
        if stats.gp < games_threshold {
            return Err(StatsError::InsufficientSample {
                team: stats.team_name,
                gp: stats.gp,
                threshold: games_threshold,
            });
        }
        return Ok(stats);
    }

    Err(StatsError::TeamSeasonNotFound {
        team: team.to_string(),
        season: season.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Public lookup
// ---------------------------------------------------------------------------

/// Resolve one (team, season) row from the CSV store at `path`.
pub fn lookup(
    path: &Path,
    team: &str,
    season: &str,
    games_threshold: f64,
) -> Result<TeamStats, StatsError> {
    let file = std::fs::File::open(path).map_err(|e| StatsError::SourceUnavailable {
        path: path.display().to_string(),
        source: e,
    })?;
    lookup_from_reader(file, team, season, games_threshold)
}

/// Never-raising boundary used by the answer pipeline: failures are logged
/// and collapse to `None`.
pub fn get_stats(
    path: &Path,
    team: &str,
    season: &str,
    games_threshold: f64,
) -> Option<TeamStats> {
    match lookup(path, team, season, games_threshold) {
        Ok(stats) => Some(stats),
        Err(e) => {
            warn!("stats lookup failed: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
