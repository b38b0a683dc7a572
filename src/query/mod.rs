// Query resolution: free text in, (team, season) out.

pub mod season;
pub mod team;

pub use season::{extract_season, DEFAULT_SEASON};
pub use team::{match_team, DEFAULT_TEAM, ROSTER};

/// The (team, season) pair a query resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub team: &'static str,
    pub season: String,
}

/// Resolve a free-text query to a team and season.
///
/// Pure composition of [`match_team`] and [`extract_season`]; the two
/// sub-resolutions do not interact, so a season token never influences team
/// matching and vice versa.
pub fn resolve(text: &str) -> Resolution {
    Resolution {
        team: match_team(text),
        season: extract_season(text),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
