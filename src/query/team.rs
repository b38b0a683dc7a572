// Team identification from free-text queries.
//
// The roster is a closed enumeration of the 30 NBA franchises in full
// "City Name" form. Matching is a case-insensitive substring test against
// the full name, evaluated in roster-definition order. No aliasing,
// abbreviation, or fuzzy matching.

/// The 30 NBA franchises. Order matters: the first roster entry whose name
/// appears in a query wins, even if another team appears earlier in the text.
pub const ROSTER: [&str; 30] = [
    "Atlanta Hawks",
    "Boston Celtics",
    "Brooklyn Nets",
    "Charlotte Hornets",
    "Chicago Bulls",
    "Cleveland Cavaliers",
    "Dallas Mavericks",
    "Denver Nuggets",
    "Detroit Pistons",
    "Golden State Warriors",
    "Houston Rockets",
    "Indiana Pacers",
    "Los Angeles Clippers",
    "Los Angeles Lakers",
    "Memphis Grizzlies",
    "Miami Heat",
    "Milwaukee Bucks",
    "Minnesota Timberwolves",
    "New Orleans Pelicans",
    "New York Knicks",
    "Oklahoma City Thunder",
    "Orlando Magic",
    "Philadelphia 76ers",
    "Phoenix Suns",
    "Portland Trail Blazers",
    "Sacramento Kings",
    "San Antonio Spurs",
    "Toronto Raptors",
    "Utah Jazz",
    "Washington Wizards",
];

/// Fallback when no roster name appears in the query.
pub const DEFAULT_TEAM: &str = "Los Angeles Lakers";

/// Identify which roster team a query mentions.
///
/// Total function: returns [`DEFAULT_TEAM`] when nothing matches. The return
/// value is always the canonical-cased roster entry regardless of the
/// letter case used in the query.
pub fn match_team(text: &str) -> &'static str {
    let haystack = text.to_lowercase();
    ROSTER
        .iter()
        .find(|team| haystack.contains(&team.to_lowercase()))
        .copied()
        .unwrap_or(DEFAULT_TEAM)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_matches() {
        assert_eq!(match_team("How will the Boston Celtics do?"), "Boston Celtics");
    }

    #[test]
    fn lowercase_query_returns_canonical_casing() {
        assert_eq!(match_team("2025 boston celtics season prediction"), "Boston Celtics");
        assert_eq!(match_team("22 atlanta hawks season prediction"), "Atlanta Hawks");
    }

    #[test]
    fn mixed_case_matches() {
        assert_eq!(match_team("tell me about the GOLDEN STATE WARRIORS"), "Golden State Warriors");
    }

    #[test]
    fn no_team_returns_default() {
        assert_eq!(match_team("who wins the championship this year?"), DEFAULT_TEAM);
    }

    #[test]
    fn empty_query_returns_default() {
        assert_eq!(match_team(""), DEFAULT_TEAM);
    }

    #[test]
    fn two_teams_resolve_in_roster_order() {
        // "Utah Jazz" appears first in the text, but "Chicago Bulls" is
        // earlier in the roster. Roster order wins.
        assert_eq!(match_team("utah jazz vs chicago bulls"), "Chicago Bulls");
    }

    #[test]
    fn substring_inside_larger_text_matches() {
        assert_eq!(
            match_team("I think the miami heat's defense has improved"),
            "Miami Heat"
        );
    }

    #[test]
    fn all_roster_names_match_themselves() {
        for team in ROSTER {
            assert_eq!(match_team(team), team);
        }
    }
}
