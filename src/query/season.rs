// Season extraction from free-text queries.
//
// An ordered chain of patterns is tried in fixed priority order; the first
// match wins. The function is total: with no numeric token at all, the
// default season is returned.

use regex::Regex;
use std::sync::OnceLock;

/// Season assumed when the query carries no usable numeric token.
pub const DEFAULT_SEASON: &str = "2024-25";

fn full_season_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Hyphen or en-dash, optional surrounding whitespace, 2-4 digit end year.
    RE.get_or_init(|| Regex::new(r"\d{4}\s*[-–]\s*\d{2,4}").unwrap())
}

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{4})\b").unwrap())
}

fn short_year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,2})\b").unwrap())
}

/// Extract a season string from a query.
///
/// Resolution order:
///   1. A full season token such as `2024-25` or `2024 – 2025`, returned with
///      whitespace removed and the end-year length left as written.
///   2. A standalone 4-digit year `Y`, read as the season start year.
///   3. A standalone 1-2 digit number `YY`, read as the year `20YY`.
///   4. [`DEFAULT_SEASON`].
pub fn extract_season(text: &str) -> String {
    full_season(text)
        .or_else(|| start_year(text))
        .or_else(|| short_year(text))
        .unwrap_or_else(|| DEFAULT_SEASON.to_string())
}

/// Rule 1: full season pattern, whitespace stripped, otherwise verbatim.
fn full_season(text: &str) -> Option<String> {
    full_season_re()
        .find(text)
        .map(|m| m.as_str().split_whitespace().collect())
}

/// Rule 2: bare 4-digit start year.
fn start_year(text: &str) -> Option<String> {
    let caps = year_re().captures(text)?;
    let year: u32 = caps[1].parse().ok()?;
    Some(format!("{year}-{:02}", (year + 1) % 100))
}

/// Rule 3: bare 1-2 digit year under the `20YY` assumption. `YY = 99` yields
/// `2099-100`; the overflow is preserved as-is.
fn short_year(text: &str) -> Option<String> {
    let caps = short_year_re().captures(text)?;
    let yy: u32 = caps[1].parse().ok()?;
    Some(format!("20{yy}-{:02}", yy + 1))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Rule 1: full season pattern --

    #[test]
    fn full_season_returned_verbatim() {
        assert_eq!(extract_season("how about the 2024-25 lakers"), "2024-25");
    }

    #[test]
    fn full_season_four_digit_end_year_not_normalized() {
        assert_eq!(extract_season("the 2024-2025 season"), "2024-2025");
    }

    #[test]
    fn full_season_whitespace_stripped() {
        assert_eq!(extract_season("stats for 2024 - 25 please"), "2024-25");
    }

    #[test]
    fn full_season_en_dash_accepted() {
        assert_eq!(extract_season("celtics 2023–24 record"), "2023–24");
    }

    #[test]
    fn full_season_en_dash_with_spaces() {
        assert_eq!(extract_season("2024 – 2025 outlook"), "2024–2025");
    }

    #[test]
    fn full_season_wins_over_later_bare_year() {
        assert_eq!(extract_season("2022-23 not 2025"), "2022-23");
    }

    // -- Rule 2: bare 4-digit year --

    #[test]
    fn bare_year_becomes_season_start() {
        assert_eq!(extract_season("2025 boston celtics season prediction"), "2025-26");
    }

    #[test]
    fn bare_year_end_digits_wrap_mod_100() {
        assert_eq!(extract_season("the 1999 bulls"), "1999-00");
    }

    #[test]
    fn first_bare_year_wins() {
        assert_eq!(extract_season("compare 2021 to 2023"), "2021-22");
    }

    #[test]
    fn digits_embedded_in_longer_numbers_ignored() {
        // 76ers' "76" is part of a word, and a 5-digit number has no
        // word-boundary 4-digit match.
        assert_eq!(extract_season("zip 90210x and 12345x"), DEFAULT_SEASON);
    }

    // -- Rule 3: 1-2 digit year --

    #[test]
    fn two_digit_year_assumes_current_century() {
        assert_eq!(extract_season("22 atlanta hawks season prediction"), "2022-23");
    }

    #[test]
    fn ninety_nine_overflows_as_legacy_behavior() {
        assert_eq!(extract_season("the 99 season"), "2099-100");
    }

    #[test]
    fn single_digit_token_formats_literally() {
        assert_eq!(extract_season("game 5 recap"), "205-06");
    }

    // -- Rule 4: default --

    #[test]
    fn no_digits_returns_default() {
        assert_eq!(extract_season("how are the lakers doing"), DEFAULT_SEASON);
    }

    #[test]
    fn empty_text_returns_default() {
        assert_eq!(extract_season(""), DEFAULT_SEASON);
    }
}
