// Feature projection: stats record -> the fixed vector the model expects.

use crate::stats::TeamStats;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 4;

/// Stat codes in model input order. The order is part of the model contract
/// and must match the training pipeline.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = ["PTS", "REB", "AST", "W_PCT"];

/// Project a stats record into the model's feature vector.
///
/// Stats absent from the source CSV parse to `0`, so every slot is always
/// populated. No range validation is applied.
pub fn project(stats: &TeamStats) -> [f64; FEATURE_COUNT] {
    [stats.pts, stats.reb, stats.ast, stats.w_pct]
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
            w_pct: 0.709,
            pts: 120.5,
            reb: 45.2,
            ast: 26.8,
        }
    }

    #[test]
    fn projection_order_is_pts_reb_ast_wpct() {
        let v = project(&stats());
        assert!((v[0] - 120.5).abs() < f64::EPSILON);
        assert!((v[1] - 45.2).abs() < f64::EPSILON);
        assert!((v[2] - 26.8).abs() < f64::EPSILON);
        assert!((v[3] - 0.709).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_ast_projects_to_zero_in_place() {
        let mut s = stats();
        s.ast = 0.0; // what a store without an AST column parses to
        let v = project(&s);
        assert_eq!(v[2], 0.0);
        assert!((v[0] - 120.5).abs() < f64::EPSILON);
        assert!((v[1] - 45.2).abs() < f64::EPSILON);
        assert!((v[3] - 0.709).abs() < f64::EPSILON);
    }

    #[test]
    fn gp_is_not_a_feature() {
        let mut s = stats();
        s.gp = 82.0;
        assert_eq!(project(&s), project(&stats()));
    }
}
