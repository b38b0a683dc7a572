// Pre-trained remaining-wins regression model.
//
// The model file is JSON: per-feature weights (in `FEATURE_ORDER`) plus an
// intercept, exported by the offline training pipeline. It is reloaded per
// request and treated as read-only; a file that is missing or corrupt yields
// an absent model rather than an error.

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::predict::features::{project, FEATURE_COUNT};
use crate::stats::TeamStats;

/// Games left after the mid-season snapshot; referenced in composed answers.
pub const REMAINING_GAMES: u32 = 32;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// WinsModel
// ---------------------------------------------------------------------------

/// Linear regression over the fixed feature vector.
#[derive(Debug, Clone, Deserialize)]
pub struct WinsModel {
    pub weights: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl WinsModel {
    /// Deserialize a model from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| ModelError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Load a model, degrading to `None` on any failure (logged, not raised).
    pub fn load(path: &Path) -> Option<Self> {
        match Self::from_path(path) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!("prediction model unavailable: {e}");
                None
            }
        }
    }

    /// Score a batch of feature vectors. The serving path always passes a
    /// single-sample batch, mirroring the model's training-time interface.
    pub fn predict(&self, batch: &[[f64; FEATURE_COUNT]]) -> Vec<f64> {
        batch
            .iter()
            .map(|features| {
                features
                    .iter()
                    .zip(self.weights.iter())
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
                    + self.intercept
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Serving-path prediction
// ---------------------------------------------------------------------------

/// Predict wins over the remaining games for one team's snapshot.
///
/// Projects the stats into the feature vector, scores a one-element batch,
/// and maps any scoring failure (empty batch output, non-finite score) to
/// `0.0` instead of propagating it.
pub fn predict_remaining_wins(stats: &TeamStats, model: &WinsModel) -> f64 {
    let features = project(stats);
    let scores = model.predict(&[features]);
    match scores.first() {
        Some(score) if score.is_finite() => *score,
        Some(score) => {
            warn!("non-finite prediction {score} for {}, using 0.0", stats.team_name);
            0.0
        }
        None => {
            warn!("empty prediction batch for {}, using 0.0", stats.team_name);
            0.0
        }
    }
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
    fn linear_scoring_matches_weights_and_intercept() {
        let model = WinsModel {
            weights: [0.1, 0.2, 0.3, 10.0],
            intercept: 1.5,
        };
        let expected = 120.5 * 0.1 + 45.2 * 0.2 + 26.8 * 0.3 + 0.709 * 10.0 + 1.5;
        let got = predict_remaining_wins(&stats(), &model);
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn batch_predict_scores_each_sample() {
        let model = WinsModel {
            weights: [1.0, 0.0, 0.0, 0.0],
            intercept: 2.0,
        };
        let out = model.predict(&[[3.0, 9.0, 9.0, 9.0], [5.0, 0.0, 0.0, 0.0]]);
        assert_eq!(out, vec![5.0, 7.0]);
    }

    #[test]
    fn non_finite_score_degrades_to_zero() {
        let model = WinsModel {
            weights: [f64::INFINITY, 0.0, 0.0, 0.0],
            intercept: 0.0,
        };
        assert_eq!(predict_remaining_wins(&stats(), &model), 0.0);
    }

    #[test]
    fn parses_model_json() {
        let json = r#"{ "weights": [0.05, 0.1, 0.15, 20.0], "intercept": -2.5 }"#;
        let model: WinsModel = serde_json::from_str(json).unwrap();
        assert!((model.intercept + 2.5).abs() < f64::EPSILON);
        assert!((model.weights[3] - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_weight_count_fails_to_parse() {
        let json = r#"{ "weights": [0.05, 0.1], "intercept": -2.5 }"#;
        assert!(serde_json::from_str::<WinsModel>(json).is_err());
    }

    #[test]
    fn missing_file_loads_as_absent() {
        assert!(WinsModel::load(Path::new("no/such/model.json")).is_none());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = std::env::temp_dir().join("hoopcast_model_corrupt_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(WinsModel::load(&path).is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn valid_file_round_trips() {
        let dir = std::env::temp_dir().join("hoopcast_model_valid_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");
        std::fs::write(
            &path,
            r#"{ "weights": [0.0, 0.0, 0.0, 32.0], "intercept": 0.0 }"#,
        )
        .unwrap();

        let model = WinsModel::load(&path).expect("model should load");
        // A team winning 70.9% of games projects to ~22.7 of the remaining 32.
        let wins = predict_remaining_wins(&stats(), &model);
        assert!((wins - 0.709 * 32.0).abs() < 1e-9);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
