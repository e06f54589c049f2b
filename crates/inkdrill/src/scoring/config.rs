use serde::{Deserialize, Serialize};

use super::error::ScoreError;

/// Tuning constants for the heuristic scorer.
///
/// The defaults are the drill's historical values. They are empirical and
/// carry no further calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Path length (px) at or below which the complexity score is 0.
    pub min_expected_length: f32,
    /// Path length (px) at or above which the complexity score is 100.
    pub max_expected_length: f32,
    /// Expected writing width per character (px).
    pub pixels_per_char: f32,
    /// Expected pen lifts per character.
    pub strokes_per_char: f32,
    /// Weights applied to each sub-score before summing.
    pub weights: ScoreWeights,
}

/// Relative weight of each sub-score in the combined accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub complexity: f32,
    pub length: f32,
    pub stroke_count: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            complexity: 0.3,
            length: 0.4,
            stroke_count: 0.3,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_expected_length: 100.0,
            max_expected_length: 1000.0,
            pixels_per_char: 30.0,
            strokes_per_char: 0.8,
            weights: ScoreWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values that would divide by zero or produce non-finite scores.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let all_finite = [
            self.min_expected_length,
            self.max_expected_length,
            self.pixels_per_char,
            self.strokes_per_char,
            self.weights.complexity,
            self.weights.length,
            self.weights.stroke_count,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ScoreError::InvalidConfig("values must be finite".into()));
        }
        if self.max_expected_length <= self.min_expected_length {
            return Err(ScoreError::InvalidConfig(format!(
                "max_expected_length ({}) must exceed min_expected_length ({})",
                self.max_expected_length, self.min_expected_length
            )));
        }
        if self.pixels_per_char <= 0.0 {
            return Err(ScoreError::InvalidConfig("pixels_per_char must be positive".into()));
        }
        if self.strokes_per_char <= 0.0 {
            return Err(ScoreError::InvalidConfig("strokes_per_char must be positive".into()));
        }
        let w = self.weights;
        if w.complexity < 0.0 || w.length < 0.0 || w.stroke_count < 0.0 {
            return Err(ScoreError::InvalidConfig("weights must not be negative".into()));
        }
        Ok(())
    }
}
