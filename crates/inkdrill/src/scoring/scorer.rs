use serde::Serialize;

use super::config::ScoringConfig;
use super::error::ScoreError;
use super::metrics::{complexity_score, length_score, stroke_count_score};
use crate::capture::stroke::StrokeCollection;

/// The three sub-scores and the combined accuracy for one scoring request.
/// Derived data: recomputed on every request, never stored as authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub complexity: f32,
    pub length: f32,
    pub stroke_count: f32,
    /// Weighted sum, rounded, capped at 100.
    pub accuracy: u8,
}

/// Geometric accuracy estimate for a handwritten word.
///
/// Deterministic and side-effect free: the same strokes and word always give
/// the same breakdown, and the strokes are only borrowed.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    config: ScoringConfig,
}

impl HeuristicScorer {
    /// Build a scorer, validating the config first.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `strokes` against `word`. Fails only for an empty word.
    pub fn score(&self, strokes: &StrokeCollection, word: &str) -> Result<ScoreBreakdown, ScoreError> {
        let word_len = word.chars().count();
        if word_len == 0 {
            return Err(ScoreError::EmptyWord);
        }

        let complexity = complexity_score(strokes, &self.config);
        let length = length_score(strokes, word_len, &self.config);
        let stroke_count = stroke_count_score(strokes, word_len, &self.config);

        let w = self.config.weights;
        let weighted = complexity * w.complexity + length * w.length + stroke_count * w.stroke_count;
        let accuracy = weighted.round().clamp(0.0, 100.0) as u8;

        Ok(ScoreBreakdown {
            complexity,
            length,
            stroke_count,
            accuracy,
        })
    }

    /// Shorthand for the combined accuracy only.
    pub fn accuracy(&self, strokes: &StrokeCollection, word: &str) -> Result<u8, ScoreError> {
        self.score(strokes, word).map(|b| b.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::recorder::StrokeCapture;
    use crate::capture::stroke::Stroke;
    use crate::scoring::config::ScoreWeights;
    use crate::session::rng::Rng;
    use glam::Vec2;

    fn stroke(points: &[(f32, f32)]) -> Stroke {
        Stroke::from_points(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()).unwrap()
    }

    /// One 5-point loop, x from 10 to 130, path length 500.
    fn hund_attempt() -> StrokeCollection {
        [stroke(&[(10.0, 0.0), (130.0, 0.0), (130.0, 130.0), (10.0, 130.0), (10.0, 0.0)])]
            .into_iter()
            .collect()
    }

    #[test]
    fn hund_single_loop() {
        let scorer = HeuristicScorer::default();
        let strokes = hund_attempt();
        assert!((strokes.total_path_length() - 500.0).abs() < 1e-3);

        let b = scorer.score(&strokes, "Hund").unwrap();
        assert!((b.length - 100.0).abs() < 1e-3, "length was {}", b.length);
        assert!((b.complexity - 44.444).abs() < 0.01, "complexity was {}", b.complexity);
        assert!((b.stroke_count - 25.0).abs() < 1e-3, "stroke count was {}", b.stroke_count);
        assert_eq!(b.accuracy, 61);
    }

    #[test]
    fn empty_collection_scores_zero() {
        let scorer = HeuristicScorer::default();
        let b = scorer.score(&StrokeCollection::new(), "Katze").unwrap();
        assert_eq!(b.accuracy, 0);
        assert_eq!(b.complexity, 0.0);
        assert_eq!(b.length, 0.0);
        assert_eq!(b.stroke_count, 0.0);
    }

    #[test]
    fn empty_word_rejected() {
        let scorer = HeuristicScorer::default();
        assert_eq!(scorer.score(&hund_attempt(), ""), Err(ScoreError::EmptyWord));
        assert_eq!(scorer.accuracy(&StrokeCollection::new(), ""), Err(ScoreError::EmptyWord));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let scorer = HeuristicScorer::default();
        // "Bär" is 3 chars (4 bytes): expected width 90
        let s: StrokeCollection = [stroke(&[(0.0, 0.0), (90.0, 0.0)])].into_iter().collect();
        let b = scorer.score(&s, "bär").unwrap();
        assert!((b.length - 100.0).abs() < 1e-3);
    }

    #[test]
    fn scoring_is_deterministic_and_pure() {
        let mut capture = StrokeCapture::new();
        capture.begin_stroke(Vec2::new(0.0, 0.0));
        capture.extend_stroke(Vec2::new(80.0, 40.0));
        capture.extend_stroke(Vec2::new(160.0, 0.0));
        capture.end_stroke();
        capture.begin_stroke(Vec2::new(20.0, 90.0));
        capture.extend_stroke(Vec2::new(140.0, 90.0));
        capture.end_stroke();

        let snapshot = capture.strokes().clone();
        let scorer = HeuristicScorer::default();
        let first = scorer.score(capture.strokes(), "katze").unwrap();
        let second = scorer.score(capture.strokes(), "katze").unwrap();
        assert_eq!(first, second);
        assert_eq!(capture.strokes(), &snapshot);
    }

    #[test]
    fn perfect_attempt_caps_at_100() {
        let scorer = HeuristicScorer::default();
        // "ab": expected width 60, expected strokes ceil(1.6) = 2, long path
        let s: StrokeCollection = [
            stroke(&[(0.0, 0.0), (30.0, 600.0)]),
            stroke(&[(30.0, 0.0), (60.0, 600.0)]),
        ]
        .into_iter()
        .collect();
        let b = scorer.score(&s, "ab").unwrap();
        assert_eq!(b.complexity, 100.0);
        assert_eq!(b.accuracy, 100);
    }

    #[test]
    fn overweighted_config_still_caps() {
        let config = ScoringConfig {
            weights: ScoreWeights { complexity: 1.0, length: 1.0, stroke_count: 1.0 },
            ..ScoringConfig::default()
        };
        let scorer = HeuristicScorer::new(config).unwrap();
        let b = scorer.score(&hund_attempt(), "Hund").unwrap();
        assert_eq!(b.accuracy, 100);
    }

    #[test]
    fn scores_stay_in_range() {
        let scorer = HeuristicScorer::default();
        let shapes: Vec<StrokeCollection> = vec![
            [stroke(&[(0.0, 0.0)])].into_iter().collect(),
            [stroke(&[(0.0, 0.0), (5000.0, 5000.0)])].into_iter().collect(),
            (0..40).map(|i| stroke(&[(i as f32 * 3.0, 0.0), (i as f32 * 3.0, 10.0)])).collect(),
            [stroke(&[(-400.0, -20.0), (400.0, 20.0), (-400.0, 60.0)])].into_iter().collect(),
        ];
        for strokes in &shapes {
            for word in ["a", "Hund", "Schmetterling"] {
                let b = scorer.score(strokes, word).unwrap();
                for v in [b.complexity, b.length, b.stroke_count] {
                    assert!((0.0..=100.0).contains(&v), "sub-score {v} out of range");
                }
                assert!(b.accuracy <= 100);
            }
        }
    }

    #[test]
    fn random_scribbles_stay_in_range() {
        let scorer = HeuristicScorer::default();
        let mut rng = Rng::new(0xface);
        fn coord(rng: &mut Rng) -> f32 {
            rng.pick(4001).unwrap() as f32 - 2000.0
        }
        for _ in 0..300 {
            let stroke_count = rng.pick(12).unwrap_or(0);
            let strokes: StrokeCollection = (0..stroke_count)
                .map(|_| {
                    let len = rng.pick(20).unwrap_or(0) + 1;
                    let points =
                        (0..len).map(|_| Vec2::new(coord(&mut rng), coord(&mut rng))).collect();
                    Stroke::from_points(points).unwrap()
                })
                .collect();
            let word_len = rng.pick(15).unwrap_or(0) + 1;
            let word = "x".repeat(word_len);
            let b = scorer.score(&strokes, &word).unwrap();
            for v in [b.complexity, b.length, b.stroke_count] {
                assert!((0.0..=100.0).contains(&v), "sub-score {v} out of range for {word}");
            }
            assert!(b.accuracy <= 100);
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = ScoringConfig { pixels_per_char: -1.0, ..ScoringConfig::default() };
        assert!(HeuristicScorer::new(config).is_err());
    }
}
