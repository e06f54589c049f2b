//! The three sub-scores. Each returns a value in [0, 100], and 0 for an
//! empty collection. `word_len` must be non-zero; the scorer checks that.

use super::config::ScoringConfig;
use crate::capture::stroke::StrokeCollection;

/// "Did the learner draw enough ink?"
/// Total path length mapped linearly between the configured min and max.
pub fn complexity_score(strokes: &StrokeCollection, config: &ScoringConfig) -> f32 {
    if strokes.is_empty() {
        return 0.0;
    }
    let length = strokes.total_path_length();
    let range = config.max_expected_length - config.min_expected_length;
    clamp_score((length - config.min_expected_length) / range * 100.0)
}

/// "Is the writing as wide as the word?"
/// Horizontal span compared with `word_len * pixels_per_char`.
pub fn length_score(strokes: &StrokeCollection, word_len: usize, config: &ScoringConfig) -> f32 {
    let Some((min_x, max_x)) = strokes.horizontal_extent() else {
        return 0.0;
    };
    let writing_width = max_x - min_x;
    let expected_width = word_len as f32 * config.pixels_per_char;
    let difference = (writing_width - expected_width).abs();
    clamp_score(100.0 - difference / expected_width * 100.0)
}

/// "Did the pen lift as often as the word needs?"
/// Stroke count compared with `ceil(word_len * strokes_per_char)`.
pub fn stroke_count_score(strokes: &StrokeCollection, word_len: usize, config: &ScoringConfig) -> f32 {
    if strokes.is_empty() {
        return 0.0;
    }
    let expected = expected_strokes(word_len, config) as f32;
    let difference = (strokes.len() as f32 - expected).abs();
    clamp_score(100.0 - difference / expected * 100.0)
}

/// Expected pen lifts for a word of `word_len` characters. At least 1.
pub fn expected_strokes(word_len: usize, config: &ScoringConfig) -> u32 {
    ((word_len as f32 * config.strokes_per_char).ceil() as u32).max(1)
}

fn clamp_score(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::stroke::Stroke;
    use glam::Vec2;

    fn collection(strokes: &[&[(f32, f32)]]) -> StrokeCollection {
        strokes
            .iter()
            .map(|pts| {
                Stroke::from_points(pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()).unwrap()
            })
            .collect()
    }

    #[test]
    fn empty_collection_scores_zero() {
        let cfg = ScoringConfig::default();
        let empty = StrokeCollection::new();
        assert_eq!(complexity_score(&empty, &cfg), 0.0);
        assert_eq!(length_score(&empty, 5, &cfg), 0.0);
        assert_eq!(stroke_count_score(&empty, 5, &cfg), 0.0);
    }

    #[test]
    fn complexity_is_clamped() {
        let cfg = ScoringConfig::default();
        let short = collection(&[&[(0.0, 0.0), (50.0, 0.0)]]);
        assert_eq!(complexity_score(&short, &cfg), 0.0);

        let long = collection(&[&[(0.0, 0.0), (2000.0, 0.0)]]);
        assert_eq!(complexity_score(&long, &cfg), 100.0);

        let mid = collection(&[&[(0.0, 0.0), (550.0, 0.0)]]);
        assert!((complexity_score(&mid, &cfg) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn exact_width_scores_full_length() {
        let cfg = ScoringConfig::default();
        let s = collection(&[&[(10.0, 0.0), (100.0, 0.0)]]);
        assert!((length_score(&s, 3, &cfg) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn far_too_wide_scores_zero_length() {
        let cfg = ScoringConfig::default();
        // expected 60, drawn 300: difference is 4x expected
        let s = collection(&[&[(0.0, 0.0), (300.0, 0.0)]]);
        assert_eq!(length_score(&s, 2, &cfg), 0.0);
    }

    #[test]
    fn single_dot_has_zero_width() {
        let cfg = ScoringConfig::default();
        let s = collection(&[&[(40.0, 40.0)]]);
        assert_eq!(length_score(&s, 4, &cfg), 0.0);
    }

    #[test]
    fn expected_strokes_rounds_up() {
        let cfg = ScoringConfig::default();
        assert_eq!(expected_strokes(1, &cfg), 1);
        assert_eq!(expected_strokes(4, &cfg), 4);
        assert_eq!(expected_strokes(5, &cfg), 4);
        assert_eq!(expected_strokes(6, &cfg), 5);
    }

    #[test]
    fn stroke_count_penalizes_difference() {
        let cfg = ScoringConfig::default();
        // "Hund": 4 expected
        let one = collection(&[&[(0.0, 0.0)]]);
        assert!((stroke_count_score(&one, 4, &cfg) - 25.0).abs() < 1e-4);

        let four = collection(&[&[(0.0, 0.0)], &[(1.0, 0.0)], &[(2.0, 0.0)], &[(3.0, 0.0)]]);
        assert_eq!(stroke_count_score(&four, 4, &cfg), 100.0);

        let nine: Vec<(f32, f32)> = (0..9).map(|i| (i as f32, 0.0)).collect();
        let many: Vec<&[(f32, f32)]> = nine.chunks(1).collect();
        assert_eq!(stroke_count_score(&collection(&many), 4, &cfg), 0.0);
    }
}
