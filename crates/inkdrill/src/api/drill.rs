use serde::{Deserialize, Serialize};

use crate::api::error::DrillError;
use crate::api::types::DrillEvent;
use crate::capture::recorder::{CaptureResult, StrokeCapture};
use crate::input::queue::{InputEvent, InputQueue};
use crate::scoring::config::ScoringConfig;
use crate::scoring::scorer::{HeuristicScorer, ScoreBreakdown};
use crate::session::state::{DrillSession, Verdict};
use crate::session::words::WordList;

/// Configuration for a drill, provided by the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Scorer tuning constants.
    pub scoring: ScoringConfig,
    /// Minimum accuracy that counts as a pass (default: 80).
    pub pass_threshold: u8,
    /// Accuracy that marks the word as a success and advances (default: 100).
    pub auto_advance_score: u8,
    /// How long the host waits before showing a verdict, in ms (default: 500).
    pub feedback_delay_ms: u32,
    /// BCP 47 language tag for speech output (default: "de-DE").
    pub speech_lang: String,
    /// Seed for word selection.
    pub seed: u64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            pass_threshold: 80,
            auto_advance_score: 100,
            feedback_delay_ms: 500,
            speech_lang: "de-DE".to_owned(),
            seed: 0x5eed,
        }
    }
}

impl DrillConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DrillError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The contract every drill app fulfills: where the words come from and how
/// the drill is tuned.
pub trait WordSource {
    /// Return drill configuration. Called once before the drill is built.
    fn config(&self) -> DrillConfig {
        DrillConfig::default()
    }

    /// The words to practice.
    fn words(&self) -> WordList;
}

/// Result of a writing check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub breakdown: ScoreBreakdown,
    pub verdict: Verdict,
}

impl ScoreReport {
    pub fn accuracy(&self) -> u8 {
        self.breakdown.accuracy
    }
}

/// A running drill: the stroke capture, the scorer, and the session that
/// consumes the scores.
///
/// All mutation of the captured strokes goes through this type, which lives
/// on a single thread. Every operation appends [`DrillEvent`]s for the host;
/// call [`Drill::clear_frame_data`] once they have been forwarded.
pub struct Drill {
    config: DrillConfig,
    capture: StrokeCapture,
    scorer: HeuristicScorer,
    session: DrillSession,
    events: Vec<DrillEvent>,
    last_score: Option<ScoreBreakdown>,
}

impl Drill {
    pub fn new(config: DrillConfig, words: WordList) -> Result<Self, DrillError> {
        if words.is_empty() {
            return Err(DrillError::EmptyWordList);
        }
        let scorer = HeuristicScorer::new(config.scoring.clone())?;
        let session = DrillSession::new(words, config.seed);
        log::info!("drill: {} words loaded", session.words().len());
        Ok(Self {
            config,
            capture: StrokeCapture::new(),
            scorer,
            session,
            events: Vec::new(),
            last_score: None,
        })
    }

    /// Build a drill from an app's word source.
    pub fn from_source<W: WordSource>(source: &W) -> Result<Self, DrillError> {
        Self::new(source.config(), source.words())
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn capture(&self) -> &StrokeCapture {
        &self.capture
    }

    pub fn session(&self) -> &DrillSession {
        &self.session
    }

    /// Events emitted since the last [`Drill::clear_frame_data`].
    pub fn events(&self) -> &[DrillEvent] {
        &self.events
    }

    /// Breakdown of the latest check for the word on screen.
    /// Cleared when the word changes or the surface is cleared.
    pub fn last_score(&self) -> Option<&ScoreBreakdown> {
        self.last_score.as_ref()
    }

    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Feed one normalized input event into the stroke capture.
    pub fn handle_input(&mut self, event: InputEvent) -> CaptureResult {
        self.capture.apply(event)
    }

    /// Apply every pending event in `queue`, leaving it empty.
    pub fn drain_input(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.capture.apply(event);
        }
    }

    /// Start the drill on first use; afterwards, say the current word again.
    pub fn play(&mut self) -> Result<(), DrillError> {
        match self.session.current_index() {
            Some(index) => {
                self.events.push(DrillEvent::Speak { index });
                Ok(())
            }
            None => self.next_word().map(|_| ()),
        }
    }

    /// Present a new random word.
    pub fn next_word(&mut self) -> Result<usize, DrillError> {
        let index = self.session.next_word().ok_or(DrillError::EmptyWordList)?;
        self.present(index);
        Ok(index)
    }

    /// Return to the previously presented word, if there is one.
    pub fn previous_word(&mut self) -> Option<usize> {
        let index = self.session.previous_word()?;
        self.present(index);
        Some(index)
    }

    pub fn toggle_reveal(&mut self) -> bool {
        let revealed = self.session.toggle_reveal();
        self.events.push(DrillEvent::Revealed { revealed });
        revealed
    }

    /// Record the current word as written correctly, then move on.
    pub fn mark_success(&mut self) -> Option<usize> {
        self.mark(true)
    }

    /// Record the current word as written incorrectly, then move on.
    pub fn mark_error(&mut self) -> Option<usize> {
        self.mark(false)
    }

    /// Empty the drawing surface on the learner's request.
    pub fn clear_surface(&mut self) {
        self.reset_surface();
    }

    /// Score the committed strokes against the current word.
    ///
    /// The word is compared in lowercase. A perfect score marks the word as a
    /// success and presents the next one.
    pub fn check_writing(&mut self) -> Result<ScoreReport, DrillError> {
        let word = self
            .session
            .current_word()
            .ok_or(DrillError::NoCurrentWord)?
            .to_lowercase();
        let breakdown = self.scorer.score(self.capture.strokes(), &word)?;
        let verdict = DrillSession::judge(
            breakdown.accuracy,
            self.config.pass_threshold,
            self.config.auto_advance_score,
        );
        log::info!(
            "drill: '{}' scored {} (complexity {:.1}, length {:.1}, strokes {:.1})",
            word,
            breakdown.accuracy,
            breakdown.complexity,
            breakdown.length,
            breakdown.stroke_count
        );

        self.last_score = Some(breakdown);
        self.events.push(DrillEvent::Scored {
            accuracy: breakdown.accuracy,
            verdict,
        });

        if let Verdict::Pass { auto_advance: true } = verdict {
            self.mark_success();
        }
        Ok(ScoreReport { breakdown, verdict })
    }

    fn mark(&mut self, success: bool) -> Option<usize> {
        let index = self.session.current_index()?;
        let next = if success {
            self.session.mark_success()
        } else {
            self.session.mark_error()
        };
        self.events.push(DrillEvent::Marked { index, success });
        if let Some(next) = next {
            self.present(next);
        }
        next
    }

    fn present(&mut self, index: usize) {
        if let Some(word) = self.session.words().get(index) {
            log::info!("drill: presenting '{}'", word);
        }
        self.events.push(DrillEvent::WordPresented { index });
        self.events.push(DrillEvent::Speak { index });
        self.reset_surface();
    }

    fn reset_surface(&mut self) {
        self.capture.reset();
        self.last_score = None;
        self.events.push(DrillEvent::SurfaceCleared);
    }
}
