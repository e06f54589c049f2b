use std::collections::HashSet;

use super::rng::Rng;
use super::words::WordList;

/// What the session makes of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Good enough. `auto_advance` is set for a perfect score.
    Pass { auto_advance: bool },
    /// Below the pass threshold; try again.
    Retry,
}

/// Bookkeeping for one learner's drill: which word is up, where they have
/// been, and which words they got right or wrong.
///
/// Words are referred to by their index in the [`WordList`].
#[derive(Debug, Clone)]
pub struct DrillSession {
    words: WordList,
    current: Option<usize>,
    history: Vec<usize>,
    revealed: bool,
    successes: HashSet<usize>,
    errors: HashSet<usize>,
    rng: Rng,
}

impl DrillSession {
    pub fn new(words: WordList, seed: u64) -> Self {
        Self {
            words,
            current: None,
            history: Vec::new(),
            revealed: false,
            successes: HashSet::new(),
            errors: HashSet::new(),
            rng: Rng::new(seed),
        }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_word(&self) -> Option<&str> {
        self.current.and_then(|i| self.words.get(i))
    }

    /// Indexes of presented words, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Success/error feedback is only offered for a revealed, current word.
    pub fn feedback_available(&self) -> bool {
        self.revealed && self.current.is_some()
    }

    pub fn successes(&self) -> &HashSet<usize> {
        &self.successes
    }

    pub fn errors(&self) -> &HashSet<usize> {
        &self.errors
    }

    /// Present a randomly picked word. Returns its index, or `None` for an empty list.
    pub fn next_word(&mut self) -> Option<usize> {
        let index = self.rng.pick(self.words.len())?;
        self.present(index);
        self.history.push(index);
        Some(index)
    }

    /// Go back to the previously presented word.
    /// Does nothing unless there is an earlier word in the history.
    pub fn previous_word(&mut self) -> Option<usize> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        let index = *self.history.last()?;
        self.present(index);
        Some(index)
    }

    /// Show or hide the current word. Returns the new revealed flag.
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Record the current word as a success and move on.
    /// Returns the next word's index; `None` when no word was current.
    pub fn mark_success(&mut self) -> Option<usize> {
        let index = self.current?;
        self.successes.insert(index);
        self.errors.remove(&index);
        self.next_word()
    }

    /// Record the current word as an error and move on.
    pub fn mark_error(&mut self) -> Option<usize> {
        let index = self.current?;
        self.errors.insert(index);
        self.successes.remove(&index);
        self.next_word()
    }

    /// Classify `accuracy` against the pass and auto-advance thresholds.
    pub fn judge(accuracy: u8, pass_threshold: u8, auto_advance_score: u8) -> Verdict {
        if accuracy >= pass_threshold {
            Verdict::Pass {
                auto_advance: accuracy == auto_advance_score,
            }
        } else {
            Verdict::Retry
        }
    }

    fn present(&mut self, index: usize) {
        self.current = Some(index);
        self.revealed = false;
    }
}
