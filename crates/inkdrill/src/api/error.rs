use thiserror::Error;

use crate::scoring::error::ScoreError;

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("word list is empty")]
    EmptyWordList,
    #[error("no word has been presented yet")]
    NoCurrentWord,
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("failed to parse drill config: {0}")]
    Config(#[from] serde_json::Error),
}
