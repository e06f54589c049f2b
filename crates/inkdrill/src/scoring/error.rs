use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("cannot score against an empty target word")]
    EmptyWord,
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),
}
