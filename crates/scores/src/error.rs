use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file is not a valid ranking: {0}")]
    Json(#[from] serde_json::Error),
}
