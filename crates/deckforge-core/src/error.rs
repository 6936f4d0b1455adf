use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// No card occurrences in the corpus, so normalization has no maximum.
    #[error("Corpus is empty: no card occurrences to build statistics from")]
    EmptyCorpus,

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type DfResult<T> = Result<T, DeckForgeError>;
