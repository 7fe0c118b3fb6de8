use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("dataset contains no rows")]
    EmptyDataset,
    #[error("malformed configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("plan {0} is not a known plan id")]
    UnknownPlan(u32),
    #[error("plan {0} is defined more than once")]
    DuplicatePlan(u32),
    #[error("plan {0} is missing")]
    MissingPlan(u32),
    #[error("suggestions for \"{0}\" are missing")]
    MissingCategory(String),
    #[error("model training failed: {0}")]
    Training(String),
    #[error("model prediction failed: {0}")]
    Prediction(String),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| EngineError::Io { path, source }
    }
}
