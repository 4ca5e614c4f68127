use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file '{}' not found or unreadable", path.display())]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("input file '{}' is not valid UTF-8", path.display())]
    InvalidEncoding { path: PathBuf },
    #[error("failed to write output file '{}'", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize output")]
    Serialize(#[from] serde_json::Error),
    #[error("no output format selected (input ended while prompting)")]
    SelectionAborted,
    #[error("failed to prompt for an output format")]
    Prompt(#[source] std::io::Error),
}
