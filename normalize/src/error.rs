use std::path::PathBuf;

/// Failure while loading, cleaning or saving a CSV. Always terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("reading CSV {path:?}: {cause:#}")]
    Read { path: PathBuf, cause: anyhow::Error },

    #[error("the CSV has no rows")]
    Empty,

    /// The chosen header row is past the end of the input.
    #[error("expected header at row index {index}, but the CSV has only {num_rows} row(s)")]
    MissingHeaderRow { index: usize, num_rows: usize },

    #[error("writing CSV {path:?}: {cause:#}")]
    Write { path: PathBuf, cause: anyhow::Error },
}
