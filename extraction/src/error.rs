use std::path::PathBuf;

use crate::batch::PageRange;

/// Terminal failure of an extraction run. No output is written in any of these cases.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The PDF could not be opened or parsed to count its pages.
    #[error("error reading PDF {path:?}: {cause:#}")]
    DocumentRead { path: PathBuf, cause: anyhow::Error },

    /// Table detection failed for a batch of pages.
    #[error("error processing pages {range}: {cause:#}")]
    Extraction {
        range: PageRange,
        cause: anyhow::Error,
    },

    /// Every batch was processed, but no tables were found.
    #[error("no tables found in the PDF {path:?}")]
    NoTablesFound { path: PathBuf },

    #[error("error writing CSV {path:?}: {cause:#}")]
    Output { path: PathBuf, cause: anyhow::Error },
}
