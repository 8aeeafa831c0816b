use std::num::NonZeroU32;

use crate::batch::DEFAULT_BATCH_SIZE;

/// Everything that controls a single extraction run. Passed explicitly into the [crate::Extractor]
/// rather than configured globally on the table detection library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractConfig {
    /// Maximum number of pages per table detection call.
    pub batch_size: NonZeroU32,
    pub method: ExtractionMethod,
    /// Whether Tabula should guess the table area on each page.
    pub guess: bool,
    /// Password to open an encrypted PDF.
    pub password: Option<String>,
    pub concat_mode: ConcatMode,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            method: ExtractionMethod::Lattice,
            guess: false,
            password: None,
            concat_mode: ConcatMode::Rows,
        }
    }
}

/// Extraction algorithm for Tabula to use.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum ExtractionMethod {
    /// Let Tabula decide per page.
    Guess,
    /// Cells delimited by visible ruling lines.
    #[default]
    Lattice,
    /// Cells delimited by whitespace.
    Stream,
}

impl ExtractionMethod {
    pub fn to_tabula_extraction_method(self) -> tabula::ExtractionMethod {
        match self {
            ExtractionMethod::Stream => tabula::ExtractionMethod::Basic,
            ExtractionMethod::Guess => tabula::ExtractionMethod::Decide,
            ExtractionMethod::Lattice => tabula::ExtractionMethod::Spreadsheet,
        }
    }
}

/// How tables from all batches are combined into the single output table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConcatMode {
    /// Every row of every table, unchanged and in order.
    #[default]
    Rows,
    /// The first row of each table is its header, and rows are placed under the union of all
    /// header names.
    AlignHeaders,
}
