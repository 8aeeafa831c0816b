//! Extraction of tables from PDF files into a single CSV.
//!
//! The PDF's pages are split into fixed size batches, each batch is handed to a
//! [detector::TableDetector], and every table found is concatenated in page order.

pub mod batch;
pub mod concat;
pub mod config;
pub mod detector;
pub mod error;
pub mod extractor;
pub mod outpath;
pub mod pagecount;
pub mod tabulareader;

pub use config::{ConcatMode, ExtractConfig, ExtractionMethod};
pub use error::ExtractError;
pub use extractor::Extractor;
