//! Normalization of CSV files whose header row is not known in advance.
//!
//! The header row is chosen by [header::detect_header], its names are cleaned by
//! [columns::sanitize_header], and columns with no data are removed by
//! [columns::prune_empty_columns].

pub mod columns;
pub mod error;
pub mod header;
pub mod pipeline;

pub use error::NormalizeError;
pub use pipeline::{CleanedTable, preprocess_csv};
