use std::path::Path;

use anyhow::Result;
use table::Table;

use crate::{batch::PageRange, config::ExtractionMethod};

/// Required trait for making a single batch call to detect the tables on a range of pages.
pub trait TableDetector {
    /// Returns every table found on the requested pages, in page order.
    fn detect_tables(&self, request: &DetectionRequest) -> Result<Vec<Table>>;
}

/// Single request to a [TableDetector] for all tables within a range of pages of a PDF file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DetectionRequest<'a> {
    pub pdf_path: &'a Path,
    pub pages: PageRange,
    pub method: ExtractionMethod,
    pub guess: bool,
    pub password: Option<&'a str>,
}
