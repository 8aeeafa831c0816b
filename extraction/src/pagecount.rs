use std::path::Path;

use anyhow::{Context, Result};
use pdfium_render::prelude::Pdfium;

/// Determines how many pages a PDF document has.
pub trait PageCounter {
    fn count_pages(&self, pdf_path: &Path, password: Option<&str>) -> Result<u32>;
}

/// [PageCounter] that opens the document with Pdfium.
pub struct PdfiumPageCounter {
    pdfium: Pdfium,
}

impl PdfiumPageCounter {
    /// Binds to the Pdfium library file at `library_path`, or to the system's Pdfium library if
    /// [None].
    pub fn new(library_path: Option<&Path>) -> Result<Self> {
        let bindings = match library_path {
            Some(path) => Pdfium::bind_to_library(path)
                .with_context(|| format!("binding to Pdfium library at {path:?}"))?,
            None => Pdfium::bind_to_system_library().context("binding to system Pdfium library")?,
        };
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageCounter for PdfiumPageCounter {
    fn count_pages(&self, pdf_path: &Path, password: Option<&str>) -> Result<u32> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, password)
            .with_context(|| format!("loading PDF {pdf_path:?}"))?;
        u32::try_from(document.pages().len()).context("page count out of range")
    }
}
