use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Returns the absolute path of the CSV file to write tables from `pdf_path` into.
///
/// A `.pdf` extension (of any case) is replaced by `.csv`. Any other file name has `.csv`
/// appended, so the input is never overwritten.
pub fn output_csv_path(pdf_path: &Path) -> Result<PathBuf> {
    let has_pdf_extension = pdf_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let csv_path = if has_pdf_extension {
        pdf_path.with_extension("csv")
    } else {
        let mut file_name = pdf_path
            .file_name()
            .with_context(|| format!("input path {pdf_path:?} has no file name"))?
            .to_owned();
        file_name.push(".csv");
        pdf_path.with_file_name(file_name)
    };

    std::path::absolute(&csv_path)
        .with_context(|| format!("resolving absolute path of {csv_path:?}"))
}
