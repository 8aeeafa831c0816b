use std::io;

use anyhow::{Context, Result};
use serde::Deserialize;
use table::{Row, Table};

use crate::detector::{DetectionRequest, TableDetector};

/// [TableDetector] implemented by Tabula, running in a JVM attached to the current thread.
///
/// Must be created and run on the thread that attached the [tabula::TabulaEnv].
pub struct TabulaDetector<'env> {
    tabula_env: tabula::TabulaEnv<'env>,
}

impl<'env> TabulaDetector<'env> {
    /// Creates a [TabulaDetector] with the given [tabula::TabulaEnv].
    pub fn new(tabula_env: tabula::TabulaEnv<'env>) -> Self {
        Self { tabula_env }
    }
}

impl<'env> TableDetector for TabulaDetector<'env> {
    fn detect_tables(&self, request: &DetectionRequest) -> Result<Vec<Table>> {
        let pages = request
            .pages
            .pages()
            .map(i32::try_from)
            .collect::<Result<Vec<i32>, _>>()
            .with_context(|| format!("page numbers {} out of range", request.pages))?;

        let tabula = self
            .tabula_env
            .configure_tabula(
                None,
                Some(pages.as_slice()),
                tabula::OutputFormat::Json,
                request.guess,
                request.method.to_tabula_extraction_method(),
                false,
                request.password,
            )
            .context("configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()
            .context("creating temporary file for extracting PDF table data")?;
        tabula
            .parse_document_into(request.pdf_path, extracted_file.path())
            .context("extracting PDF table data")?;

        let tables = parse_table_set(io::BufReader::new(extracted_file))?;
        log::debug!(
            "Tabula found {} table(s) on pages {}.",
            tables.len(),
            request.pages
        );
        Ok(tables)
    }
}

/// Parses Tabula's JSON output into tables of cell text.
pub fn parse_table_set<R: io::Read>(reader: R) -> Result<Vec<Table>> {
    let table_set: JsonTableSet =
        serde_json::from_reader(reader).context("parsing extracted PDF table data")?;
    Ok(table_set.0.into_iter().map(JsonTable::into_table).collect())
}

/// A sequence of extracted tables from a PDF file.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct JsonTableSet(Vec<JsonTable>);

/// A single extracted table from a PDF file.
#[allow(dead_code)]
#[derive(Deserialize, Debug)]
struct JsonTable {
    extraction_method: String,
    page_number: i32,
    data: Vec<JsonRow>,
}

impl JsonTable {
    fn into_table(self) -> Table {
        Table(self.data.into_iter().map(JsonRow::into_row).collect())
    }
}

/// A single extracted table row from a PDF file.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
struct JsonRow(Vec<JsonCell>);

impl JsonRow {
    fn into_row(self) -> Row {
        Row(self.0.into_iter().map(|cell| cell.text).collect())
    }
}

/// A single extracted table cell from a PDF file. Only the text is kept.
#[derive(Deserialize, Debug)]
struct JsonCell {
    text: String,
}
