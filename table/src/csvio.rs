//! Reading and writing [Table]s as headerless CSV.

use std::{io, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use crate::{Row, Table};

/// Reads every record of the CSV file at `path` as a row. No header row is consumed, and rows may
/// differ in length.
pub fn read_csv(path: &Path) -> Result<Table> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV file {path:?}"))?;
    read_records(reader)
}

/// As [read_csv], but from an arbitrary reader.
pub fn read_csv_from<R: io::Read>(reader: R) -> Result<Table> {
    read_records(
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader),
    )
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let mut rows = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV row index {row_index}"))?;
        rows.push(Row(record.iter().map(str::to_string).collect()));
    }
    Ok(Table(rows))
}

/// Writes `table` to `path` as CSV, padding short rows with empty cells so the output is
/// rectangular.
///
/// The file only appears at `path` once fully written; on error nothing is left behind.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let file =
        AtomicWriteFile::open(path).with_context(|| format!("opening {path:?} for writing"))?;
    let file = write_csv_to(file, table)?;
    file.commit()
        .with_context(|| format!("committing CSV output to {path:?}"))?;
    Ok(())
}

/// As [write_csv], but to an arbitrary writer, which is returned once flushed.
pub fn write_csv_to<W: io::Write>(writer: W, table: &Table) -> Result<W> {
    let width = table.width();

    let mut output = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .flexible(false)
        .from_writer(writer);

    if width > 0 {
        let mut row_fields: Vec<&str> = vec![""; width];
        for (row_index, row) in table.iter().enumerate() {
            row_fields.fill("");
            for (field_index, field) in row.iter().enumerate() {
                row_fields[field_index] = field.as_str();
            }
            output
                .write_record(&row_fields)
                .with_context(|| format!("writing row index {row_index}"))?;
        }
    }

    output
        .into_inner()
        .map_err(|err| err.into_error())
        .context("flushing CSV output")
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[gtest]
    fn test_read_keeps_ragged_rows_and_empty_cells() -> anyhow::Result<()> {
        let table = read_csv_from("a,b,c\r\n1,,3\r\nx\r\n".as_bytes())?;
        expect_that!(
            table,
            eq(&Table::from([
                vec!["a", "b", "c"],
                vec!["1", "", "3"],
                vec!["x"],
            ]))
        );
        Ok(())
    }

    #[gtest]
    fn test_read_does_not_consume_header() -> anyhow::Result<()> {
        let table = read_csv_from("h1,h2\n".as_bytes())?;
        expect_that!(table.shape(), eq((1, 2)));
        Ok(())
    }

    #[gtest]
    fn test_write_pads_short_rows() -> anyhow::Result<()> {
        let table = Table::from([vec!["h1", "h2", "h3"], vec!["r1c1"], vec!["r2c1", "r2c2"]]);
        let written = String::from_utf8(write_csv_to(Vec::new(), &table)?)?;
        expect_that!(
            written.as_str(),
            eq("h1,h2,h3\r\nr1c1,,\r\nr2c1,r2c2,\r\n")
        );
        Ok(())
    }

    #[gtest]
    fn test_write_quotes_fields_with_commas() -> anyhow::Result<()> {
        let table = Table::from([vec!["a,b", "c\"d"]]);
        let written = String::from_utf8(write_csv_to(Vec::new(), &table)?)?;
        expect_that!(written.as_str(), eq("\"a,b\",\"c\"\"d\"\r\n"));
        Ok(())
    }

    #[gtest]
    fn test_write_csv_creates_file() -> anyhow::Result<()> {
        let tempdir = tempfile::tempdir()?;
        let path = tempdir.path().join("out.csv");

        write_csv(&path, &Table::from([vec!["a", "b"], vec!["1", "2"]]))?;

        let contents = std::fs::read_to_string(&path)?;
        expect_that!(contents.as_str(), eq("a,b\r\n1,2\r\n"));
        expect_that!(
            read_csv(&path)?,
            eq(&Table::from([vec!["a", "b"], vec!["1", "2"]]))
        );
        Ok(())
    }

    #[gtest]
    fn test_read_missing_file_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        expect_that!(
            read_csv(&tempdir.path().join("missing.csv")),
            err(displays_as(contains_substring("opening CSV file")))
        );
    }
}
