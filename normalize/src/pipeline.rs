
use std::path::{Path, PathBuf};

use table::{Row, Table, csvio};

use crate::{
    NormalizeError,
    columns::{prune_empty_columns, sanitize_header},
    header::detect_header,
};

/// A table with a chosen, sanitized header row and no entirely empty columns. Every data row has
/// exactly as many cells as the header.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CleanedTable {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl CleanedTable {
    /// Returns `(data rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.header.len())
    }

    /// Converts into a [Table] with the header as its first row.
    pub fn into_table(self) -> Table {
        let mut rows = Vec::with_capacity(1 + self.rows.len());
        rows.push(Row(self.header));
        rows.extend(self.rows);
        Table(rows)
    }
}

/// Progress of normalizing a CSV.
#[derive(Debug)]
pub enum NormalizeEvent<'a> {
    /// The raw CSV was loaded, with the given `(rows, columns)`.
    Loaded { shape: (usize, usize) },
    /// The header row was chosen and the rows up to it removed.
    HeaderCleaned { shape: (usize, usize) },
    /// Entirely empty columns were removed.
    ColumnsPruned { shape: (usize, usize) },
    /// The cleaned table was written.
    Saved { path: &'a Path },
}

/// Receives [NormalizeEvent]s.
pub trait NormalizeEvents {
    fn on_event(&mut self, event: NormalizeEvent<'_>);
}

/// Cleans a raw table, as read with no header.
pub fn normalize_table(
    mut raw: Table,
    events: &mut dyn NormalizeEvents,
) -> Result<CleanedTable, NormalizeError> {
    raw.pad_to_width();
    events.on_event(NormalizeEvent::Loaded { shape: raw.shape() });

    let choice = detect_header(&raw)?;
    log::debug!("Using row index {} as the header.", choice.header_index);

    let mut rows = raw.0;
    let data = rows.split_off(choice.data_start);
    let header_row = rows.swap_remove(choice.header_index);
    events.on_event(NormalizeEvent::HeaderCleaned {
        shape: (data.len(), header_row.len()),
    });

    let header = header_row
        .iter()
        .map(|cell| sanitize_header(cell).into_owned())
        .collect();

    let (header, rows) = prune_empty_columns(header, data);
    let cleaned = CleanedTable { header, rows };
    events.on_event(NormalizeEvent::ColumnsPruned {
        shape: cleaned.shape(),
    });

    Ok(cleaned)
}

/// Rejects a row with more fields than the first row. Shorter rows are allowed, and are padded
/// with empty cells.
fn check_row_widths(raw: &Table) -> anyhow::Result<()> {
    let Some(expected) = raw.first().map(|row| row.len()) else {
        return Ok(());
    };
    for (row_index, row) in raw.iter().enumerate().skip(1) {
        if row.len() > expected {
            anyhow::bail!(
                "expected {expected} fields in row {}, saw {}",
                row_index + 1,
                row.len()
            );
        }
    }
    Ok(())
}

/// Loads the CSV at `input_path`, cleans it with [normalize_table], and writes the result to
/// `output_path` if given.
pub fn preprocess_csv(
    input_path: &Path,
    output_path: Option<&Path>,
    events: &mut dyn NormalizeEvents,
) -> Result<CleanedTable, NormalizeError> {
    let raw = csvio::read_csv(input_path)
        .and_then(|raw| check_row_widths(&raw).map(|()| raw))
        .map_err(|cause| NormalizeError::Read {
            path: input_path.to_owned(),
            cause,
        })?;

    let cleaned = normalize_table(raw, events)?;

    if let Some(output_path) = output_path {
        let table = cleaned.clone().into_table();
        csvio::write_csv(output_path, &table).map_err(|cause| NormalizeError::Write {
            path: PathBuf::from(output_path),
            cause,
        })?;
        events.on_event(NormalizeEvent::Saved { path: output_path });
    }

    Ok(cleaned)
}
