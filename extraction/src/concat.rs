//! Combining the tables found across all page batches into one table.

use hashbrown::HashMap;
use table::{Row, Table};

use crate::config::ConcatMode;

impl ConcatMode {
    /// Combines `tables`, which must be in page order.
    pub fn concat(self, tables: Vec<Table>) -> Table {
        match self {
            ConcatMode::Rows => concat_rows(tables),
            ConcatMode::AlignHeaders => align_headers(tables),
        }
    }
}

/// Concatenates the rows of all tables, preserving table order then row order.
pub fn concat_rows(tables: Vec<Table>) -> Table {
    Table(tables.into_iter().flat_map(|table| table.0).collect())
}

/// Treats the first row of each table as its header and places every other row under the union
/// of all header names, in the order that each name was first seen. The returned table's first
/// row holds the union of header names.
///
/// Cells under columns that a table does not have are left empty.
pub fn align_headers(tables: Vec<Table>) -> Table {
    let mut columns: Vec<String> = Vec::new();
    let mut column_index: HashMap<String, usize> = HashMap::new();
    let mut placements: Vec<(Vec<usize>, Vec<Row>)> = Vec::with_capacity(tables.len());

    for table in tables {
        let width = table.width();
        let mut rows = table.0.into_iter();
        let Some(header) = rows.next() else {
            continue;
        };

        let targets: Vec<usize> = header_names(&header, width)
            .into_iter()
            .map(|name| match column_index.get(&name) {
                Some(&index) => index,
                None => {
                    let index = columns.len();
                    column_index.insert(name.clone(), index);
                    columns.push(name);
                    index
                }
            })
            .collect();

        placements.push((targets, rows.collect()));
    }

    let width = columns.len();
    log::debug!("Aligned {} table(s) into {width} column(s).", placements.len());

    let num_rows: usize = placements.iter().map(|(_, rows)| rows.len()).sum();
    let mut output = Vec::with_capacity(1 + num_rows);
    output.push(Row(columns));
    for (targets, rows) in placements {
        for row in rows {
            let mut cells = vec![String::new(); width];
            for (cell, &target) in row.0.into_iter().zip(&targets) {
                cells[target] = cell;
            }
            output.push(Row(cells));
        }
    }

    Table(output)
}

/// Names the `width` columns of a table from its header row. Blank names become
/// `Unnamed: <index>`, and repeats of a name get a `.<count>` suffix.
fn header_names(header: &Row, width: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    (0..width)
        .map(|index| {
            let cell = header.cell(index);
            let mut name = if cell.trim().is_empty() {
                format!("Unnamed: {index}")
            } else {
                cell.to_string()
            };

            let mut count = counts.get(&name).copied().unwrap_or(0);
            while count > 0 {
                counts.insert(name.clone(), count + 1);
                name = format!("{name}.{count}");
                count = counts.get(&name).copied().unwrap_or(0);
            }
            counts.insert(name.clone(), count + 1);

            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use testutils::table_of;

    use super::*;

    #[gtest]
    fn test_concat_rows_preserves_order() {
        let actual = ConcatMode::Rows.concat(vec![
            table_of(&[&["a1", "a2"], &["b1", "b2"]]),
            table_of(&[&["c1"]]),
            table_of(&[&["d1", "d2", "d3"]]),
        ]);
        expect_that!(
            actual,
            eq(&table_of(&[
                &["a1", "a2"],
                &["b1", "b2"],
                &["c1"],
                &["d1", "d2", "d3"],
            ]))
        );
    }

    #[gtest]
    fn test_align_headers_unions_columns_in_first_seen_order() {
        let actual = ConcatMode::AlignHeaders.concat(vec![
            table_of(&[&["Name", "Age"], &["ann", "30"]]),
            table_of(&[&["Age", "City"], &["41", "Oslo"], &["52", "Rome"]]),
        ]);
        expect_that!(
            actual,
            eq(&table_of(&[
                &["Name", "Age", "City"],
                &["ann", "30", ""],
                &["", "41", "Oslo"],
                &["", "52", "Rome"],
            ]))
        );
    }

    #[gtest]
    fn test_align_headers_names_blank_columns() {
        let actual = align_headers(vec![table_of(&[
            &["Note: figures in USD", ""],
            &["A", "B"],
            &["1", "2"],
        ])]);
        expect_that!(
            actual,
            eq(&table_of(&[
                &["Note: figures in USD", "Unnamed: 1"],
                &["A", "B"],
                &["1", "2"],
            ]))
        );
    }

    #[gtest]
    fn test_align_headers_names_columns_beyond_header() {
        let actual = align_headers(vec![table_of(&[&["A"], &["1", "2"]])]);
        expect_that!(
            actual,
            eq(&table_of(&[&["A", "Unnamed: 1"], &["1", "2"]]))
        );
    }

    #[gtest]
    fn test_align_headers_skips_empty_tables() {
        let actual = align_headers(vec![Table::default(), table_of(&[&["A"], &["1"]])]);
        expect_that!(actual, eq(&table_of(&[&["A"], &["1"]])));
    }

    #[gtest]
    fn test_header_names_deduplicates() {
        expect_that!(
            header_names(&Row::from(["A", "A", "A.1", "A"]), 4),
            elements_are![eq("A"), eq("A.1"), eq("A.1.1"), eq("A.2")]
        );
    }
}
