//! Untyped tables of string cells, as read from PDFs and CSV files.
//!
//! An empty string stands for an empty or absent cell.

pub mod csvio;

use std::ops::{Deref, DerefMut};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table(pub Vec<Row>);

impl Table {
    /// Number of columns, being the length of the longest row.
    pub fn width(&self) -> usize {
        self.0.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.0.len(), self.width())
    }

    /// Extends every short row with empty cells so that all rows have [Table::width] cells.
    pub fn pad_to_width(&mut self) {
        let width = self.width();
        for row in self.0.iter_mut() {
            row.pad_to(width);
        }
    }
}

impl Deref for Table {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Table
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Table(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Row {
    /// Returns the cell text at `index`, or an empty string if the row is too short.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// True if every cell is empty, including a row with no cells.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|cell| cell.is_empty())
    }

    pub fn pad_to(&mut self, width: usize) {
        if self.0.len() < width {
            self.0.resize(width, String::new());
        }
    }
}

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}
