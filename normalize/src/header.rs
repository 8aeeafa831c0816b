//! Choice of the header row within a table of unknown layout.

use table::Row;

use crate::NormalizeError;

/// Position of the header row, and of the first data row after it. Rows before the header are
/// discarded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeaderChoice {
    pub header_index: usize,
    pub data_start: usize,
}

/// Chooses the header row of `rows`.
///
/// 1. A leading caption row, whose first cell contains `Note` and whose second cell starts with
///    `Unnamed`, is skipped.
/// 2. If the next row mentions "note" in any letter case, or is entirely empty, the row after it
///    is the header. Otherwise it is the header itself.
///
/// Step 1 matches case sensitively and step 2 does not. Known inputs rely on both.
pub fn detect_header(rows: &[Row]) -> Result<HeaderChoice, NormalizeError> {
    let first = rows.first().ok_or(NormalizeError::Empty)?;

    let skip = usize::from(is_caption(first));
    let candidate = rows
        .get(skip)
        .ok_or(NormalizeError::MissingHeaderRow {
            index: skip,
            num_rows: rows.len(),
        })?;

    let header_index = if mentions_note(candidate) || candidate.is_blank() {
        skip + 1
    } else {
        skip
    };
    if header_index >= rows.len() {
        return Err(NormalizeError::MissingHeaderRow {
            index: header_index,
            num_rows: rows.len(),
        });
    }

    Ok(HeaderChoice {
        header_index,
        data_start: header_index + 1,
    })
}

fn is_caption(row: &Row) -> bool {
    row.len() > 1 && row.cell(0).contains("Note") && row.cell(1).starts_with("Unnamed")
}

fn mentions_note(row: &Row) -> bool {
    row.join(" ").to_lowercase().contains("note")
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use testutils::table_of;

    use super::*;

    fn choice(header_index: usize) -> HeaderChoice {
        HeaderChoice {
            header_index,
            data_start: header_index + 1,
        }
    }

    #[gtest]
    fn test_plain_first_row_is_header() {
        let rows = table_of(&[&["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(0))));
    }

    #[gtest]
    fn test_skips_caption_row() {
        let rows = table_of(&[&["Note: x", "Unnamed: 1"], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(1))));
    }

    #[gtest]
    fn test_caption_match_is_case_sensitive() {
        // Not a caption, but still mentions "note", so the second row becomes the header.
        let rows = table_of(&[&["note: x", "Unnamed: 1"], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(1))));

        let rows = table_of(&[&["NOTICE", "unnamed"], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(0))));
    }

    #[gtest]
    fn test_caption_requires_unnamed_second_cell() {
        let rows = table_of(&[&["Note: x", "B"], &["A", "B"], &["1", "2"]]);
        // "Note" is still mentioned, so the row after it is the header.
        expect_that!(detect_header(&rows), ok(eq(&choice(1))));
    }

    #[gtest]
    fn test_blank_first_row_uses_second_row() {
        let rows = table_of(&[&["", ""], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(1))));
    }

    #[gtest]
    fn test_note_after_caption_uses_following_row() {
        let rows = table_of(&[
            &["Note: units", "Unnamed: 1"],
            &["NOTES", "see below"],
            &["A", "B"],
            &["1", "2"],
        ]);
        expect_that!(detect_header(&rows), ok(eq(&choice(2))));
    }

    #[gtest]
    fn test_note_in_later_cell_uses_second_row() {
        let rows = table_of(&[&["Figures", "Footnote 3"], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(1))));
    }

    #[gtest]
    fn test_placeholder_text_row_is_not_blank() {
        let rows = table_of(&[&["NA", "NaN"], &["A", "B"], &["1", "2"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(0))));
    }

    #[gtest]
    fn test_single_column_is_never_a_caption() {
        let rows = table_of(&[&["Revenue"], &["1"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(0))));
    }

    #[gtest]
    fn test_header_may_have_no_data_rows() {
        let rows = table_of(&[&["A", "B"]]);
        expect_that!(detect_header(&rows), ok(eq(&choice(0))));
    }

    #[gtest]
    fn test_empty_input_fails() {
        expect_true!(matches!(detect_header(&[]), Err(NormalizeError::Empty)));
    }

    #[gtest]
    fn test_only_caption_row_fails() {
        let rows = table_of(&[&["Note: x", "Unnamed: 1"]]);
        expect_true!(matches!(
            detect_header(&rows),
            Err(NormalizeError::MissingHeaderRow {
                index: 1,
                num_rows: 1
            })
        ));
    }

    #[gtest]
    fn test_only_blank_row_fails() {
        let rows = table_of(&[&["", ""]]);
        expect_true!(matches!(
            detect_header(&rows),
            Err(NormalizeError::MissingHeaderRow {
                index: 1,
                num_rows: 1
            })
        ));
    }
}
