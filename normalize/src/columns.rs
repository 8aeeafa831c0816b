use std::borrow::Cow;

use table::Row;

/// Trims a header cell and replaces each `.` and `/` with `_`.
pub fn sanitize_header(cell: &str) -> Cow<'_, str> {
    lazy_regex::regex_replace_all!(r"[./]", cell.trim(), "_")
}

/// Removes every column in which all `rows` have an empty cell. A column with at least one
/// non-empty cell is kept whole.
///
/// `rows` are expected to be padded to the width of `header`. With no rows at all, every column
/// is empty and removed.
pub fn prune_empty_columns(header: Vec<String>, rows: Vec<Row>) -> (Vec<String>, Vec<Row>) {
    let keep: Vec<bool> = (0..header.len())
        .map(|index| rows.iter().any(|row| !row.cell(index).is_empty()))
        .collect();

    if keep.iter().all(|&kept| kept) {
        return (header, rows);
    }

    let header = retain_columns(header, &keep);
    let rows = rows
        .into_iter()
        .map(|row| Row(retain_columns(row.0, &keep)))
        .collect();
    (header, rows)
}

fn retain_columns(cells: Vec<String>, keep: &[bool]) -> Vec<String> {
    cells
        .into_iter()
        .enumerate()
        .filter(|(index, _)| keep.get(*index).copied().unwrap_or(false))
        .map(|(_, cell)| cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use test_casing::test_casing;

    use super::*;

    #[test_casing(5, [
        ("Revenue/Cost.Ratio", "Revenue_Cost_Ratio"),
        ("  Name  ", "Name"),
        (" a.b/c ", "a_b_c"),
        ("Plain", "Plain"),
        ("", ""),
    ])]
    fn test_sanitize_header(cell: &str, expected: &str) {
        let sanitized = sanitize_header(cell).into_owned();
        assert_that!(sanitized, eq(expected));
    }

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[gtest]
    fn test_prunes_only_entirely_empty_columns() {
        let (header, rows) = prune_empty_columns(
            strings(&["A", "Empty", "Sparse"]),
            vec![Row::from(["1", "", ""]), Row::from(["2", "", "x"])],
        );
        expect_that!(header, elements_are![eq("A"), eq("Sparse")]);
        expect_that!(
            rows,
            elements_are![eq(&Row::from(["1", ""])), eq(&Row::from(["2", "x"]))]
        );
    }

    #[gtest]
    fn test_keeps_all_columns_with_data() {
        let (header, rows) = prune_empty_columns(
            strings(&["A", "B"]),
            vec![Row::from(["1", "2"]), Row::from(["3", ""])],
        );
        expect_that!(header, elements_are![eq("A"), eq("B")]);
        expect_that!(rows.len(), eq(2));
    }

    #[gtest]
    fn test_whitespace_is_not_empty() {
        let (header, _) = prune_empty_columns(strings(&["A", "B"]), vec![Row::from(["1", " "])]);
        expect_that!(header, elements_are![eq("A"), eq("B")]);
    }

    #[gtest]
    fn test_placeholder_text_is_data() {
        let (header, rows) = prune_empty_columns(
            strings(&["A", "Missing"]),
            vec![Row::from(["1", "NA"]), Row::from(["2", "null"])],
        );
        expect_that!(header, elements_are![eq("A"), eq("Missing")]);
        expect_that!(
            rows,
            elements_are![eq(&Row::from(["1", "NA"])), eq(&Row::from(["2", "null"]))]
        );
    }

    #[gtest]
    fn test_no_rows_removes_all_columns() {
        let (header, rows) = prune_empty_columns(strings(&["A", "B"]), Vec::new());
        expect_that!(header, empty());
        expect_that!(rows, empty());
    }
}
