use std::sync::LazyLock;

use chrono::{Datelike as _, Local};
use regex::Regex;

use crate::entities::{CellGrid, SpreadsheetLayout, WorksheetTitle};

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*\((\d{4})\)$").expect("hardcoded regex should be valid")
});

/// Decodes a `"Name (2025)"` title cell into group name and year. Text
/// without a year keeps the whole trimmed text as the group name and the
/// current year.
///
/// `next_row` only depends on the layout offsets
/// (`title_merge + top_space + bottom_space + 1`).
pub fn get_work_sheet_title<W: CellGrid>(
    worksheet: &W,
    row: u32,
    column: u32,
    layout: &SpreadsheetLayout,
) -> WorksheetTitle {
    let text = worksheet.cell(row, column).text();
    let (group_name, year) = decode_title(&text);
    WorksheetTitle {
        year: year.unwrap_or_else(|| Local::now().year()),
        group_name,
        next_row: layout.content_start_row(),
    }
}

fn decode_title(text: &str) -> (String, Option<i32>) {
    let Some(caps) = TITLE.captures(text) else {
        return (text.to_string(), None);
    };
    let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
    let year = caps.get(2).and_then(|m| m.as_str().parse::<i32>().ok());
    match year {
        Some(year) if !name.is_empty() => (name.to_string(), Some(year)),
        // Matched, but a capture came back empty: keep the raw text.
        _ => (text.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::entities::{CellKind, Worksheet};

    use super::*;

    fn sheet_with_title(text: &str) -> Worksheet {
        let mut sheet = Worksheet::new("Sheet");
        sheet.set_cell(2, 1, text, CellKind::Title).unwrap();
        sheet
    }

    #[test]
    fn decodes_name_and_year() {
        let sheet = sheet_with_title("Fixed Accounts (2025)");
        let title = get_work_sheet_title(&sheet, 2, 1, &SpreadsheetLayout::default());
        assert_eq!(
            title,
            WorksheetTitle {
                year: 2025,
                group_name: "Fixed Accounts".to_string(),
                next_row: 14,
            }
        );
    }

    #[rstest]
    #[case("Other releases", "Other releases")]
    #[case("  Padded  ", "Padded")]
    #[case("", "")]
    #[case("Budget (25)", "Budget (25)")]
    fn falls_back_to_current_year(#[case] text: &str, #[case] expected_name: &str) {
        let sheet = sheet_with_title(text);
        let title = get_work_sheet_title(&sheet, 2, 1, &SpreadsheetLayout::default());
        assert_eq!(title.group_name, expected_name);
        assert_eq!(title.year, Local::now().year());
    }

    #[test]
    fn rendered_title_without_space_decodes() {
        let sheet = sheet_with_title("Personal(2024)");
        let title = get_work_sheet_title(&sheet, 2, 1, &SpreadsheetLayout::default());
        assert_eq!(title.group_name, "Personal");
        assert_eq!(title.year, 2024);
    }

    #[test]
    fn next_row_follows_layout_offsets() {
        let layout = SpreadsheetLayout {
            title_merge: 4,
            top_space: 0,
            bottom_space: 1,
            ..Default::default()
        };
        let sheet = sheet_with_title("Anything (1999)");
        assert_eq!(get_work_sheet_title(&sheet, 2, 1, &layout).next_row, 6);
    }
}
