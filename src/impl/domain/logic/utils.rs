use crate::entities::{BodyData, CellGrid, Month, MonthCycle, SpreadsheetLayout};

pub(crate) const TYPE_HEADER: &str = "TYPE";
pub(crate) const BANK_HEADER: &str = "BANK";
pub(crate) const BILL_HEADER: &str = "BILL";
pub(crate) const NAME_HEADER: &str = "NAME";
pub(crate) const PAID_HEADER: &str = "PAID";
pub(crate) const TOTAL_HEADER: &str = "TOTAL";

/// Leading label headers followed by the twelve month headers, `PAID` and
/// `TOTAL`.
pub(crate) fn table_headers(leading: &[&str]) -> Vec<String> {
    leading
        .iter()
        .map(|h| h.to_string())
        .chain(Month::ALL.into_iter().map(|m| m.name().to_uppercase()))
        .chain([PAID_HEADER.to_string(), TOTAL_HEADER.to_string()])
        .collect()
}

/// `"{group_name} {text}"`, without a leading space when the group is empty.
pub(crate) fn compose_name(group_name: &str, text: &str) -> String {
    format!("{} {}", group_name.trim(), text.trim())
        .trim()
        .to_string()
}

/// Steps over the single blank row the renderer leaves between tables.
pub(crate) fn skip_gap<W: CellGrid>(worksheet: &W, row: u32, column: u32) -> u32 {
    let cell = worksheet.cell(row, column);
    if !cell.is_merged && cell.value.is_empty() {
        row + 1
    } else {
        row
    }
}

/// First row of whatever follows a block that ended at `end_row`. A block
/// closed by the stop token is followed by one blank gap row; a block closed
/// by an empty cell already ended on that gap.
pub(crate) fn row_after_block<W: CellGrid>(
    worksheet: &W,
    end_row: u32,
    column: u32,
    layout: &SpreadsheetLayout,
) -> u32 {
    if worksheet.cell(end_row, column).text() == layout.stop_token {
        skip_gap(worksheet, end_row + 1, column)
    } else {
        end_row + 1
    }
}

/// Reads the value/paid/total columns that follow a row's label columns:
/// twelve month values starting at `column`, then the paid marker, then the
/// total. The paid marker applies to every month.
pub(crate) fn read_month_columns<W: CellGrid>(
    worksheet: &W,
    row: u32,
    column: u32,
    layout: &SpreadsheetLayout,
) -> (MonthCycle, bool, f64) {
    let paid_text = worksheet.cell(row, column + 12).text();
    let paid = layout.is_paid_text(if paid_text.is_empty() {
        &layout.unpaid_marker
    } else {
        &paid_text
    });
    let months = Month::ALL.into_iter().fold(MonthCycle::new(), |acc, m| {
        let value = worksheet.cell(row, column + m.index() as u32).value.number();
        acc.with(m, value, paid)
    });
    let total = worksheet.cell(row, column + 13).value.number();
    (months, paid, total)
}

/// Reads body rows (label, optional bank, months, paid, total) downwards from
/// `row` until an empty label or the stop token. Returns the rows and the row
/// where reading stopped.
pub(crate) fn read_body_rows<W: CellGrid>(
    worksheet: &W,
    row: u32,
    column: u32,
    has_bank: bool,
    layout: &SpreadsheetLayout,
) -> (Vec<BodyData>, u32) {
    let mut rows = Vec::new();
    let mut cursor = row;
    loop {
        let label = worksheet.cell(cursor, column).text();
        if label.is_empty() || label == layout.stop_token {
            return (rows, cursor);
        }
        let (bank, months_column) = if has_bank {
            (Some(worksheet.cell(cursor, column + 1).text()), column + 2)
        } else {
            (None, column + 1)
        };
        let (months, paid, total) = read_month_columns(worksheet, cursor, months_column, layout);
        rows.push(BodyData {
            label,
            bank,
            months,
            paid,
            total,
        });
        cursor += 1;
    }
}
