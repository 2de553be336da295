use tracing::{debug, warn};

use crate::entities::{BillType, CellGrid, DetailTableRows, SpreadsheetLayout, SummaryRow};

use super::utils::{read_body_rows, row_after_block, BILL_HEADER, TYPE_HEADER};

/// Reads a rendered summary table (headers row starting with `TYPE`) back
/// into per-bill rows. Returns the rows and the first row after the table;
/// without a summary header nothing is consumed.
pub fn parse_summary_table<W: CellGrid>(
    worksheet: &W,
    start_row: u32,
    column: u32,
    layout: &SpreadsheetLayout,
) -> (Vec<SummaryRow>, u32) {
    if worksheet.cell(start_row, column).text() != TYPE_HEADER {
        return (vec![], start_row);
    }
    let (rows, end_row) = read_body_rows(worksheet, start_row + 1, column, true, layout);
    let summary = rows
        .into_iter()
        .filter_map(|row| {
            let Some(bill_type) = BillType::from_text(&row.label) else {
                warn!(label = row.label.as_str(), "summary row with unknown bill type");
                return None;
            };
            Some(SummaryRow {
                bill_type,
                bank: row.bank.unwrap_or_default(),
                months: row.months,
                paid: row.paid,
                total: row.total,
            })
        })
        .collect();
    (summary, row_after_block(worksheet, end_row, column, layout))
}

/// Reads consecutive flat per-type detail tables: a bill-type title, a
/// headers row starting with `BILL`, one row per bill and a footer.
pub fn parse_detail_tables<W: CellGrid>(
    worksheet: &W,
    start_row: u32,
    column: u32,
    layout: &SpreadsheetLayout,
) -> (Vec<DetailTableRows>, u32) {
    let mut tables = Vec::new();
    let mut row = start_row;
    loop {
        let Some(bill_type) = BillType::from_text(&worksheet.cell(row, column).text()) else {
            break;
        };
        if worksheet.cell(row + 1, column).text() != BILL_HEADER {
            break;
        }
        let (rows, end_row) = read_body_rows(worksheet, row + 2, column, true, layout);
        debug!(row, bill_type = bill_type.as_str(), rows = rows.len(), "read detail table");
        tables.push(DetailTableRows { bill_type, rows });
        row = row_after_block(worksheet, end_row, column, layout);
    }
    (tables, row)
}
