use tracing::debug;

use crate::entities::{
    AccumulatedGroupTables, BillRef, Cell, CellGrid, DetailData, GroupTable, Month, MonthCycle,
    SpreadsheetLayout,
};

/// Reads one vertical 12-month block: values at `column`, paid markers at
/// `column + 1`, one month per row starting at `row`. Returns `None` when the
/// block's title cell is empty.
pub fn build_detail_data<W: CellGrid>(
    worksheet: &W,
    row: u32,
    column: u32,
    title: &Cell,
    bill: &BillRef,
    layout: &SpreadsheetLayout,
) -> Option<DetailData> {
    let supplier = title.text();
    if supplier.is_empty() {
        return None;
    }
    let months = Month::ALL.into_iter().fold(MonthCycle::new(), |acc, m| {
        let month_row = row + m.index() as u32;
        let value = worksheet.cell(month_row, column).value.number();
        let paid = layout.is_paid_text(&worksheet.cell(month_row, column + 1).text());
        acc.with(m, value, paid)
    });
    Some(DetailData {
        months,
        bill: bill.clone(),
        supplier,
    })
}

/// Reads the three side-by-side blocks of a group table anchored at `row`.
/// The table is recognised by a marker cell merged over exactly 2 columns;
/// without it the scan is terminal and `next_row` stays at `row`.
pub fn build_group_table<W: CellGrid>(
    worksheet: &W,
    row: u32,
    bill: &BillRef,
    layout: &SpreadsheetLayout,
) -> GroupTable {
    let marker = worksheet.cell(row, layout.group_marker_column);
    if !(marker.is_merged && marker.merge_span == 2) {
        return GroupTable {
            data: vec![],
            next_row: row,
            has_next: false,
        };
    }
    let data = layout
        .group_block_columns
        .iter()
        .filter_map(|&column| {
            let title = worksheet.cell(row + 1, column);
            build_detail_data(worksheet, row + 2, column, &title, bill, layout)
        })
        .collect();
    GroupTable {
        data,
        next_row: row + layout.group_block_height,
        has_next: true,
    }
}

pub fn accumulate_group_tables<W: CellGrid>(
    worksheet: &W,
    start_row: u32,
    bill: &BillRef,
    layout: &SpreadsheetLayout,
) -> AccumulatedGroupTables {
    let mut acc = Vec::new();
    let mut row = start_row;
    loop {
        let table = build_group_table(worksheet, row, bill, layout);
        if !table.has_next {
            break;
        }
        debug!(row, blocks = table.data.len(), "read group table");
        acc.extend(table.data);
        row = table.next_row;
    }
    AccumulatedGroupTables { acc, last_row: row }
}
