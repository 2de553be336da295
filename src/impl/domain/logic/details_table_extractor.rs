use std::collections::HashMap;

use tracing::debug;

use crate::entities::{
    Bill, BillType, CellGrid, DetailData, Expense, ExpenseParams, SpreadsheetLayout, Supplier,
    TableScan,
};

use super::group_table_extractor::accumulate_group_tables;

/// Scans type-tagged blocks: a bill-type cell in the marker column followed
/// by a run of group tables. Stops at an empty cell or at a type none of the
/// given bills has.
pub fn generate_details_table<W: CellGrid>(
    worksheet: &W,
    bills: &[Bill],
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> TableScan {
    let lookup: HashMap<BillType, &Bill> = bills.iter().map(|b| (b.bill_type, b)).collect();

    let mut data = Vec::new();
    let mut row = start_row;
    loop {
        let text = worksheet.cell(row, layout.group_marker_column).text();
        if text.is_empty() {
            break;
        }
        let Some(bill) = BillType::from_text(&text).and_then(|t| lookup.get(&t)) else {
            break;
        };
        let groups = accumulate_group_tables(worksheet, row + 1, &bill.reference(), layout);
        debug!(
            row,
            bill = bill.name.as_str(),
            expenses = groups.acc.len(),
            "read type-tagged block"
        );
        let expenses = groups.acc.into_iter().map(detail_to_expense).collect();
        data.push(bill.with_expenses(expenses));
        row = groups.last_row;
    }
    TableScan {
        data,
        next_row: row,
    }
}

fn detail_to_expense(detail: DetailData) -> Expense {
    Expense::new(ExpenseParams {
        bill: detail.bill,
        name: detail.supplier.clone(),
        supplier: Supplier {
            name: detail.supplier,
        },
        months: detail.months,
        ..Default::default()
    })
}
