use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::entities::{
    Bill, CellGrid, Expense, ExpenseParams, ExpenseRef, SpreadsheetLayout, Supplier, TableScan,
};

use super::{
    text::{clean_text_by_list_text, humanize},
    utils::{compose_name, read_month_columns, row_after_block},
};

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z_]+)\(([^)]+)\)$").expect("hardcoded regex should be valid")
});

/// One credit-card row and the supplier names it contributes to the list
/// used to strip child names.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CreditCardRow {
    pub(crate) data: Expense,
    pub(crate) supplier_list: Vec<String>,
}

struct ExpenseBlock {
    expenses: Vec<Expense>,
    supplier_list: Vec<String>,
    /// Row holding the stop token or the first empty cell.
    end_row: u32,
}

/// Builds one row of a credit-card table: the label at `column`, twelve
/// month values after it, then the paid marker and the total.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_credit_card_body_data<W: CellGrid>(
    worksheet: &W,
    row: u32,
    column: u32,
    bill: &Bill,
    is_parent: bool,
    group_name: &str,
    supplier_list: &[String],
    layout: &SpreadsheetLayout,
) -> CreditCardRow {
    let text = worksheet.cell(row, column).text();
    let name = compose_name(group_name, &text);

    let mut known = vec![bill.name.clone()];
    if !is_parent {
        known.extend(supplier_list.iter().cloned());
    }
    let supplier = clean_text_by_list_text(&known, &name).unwrap_or_else(|| name.clone());
    let aggregate_name = if is_parent {
        String::new()
    } else {
        clean_text_by_list_text(supplier_list, &name).unwrap_or_default()
    };

    let (months, _, total) = read_month_columns(worksheet, row, column + 1, layout);
    let data = Expense::new(ExpenseParams {
        bill: bill.reference(),
        name,
        supplier: Supplier {
            name: supplier.clone(),
        },
        total: Some(total),
        months,
        is_aggregate: !is_parent,
        aggregate_name,
        ..Default::default()
    });
    CreditCardRow {
        data,
        supplier_list: if is_parent { vec![supplier] } else { vec![] },
    }
}

/// Scans credit-card blocks starting at `start_row`. Each block opens with a
/// `TYPE(Bank)` header naming a bill `"{group} {Type} {Bank}"`; headers with
/// no matching bill are skipped one row at a time. Parent rows run until the
/// stop token and may be followed by merged child tables titled after a
/// parent.
pub fn generate_credit_card_table<W: CellGrid>(
    worksheet: &W,
    bills: &[Bill],
    start_row: u32,
    group_name: &str,
    layout: &SpreadsheetLayout,
) -> TableScan {
    let column = layout.credit_card_column;

    let mut data = Vec::new();
    let mut row = start_row;
    loop {
        let header = worksheet.cell(row, column).text();
        let Some(caps) = BLOCK_HEADER.captures(&header) else {
            break;
        };
        let bill_type = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let bank_name = match caps.get(2).map(|m| m.as_str().trim()) {
            Some(bank) if !bank.is_empty() => bank.to_string(),
            _ => layout.default_bank_name.clone(),
        };
        let expected_name = format!("{} {} {}", group_name, humanize(bill_type), bank_name);
        let Some(bill) = bills.iter().find(|b| b.name == expected_name) else {
            warn!(row, header = header.as_str(), "no bill named '{}'", expected_name);
            row += 1;
            continue;
        };

        let parents = read_expenses_block(
            worksheet,
            bill,
            &[],
            row + 2,
            &layout.stop_token,
            None,
            group_name,
            layout,
        );
        let after_parents = row_after_block(worksheet, parents.end_row, column, layout);
        let (expenses, next_row) = process_parent_with_children(
            worksheet,
            bill,
            parents.expenses,
            &parents.supplier_list,
            after_parents,
            group_name,
            layout,
        );
        debug!(row, bill = bill.name.as_str(), parents = expenses.len(), "read credit-card block");
        data.push(bill.with_expenses(expenses));
        row = next_row;
    }
    TableScan {
        data,
        next_row: row,
    }
}

#[allow(clippy::too_many_arguments)]
fn read_expenses_block<W: CellGrid>(
    worksheet: &W,
    bill: &Bill,
    supplier_list: &[String],
    start_row: u32,
    stop_token: &str,
    parent: Option<&ExpenseRef>,
    group_name: &str,
    layout: &SpreadsheetLayout,
) -> ExpenseBlock {
    let column = layout.credit_card_column;
    let mut expenses = Vec::new();
    let mut suppliers = supplier_list.to_vec();
    let mut row = start_row;
    loop {
        let text = worksheet.cell(row, column).text();
        if text.is_empty() || text == stop_token {
            break;
        }
        let CreditCardRow {
            mut data,
            supplier_list,
        } = build_credit_card_body_data(
            worksheet,
            row,
            column,
            bill,
            parent.is_none(),
            group_name,
            &suppliers,
            layout,
        );
        if let Some(parent) = parent {
            data.parent = Some(parent.clone());
        }
        expenses.push(data);
        suppliers.extend(supplier_list);
        row += 1;
    }
    ExpenseBlock {
        expenses,
        supplier_list: suppliers,
        end_row: row,
    }
}

/// Attaches child tables that follow a parent block. A child table is a
/// merged header (spanning more than 2 columns) whose composed name matches
/// a parent; scanning stops at the first header that does not.
fn process_parent_with_children<W: CellGrid>(
    worksheet: &W,
    bill: &Bill,
    mut parents: Vec<Expense>,
    supplier_list: &[String],
    start_row: u32,
    group_name: &str,
    layout: &SpreadsheetLayout,
) -> (Vec<Expense>, u32) {
    let column = layout.credit_card_column;
    let mut row = start_row;
    loop {
        let header = worksheet.cell(row, column);
        if !(header.is_merged && header.merge_span > 2) {
            break;
        }
        let parent_name = compose_name(group_name, &header.text());
        let Some(index) = parents.iter().position(|p| p.name == parent_name) else {
            break;
        };
        let parent_ref = parents[index].reference();
        let block = read_expenses_block(
            worksheet,
            bill,
            supplier_list,
            row + 2,
            &layout.stop_token,
            Some(&parent_ref),
            group_name,
            layout,
        );
        let parent = &mut parents[index];
        parent
            .children
            .get_or_insert_with(Vec::new)
            .extend(block.expenses);
        row = row_after_block(worksheet, block.end_row, column, layout);
    }
    (parents, row)
}
