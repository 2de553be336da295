use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::{
        Bill, BillType, BodyData, CellKind, Expense, ReportGroup, SpreadsheetLayout, TableParams,
        Worksheet,
    },
    presentation::table_writer::{add_cell, add_table, add_tables},
};

use super::{
    body_builder::{all_records_paid, build_body_data, BodySource},
    utils::{table_headers, BANK_HEADER, BILL_HEADER, NAME_HEADER, TYPE_HEADER},
};

/// Width of a credit-card table: label, 12 months, paid, total.
const CREDIT_CARD_TABLE_WIDTH: u32 = 15;

/// Renders a report group onto `worksheet`: the `"{group}({year})"` title,
/// the summary table (if requested), then one section per requested bill
/// type. Returns the row after the last section.
pub fn spreadsheet_processing(
    worksheet: &mut Worksheet,
    group: &ReportGroup,
    layout: &SpreadsheetLayout,
) -> Result<u32, ServerError> {
    add_cell(
        worksheet,
        layout.title_row(),
        layout.title_column,
        format!("{}({})", group.group_name, group.year),
        CellKind::Title,
        layout.title_merge,
    )?;
    let mut row = layout.content_start_row();
    if group.summary {
        row = processing_spreadsheet_table(worksheet, &group.bills, row, layout)?;
    }
    let next_row = processing_spreadsheet_secondary_tables(worksheet, group, row, layout)?;
    debug!(
        group = group.group_name.as_str(),
        bills = group.bills.len(),
        next_row,
        "rendered report group"
    );
    Ok(next_row)
}

/// Summary table: one row per bill (type, bank, months summed over its
/// expenses) and a `TOTAL` footer across bills.
pub(crate) fn processing_spreadsheet_table(
    worksheet: &mut Worksheet,
    bills: &[Bill],
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> Result<u32, ServerError> {
    if bills.is_empty() {
        return Ok(start_row);
    }
    let body: Vec<BodyData> = bills
        .iter()
        .map(|bill| {
            build_body_data(
                BodySource::Many {
                    records: bill.expense_list(),
                    all_paid: &all_records_paid::<Expense>,
                },
                bill.bill_type.as_str(),
                Some(bill.bank.name.clone()),
            )
        })
        .collect();
    let footer = footer_row(&body, Some(String::new()), layout);
    let result = add_table(
        worksheet,
        &TableParams {
            title: None,
            headers: table_headers(&[TYPE_HEADER, BANK_HEADER]),
            body,
            footer: Some(footer),
            start_row,
            start_column: layout.table_column,
            table_width: 16,
        },
        layout,
    )?;
    Ok(result.next_row + 1)
}

/// Flat table for one bill type: one row per bill of that type and a
/// `TOTAL` footer.
pub(crate) fn processing_spreadsheet_detail_table(
    worksheet: &mut Worksheet,
    bill_type: BillType,
    bills: &[Bill],
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> Result<u32, ServerError> {
    let body: Vec<BodyData> = bills
        .iter()
        .filter(|b| b.bill_type == bill_type)
        .map(|bill| {
            build_body_data(
                BodySource::Many {
                    records: bill.expense_list(),
                    all_paid: &all_records_paid::<Expense>,
                },
                bill.name.as_str(),
                Some(bill.bank.name.clone()),
            )
        })
        .collect();
    if body.is_empty() {
        return Ok(start_row);
    }
    let footer = footer_row(&body, Some(String::new()), layout);
    let result = add_table(
        worksheet,
        &TableParams {
            title: Some(bill_type.as_str().to_string()),
            headers: table_headers(&[BILL_HEADER, BANK_HEADER]),
            body,
            footer: Some(footer),
            start_row,
            start_column: layout.table_column,
            table_width: 16,
        },
        layout,
    )?;
    Ok(result.next_row + 1)
}

/// Renders the sections for `group.types` in order. Credit cards get one
/// block per bill; every other type gets one flat table.
pub(crate) fn processing_spreadsheet_secondary_tables(
    worksheet: &mut Worksheet,
    group: &ReportGroup,
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> Result<u32, ServerError> {
    let mut row = start_row;
    for bill_type in &group.types {
        if *bill_type != BillType::CreditCard {
            row = processing_spreadsheet_detail_table(
                worksheet,
                *bill_type,
                &group.bills,
                row,
                layout,
            )?;
            continue;
        }
        for bill in group.bills.iter().filter(|b| b.bill_type == BillType::CreditCard) {
            row = processing_credit_card_tables(worksheet, bill, &group.group_name, row, layout)?;
        }
    }
    Ok(row)
}

/// One credit-card block: the parent expenses with a `TOTAL` footer, then a
/// table of children for every parent that has any.
fn processing_credit_card_tables(
    worksheet: &mut Worksheet,
    bill: &Bill,
    group_name: &str,
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> Result<u32, ServerError> {
    let parents: Vec<&Expense> = bill
        .expense_list()
        .iter()
        .filter(|e| !e.is_aggregate)
        .collect();
    if parents.is_empty() {
        return Ok(start_row);
    }
    let headers = table_headers(&[NAME_HEADER]);
    let bank_name = match bill.bank.name.trim() {
        "" => layout.default_bank_name.as_str(),
        name => name,
    };

    let body: Vec<BodyData> = parents
        .iter()
        .map(|e| expense_row(e, group_name))
        .collect();
    let footer = footer_row(&body, None, layout);
    let result = add_table(
        worksheet,
        &TableParams {
            title: Some(format!("{}({})", BillType::CreditCard.as_str(), bank_name)),
            headers: headers.clone(),
            body,
            footer: Some(footer),
            start_row,
            start_column: layout.credit_card_column,
            table_width: CREDIT_CARD_TABLE_WIDTH,
        },
        layout,
    )?;
    let mut next_row = result.next_row + 1;

    let children: Vec<TableParams> = parents
        .iter()
        .filter(|p| !p.child_list().is_empty())
        .map(|parent| TableParams {
            title: Some(parent.label(group_name)),
            headers: headers.clone(),
            body: parent
                .child_list()
                .iter()
                .map(|child| expense_row(child, group_name))
                .collect(),
            footer: None,
            start_row: next_row,
            start_column: layout.credit_card_column,
            table_width: CREDIT_CARD_TABLE_WIDTH,
        })
        .collect();
    if !children.is_empty() {
        next_row = add_tables(worksheet, &children, next_row, layout)?.next_row + 1;
    }
    debug!(
        bill = bill.name.as_str(),
        parents = parents.len(),
        child_tables = children.len(),
        "rendered credit-card block"
    );
    Ok(next_row)
}

fn expense_row(expense: &Expense, group_name: &str) -> BodyData {
    build_body_data(BodySource::One(expense), expense.label(group_name), None)
}

fn footer_row(body: &[BodyData], bank: Option<String>, layout: &SpreadsheetLayout) -> BodyData {
    build_body_data(
        BodySource::Many {
            records: body,
            all_paid: &all_records_paid::<BodyData>,
        },
        layout.stop_token.as_str(),
        bank,
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::logic::{
            details_parser::parse_worksheet,
            report_table_extractor::{parse_detail_tables, parse_summary_table},
        },
        entities::{Bank, BillParams, CellGrid, ExpenseParams, Month, MonthCycle, Supplier},
    };

    use super::*;

    fn expense(name: &str, january: f64, paid: bool) -> Expense {
        Expense::new(ExpenseParams {
            name: name.to_string(),
            supplier: Supplier {
                name: name.to_string(),
            },
            months: MonthCycle::new().with(Month::January, january, paid),
            ..Default::default()
        })
    }

    fn bill(bill_type: BillType, name: &str, expenses: Vec<Expense>) -> Bill {
        Bill::new(BillParams {
            id: name.to_string(),
            bill_type,
            name: name.to_string(),
            year: 2025,
            bank: Bank {
                name: "Nubank".to_string(),
            },
            expenses: Some(expenses),
        })
    }

    fn credit_card() -> Bill {
        let mut amazon = expense("Home Amazon", 120.0, false);
        amazon.children = Some(vec![
            Expense {
                is_aggregate: true,
                ..expense("Home Kindle", 70.0, false)
            },
            Expense {
                is_aggregate: true,
                ..expense("Home Prime", 50.0, false)
            },
        ]);
        bill(
            BillType::CreditCard,
            "Home Credit Card Nubank",
            vec![expense("Home Netflix", 39.5, true), amazon],
        )
    }

    #[test]
    fn writes_title_and_summary() {
        let layout = SpreadsheetLayout::default();
        let mut sheet = Worksheet::new("Home");
        let group = ReportGroup {
            types: vec![],
            ..ReportGroup::new(
                "Home",
                2025,
                vec![bill(BillType::Pix, "Home Pix Nubank", vec![expense("Home Gas", 60.0, true)])],
            )
        };

        let next_row = spreadsheet_processing(&mut sheet, &group, &layout).unwrap();
        assert_eq!(sheet.cell(2, 1).text(), "Home(2025)");
        assert_eq!(sheet.cell(2, 1).merge_span, 10);
        assert_eq!(sheet.cell(14, 2).text(), "TYPE");
        assert_eq!(sheet.cell(15, 2).text(), "PIX");
        assert_eq!(sheet.cell(15, 3).text(), "Nubank");
        assert_eq!(sheet.cell(16, 2).text(), "TOTAL");
        assert!(sheet.cell(16, 3).value.is_empty());
        assert_eq!(next_row, 18);

        let (summary, row) = parse_summary_table(&sheet, 14, 2, &layout);
        assert_eq!(row, 18);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].bill_type, BillType::Pix);
        assert_eq!(summary[0].months.get(Month::January), 60.0);
        assert!(summary[0].paid);
        assert_eq!(summary[0].total, 60.0);
    }

    #[test]
    fn empty_group_only_writes_title() {
        let layout = SpreadsheetLayout::default();
        let mut sheet = Worksheet::new("Empty");
        let next_row =
            spreadsheet_processing(&mut sheet, &ReportGroup::new("Empty", 2025, vec![]), &layout)
                .unwrap();
        assert_eq!(next_row, layout.content_start_row());
        assert_eq!(sheet.last_row(), 2);
    }

    #[test]
    fn detail_table_lists_bills_of_one_type() {
        let layout = SpreadsheetLayout::default();
        let mut sheet = Worksheet::new("Home");
        let bills = vec![
            bill(BillType::BankSlip, "Home Rent", vec![expense("Home Rent", 1500.0, true)]),
            bill(BillType::Pix, "Home Pix Nubank", vec![expense("Home Gas", 60.0, false)]),
            bill(BillType::BankSlip, "Home Water", vec![expense("Home Water", 80.0, false)]),
        ];

        let next_row =
            processing_spreadsheet_detail_table(&mut sheet, BillType::BankSlip, &bills, 20, &layout)
                .unwrap();
        assert_eq!(next_row, 26);
        assert_eq!(sheet.cell(20, 2).text(), "BANK_SLIP");
        assert_eq!(sheet.cell(20, 2).merge_span, 16);

        let (tables, row) = parse_detail_tables(&sheet, 20, 2, &layout);
        assert_eq!(row, 26);
        assert_eq!(tables.len(), 1);
        let rows = &tables[0].rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Home Rent");
        assert!(rows[0].paid);
        assert_eq!(rows[1].label, "Home Water");
        assert_eq!(rows[1].total, 80.0);
    }

    #[test]
    fn detail_table_without_bills_writes_nothing() {
        let mut sheet = Worksheet::new("Home");
        let next_row = processing_spreadsheet_detail_table(
            &mut sheet,
            BillType::AccountDebit,
            &[],
            20,
            &SpreadsheetLayout::default(),
        )
        .unwrap();
        assert_eq!(next_row, 20);
        assert_eq!(sheet.last_row(), 0);
    }

    #[test]
    fn credit_card_block_writes_parents_then_children() {
        let layout = SpreadsheetLayout::default();
        let mut sheet = Worksheet::new("Home");
        let next_row =
            processing_credit_card_tables(&mut sheet, &credit_card(), "Home", 14, &layout).unwrap();

        assert_eq!(sheet.cell(14, 2).text(), "CREDIT_CARD(Nubank)");
        assert_eq!(sheet.cell(15, 2).text(), "NAME");
        assert_eq!(sheet.cell(16, 2).text(), "Netflix");
        assert_eq!(sheet.cell(17, 2).text(), "Amazon");
        assert_eq!(sheet.cell(18, 2).text(), "TOTAL");
        assert_eq!(sheet.cell(18, 16).value.number(), 159.5);
        assert_eq!(sheet.cell(20, 2).text(), "Amazon");
        assert_eq!(sheet.cell(20, 2).merge_span, 15);
        assert_eq!(sheet.cell(22, 2).text(), "Kindle");
        assert_eq!(sheet.cell(23, 2).text(), "Prime");
        assert_eq!(next_row, 25);
    }

    #[test]
    fn rendered_credit_card_block_extracts_back() {
        let layout = SpreadsheetLayout::default();
        let mut sheet = Worksheet::new("Home");
        let source = credit_card();
        let group = ReportGroup {
            summary: false,
            ..ReportGroup::new("Home", 2025, vec![source.clone()])
        };
        spreadsheet_processing(&mut sheet, &group, &layout).unwrap();

        let template = Bill {
            expenses: None,
            ..source
        };
        let extracted = parse_worksheet(&sheet, &[template], &layout);
        assert_eq!(extracted.bills.len(), 1);
        let parents = extracted.bills[0].expense_list();
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[1].name, "Home Amazon");
        let children = parents[1].child_list();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "Home Kindle");
        assert_eq!(children[0].months.get(Month::January), 70.0);
    }
}
