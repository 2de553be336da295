use tracing::debug;

use crate::entities::{Bill, BillType, CellGrid, ExtractedSheet, SpreadsheetLayout};

use super::{
    credit_card_extractor::generate_credit_card_table,
    details_table_extractor::generate_details_table,
    report_table_extractor::{parse_detail_tables, parse_summary_table},
    title_parser::get_work_sheet_title,
};

/// Extracts bills from `start_row` on: type-tagged group blocks for the
/// non-credit-card bills, then credit-card blocks from where that scan
/// stopped. A scan that did not advance contributes nothing, even if it
/// returned data.
pub fn parse_to_details_table<W: CellGrid>(
    worksheet: &W,
    bills: &[Bill],
    start_row: u32,
    group_name: &str,
    layout: &SpreadsheetLayout,
) -> Vec<Bill> {
    let (credit_card_bills, secondary_bills): (Vec<Bill>, Vec<Bill>) = bills
        .iter()
        .cloned()
        .partition(|b| b.bill_type == BillType::CreditCard);

    let secondary = generate_details_table(worksheet, &secondary_bills, start_row, layout);
    let credit_card = generate_credit_card_table(
        worksheet,
        &credit_card_bills,
        secondary.next_row,
        group_name,
        layout,
    );
    debug!(
        start_row,
        secondary_end = secondary.next_row,
        credit_card_end = credit_card.next_row,
        "parsed detail tables"
    );

    let mut result = Vec::new();
    if secondary.next_row != start_row {
        result.extend(secondary.data);
    }
    if credit_card.next_row != secondary.next_row {
        result.extend(credit_card.data);
    }
    result
}

/// Extracts a whole worksheet: the title, an optional summary table, any
/// flat per-type detail tables, then the bill blocks.
pub fn parse_worksheet<W: CellGrid>(
    worksheet: &W,
    bills: &[Bill],
    layout: &SpreadsheetLayout,
) -> ExtractedSheet {
    let title = get_work_sheet_title(worksheet, layout.title_row(), layout.title_column, layout);
    let (summary, row) =
        parse_summary_table(worksheet, title.next_row, layout.table_column, layout);
    let (detail_tables, row) = parse_detail_tables(worksheet, row, layout.table_column, layout);
    let bills = parse_to_details_table(worksheet, bills, row, &title.group_name, layout);
    ExtractedSheet {
        title,
        summary,
        detail_tables,
        bills,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::logic::group_table_extractor::tests::write_group_table,
        entities::{Bank, BillParams, CellKind, Worksheet},
    };

    use super::*;

    fn bill(bill_type: BillType, name: &str) -> Bill {
        Bill::new(BillParams {
            id: name.to_string(),
            bill_type,
            name: name.to_string(),
            year: 2025,
            bank: Bank {
                name: "Nubank".to_string(),
            },
            expenses: None,
        })
    }

    #[test]
    fn nothing_consumed_yields_empty_result() {
        let mut sheet = Worksheet::new("Sheet");
        sheet.set_cell(14, 2, "Loose text", CellKind::Body).unwrap();
        let bills = vec![
            bill(BillType::Pix, "Home Pix Nubank"),
            bill(BillType::CreditCard, "Home Credit Card Nubank"),
        ];
        let result =
            parse_to_details_table(&sheet, &bills, 14, "Home", &SpreadsheetLayout::default());
        assert!(result.is_empty());
    }

    #[test]
    fn credit_card_scan_starts_where_secondary_stopped() {
        let mut sheet = Worksheet::new("Sheet");
        sheet.set_cell(14, 3, "PIX", CellKind::Title).unwrap();
        write_group_table(&mut sheet, 15, &[(4, "Cleaning", 80.0, true)]);
        sheet.set_cell(30, 2, "CREDIT_CARD(Nubank)", CellKind::Title).unwrap();
        sheet.merge(30, 2, 15).unwrap();
        sheet.set_cell(32, 2, "Gym", CellKind::Body).unwrap();
        sheet.set_cell(32, 3, 90.0, CellKind::Body).unwrap();
        sheet.set_cell(32, 16, 90.0, CellKind::Body).unwrap();
        sheet.set_cell(33, 2, "TOTAL", CellKind::Footer).unwrap();

        let bills = vec![
            bill(BillType::Pix, "Home Pix Nubank"),
            bill(BillType::CreditCard, "Home Credit Card Nubank"),
        ];
        let result =
            parse_to_details_table(&sheet, &bills, 14, "Home", &SpreadsheetLayout::default());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].bill_type, BillType::Pix);
        assert_eq!(result[1].bill_type, BillType::CreditCard);
        assert_eq!(result[1].expense_list()[0].name, "Home Gym");
    }

    #[test]
    fn worksheet_title_drives_group_name() {
        let mut sheet = Worksheet::new("Sheet");
        sheet.set_cell(2, 1, "Home (2024)", CellKind::Title).unwrap();
        sheet.set_cell(14, 2, "CREDIT_CARD(Nubank)", CellKind::Title).unwrap();
        sheet.merge(14, 2, 15).unwrap();
        sheet.set_cell(16, 2, "Gym", CellKind::Body).unwrap();
        sheet.set_cell(16, 3, 90.0, CellKind::Body).unwrap();
        sheet.set_cell(16, 16, 90.0, CellKind::Body).unwrap();
        sheet.set_cell(17, 2, "TOTAL", CellKind::Footer).unwrap();

        let bills = vec![bill(BillType::CreditCard, "Home Credit Card Nubank")];
        let extracted = parse_worksheet(&sheet, &bills, &SpreadsheetLayout::default());
        assert_eq!(extracted.title.year, 2024);
        assert!(extracted.summary.is_empty());
        assert!(extracted.detail_tables.is_empty());
        assert_eq!(extracted.bills.len(), 1);
        assert_eq!(extracted.bills[0].total, 90.0);
    }
}
