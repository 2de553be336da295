use fractic_server_error::ServerError;

use crate::entities::{
    BodyData, CellKind, CellValue, Month, SpreadsheetLayout, TableParams, TableResult, Worksheet,
};

/// Writes one cell, merging it over `merge` columns when `merge > 1`.
pub(crate) fn add_cell(
    worksheet: &mut Worksheet,
    row: u32,
    column: u32,
    value: impl Into<CellValue>,
    kind: CellKind,
    merge: u32,
) -> Result<(), ServerError> {
    worksheet.set_cell(row, column, value, kind)?;
    worksheet.merge(row, column, merge)
}

/// Writes a table top-down: merged title (if any), headers, body rows, then
/// the footer (if any). A table with neither body nor footer writes nothing.
pub(crate) fn add_table(
    worksheet: &mut Worksheet,
    params: &TableParams,
    layout: &SpreadsheetLayout,
) -> Result<TableResult, ServerError> {
    if params.body.is_empty() && params.footer.is_none() {
        return Ok(TableResult {
            next_row: params.start_row,
        });
    }
    let column = params.start_column;
    let mut row = params.start_row;

    if let Some(title) = &params.title {
        add_cell(
            worksheet,
            row,
            column,
            title.as_str(),
            CellKind::Title,
            params.table_width,
        )?;
        row += 1;
    }
    if !params.headers.is_empty() {
        for (offset, header) in params.headers.iter().enumerate() {
            let header_column = column + offset as u32;
            add_cell(worksheet, row, header_column, header.as_str(), CellKind::Header, 1)?;
        }
        row += 1;
    }
    for data in &params.body {
        write_row(worksheet, row, column, data, CellKind::Body, layout)?;
        row += 1;
    }
    if let Some(footer) = &params.footer {
        write_row(worksheet, row, column, footer, CellKind::Footer, layout)?;
        row += 1;
    }
    Ok(TableResult { next_row: row })
}

/// Writes tables one under the other from `start_row`, one blank row apart.
/// The tables' own `start_row` is ignored. Writing nothing returns
/// `start_row`.
pub(crate) fn add_tables(
    worksheet: &mut Worksheet,
    tables: &[TableParams],
    start_row: u32,
    layout: &SpreadsheetLayout,
) -> Result<TableResult, ServerError> {
    let mut next_row = start_row;
    let mut written_any = false;
    for table in tables {
        let table_row = if written_any { next_row + 1 } else { next_row };
        let result = add_table(
            worksheet,
            &TableParams {
                start_row: table_row,
                ..table.clone()
            },
            layout,
        )?;
        if result.next_row != table_row {
            written_any = true;
            next_row = result.next_row;
        }
    }
    Ok(TableResult { next_row })
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    column: u32,
    data: &BodyData,
    kind: CellKind,
    layout: &SpreadsheetLayout,
) -> Result<(), ServerError> {
    add_cell(worksheet, row, column, data.label.as_str(), kind, 1)?;
    let mut months_column = column + 1;
    if let Some(bank) = &data.bank {
        if !bank.is_empty() {
            add_cell(worksheet, row, months_column, bank.as_str(), kind, 1)?;
        }
        months_column += 1;
    }
    for month in Month::ALL {
        let month_column = months_column + month.index() as u32;
        add_cell(worksheet, row, month_column, data.months.get(month), kind, 1)?;
    }
    add_cell(
        worksheet,
        row,
        months_column + 12,
        layout.paid_text(data.paid),
        kind,
        1,
    )?;
    add_cell(worksheet, row, months_column + 13, data.total, kind, 1)
}

#[cfg(test)]
mod tests {
    use crate::entities::{CellGrid, MonthCycle};

    use super::*;

    fn row(label: &str, january: f64) -> BodyData {
        let months = MonthCycle::new().with(Month::January, january, true);
        BodyData {
            label: label.to_string(),
            bank: None,
            total: months.total(),
            months,
            paid: true,
        }
    }

    fn table(start_row: u32, body: Vec<BodyData>) -> TableParams {
        TableParams {
            title: Some("CREDIT_CARD(Nubank)".to_string()),
            headers: vec!["NAME".to_string()],
            body,
            footer: Some(row("TOTAL", 0.0)),
            start_row,
            start_column: 2,
            table_width: 15,
        }
    }

    #[test]
    fn writes_title_headers_body_and_footer() {
        let mut sheet = Worksheet::new("Sheet");
        let layout = SpreadsheetLayout::default();
        let result = add_table(&mut sheet, &table(5, vec![row("Gym", 90.0)]), &layout).unwrap();

        assert_eq!(result.next_row, 9);
        let title = sheet.cell(5, 2);
        assert!(title.is_merged);
        assert_eq!(title.merge_span, 15);
        assert_eq!(sheet.kind(5, 2), Some(CellKind::Title));
        assert_eq!(sheet.cell(6, 2).text(), "NAME");
        assert_eq!(sheet.cell(7, 2).text(), "Gym");
        assert_eq!(sheet.cell(7, 3).value.number(), 90.0);
        assert_eq!(sheet.cell(7, 15).text(), "YES");
        assert_eq!(sheet.cell(7, 16).value.number(), 90.0);
        assert_eq!(sheet.cell(8, 2).text(), "TOTAL");
        assert_eq!(sheet.kind(8, 2), Some(CellKind::Footer));
    }

    #[test]
    fn empty_table_writes_nothing() {
        let mut sheet = Worksheet::new("Sheet");
        let params = TableParams {
            footer: None,
            ..table(5, vec![])
        };
        let result = add_table(&mut sheet, &params, &SpreadsheetLayout::default()).unwrap();
        assert_eq!(result.next_row, 5);
        assert_eq!(sheet.last_row(), 0);
    }

    #[test]
    fn tables_are_separated_by_one_blank_row() {
        let mut sheet = Worksheet::new("Sheet");
        let tables = vec![
            TableParams {
                footer: None,
                ..table(0, vec![row("A", 1.0)])
            },
            TableParams {
                footer: None,
                ..table(0, vec![row("B", 2.0)])
            },
        ];
        let result = add_tables(&mut sheet, &tables, 3, &SpreadsheetLayout::default()).unwrap();
        assert_eq!(sheet.cell(5, 2).text(), "A");
        assert!(sheet.cell(6, 2).value.is_empty());
        assert_eq!(sheet.cell(7, 2).text(), "CREDIT_CARD(Nubank)");
        assert_eq!(sheet.cell(9, 2).text(), "B");
        assert_eq!(result.next_row, 10);
    }

    #[test]
    fn empty_table_list_returns_start_row() {
        let mut sheet = Worksheet::new("Sheet");
        let result = add_tables(&mut sheet, &[], 12, &SpreadsheetLayout::default()).unwrap();
        assert_eq!(result.next_row, 12);
        assert_eq!(sheet.last_row(), 0);
    }

    #[test]
    fn rejects_zero_start_row() {
        let mut sheet = Worksheet::new("Sheet");
        let result = add_table(&mut sheet, &table(0, vec![row("A", 1.0)]), &SpreadsheetLayout::default());
        assert!(result.is_err());
    }
}
