use fractic_server_error::ServerError;

use crate::{
    domain::usecases::{
        extract_usecase::{ExtractUsecase as _, ExtractUsecaseImpl},
        import_usecase::{ImportUsecase as _, ImportUsecaseImpl},
        render_usecase::{RenderUsecase as _, RenderUsecaseImpl},
    },
    entities::{Bill, ExtractedSheet, ReportGroup, SpreadsheetLayout, Workbook},
    presentation::csv_printer::CsvPrinter,
};

/// Worksheet name and its CSV export.
pub type CsvSheet = (String, String);

pub struct FinanceSheetUtil {
    extract_usecase: ExtractUsecaseImpl,
    render_usecase: RenderUsecaseImpl,
    import_usecase: ImportUsecaseImpl,
    printer: CsvPrinter,
}

impl FinanceSheetUtil {
    pub fn new() -> Self {
        Self::with_layout(SpreadsheetLayout::default())
    }

    pub fn with_layout(layout: SpreadsheetLayout) -> Self {
        Self {
            extract_usecase: ExtractUsecaseImpl::new(layout.clone()),
            render_usecase: RenderUsecaseImpl::new(layout),
            import_usecase: ImportUsecaseImpl::new(),
            printer: CsvPrinter::new(),
        }
    }

    pub async fn extract_from_string(
        &self,
        worksheet_ron: &str,
        bills_json: &str,
    ) -> Result<ExtractedSheet, ServerError> {
        self.extract_usecase
            .from_string(worksheet_ron, bills_json)
            .await
    }

    pub async fn extract_from_file<T>(
        &self,
        worksheet_ron: T,
        bills_json: T,
    ) -> Result<ExtractedSheet, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.extract_usecase
            .from_file(worksheet_ron, bills_json)
            .await
    }

    pub async fn render(&self, groups: &[ReportGroup]) -> Result<Workbook, ServerError> {
        self.render_usecase.render(groups).await
    }

    pub async fn render_from_string(
        &self,
        group_name: &str,
        year: i32,
        bills_json: &str,
    ) -> Result<Workbook, ServerError> {
        self.render_usecase
            .from_string(group_name, year, bills_json)
            .await
    }

    pub async fn render_to_csv(
        &self,
        groups: &[ReportGroup],
    ) -> Result<Vec<CsvSheet>, ServerError> {
        let workbook = self.render_usecase.render(groups).await?;
        workbook
            .worksheets()
            .iter()
            .map(|w| Ok((w.name().to_string(), self.printer.print_worksheet(w)?)))
            .collect()
    }

    pub async fn import_expenses_from_string(
        &self,
        bill: &Bill,
        expenses_csv: &str,
    ) -> Result<Bill, ServerError> {
        self.import_usecase.from_string(bill, expenses_csv).await
    }

    pub async fn import_expenses_from_file<T>(
        &self,
        bill: &Bill,
        expenses_csv: T,
    ) -> Result<Bill, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.import_usecase.from_file(bill, expenses_csv).await
    }
}
