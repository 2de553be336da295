use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::report_renderer::spreadsheet_processing,
        repositories::records_repository::RecordsRepository,
    },
    entities::{Bill, ReportGroup, SpreadsheetLayout, Workbook},
};

#[async_trait]
pub trait RenderUsecase: Send + Sync {
    /// Renders one worksheet per group, named after the group.
    async fn render(&self, groups: &[ReportGroup]) -> Result<Workbook, ServerError>;

    /// Renders the bills in `bills_json` as a single group.
    async fn from_string(
        &self,
        group_name: &str,
        year: i32,
        bills_json: &str,
    ) -> Result<Workbook, ServerError>;
}

pub(crate) struct RenderUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
    layout: SpreadsheetLayout,
}

#[async_trait]
impl<R1> RenderUsecase for RenderUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn render(&self, groups: &[ReportGroup]) -> Result<Workbook, ServerError> {
        let mut workbook = Workbook::new();
        for group in groups {
            let worksheet = workbook.create_worksheet(group.group_name.as_str());
            let last_row = spreadsheet_processing(worksheet, group, &self.layout)?;
            info!(
                group = group.group_name.as_str(),
                year = group.year,
                last_row,
                "rendered worksheet"
            );
        }
        Ok(workbook)
    }

    async fn from_string(
        &self,
        group_name: &str,
        year: i32,
        bills_json: &str,
    ) -> Result<Workbook, ServerError> {
        let bills: Vec<Bill> = self
            .records_repository
            .bills_from_string(bills_json)?
            .into_iter()
            .filter(|b| b.year == year)
            .collect();
        self.render(&[ReportGroup::new(group_name, year, bills)]).await
    }
}

impl RenderUsecaseImpl {
    pub(crate) fn new(layout: SpreadsheetLayout) -> Self {
        RenderUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
            layout,
        }
    }
}
