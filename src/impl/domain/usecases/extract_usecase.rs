use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::details_parser::parse_worksheet,
        repositories::records_repository::RecordsRepository,
    },
    entities::{Bill, ExtractedSheet, SpreadsheetLayout, Worksheet},
};

#[async_trait]
pub trait ExtractUsecase: Send + Sync {
    /// Extracts `worksheet_ron` against the bills listed in `bills_json`.
    async fn from_string(
        &self,
        worksheet_ron: &str,
        bills_json: &str,
    ) -> Result<ExtractedSheet, ServerError>;

    async fn from_file<P>(
        &self,
        worksheet_ron: P,
        bills_json: P,
    ) -> Result<ExtractedSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ExtractUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
    layout: SpreadsheetLayout,
}

impl<R1: RecordsRepository> ExtractUsecaseImpl<R1> {
    fn extract(&self, worksheet: &Worksheet, bills: &[Bill]) -> ExtractedSheet {
        let extracted = parse_worksheet(worksheet, bills, &self.layout);
        info!(
            worksheet = worksheet.name(),
            group = extracted.title.group_name.as_str(),
            year = extracted.title.year,
            bills = extracted.bills.len(),
            "extracted worksheet"
        );
        extracted
    }
}

#[async_trait]
impl<R1> ExtractUsecase for ExtractUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn from_string(
        &self,
        worksheet_ron: &str,
        bills_json: &str,
    ) -> Result<ExtractedSheet, ServerError> {
        let worksheet = self.records_repository.worksheet_from_string(worksheet_ron)?;
        let bills = self.records_repository.bills_from_string(bills_json)?;
        Ok(self.extract(&worksheet, &bills))
    }

    async fn from_file<P>(
        &self,
        worksheet_ron: P,
        bills_json: P,
    ) -> Result<ExtractedSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let worksheet = self.records_repository.worksheet_from_file(worksheet_ron).await?;
        let bills = self.records_repository.bills_from_file(bills_json).await?;
        Ok(self.extract(&worksheet, &bills))
    }
}

impl ExtractUsecaseImpl {
    pub(crate) fn new(layout: SpreadsheetLayout) -> Self {
        ExtractUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
            layout,
        }
    }
}
