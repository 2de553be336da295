use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        bills_json_datasource::{BillsJsonDatasource, BillsJsonDatasourceImpl},
        expenses_csv_datasource::{ExpensesCsvDatasource, ExpensesCsvDatasourceImpl},
        worksheet_ron_datasource::{WorksheetRonDatasource, WorksheetRonDatasourceImpl},
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{Bill, BillRef, Expense, Worksheet},
};

pub(crate) struct RecordsRepositoryImpl<
    DS1 = WorksheetRonDatasourceImpl, // Default.
    DS2 = BillsJsonDatasourceImpl,    // Default.
    DS3 = ExpensesCsvDatasourceImpl,  // Default.
> where
    DS1: WorksheetRonDatasource,
    DS2: BillsJsonDatasource,
    DS3: ExpensesCsvDatasource,
{
    worksheet_datasource: DS1,
    bills_datasource: DS2,
    expenses_datasource: DS3,
}

#[async_trait]
impl<DS1, DS2, DS3> RecordsRepository for RecordsRepositoryImpl<DS1, DS2, DS3>
where
    DS1: WorksheetRonDatasource,
    DS2: BillsJsonDatasource,
    DS3: ExpensesCsvDatasource,
{
    fn worksheet_from_string(&self, worksheet_ron: &str) -> Result<Worksheet, ServerError> {
        self.worksheet_datasource.from_string(worksheet_ron)
    }

    async fn worksheet_from_file<P>(&self, worksheet_ron: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.worksheet_datasource.from_file(worksheet_ron).await
    }

    fn bills_from_string(&self, bills_json: &str) -> Result<Vec<Bill>, ServerError> {
        self.bills_datasource.from_string(bills_json)
    }

    async fn bills_from_file<P>(&self, bills_json: P) -> Result<Vec<Bill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.bills_datasource.from_file(bills_json).await
    }

    fn expenses_from_string(
        &self,
        expenses_csv: &str,
        bill: &BillRef,
    ) -> Result<Vec<Expense>, ServerError> {
        self.expenses_datasource.from_string(expenses_csv, bill)
    }

    async fn expenses_from_file<P>(
        &self,
        expenses_csv: P,
        bill: &BillRef,
    ) -> Result<Vec<Expense>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.expenses_datasource.from_file(expenses_csv, bill).await
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            worksheet_datasource: WorksheetRonDatasourceImpl::new(),
            bills_datasource: BillsJsonDatasourceImpl::new(),
            expenses_datasource: ExpensesCsvDatasourceImpl::new(),
        }
    }
}
