use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Bill, BillRef, Expense, Worksheet};

#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn worksheet_from_string(&self, worksheet_ron: &str) -> Result<Worksheet, ServerError>;

    async fn worksheet_from_file<P>(&self, worksheet_ron: P) -> Result<Worksheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn bills_from_string(&self, bills_json: &str) -> Result<Vec<Bill>, ServerError>;

    async fn bills_from_file<P>(&self, bills_json: P) -> Result<Vec<Bill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn expenses_from_string(
        &self,
        expenses_csv: &str,
        bill: &BillRef,
    ) -> Result<Vec<Expense>, ServerError>;

    async fn expenses_from_file<P>(
        &self,
        expenses_csv: P,
        bill: &BillRef,
    ) -> Result<Vec<Expense>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
