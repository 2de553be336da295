use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::repositories::records_repository::RecordsRepository,
    entities::{Bill, Expense},
};

#[async_trait]
pub trait ImportUsecase: Send + Sync {
    /// Appends the expenses listed in `expenses_csv` to `bill` and returns
    /// the recalculated bill.
    async fn from_string(&self, bill: &Bill, expenses_csv: &str) -> Result<Bill, ServerError>;

    async fn from_file<P>(&self, bill: &Bill, expenses_csv: P) -> Result<Bill, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ImportUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
> where
    R1: RecordsRepository,
{
    records_repository: R1,
}

fn attach(bill: &Bill, imported: Vec<Expense>) -> Bill {
    let count = imported.len();
    let expenses: Vec<Expense> = bill.expense_list().iter().cloned().chain(imported).collect();
    let bill = bill.with_expenses(expenses);
    info!(bill = bill.name.as_str(), imported = count, total = bill.total, "imported expenses");
    bill
}

#[async_trait]
impl<R1> ImportUsecase for ImportUsecaseImpl<R1>
where
    R1: RecordsRepository,
{
    async fn from_string(&self, bill: &Bill, expenses_csv: &str) -> Result<Bill, ServerError> {
        let imported = self
            .records_repository
            .expenses_from_string(expenses_csv, &bill.reference())?;
        Ok(attach(bill, imported))
    }

    async fn from_file<P>(&self, bill: &Bill, expenses_csv: P) -> Result<Bill, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let imported = self
            .records_repository
            .expenses_from_file(expenses_csv, &bill.reference())
            .await?;
        Ok(attach(bill, imported))
    }
}

impl ImportUsecaseImpl {
    pub(crate) fn new() -> Self {
        ImportUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
        }
    }
}
