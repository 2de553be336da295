use std::{collections::HashMap, str::FromStr as _};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::amount_model::AmountModel,
    domain::logic::month_utils::split_months_by_instalment,
    entities::{BillRef, Expense, ExpenseParams, ExpenseType, Month, MonthCycle, Supplier},
    errors::{
        InconsistentSpreadsheetRows, InvalidAmount, InvalidCsv, InvalidMonth,
        MissingSpreadsheetColumns, ReadError, UnknownExpenseType,
    },
};

const REQUIRED_COLUMNS: [&str; 2] = ["name", "supplier"];

#[async_trait]
pub(crate) trait ExpensesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str, bill: &BillRef) -> Result<Vec<Expense>, ServerError>;

    async fn from_file<P>(&self, path: P, bill: &BillRef) -> Result<Vec<Expense>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ExpensesCsvDatasourceImpl;

impl ExpensesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExpensesCsvDatasource for ExpensesCsvDatasourceImpl {
    fn from_string(&self, s: &str, bill: &BillRef) -> Result<Vec<Expense>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| InvalidCsv::with_debug(&e))?
            .clone();
        let width = headers.len();
        let columns: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| !columns.contains_key(*c))
            .collect();
        if !missing.is_empty() {
            return Err(MissingSpreadsheetColumns::new(&missing.join(", ")));
        }

        let expenses = reader
            .records()
            .enumerate()
            .map(|(i, r)| {
                let r = r.map_err(|e| InvalidCsv::with_debug(&e))?;
                if r.len() != width {
                    return Err(InconsistentSpreadsheetRows::new(&format!(
                        "row {} has {} cells, expected {}",
                        i + 2,
                        r.len(),
                        width
                    )));
                }
                let row = Row {
                    columns: &columns,
                    record: &r,
                };

                // Parse.
                let expense_type = match row.get("type") {
                    "" => ExpenseType::default(),
                    raw => ExpenseType::from_text(&raw.to_uppercase())
                        .ok_or_else(|| UnknownExpenseType::new(raw))?,
                };
                let instalment_number = match row.get("instalment_number") {
                    "" => 0,
                    raw => raw.parse::<u32>().map_err(|_| InvalidAmount::new(raw))?,
                };
                let months = match row.get("value") {
                    "" => month_columns(&row)?,
                    raw => {
                        let value: f64 = AmountModel::from_str(raw)?.into();
                        let start = match row.get("start_month") {
                            "" => Month::January,
                            raw => Month::from_name(raw).ok_or_else(|| InvalidMonth::new(raw))?,
                        };
                        split_months_by_instalment(value, instalment_number.max(1), start)
                    }
                };

                // Build.
                Ok(Expense::new(ExpenseParams {
                    bill: bill.clone(),
                    name: row.get("name").to_string(),
                    supplier: Supplier {
                        name: row.get("supplier").to_string(),
                    },
                    expense_type,
                    instalment_number,
                    months,
                    ..Default::default()
                }))
            })
            .collect::<Result<Vec<_>, ServerError>>()?;
        debug!(bill = bill.name.as_str(), expenses = expenses.len(), "read expense listing");
        Ok(expenses)
    }

    async fn from_file<P>(&self, path: P, bill: &BillRef) -> Result<Vec<Expense>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s, bill)
    }
}

struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a csv::StringRecord,
}

impl<'a> Row<'a> {
    /// Trimmed cell of the given column, empty when the column is absent.
    fn get(&self, column: &str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|i| self.record.get(*i))
            .map(str::trim)
            .unwrap_or("")
    }
}

/// One column per month; `<month>_paid` holds the paid flag.
fn month_columns(row: &Row<'_>) -> Result<MonthCycle, ServerError> {
    Month::ALL.into_iter().try_fold(MonthCycle::new(), |acc, m| {
        let value: f64 = match row.get(m.name()) {
            "" => 0.0,
            raw => AmountModel::from_str(raw)?.into(),
        };
        let paid = matches!(
            row.get(&m.paid_key()).to_lowercase().as_str(),
            "true" | "yes" | "x" | "1"
        );
        Ok(acc.with(m, value, paid))
    })
}
