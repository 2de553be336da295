use std::collections::HashMap;

use fractic_server_error::ServerError;

use crate::{
    entities::{
        Bank, Bill, BillParams, BillRef, BillType, Expense, ExpenseParams, ExpenseRef, ExpenseType,
        Month, MonthCycle, Supplier,
    },
    errors::{UnknownBillType, UnknownExpenseType},
};

use super::amount_model::LenientAmountModel;

/// Bill payload as served by the finance API.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct BillModel {
    pub(crate) id: String,
    #[serde(rename = "type")]
    pub(crate) bill_type: String,
    pub(crate) name: String,
    pub(crate) year: i32,
    #[serde(default)]
    pub(crate) bank: Option<BankModel>,
    #[serde(default)]
    pub(crate) expenses: Option<Vec<ExpenseModel>>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct BankModel {
    pub(crate) name: String,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct SupplierModel {
    pub(crate) name: String,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct ExpenseModel {
    #[serde(default)]
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) supplier: Option<SupplierModel>,
    #[serde(rename = "type", default)]
    pub(crate) expense_type: Option<String>,
    #[serde(default)]
    pub(crate) total: Option<LenientAmountModel>,
    #[serde(default)]
    pub(crate) instalment_number: u32,
    #[serde(default)]
    pub(crate) is_aggregate: bool,
    #[serde(default)]
    pub(crate) aggregate_name: Option<String>,
    #[serde(default)]
    pub(crate) children: Option<Vec<ExpenseModel>>,
    /// Month values (`january`, ...) and paid flags (`january_paid`, ...).
    /// Other keys are ignored.
    #[serde(flatten)]
    pub(crate) months: HashMap<String, serde_json::Value>,
}

impl BillModel {
    pub(crate) fn into_bill(self) -> Result<Bill, ServerError> {
        let bill_type = BillType::from_text(&self.bill_type)
            .ok_or_else(|| UnknownBillType::new(&self.bill_type))?;
        let bill_ref = BillRef {
            id: self.id.clone(),
            name: self.name.clone(),
        };
        let expenses = self
            .expenses
            .map(|list| {
                list.into_iter()
                    .map(|e| e.into_expense(&bill_ref, None))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(Bill::new(BillParams {
            id: self.id,
            bill_type,
            name: self.name,
            year: self.year,
            bank: Bank {
                name: self.bank.map(|b| b.name).unwrap_or_default(),
            },
            expenses,
        }))
    }
}

impl ExpenseModel {
    fn into_expense(
        self,
        bill: &BillRef,
        parent: Option<&ExpenseRef>,
    ) -> Result<Expense, ServerError> {
        let expense_type = match self.expense_type.as_deref() {
            None | Some("") => ExpenseType::default(),
            Some(raw) => {
                ExpenseType::from_text(raw).ok_or_else(|| UnknownExpenseType::new(raw))?
            }
        };
        let this = ExpenseRef {
            id: self.id.clone(),
            name: self.name.clone(),
        };
        let children = self
            .children
            .map(|list| {
                list.into_iter()
                    .map(|c| c.into_expense(bill, Some(&this)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(Expense::new(ExpenseParams {
            id: self.id,
            bill: bill.clone(),
            supplier: Supplier {
                name: self.supplier.map(|s| s.name).unwrap_or_else(|| self.name.clone()),
            },
            name: self.name,
            expense_type,
            total: self.total.map(Into::into),
            instalment_number: self.instalment_number,
            months: month_cycle(&self.months),
            is_aggregate: self.is_aggregate || parent.is_some(),
            aggregate_name: self.aggregate_name.unwrap_or_default(),
            parent: parent.cloned(),
            children,
        }))
    }
}

fn month_cycle(fields: &HashMap<String, serde_json::Value>) -> MonthCycle {
    Month::ALL.into_iter().fold(MonthCycle::new(), |acc, m| {
        let value = fields
            .get(m.name())
            .and_then(|v| serde_json::from_value::<LenientAmountModel>(v.clone()).ok())
            .unwrap_or_default();
        let paid = match fields.get(&m.paid_key()) {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        };
        acc.with(m, value.0, paid)
    })
}
