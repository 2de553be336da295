use super::{bill::BillRef, month::MonthCycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpenseType {
    Fixed,
    #[default]
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Supplier {
    pub name: String,
}

/// Back-reference from an aggregated child to its parent expense.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    pub bill: BillRef,
    pub name: String,
    pub supplier: Supplier,
    pub expense_type: ExpenseType,
    pub paid: bool,
    pub total: f64,
    pub total_paid: f64,
    pub instalment_number: u32,
    pub months: MonthCycle,
    pub is_aggregate: bool,
    pub aggregate_name: String,
    pub parent: Option<ExpenseRef>,
    pub children: Option<Vec<Expense>>,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseParams {
    pub id: String,
    pub bill: BillRef,
    pub name: String,
    pub supplier: Supplier,
    pub expense_type: ExpenseType,
    /// When absent, derived from the month values.
    pub total: Option<f64>,
    pub instalment_number: u32,
    pub months: MonthCycle,
    pub is_aggregate: bool,
    pub aggregate_name: String,
    pub parent: Option<ExpenseRef>,
    pub children: Option<Vec<Expense>>,
}
