use super::expense::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillType {
    BankSlip,
    AccountDebit,
    Pix,
    CreditCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bank {
    pub name: String,
}

/// Back-reference from an expense to the bill it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BillRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: String,
    pub bill_type: BillType,
    pub name: String,
    pub year: i32,
    pub bank: Bank,
    /// Derived by `calculate`.
    pub total: f64,
    /// Derived by `calculate`.
    pub total_paid: f64,
    /// Derived by `calculate`.
    pub all_paid: bool,
    pub expenses: Option<Vec<Expense>>,
}

pub struct BillParams {
    pub id: String,
    pub bill_type: BillType,
    pub name: String,
    pub year: i32,
    pub bank: Bank,
    pub expenses: Option<Vec<Expense>>,
}
