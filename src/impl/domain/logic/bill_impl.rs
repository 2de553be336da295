use crate::entities::{Bill, BillParams, BillRef, BillType, Expense};

use super::text::humanize;

impl BillType {
    pub const ALL: [BillType; 4] = [
        BillType::BankSlip,
        BillType::AccountDebit,
        BillType::Pix,
        BillType::CreditCard,
    ];

    /// Literal text used in worksheet cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillType::BankSlip => "BANK_SLIP",
            BillType::AccountDebit => "ACCOUNT_DEBIT",
            BillType::Pix => "PIX",
            BillType::CreditCard => "CREDIT_CARD",
        }
    }

    pub fn from_text(text: &str) -> Option<BillType> {
        let text = text.trim();
        BillType::ALL.into_iter().find(|t| t.as_str() == text)
    }

    pub fn humanize(&self) -> String {
        humanize(self.as_str())
    }
}

impl std::fmt::Display for BillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Bill {
    pub fn new(params: BillParams) -> Self {
        let mut bill = Bill {
            id: params.id,
            bill_type: params.bill_type,
            name: params.name,
            year: params.year,
            bank: params.bank,
            total: 0.0,
            total_paid: 0.0,
            all_paid: false,
            expenses: params.expenses,
        };
        bill.calculate();
        bill
    }

    /// Recomputes the derived totals from the expense list. A bill without
    /// expenses totals 0 and counts as fully paid.
    pub fn calculate(&mut self) {
        let expenses = self.expenses.as_deref().unwrap_or_default();
        self.total = expenses.iter().map(|e| e.total).sum();
        self.total_paid = expenses.iter().map(|e| e.total_paid).sum();
        self.all_paid = expenses.iter().all(|e| e.paid);
    }

    pub fn reference(&self) -> BillRef {
        BillRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    pub fn expense_list(&self) -> &[Expense] {
        self.expenses.as_deref().unwrap_or_default()
    }

    /// Copy of the bill carrying the given expenses, totals recomputed.
    pub(crate) fn with_expenses(&self, expenses: Vec<Expense>) -> Bill {
        let mut bill = Bill {
            expenses: Some(expenses),
            ..self.clone()
        };
        bill.calculate();
        bill
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{Bank, ExpenseParams, Month, MonthCycle};

    use super::*;

    fn expense(value: f64, paid: bool) -> Expense {
        Expense::new(ExpenseParams {
            name: "Rent".to_string(),
            months: MonthCycle::new()
                .with(Month::January, value, paid)
                .with(Month::February, value, paid),
            ..Default::default()
        })
    }

    fn bill(expenses: Option<Vec<Expense>>) -> Bill {
        Bill::new(BillParams {
            id: "b1".to_string(),
            bill_type: BillType::BankSlip,
            name: "Home Bank Slip Caixa".to_string(),
            year: 2025,
            bank: Bank {
                name: "Caixa".to_string(),
            },
            expenses,
        })
    }

    #[test]
    fn calculate_sums_expenses() {
        let b = bill(Some(vec![expense(100.0, true), expense(50.0, false)]));
        assert_eq!(b.total, 300.0);
        assert_eq!(b.total_paid, 200.0);
        assert!(!b.all_paid);
    }

    #[test]
    fn calculate_is_recomputed_after_mutation() {
        let mut b = bill(Some(vec![expense(10.0, false)]));
        assert!(!b.all_paid);
        b.expenses = Some(vec![expense(10.0, true)]);
        b.calculate();
        assert!(b.all_paid);
        assert_eq!(b.total_paid, 20.0);
    }

    #[test]
    fn bill_without_expenses_totals_zero() {
        let b = bill(None);
        assert_eq!(b.total, 0.0);
        assert!(b.all_paid);
    }

    #[test]
    fn bill_type_text_round_trips() {
        for t in BillType::ALL {
            assert_eq!(BillType::from_text(t.as_str()), Some(t));
        }
        assert_eq!(BillType::from_text("CASH"), None);
        assert_eq!(BillType::CreditCard.humanize(), "Credit Card");
    }
}
