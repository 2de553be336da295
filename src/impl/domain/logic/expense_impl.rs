use crate::entities::{Expense, ExpenseParams, ExpenseRef, ExpenseType, Month, MonthCycle};

impl ExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Fixed => "FIXED",
            ExpenseType::Variable => "VARIABLE",
        }
    }

    pub fn from_text(text: &str) -> Option<ExpenseType> {
        match text.trim() {
            "FIXED" => Some(ExpenseType::Fixed),
            "VARIABLE" => Some(ExpenseType::Variable),
            _ => None,
        }
    }
}

impl Expense {
    /// Builds an expense, deriving `paid`, `total` and `total_paid`.
    ///
    /// A month whose value is exactly 0 is always flagged as paid, whatever
    /// flag was passed in; an expense totalling 0 is flagged as paid for
    /// every month.
    pub fn new(params: ExpenseParams) -> Self {
        let mut months = params.months;
        for month in Month::ALL {
            if months.get(month) == 0.0 {
                months.set_paid(month, true);
            }
        }
        let total = params.total.unwrap_or_else(|| months.total());
        if total == 0.0 {
            months = force_all_paid(months);
        }
        Expense {
            id: params.id,
            bill: params.bill,
            name: params.name,
            supplier: params.supplier,
            expense_type: params.expense_type,
            paid: months.all_paid(),
            total,
            total_paid: months.total_paid(),
            instalment_number: params.instalment_number,
            months,
            is_aggregate: params.is_aggregate,
            aggregate_name: params.aggregate_name,
            parent: params.parent,
            children: params.children,
        }
    }

    pub fn reference(&self) -> ExpenseRef {
        ExpenseRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    pub fn child_list(&self) -> &[Expense] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Name as written in a worksheet row: the name without its group
    /// prefix.
    pub(crate) fn label(&self, group_name: &str) -> String {
        let prefix = format!("{} ", group_name.trim());
        match self.name.strip_prefix(&prefix) {
            Some(rest) if !group_name.trim().is_empty() && !rest.trim().is_empty() => {
                rest.trim().to_string()
            }
            _ => self.name.trim().to_string(),
        }
    }
}

fn force_all_paid(months: MonthCycle) -> MonthCycle {
    Month::ALL
        .into_iter()
        .fold(months, |acc, m| acc.with(m, acc.get(m), true))
}
