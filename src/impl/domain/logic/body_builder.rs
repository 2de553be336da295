use crate::entities::{BodyData, Expense, MonthCycle};

use super::month_utils::{total_by_month, HasMonthCycle, MONTHS};

/// A record that can be folded into a table row.
pub(crate) trait BodyRecord: HasMonthCycle {
    fn is_paid(&self) -> bool;
}

impl BodyRecord for Expense {
    fn is_paid(&self) -> bool {
        self.paid
    }
}

impl BodyRecord for BodyData {
    fn is_paid(&self) -> bool {
        self.paid
    }
}

pub(crate) enum BodySource<'a, T> {
    /// Months summed across the records; `paid` decided by the predicate.
    Many {
        records: &'a [T],
        all_paid: &'a dyn Fn(&[T]) -> bool,
    },
    /// Months and `paid` read from the record itself.
    One(&'a T),
}

pub(crate) fn all_records_paid<T: BodyRecord>(records: &[T]) -> bool {
    records.iter().all(|r| r.is_paid())
}

/// Builds a row for the given source. `total` is always the sum of the row's
/// own month values.
pub(crate) fn build_body_data<T: BodyRecord>(
    source: BodySource<'_, T>,
    label: impl Into<String>,
    bank: Option<String>,
) -> BodyData {
    let (months, paid) = match source {
        BodySource::Many { records, all_paid } => {
            let months = MONTHS.into_iter().fold(MonthCycle::new(), |acc, m| {
                let month_paid = records.iter().all(|r| r.month_cycle().is_paid(m));
                acc.with(m, total_by_month(m, records), month_paid)
            });
            (months, all_paid(records))
        }
        BodySource::One(record) => (*record.month_cycle(), record.is_paid()),
    };
    BodyData {
        label: label.into(),
        bank,
        total: months.total(),
        months,
        paid,
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{ExpenseParams, Month};

    use super::*;

    fn expense(month: Month, value: f64, paid: bool) -> Expense {
        Expense::new(ExpenseParams {
            months: MonthCycle::new().with(month, value, paid),
            total: Some(1_000_000.0),
            ..Default::default()
        })
    }

    #[test]
    fn many_sums_months_and_recomputes_total() {
        let records = vec![
            expense(Month::January, 10.0, true),
            expense(Month::January, 5.0, false),
            expense(Month::July, 7.5, true),
        ];
        let row = build_body_data(
            BodySource::Many {
                records: &records,
                all_paid: &all_records_paid::<Expense>,
            },
            "Row",
            Some("Nubank".to_string()),
        );
        assert_eq!(row.months.get(Month::January), 15.0);
        assert_eq!(row.months.get(Month::July), 7.5);
        assert_eq!(row.total, 22.5);
        assert!(!row.paid);
        assert!(!row.months.is_paid(Month::January));
        assert!(row.months.is_paid(Month::July));
        assert_eq!(row.bank.as_deref(), Some("Nubank"));
    }

    #[test]
    fn many_uses_caller_predicate() {
        let records = vec![expense(Month::May, 1.0, false)];
        let row = build_body_data(
            BodySource::Many {
                records: &records,
                all_paid: &|_: &[Expense]| true,
            },
            "Row",
            None,
        );
        assert!(row.paid);
    }

    #[test]
    fn one_reads_record_directly() {
        let record = expense(Month::March, 40.0, true);
        let row = build_body_data(BodySource::One(&record), "Single", None);
        assert_eq!(row.months, record.months);
        assert!(row.paid);
        assert_eq!(row.total, 40.0);
    }

    #[test]
    fn empty_list_yields_zero_row() {
        let records: Vec<Expense> = vec![];
        let row = build_body_data(
            BodySource::Many {
                records: &records,
                all_paid: &all_records_paid::<Expense>,
            },
            "Empty",
            None,
        );
        assert_eq!(row.total, 0.0);
        assert!(row.paid);
    }
}
