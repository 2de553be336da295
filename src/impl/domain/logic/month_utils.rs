use crate::entities::{BodyData, Expense, Month, MonthCycle};

pub(crate) const MONTHS: [Month; 12] = Month::ALL;

/// Anything carrying a month cycle.
pub trait HasMonthCycle {
    fn month_cycle(&self) -> &MonthCycle;
}

impl HasMonthCycle for MonthCycle {
    fn month_cycle(&self) -> &MonthCycle {
        self
    }
}

impl HasMonthCycle for Expense {
    fn month_cycle(&self) -> &MonthCycle {
        &self.months
    }
}

impl HasMonthCycle for BodyData {
    fn month_cycle(&self) -> &MonthCycle {
        &self.months
    }
}

pub fn total_by_month<T: HasMonthCycle>(month: Month, records: &[T]) -> f64 {
    records.iter().map(|r| r.month_cycle().get(month)).sum()
}

/// Spreads `total` over `instalments` consecutive months starting at
/// `start`. Instalments that would fall after December are dropped. Values
/// are rounded to cents; the rounding residue lands on the last month.
pub fn split_months_by_instalment(total: f64, instalments: u32, start: Month) -> MonthCycle {
    let mut cycle = MonthCycle::new();
    if instalments == 0 {
        return cycle;
    }
    let share = (total / instalments as f64 * 100.0).round() / 100.0;
    let months: Vec<Month> = MONTHS
        .into_iter()
        .skip(start.index())
        .take(instalments as usize)
        .collect();
    let mut assigned = 0.0;
    for (i, month) in months.iter().enumerate() {
        let is_last_instalment = i + 1 == instalments as usize;
        let value = if is_last_instalment {
            ((total - assigned) * 100.0).round() / 100.0
        } else {
            share
        };
        cycle.set(*month, value);
        assigned += value;
    }
    cycle
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn totals_one_month_across_records() {
        let records = vec![
            MonthCycle::new().with(Month::May, 10.0, false),
            MonthCycle::new().with(Month::May, 2.5, true),
            MonthCycle::new().with(Month::June, 99.0, true),
        ];
        assert_eq!(total_by_month(Month::May, &records), 12.5);
        assert_eq!(total_by_month(Month::January, &records), 0.0);
    }

    #[test]
    fn splits_evenly_with_residue_on_last_month() {
        let cycle = split_months_by_instalment(100.0, 3, Month::January);
        assert_eq!(cycle.get(Month::January), 33.33);
        assert_eq!(cycle.get(Month::February), 33.33);
        assert_eq!(cycle.get(Month::March), 33.34);
        assert_eq!(cycle.get(Month::April), 0.0);
    }

    #[rstest]
    #[case(Month::November, 4, 2)]
    #[case(Month::December, 1, 1)]
    #[case(Month::January, 12, 12)]
    fn clips_instalments_at_december(
        #[case] start: Month,
        #[case] instalments: u32,
        #[case] expected_months: usize,
    ) {
        let cycle = split_months_by_instalment(120.0, instalments, start);
        let filled = cycle.values().filter(|(_, v)| *v != 0.0).count();
        assert_eq!(filled, expected_months);
    }

    #[test]
    fn zero_instalments_yield_empty_cycle() {
        assert_eq!(
            split_months_by_instalment(50.0, 0, Month::March),
            MonthCycle::new()
        );
    }
}
