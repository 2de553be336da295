#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the calendar year.
    pub fn index(self) -> usize {
        match self {
            Month::January => 0,
            Month::February => 1,
            Month::March => 2,
            Month::April => 3,
            Month::May => 4,
            Month::June => 5,
            Month::July => 6,
            Month::August => 7,
            Month::September => 8,
            Month::October => 9,
            Month::November => 10,
            Month::December => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    pub fn paid_key(self) -> String {
        format!("{}_paid", self.name())
    }

    pub fn from_name(name: &str) -> Option<Month> {
        let name = name.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Twelve month values with a parallel paid flag per month. All months are
/// always present; values default to 0 and flags to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthCycle {
    values: [f64; 12],
    paid: [bool; 12],
}

impl MonthCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, month: Month) -> f64 {
        self.values[month.index()]
    }

    pub fn set(&mut self, month: Month, value: f64) {
        self.values[month.index()] = value;
    }

    pub fn is_paid(&self, month: Month) -> bool {
        self.paid[month.index()]
    }

    pub fn set_paid(&mut self, month: Month, paid: bool) {
        self.paid[month.index()] = paid;
    }

    pub fn with(mut self, month: Month, value: f64, paid: bool) -> Self {
        self.set(month, value);
        self.set_paid(month, paid);
        self
    }

    pub fn values(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Sum of the months flagged as paid.
    pub fn total_paid(&self) -> f64 {
        Month::ALL
            .into_iter()
            .filter(|m| self.is_paid(*m))
            .map(|m| self.get(m))
            .sum()
    }

    pub fn all_paid(&self) -> bool {
        self.paid.iter().all(|p| *p)
    }

    /// The 24 field names of the cycle: each month followed by its paid flag.
    pub fn keys() -> Vec<String> {
        Month::ALL
            .into_iter()
            .flat_map(|m| [m.name().to_string(), m.paid_key()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_twelve_months_plus_twelve_flags() {
        let keys = MonthCycle::keys();
        assert_eq!(keys.len(), 24);
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(unique.len(), 24);
        assert!(keys.contains(&"december_paid".to_string()));
        assert_eq!(keys.iter().filter(|k| k.ends_with("_paid")).count(), 12);
    }

    #[test]
    fn defaults_to_zero_and_unpaid() {
        let cycle = MonthCycle::new();
        for month in Month::ALL {
            assert_eq!(cycle.get(month), 0.0);
            assert!(!cycle.is_paid(month));
        }
        assert_eq!(cycle.total(), 0.0);
    }

    #[test]
    fn totals_track_paid_months() {
        let cycle = MonthCycle::new()
            .with(Month::January, 100.0, true)
            .with(Month::March, 50.5, false);
        assert_eq!(cycle.total(), 150.5);
        assert_eq!(cycle.total_paid(), 100.0);
        assert!(!cycle.all_paid());
    }

    #[test]
    fn month_names_round_trip_case_insensitively() {
        assert_eq!(Month::from_name("MARCH"), Some(Month::March));
        assert_eq!(Month::from_name(" october "), Some(Month::October));
        assert_eq!(Month::from_name("thirteenth"), None);
    }
}
