use super::month::MonthCycle;

/// One table row: a label column (bill type, bill name or expense name), an
/// optional bank column, twelve month columns, the paid marker and the total.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyData {
    pub label: String,
    pub bank: Option<String>,
    pub months: MonthCycle,
    pub paid: bool,
    pub total: f64,
}
