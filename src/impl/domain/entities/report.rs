use super::bill::{Bill, BillType};

/// Everything rendered onto one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup {
    pub group_name: String,
    pub year: i32,
    pub bills: Vec<Bill>,
    /// Detail sections to render, in order.
    pub types: Vec<BillType>,
    pub summary: bool,
}

impl ReportGroup {
    pub fn new(group_name: impl Into<String>, year: i32, bills: Vec<Bill>) -> Self {
        Self {
            group_name: group_name.into(),
            year,
            bills,
            types: BillType::ALL.to_vec(),
            summary: true,
        }
    }
}
