use super::{
    bill::{Bill, BillRef, BillType},
    body_data::BodyData,
    month::MonthCycle,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetTitle {
    pub year: i32,
    pub group_name: String,
    pub next_row: u32,
}

/// One vertical 12-month block of a group table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailData {
    pub months: MonthCycle,
    pub bill: BillRef,
    pub supplier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTable {
    pub data: Vec<DetailData>,
    pub next_row: u32,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedGroupTables {
    pub acc: Vec<DetailData>,
    pub last_row: u32,
}

/// Result of scanning a run of blocks: the bills found and the row where
/// scanning stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct TableScan {
    pub data: Vec<Bill>,
    pub next_row: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub bill_type: BillType,
    pub bank: String,
    pub months: MonthCycle,
    pub paid: bool,
    pub total: f64,
}

/// Rows of one flat per-type detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTableRows {
    pub bill_type: BillType,
    pub rows: Vec<BodyData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSheet {
    pub title: WorksheetTitle,
    pub summary: Vec<SummaryRow>,
    pub detail_tables: Vec<DetailTableRows>,
    pub bills: Vec<Bill>,
}
