use super::body_data::BodyData;

/// Placement and content of one table on a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TableParams {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub body: Vec<BodyData>,
    pub footer: Option<BodyData>,
    pub start_row: u32,
    pub start_column: u32,
    /// Columns spanned by the merged title cell.
    pub table_width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableResult {
    /// First row after the last written row.
    pub next_row: u32,
}
