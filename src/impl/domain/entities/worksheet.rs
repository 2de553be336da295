use std::collections::BTreeMap;

use fractic_server_error::ServerError;

use crate::errors::InvalidCellAddress;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Trimmed string form of the value. Whole numbers print without a
    /// fractional part.
    pub fn text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Numeric form of the value. Anything that does not parse as a number
    /// counts as 0.
    pub fn number(&self) -> f64 {
        match self {
            CellValue::Empty => 0.0,
            CellValue::Number(n) => *n,
            CellValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Bool(_) => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Styling role of a written cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    Title,
    Header,
    #[default]
    Body,
    Footer,
}

/// A cell as seen by a reader. Every cell inside a merged range reports
/// `is_merged`; only the anchor (top-left) cell carries the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub is_merged: bool,
    pub merge_span: u32,
}

impl Cell {
    pub fn text(&self) -> String {
        self.value.text()
    }
}

/// Read access to a 1-based grid of cells.
pub trait CellGrid {
    fn cell(&self, row: u32, column: u32) -> Cell;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    pub row: u32,
    pub column: u32,
    /// Number of columns covered, anchor included.
    pub span: u32,
}

impl Merge {
    fn covers(&self, row: u32, column: u32) -> bool {
        self.row == row && column >= self.column && column < self.column + self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StoredCell {
    value: CellValue,
    kind: CellKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    cells: BTreeMap<(u32, u32), StoredCell>,
    merges: Vec<Merge>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_cell(
        &mut self,
        row: u32,
        column: u32,
        value: impl Into<CellValue>,
        kind: CellKind,
    ) -> Result<(), ServerError> {
        check_address(row, column)?;
        self.cells.insert(
            (row, column),
            StoredCell {
                value: value.into(),
                kind,
            },
        );
        Ok(())
    }

    /// Merges `span` columns starting at the given anchor. A span of 1 or
    /// less is a no-op.
    pub fn merge(&mut self, row: u32, column: u32, span: u32) -> Result<(), ServerError> {
        check_address(row, column)?;
        if span <= 1 {
            return Ok(());
        }
        self.merges.retain(|m| !(m.row == row && m.column == column));
        self.merges.push(Merge { row, column, span });
        Ok(())
    }

    pub fn kind(&self, row: u32, column: u32) -> Option<CellKind> {
        self.cells.get(&(row, column)).map(|c| c.kind)
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Last row holding a value or a merge, or 0 for an empty sheet.
    pub fn last_row(&self) -> u32 {
        let cells = self.cells.keys().map(|(r, _)| *r).max().unwrap_or(0);
        let merges = self.merges.iter().map(|m| m.row).max().unwrap_or(0);
        cells.max(merges)
    }

    /// Last column holding a value or covered by a merge, or 0 for an empty
    /// sheet.
    pub fn last_column(&self) -> u32 {
        let cells = self.cells.keys().map(|(_, c)| *c).max().unwrap_or(0);
        let merges = self
            .merges
            .iter()
            .map(|m| m.column + m.span - 1)
            .max()
            .unwrap_or(0);
        cells.max(merges)
    }
}

impl CellGrid for Worksheet {
    fn cell(&self, row: u32, column: u32) -> Cell {
        let merge = self.merges.iter().find(|m| m.covers(row, column));
        let value = match merge {
            Some(m) if m.column != column => CellValue::Empty,
            _ => self
                .cells
                .get(&(row, column))
                .map(|c| c.value.clone())
                .unwrap_or_default(),
        };
        Cell {
            value,
            is_merged: merge.is_some(),
            merge_span: merge.map_or(1, |m| m.span),
        }
    }
}

fn check_address(row: u32, column: u32) -> Result<(), ServerError> {
    if row == 0 || column == 0 {
        return Err(InvalidCellAddress::new(row, column));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_worksheet(&mut self, name: impl Into<String>) -> &mut Worksheet {
        self.worksheets.push(Worksheet::new(name));
        let last = self.worksheets.len() - 1;
        &mut self.worksheets[last]
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn worksheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|w| w.name() == name)
    }
}
