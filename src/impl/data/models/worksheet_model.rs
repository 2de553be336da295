use fractic_server_error::ServerError;

use crate::entities::{CellKind, CellValue, Worksheet};

/// RON dump of a worksheet: its name and the cells that hold something.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct WorksheetModel {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) cells: Vec<CellModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct CellModel {
    pub(crate) row: u32,
    pub(crate) column: u32,
    pub(crate) value: CellValueModel,
    #[serde(default)]
    pub(crate) kind: CellKindModel,
    /// Columns covered when merged, anchor included.
    #[serde(default)]
    pub(crate) merge: Option<u32>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum CellValueModel {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) enum CellKindModel {
    Title,
    Header,
    #[default]
    Body,
    Footer,
}

impl Into<CellValue> for CellValueModel {
    fn into(self) -> CellValue {
        match self {
            CellValueModel::Empty => CellValue::Empty,
            CellValueModel::Text(s) => CellValue::Text(s),
            CellValueModel::Number(n) => CellValue::Number(n),
            CellValueModel::Bool(b) => CellValue::Bool(b),
        }
    }
}

impl Into<CellKind> for CellKindModel {
    fn into(self) -> CellKind {
        match self {
            CellKindModel::Title => CellKind::Title,
            CellKindModel::Header => CellKind::Header,
            CellKindModel::Body => CellKind::Body,
            CellKindModel::Footer => CellKind::Footer,
        }
    }
}

impl TryFrom<WorksheetModel> for Worksheet {
    type Error = ServerError;

    fn try_from(model: WorksheetModel) -> Result<Self, Self::Error> {
        let mut worksheet = Worksheet::new(model.name);
        for cell in model.cells {
            let value: CellValue = cell.value.into();
            worksheet.set_cell(cell.row, cell.column, value, cell.kind.into())?;
            if let Some(span) = cell.merge {
                worksheet.merge(cell.row, cell.column, span)?;
            }
        }
        Ok(worksheet)
    }
}
