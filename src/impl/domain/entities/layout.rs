use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::errors::InvalidRon;

/// Worksheet layout constants shared by extraction and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpreadsheetLayout {
    /// Columns spanned by the worksheet title.
    pub title_merge: u32,
    pub top_space: u32,
    pub bottom_space: u32,
    pub title_column: u32,
    /// Column where rendered tables start.
    pub table_column: u32,
    /// Column holding bill-type tags and group-table markers.
    pub group_marker_column: u32,
    pub group_block_columns: [u32; 3],
    /// Rows consumed by one group table, marker row included.
    pub group_block_height: u32,
    /// Column holding credit-card headers and expense names.
    pub credit_card_column: u32,
    pub stop_token: String,
    pub paid_marker: String,
    pub unpaid_marker: String,
    pub default_bank_name: String,
}

impl Default for SpreadsheetLayout {
    fn default() -> Self {
        Self {
            title_merge: 10,
            top_space: 1,
            bottom_space: 2,
            title_column: 1,
            table_column: 2,
            group_marker_column: 3,
            group_block_columns: [4, 9, 14],
            group_block_height: 15,
            credit_card_column: 2,
            stop_token: "TOTAL".to_string(),
            paid_marker: "YES".to_string(),
            unpaid_marker: "NO".to_string(),
            default_bank_name: "Bank".to_string(),
        }
    }
}

impl SpreadsheetLayout {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("SpreadsheetLayout", &e))
    }

    /// Row where the worksheet title is written.
    pub fn title_row(&self) -> u32 {
        self.top_space + 1
    }

    /// First row after the title block.
    pub fn content_start_row(&self) -> u32 {
        self.title_merge + self.top_space + self.bottom_space + 1
    }

    pub fn paid_text(&self, paid: bool) -> &str {
        if paid {
            &self.paid_marker
        } else {
            &self.unpaid_marker
        }
    }

    pub fn is_paid_text(&self, text: &str) -> bool {
        text.trim() == self.paid_marker
    }
}
