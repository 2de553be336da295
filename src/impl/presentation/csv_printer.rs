use fractic_server_error::{CriticalError, ServerError};

use crate::entities::{CellGrid, Worksheet};

pub(crate) struct CsvPrinter;

impl CsvPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One record per row up to the last used row, each as wide as the last
    /// used column. Cells covered by a merge print empty.
    pub(crate) fn print_worksheet(&self, worksheet: &Worksheet) -> Result<String, ServerError> {
        let last_row = worksheet.last_row();
        let last_column = worksheet.last_column();

        let mut writer = csv::WriterBuilder::new()
            .flexible(false)
            .from_writer(Vec::new());
        for row in 1..=last_row {
            let record: Vec<String> = (1..=last_column)
                .map(|column| worksheet.cell(row, column).text())
                .collect();
            writer
                .write_record(&record)
                .map_err(|e| CriticalError::with_debug("failed to write CSV record", &e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CriticalError::with_debug("failed to flush CSV writer", &e))?;
        String::from_utf8(bytes)
            .map_err(|e| CriticalError::with_debug("failed to encode CSV output as UTF-8", &e))
    }
}
