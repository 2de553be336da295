use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {kind} (invalid RON format).", { kind: &str });
define_client_error!(InvalidJson, "Invalid {kind} (invalid JSON format).", { kind: &str });
define_client_error!(UnknownBillType, "Unknown bill type: '{value}'.", { value: &str });
define_client_error!(UnknownExpenseType, "Unknown expense type: '{value}'.", { value: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(InvalidMonth, "Invalid month: '{value}'.", { value: &str });

// Spreadsheet-creation conflicts.
define_client_error!(
    MissingSpreadsheetColumns,
    "Spreadsheet is missing required columns: {columns}.",
    { columns: &str }
);
define_client_error!(
    InconsistentSpreadsheetRows,
    "Spreadsheet rows are inconsistent across columns: {details}.",
    { details: &str }
);

// Grid-related.
define_client_error!(
    InvalidCellAddress,
    "Invalid cell address ({row}, {column}); rows and columns are 1-based.",
    { row: u32, column: u32 }
);
