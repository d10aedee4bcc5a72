//! Spreadsheet export for merged place records.

pub mod columns;
pub mod xlsx;

pub use columns::{column_order, PREFERRED_COLUMNS};
pub use xlsx::{export_xlsx, ExportSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("too many {what} for a worksheet: {count}")]
    TooLarge { what: &'static str, count: usize },

    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
