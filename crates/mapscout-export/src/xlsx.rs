//! `.xlsx` writer.

use std::path::Path;

use mapscout_core::{CompleteRecord, SENTINEL};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::columns::column_order;
use crate::ExportError;

/// What an export wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Data rows, excluding the header.
    pub rows: usize,
    pub columns: usize,
}

/// Writes `records` to a single-sheet workbook at `path`.
///
/// The first row holds the column names in bold; each following row is one
/// record, in input order. A field the record carries without a value is
/// written as [`SENTINEL`], a column the record lacks stays blank.
///
/// Returns `Ok(None)` without touching the filesystem when `records` is
/// empty.
///
/// # Errors
///
/// Returns [`ExportError::TooLarge`] if the records exceed worksheet limits
/// and [`ExportError::Xlsx`] if the workbook cannot be built or saved.
pub fn export_xlsx(
    records: &[CompleteRecord],
    path: &Path,
) -> Result<Option<ExportSummary>, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "no records to export; skipping file");
        return Ok(None);
    }

    let columns = column_order(records);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    write_header(sheet, &columns)?;
    for (idx, record) in records.iter().enumerate() {
        let row = sheet_row(idx + 1)?;
        write_record(sheet, row, &columns, record)?;
    }

    workbook.save(path)?;

    let summary = ExportSummary {
        rows: records.len(),
        columns: columns.len(),
    };
    tracing::info!(
        path = %path.display(),
        rows = summary.rows,
        columns = summary.columns,
        "exported records"
    );
    Ok(Some(summary))
}

fn write_header(sheet: &mut Worksheet, columns: &[String]) -> Result<(), ExportError> {
    let bold = Format::new().set_bold();
    for (idx, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, sheet_col(idx)?, name, &bold)?;
    }
    Ok(())
}

fn write_record(
    sheet: &mut Worksheet,
    row: u32,
    columns: &[String],
    record: &CompleteRecord,
) -> Result<(), ExportError> {
    for (idx, name) in columns.iter().enumerate() {
        let Some(field) = record.fields().iter().find(|f| &f.name == name) else {
            continue;
        };
        let value = field.value.as_deref().unwrap_or(SENTINEL);
        sheet.write_string(row, sheet_col(idx)?, value)?;
    }
    Ok(())
}

fn sheet_row(idx: usize) -> Result<u32, ExportError> {
    u32::try_from(idx).map_err(|_| ExportError::TooLarge {
        what: "rows",
        count: idx,
    })
}

fn sheet_col(idx: usize) -> Result<u16, ExportError> {
    u16::try_from(idx).map_err(|_| ExportError::TooLarge {
        what: "columns",
        count: idx,
    })
}
