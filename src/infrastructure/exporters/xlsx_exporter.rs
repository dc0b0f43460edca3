use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};

use crate::domain::entities::report::{Report, Table};
use crate::domain::ports::exporter::{ExportError, ReportExporter};

const MAX_COLUMN_WIDTH: usize = 60;

/// Writes the report as an Excel workbook, one worksheet per section.
///
/// Worksheets are named after the sections. Row 0 holds the bold header;
/// multi-line cells wrap.
pub struct XlsxExporter;

impl XlsxExporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the in-memory workbook for `report`.
///
/// # Errors
///
/// Returns `XlsxError` if a sheet name or cell is rejected, or the table
/// exceeds worksheet limits.
pub fn build_workbook(report: &Report) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let cell = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for table in report.sections() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(table.name)?;
        write_table(sheet, &table, &header, &cell)?;
    }

    Ok(workbook)
}

fn write_table(
    sheet: &mut Worksheet,
    table: &Table,
    header: &Format,
    cell: &Format,
) -> Result<(), XlsxError> {
    for (col, name) in table.columns.iter().enumerate() {
        let col = column_index(col)?;
        sheet.write_string_with_format(0, col, name, header)?;

        let widest = std::iter::once(name)
            .chain(table.rows.iter().filter_map(|row| row.get(usize::from(col))))
            .flat_map(|text| text.lines())
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_COLUMN_WIDTH);
        #[allow(clippy::cast_precision_loss)]
        let width = (widest + 2) as f64;
        sheet.set_column_width(col, width)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, text) in row.iter().enumerate() {
            sheet.write_string_with_format(row_num, column_index(col)?, text, cell)?;
        }
    }

    Ok(())
}

fn column_index(col: usize) -> Result<u16, XlsxError> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}

impl ReportExporter for XlsxExporter {
    fn export(&self, report: &Report, path: &Path) -> Result<(), ExportError> {
        let mut workbook =
            build_workbook(report).map_err(|e| ExportError::Serialization(e.to_string()))?;
        workbook.save(path).map_err(|e| ExportError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
