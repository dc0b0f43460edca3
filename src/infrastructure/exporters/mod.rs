pub mod csv_exporter;
pub mod json_exporter;
pub mod xlsx_exporter;

pub use csv_exporter::CsvExporter;
pub use json_exporter::JsonExporter;
pub use xlsx_exporter::XlsxExporter;

use crate::domain::ports::exporter::ReportExporter;
use crate::domain::value_objects::formats::ExportFormat;

/// Select the exporter matching the requested artifact format.
#[must_use]
pub fn create_exporter(format: ExportFormat) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter::new()),
        ExportFormat::Json => Box::new(JsonExporter::new()),
        ExportFormat::Xlsx => Box::new(XlsxExporter::new()),
    }
}
