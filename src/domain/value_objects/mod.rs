pub mod formats;
pub mod geo_code;
pub mod log_level;

pub use formats::{ExportFormat, SourceFormat};
pub use geo_code::GeoCode;
pub use log_level::LogLevel;
