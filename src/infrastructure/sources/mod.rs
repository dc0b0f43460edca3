pub mod json_source;
pub mod line_source;

pub use json_source::{JsonFileSource, StructuredRecords};
pub use line_source::LineFileSource;
