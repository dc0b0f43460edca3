use serde::{Deserialize, Serialize};

/// Shape of the log corpus handed to the pipeline.
///
/// Chosen by the caller; the input is never sniffed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Plain text, one `[ts] [level] station - message` record per line
    #[default]
    Lines,
    /// JSON array of mappings (optionally wrapped in `hits.hits`)
    Json,
}

/// File format of the two-section report artifact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    /// Workbook with one worksheet per section
    Xlsx,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
