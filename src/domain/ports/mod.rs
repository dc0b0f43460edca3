pub mod collector;
pub mod exporter;
pub mod log_source;
pub mod population;

pub use collector::{CollectionError, HostProbe, SystemCollector};
pub use exporter::{ExportError, ReportExporter};
pub use log_source::{LogSource, SourceError};
pub use population::{LookupError, PopulationLookup};
