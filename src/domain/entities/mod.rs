pub mod disk;
pub mod log_record;
pub mod process;
pub mod report;
pub mod snapshot;

pub use disk::{DiskUsage, Partition};
pub use log_record::{LogCandidate, LogRecord, ParsedLogs};
pub use process::{select_top_processes, ProcessUsage};
pub use report::{Report, Table};
pub use snapshot::{MemoryUsage, SystemSnapshot};
