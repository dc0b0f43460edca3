//! Pure log triage: parse raw entries, keep warnings and errors, order them.

pub mod filter;
pub mod parser;

pub use filter::filter_and_sort;
pub use parser::{parse_line, parse_lines, parse_record, parse_records};
