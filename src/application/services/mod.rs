pub mod snapshot;
pub mod triage;
