use crate::domain::entities::log_record::{LogCandidate, LogRecord};

/// Keeps warning and error candidates and orders them errors first.
///
/// The sort is stable, so records of the same level stay in input
/// (chronological) order. Pure: no I/O, no logging.
#[must_use]
pub fn filter_and_sort<I>(candidates: I) -> Vec<LogRecord>
where
    I: IntoIterator<Item = LogCandidate>,
{
    let mut records: Vec<LogRecord> = candidates
        .into_iter()
        .filter_map(LogCandidate::into_record)
        .collect();
    records.sort_by_key(|r| r.level.rank());
    records
}
