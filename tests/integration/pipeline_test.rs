use serde_json::json;

use triage::application::services::triage::TriageService;
use triage::domain::entities::log_record::{LogCandidate, LogRecord};
use triage::domain::entities::snapshot::SystemSnapshot;
use triage::domain::logs::{filter_and_sort, parse_lines};
use triage::domain::ports::log_source::SourceError;
use triage::domain::value_objects::log_level::LogLevel;
use triage::infrastructure::exporters::CsvExporter;
use triage::infrastructure::sources::{JsonFileSource, LineFileSource, StructuredRecords};

use super::{fixture_path, sample_snapshot, FixedCollector};

fn summary(records: &[LogRecord]) -> Vec<(LogLevel, &str, &str)> {
    records
        .iter()
        .map(|r| (r.level, r.station.as_str(), r.message.as_str()))
        .collect()
}

#[test]
fn three_line_corpus_keeps_error_then_warning() {
    let lines = [
        "[t1] [INFO] A - ok",
        "[t2] [ERROR] B - disk full",
        "[t3] [WARNING] C - low memory",
    ];
    let records = filter_and_sort(parse_lines(lines).candidates);
    assert_eq!(
        summary(&records),
        vec![
            (LogLevel::Error, "B", "disk full"),
            (LogLevel::Warning, "C", "low memory"),
        ]
    );
}

#[test]
fn line_fixture_builds_sorted_report() {
    let source = LineFileSource::new(fixture_path("logs.txt"));
    let collector = FixedCollector {
        snapshot: sample_snapshot(),
    };
    let exporter = CsvExporter::new();
    let service = TriageService::new(&source, &collector, &exporter);

    let outcome = service.build();

    assert!(outcome.source_error.is_none());
    assert_eq!(outcome.dropped, 1);
    assert_eq!(
        summary(&outcome.report.logs),
        vec![
            (LogLevel::Error, "StationB", "disk full"),
            (LogLevel::Error, "StationE", "sensor offline - retrying"),
            (LogLevel::Warning, "StationC", "low memory"),
            (LogLevel::Warning, "StationD", "fan speed degraded"),
        ]
    );
    assert_eq!(outcome.report.system, sample_snapshot());
}

#[test]
fn json_fixture_reads_hits_envelope() {
    let source = JsonFileSource::new(fixture_path("logs.json"));
    let collector = FixedCollector {
        snapshot: SystemSnapshot::default(),
    };
    let exporter = CsvExporter::new();
    let outcome = TriageService::new(&source, &collector, &exporter).build();

    assert!(outcome.source_error.is_none());
    assert_eq!(outcome.dropped, 1);
    assert_eq!(
        summary(&outcome.report.logs),
        vec![
            (LogLevel::Error, "B", "disk full"),
            (LogLevel::Error, "Zürich", "capteur défaillant"),
            (LogLevel::Warning, "C", "low memory"),
        ]
    );
}

#[test]
fn in_memory_records_go_through_the_same_pipeline() {
    let source = StructuredRecords::new(vec![
        json!({"log level": "warning", "message": "w1", "station": "A"}),
        json!({"log level": "error", "message": "e1", "station": "B"}),
        json!({"log level": "warning", "message": "w2", "station": "C"}),
        json!({"log level": "error", "message": "e2", "station": "D"}),
        json!({"message": "no level", "station": "E"}),
    ]);
    let collector = FixedCollector {
        snapshot: SystemSnapshot::default(),
    };
    let exporter = CsvExporter::new();
    let outcome = TriageService::new(&source, &collector, &exporter).build();

    let messages: Vec<&str> = outcome
        .report
        .logs
        .iter()
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(messages, vec!["e1", "e2", "w1", "w2"]);
    assert_eq!(outcome.dropped, 0);
}

#[test]
fn missing_input_still_produces_status_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = LineFileSource::new(dir.path().join("absent.txt"));
    let collector = FixedCollector {
        snapshot: sample_snapshot(),
    };
    let exporter = CsvExporter::new();
    let outcome = TriageService::new(&source, &collector, &exporter).build();

    assert!(matches!(outcome.source_error, Some(SourceError::NotFound(_))));
    assert!(outcome.report.logs.is_empty());
    assert_eq!(outcome.report.status_table().rows.len(), 1);
}

#[test]
fn unexpected_json_document_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs.json");
    std::fs::write(&path, r#"{"records": []}"#).expect("write");

    let source = JsonFileSource::new(&path);
    let collector = FixedCollector {
        snapshot: SystemSnapshot::default(),
    };
    let exporter = CsvExporter::new();
    let outcome = TriageService::new(&source, &collector, &exporter).build();

    assert!(matches!(
        outcome.source_error,
        Some(SourceError::InvalidFormat(_))
    ));
    assert!(outcome.report.logs.is_empty());
}

#[test]
fn filtering_a_filtered_report_changes_nothing() {
    let source = LineFileSource::new(fixture_path("logs.txt"));
    let collector = FixedCollector {
        snapshot: SystemSnapshot::default(),
    };
    let exporter = CsvExporter::new();
    let first = TriageService::new(&source, &collector, &exporter)
        .build()
        .report
        .logs;

    let second = filter_and_sort(first.iter().cloned().map(LogCandidate::from));
    assert_eq!(first, second);
}
