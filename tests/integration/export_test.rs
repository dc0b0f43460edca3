use serde_json::Value;

use triage::application::services::triage::TriageService;
use triage::domain::entities::report::{Report, LOG_COLUMNS, STATUS_COLUMNS};
use triage::domain::entities::snapshot::SystemSnapshot;
use triage::domain::ports::exporter::ExportError;
use triage::domain::value_objects::formats::ExportFormat;
use triage::infrastructure::exporters::create_exporter;
use triage::infrastructure::sources::LineFileSource;

use super::{fixture_path, sample_snapshot, FixedCollector};

fn read_csv_records(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("open csv");
    reader
        .records()
        .map(|r| r.expect("csv record").iter().map(ToString::to_string).collect())
        .collect()
}

fn build_and_export(
    format: ExportFormat,
    file_name: &str,
) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join(file_name);

    let source = LineFileSource::new(fixture_path("logs.txt"));
    let collector = FixedCollector {
        snapshot: sample_snapshot(),
    };
    let exporter = create_exporter(format);
    let service = TriageService::new(&source, &collector, &*exporter);
    let outcome = service.build();
    service
        .export(&outcome.report, &output)
        .expect("export succeeds");

    (dir, output)
}

#[test]
fn csv_artifact_holds_both_sections() {
    let (_dir, output) = build_and_export(ExportFormat::Csv, "system_report.csv");
    let records = read_csv_records(&output);

    assert_eq!(records[0], vec!["Logs"]);
    assert_eq!(records[1], LOG_COLUMNS.to_vec());
    assert_eq!(records[2], vec!["error", "disk full", "StationB"]);
    assert_eq!(records[5], vec!["warning", "fan speed degraded", "StationD"]);
    assert_eq!(records[6], vec!["System Status"]);
    assert_eq!(records[7], STATUS_COLUMNS.to_vec());
    assert_eq!(records.len(), 9);

    let status = &records[8];
    assert_eq!(status[0], "Linux 6.8.0");
    assert_eq!(status[1], "12.5");
    assert_eq!(status[4], "postgres: 30.0%\nnginx: 4.5%");
    assert_eq!(status[5], "HOME: /home/ops\nLANG: C.UTF-8");
    assert_eq!(status[6], "/dev/sda1: 42.0% used (2.00 GB free)");
    assert_eq!(status[7], "eth0\nlo");
    assert_eq!(status[8], "07:45:00");
}

#[test]
fn csv_sections_are_separated_by_a_blank_line() {
    let (_dir, output) = build_and_export(ExportFormat::Csv, "system_report.csv");
    let text = std::fs::read_to_string(&output).expect("read artifact");
    assert!(text.starts_with("Logs\nlog level,message,station\n"));
    assert!(text.contains("\n\nSystem Status\n"));
}

#[test]
fn json_artifact_keys_sections_by_name() {
    let (_dir, output) = build_and_export(ExportFormat::Json, "system_report.json");
    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("read")).expect("json");

    let logs = &document["Logs"];
    assert_eq!(logs["columns"], serde_json::json!(LOG_COLUMNS));
    assert_eq!(logs["rows"].as_array().map(Vec::len), Some(4));
    assert_eq!(logs["rows"][0][0], "error");

    let status = &document["System Status"];
    assert_eq!(status["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(status["rows"][0][8], "07:45:00");
}

#[test]
fn xlsx_artifact_has_one_worksheet_per_section() {
    use calamine::{open_workbook_auto, Reader};

    let (_dir, output) = build_and_export(ExportFormat::Xlsx, "system_report.xlsx");
    let mut workbook = open_workbook_auto(&output).expect("open workbook");
    assert_eq!(workbook.sheet_names(), ["Logs", "System Status"]);

    let logs = workbook.worksheet_range("Logs").expect("logs sheet");
    assert_eq!(logs.height(), 5);
    let first: Vec<String> = logs
        .rows()
        .nth(1)
        .expect("first log row")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(first, ["error", "disk full", "StationB"]);

    let status = workbook.worksheet_range("System Status").expect("status sheet");
    assert_eq!(status.height(), 2);
}

#[test]
fn empty_report_has_header_only_logs_section() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("empty.csv");
    let report = Report::new(vec![], SystemSnapshot::default());

    create_exporter(ExportFormat::Csv)
        .export(&report, &output)
        .expect("export");

    let records = read_csv_records(&output);
    assert_eq!(records[0], vec!["Logs"]);
    assert_eq!(records[1], LOG_COLUMNS.to_vec());
    assert_eq!(records[2], vec!["System Status"]);
    assert_eq!(records[3], STATUS_COLUMNS.to_vec());
    assert_eq!(records.len(), 5);
}

#[test]
fn unwritable_destination_fails_export_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("missing-dir").join("report.csv");

    let source = LineFileSource::new(fixture_path("logs.txt"));
    let collector = FixedCollector {
        snapshot: sample_snapshot(),
    };
    let exporter = create_exporter(ExportFormat::Csv);
    let service = TriageService::new(&source, &collector, &*exporter);
    let outcome = service.build();

    let err = service
        .export(&outcome.report, &output)
        .expect_err("directory does not exist");
    assert!(matches!(err, ExportError::WriteFailed { .. }));
    assert_eq!(outcome.report.logs.len(), 4);
}
