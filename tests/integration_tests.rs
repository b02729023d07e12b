use report_safety::core::ParsePolicy;
use report_safety::{AnalyzerError, CliConfig, LocalStorage, ReportPipeline, SafetyEngine};
use tempfile::TempDir;

const SAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

fn write_input(dir: &TempDir, content: impl AsRef<[u8]>) {
    let data_dir = dir.path().join("Data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("2.txt"), content).unwrap();
}

fn engine_for(
    dir: &TempDir,
    config: CliConfig,
) -> SafetyEngine<ReportPipeline<LocalStorage, CliConfig>> {
    let storage = LocalStorage::new(dir.path());
    SafetyEngine::new(ReportPipeline::new(storage, config))
}

#[test]
fn test_end_to_end_sample_counts() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, SAMPLE);

    let result = engine_for(&temp_dir, CliConfig::default()).run().unwrap();

    assert_eq!(result.summary.total_reports, 6);
    assert_eq!(result.summary.safe_count, 2);
    assert_eq!(result.summary.safe_count_with_dampener, 4);
    assert_eq!(result.summary.skipped_lines, 0);

    let safe_lines: Vec<usize> = result
        .outcomes
        .iter()
        .filter(|o| o.safe)
        .map(|o| o.line)
        .collect();
    assert_eq!(safe_lines, vec![1, 6]);
}

#[test]
fn test_missing_input_withholds_summary() {
    let temp_dir = TempDir::new().unwrap();

    let err = engine_for(&temp_dir, CliConfig::default())
        .run()
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::InputError { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_parse_error_aborts_by_default() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "1 2 3\n4 5 x\n7 8 9\n");

    let err = engine_for(&temp_dir, CliConfig::default())
        .run()
        .unwrap_err();

    match err {
        AnalyzerError::ParseError { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source.token, "x");
        }
        other => panic!("expected parse error, got {}", other),
    }
}

#[test]
fn test_skip_policy_continues_past_bad_lines() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "1 2 3\n4 5 x\n\n9 8 6\n1 1 1\n");

    let config = CliConfig {
        on_parse_error: ParsePolicy::Skip,
        ..CliConfig::default()
    };
    let result = engine_for(&temp_dir, config).run().unwrap();

    assert_eq!(result.summary.total_reports, 3);
    assert_eq!(result.summary.skipped_lines, 1);
    assert_eq!(result.summary.safe_count, 2);
    assert_eq!(result.summary.safe_count_with_dampener, 2);
}

#[test]
fn test_report_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, SAMPLE);

    let config = CliConfig {
        report_csv: Some("out/outcomes.csv".to_string()),
        ..CliConfig::default()
    };
    engine_for(&temp_dir, config).run().unwrap();

    let csv_path = temp_dir.path().join("out/outcomes.csv");
    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 6);
    assert_eq!(&rows[4][1], "8 6 4 4 1");
    assert_eq!(&rows[4][2], "false");
    assert_eq!(&rows[4][3], "true");
    assert_eq!(&rows[4][4], "2");
    assert_eq!(&rows[0][4], "");
}

#[test]
fn test_blank_lines_do_not_abort_default_run() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, "7 6 4 2 1\n\n   \n1 3 2 4 5\n");

    let result = engine_for(&temp_dir, CliConfig::default()).run().unwrap();

    assert_eq!(result.summary.total_reports, 2);
    assert_eq!(result.summary.skipped_lines, 0);
    assert_eq!(result.summary.safe_count, 1);
    assert_eq!(result.summary.safe_count_with_dampener, 2);
    assert_eq!(result.outcomes[1].line, 4);
}

#[test]
fn test_invalid_utf8_line_is_skipped_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, b"1 2 3\n4 5 \xff\n7 6 4\n");

    let config = CliConfig {
        on_parse_error: ParsePolicy::Skip,
        ..CliConfig::default()
    };
    let result = engine_for(&temp_dir, config).run().unwrap();

    assert_eq!(result.summary.total_reports, 2);
    assert_eq!(result.summary.skipped_lines, 1);
    assert_eq!(result.summary.safe_count, 2);
}

#[test]
fn test_invalid_utf8_line_aborts_as_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    write_input(&temp_dir, b"1 2 3\n4 5 \xff\n");

    let err = engine_for(&temp_dir, CliConfig::default())
        .run()
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::ParseError { line: 2, .. }));
    assert_eq!(err.exit_code(), 1);
}
