//! End-to-end: CSV on disk → recommendations

mod common;

use common::*;
use dinegraph_core::features::report::GraphExport;
use dinegraph_core::{
    CuisineMatch, DinegraphError, DuplicatePolicy, Preferences, RecommendationPipeline,
    RecommenderConfig, ReportFormat,
};
use pretty_assertions::assert_eq;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

fn pipeline() -> RecommendationPipeline {
    RecommendationPipeline::new(RecommenderConfig::default()).expect("default config is valid")
}

#[test]
fn test_run_from_path_counts_every_stage() {
    let csv = write_temp(&fixture_table());
    let output = pipeline()
        .run_from_path(csv.path(), &Preferences::new())
        .unwrap();

    assert_eq!(output.stats.loaded, 8);
    assert_eq!(output.stats.skipped, 3);
    assert_eq!(output.stats.filtered, 8);
    assert_eq!(output.stats.deduplicated, 1);
    assert_eq!(output.stats.nodes, 7);
    assert!(output.stats.converged);
    assert!(output.stats.total_ms() >= 0.0);

    assert_eq!(output.ranking.len(), 7);
    assert_eq!(output.report.entries.len(), 7);
    assert_is_distribution(&output.ranking);
    assert_rank_ordered(&output.ranking);
}

#[test]
fn test_cuisine_filter_ties_break_by_name() {
    let csv = write_temp(&fixture_table());
    let output = pipeline()
        .run_from_path(csv.path(), &Preferences::new().cuisine("cafe"))
        .unwrap();

    // San Churro Cafe and both Onesta rows; the second Onesta is dropped
    assert_eq!(output.stats.filtered, 3);
    assert_eq!(output.stats.nodes, 2);
    assert_eq!(output.stats.edges, 1);

    let names: Vec<_> = output
        .report
        .entries
        .iter()
        .map(|e| e.identifier.as_str())
        .collect();
    assert_eq!(names, vec!["Onesta", "San Churro Cafe"]);
    assert_close(output.report.entries[0].score, 0.5);
    assert_close(output.report.entries[1].score, 0.5);
}

#[test]
fn test_rating_and_cost_bounds() {
    let csv = write_temp(&fixture_table());
    let prefs = Preferences::new().min_rating(4.0).max_cost(800.0);
    let output = pipeline().run_from_path(csv.path(), &prefs).unwrap();

    let mut names: Vec<_> = output.ranking.iter().map(|e| e.identifier.clone()).collect();
    names.sort();
    assert_eq!(names, vec!["Jalsa", "Onesta", "Spice Elephant"]);
}

#[test]
fn test_yaml_config_applies() {
    let yaml = write_temp(
        "version: 1\nsimilarity:\n  cuisine_match: exact\nreport:\n  top_k: 2\n  format: json\n",
    );
    let config = RecommenderConfig::from_yaml(yaml.path()).unwrap();
    assert_eq!(config.similarity.cuisine_match, CuisineMatch::Exact);
    assert_eq!(config.report.format, ReportFormat::Json);

    let csv = write_temp(&fixture_table());
    let output = RecommendationPipeline::new(config)
        .unwrap()
        .run_from_path(csv.path(), &Preferences::new())
        .unwrap();

    assert_eq!(output.report.entries.len(), 2);
    assert_eq!(output.report.total_candidates, 7);

    let json = output.report.render(ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["entries"][0]["position"], 1);
}

#[test]
fn test_reject_policy_fails_on_repeated_name() {
    let csv = write_temp(&fixture_table());
    let config = RecommenderConfig::default().duplicates(DuplicatePolicy::Reject);
    let result = RecommendationPipeline::new(config)
        .unwrap()
        .run_from_path(csv.path(), &Preferences::new());

    assert!(matches!(
        result,
        Err(DinegraphError::DuplicateIdentifier { ref identifier, .. }) if identifier == "Onesta"
    ));
}

#[test]
fn test_missing_column_is_reported() {
    let csv = write_temp("name,cuisines,approx_cost(for two people),votes\nA,Cafe,300,1\n");
    let result = pipeline().run_from_path(csv.path(), &Preferences::new());

    match result {
        Err(DinegraphError::MissingColumn { column, .. }) => assert_eq!(column, "rate"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected a missing column error"),
    }
}

#[test]
fn test_graph_export_matches_pipeline_graph() {
    let csv = write_temp(&fixture_table());
    let output = pipeline()
        .run_from_path(csv.path(), &Preferences::new().cuisine("north indian"))
        .unwrap();

    let export = GraphExport::from_graph(&output.graph, Some(&output.ranking));
    assert_eq!(export.nodes.len(), output.stats.nodes);
    assert_eq!(export.edges.len(), output.stats.edges);
    assert_eq!(export.nodes[0].identifier, "Jalsa");

    let total: f64 = export.nodes.iter().filter_map(|n| n.score).sum();
    assert!((total - 1.0).abs() < 1e-6);
}

// ============================================================================
// Logging
// ============================================================================

#[derive(Clone, Debug)]
struct TestLogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for TestLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<R>(run: impl FnOnce() -> R) -> (R, String) {
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    let writer_buffer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(move || TestLogWriter {
            buffer: Arc::clone(&writer_buffer),
        })
        .finish();
    let result = tracing::subscriber::with_default(subscriber, run);
    let logs = {
        let guard = buffer.lock().expect("log buffer lock poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    };
    (result, logs)
}

#[test]
fn test_stage_summaries_are_logged() {
    let csv = write_temp(&fixture_table());
    let (result, logs) =
        with_captured_logs(|| pipeline().run_from_path(csv.path(), &Preferences::new()));

    assert!(result.is_ok());
    assert!(logs.contains("Loaded 8 restaurants (3 rows skipped)"), "logs: {logs}");
    assert!(logs.contains("Built similarity graph"), "logs: {logs}");
    assert!(logs.contains("Recommended 7 of 7 candidates"), "logs: {logs}");
}

#[test]
fn test_empty_match_warns() {
    let csv = write_temp(&fixture_table());
    let (result, logs) = with_captured_logs(|| {
        pipeline().run_from_path(csv.path(), &Preferences::new().cuisine("Ethiopian"))
    });

    let output = result.unwrap();
    assert!(output.ranking.is_empty());
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("No restaurants match"), "logs: {logs}");
}
