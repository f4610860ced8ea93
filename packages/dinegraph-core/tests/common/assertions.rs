//! Domain assertions

use dinegraph_core::RankResult;

pub const EPS: f64 = 1e-9;

/// Scores are non-negative and sum to one
pub fn assert_is_distribution(result: &RankResult) {
    for entry in result.iter() {
        assert!(
            entry.score >= 0.0,
            "negative score {} for {}",
            entry.score,
            entry.identifier
        );
    }
    if !result.is_empty() {
        let total = result.total_score();
        assert!((total - 1.0).abs() < 1e-6, "scores sum to {}, expected 1", total);
    }
}

/// Entries are in descending score order, ties by identifier
pub fn assert_rank_ordered(result: &RankResult) {
    for pair in result.entries().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.identifier < b.identifier),
            "{} ({}) ranked before {} ({})",
            a.identifier,
            a.score,
            b.identifier,
            b.score
        );
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}
