//! Comparison reporter behavior

use floodkit::pipeline::{Comparison, Trend};

#[test]
fn larger_period_reports_an_increase() {
    let comparison = Comparison::between(120.0, 100.0);

    assert_eq!(comparison.trend, Trend::Increased);
    assert_eq!(comparison.delta_km2, 20.0);
    assert_eq!(
        comparison.statement(),
        "Water spread increased by 20.00 sq. km compared to the historical maximum."
    );
}

#[test]
fn smaller_period_reports_a_decrease() {
    let comparison = Comparison::between(80.0, 100.0);

    assert_eq!(comparison.trend, Trend::Decreased);
    assert_eq!(comparison.delta_km2, -20.0);
    assert_eq!(
        comparison.statement(),
        "Water spread decreased by 20.00 sq. km compared to the historical maximum."
    );
}

#[test]
fn exact_equality_is_unchanged() {
    let comparison = Comparison::between(100.0, 100.0);

    assert_eq!(comparison.trend, Trend::Unchanged);
    assert_eq!(comparison.delta_km2, 0.0);
    assert_eq!(
        comparison.statement(),
        "Water spread is unchanged from the historical maximum."
    );
}

#[test]
fn near_equality_is_still_a_change() {
    let comparison = Comparison::between(100.001, 100.0);
    assert_eq!(comparison.trend, Trend::Increased);
}

#[test]
fn statement_rounds_to_two_decimals() {
    let comparison = Comparison::between(103.456, 100.0);
    assert!(comparison.statement().contains("increased by 3.46"));
}
