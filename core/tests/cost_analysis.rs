//! Cost/ROI analysis model tests.

use apifee_core::assumptions::AssumptionInputs;
use apifee_core::config::{CalcConfig, CostItem};
use apifee_core::cost_model::analyze;
use apifee_core::projection::{project, total_annual_revenue};

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: got {actual}, expected {expected}"
    );
}

#[test]
fn cost_table_totals_match_reference_data() {
    let config = CalcConfig::default_nz();
    let analysis = analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        0.0,
        config.profit_benchmark_millions,
    );

    assert_eq!(analysis.total_initial_low, 21.0);
    assert_eq!(analysis.total_initial_high, 63.0);
    assert_eq!(analysis.total_ongoing_low, 2.0);
    assert_eq!(analysis.total_ongoing_high, 8.0);
}

/// Hand-computed metrics for the default assumption set: aggregate revenue
/// NZ$50,268,000 against the reference cost tables.
#[test]
fn default_scenario_metrics_match_hand_computation() {
    let config = CalcConfig::default_nz();
    let results = project(&config.banks, &config.fees, &AssumptionInputs::default());
    let revenue = total_annual_revenue(&results);

    let analysis = analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        revenue,
        config.profit_benchmark_millions,
    );

    assert_close(analysis.revenue_millions, 50.268, "revenue in millions");
    assert_close(analysis.net_annual_revenue_low, 48.268, "net annual, low");
    assert_close(analysis.net_annual_revenue_high, 42.268, "net annual, high");

    // round1(21 / 48.268) and round1(63 / 42.268)
    assert_eq!(analysis.years_to_break_even_low, 0.4);
    assert_eq!(analysis.years_to_break_even_high, 1.5);

    // round(net / initial * 100)
    assert_eq!(analysis.roi_low, 230.0);
    assert_eq!(analysis.roi_high, 67.0);

    // round(initial / 6400 * 1000) / 10
    assert_eq!(analysis.cost_pct_of_profit_low, 0.3);
    assert_eq!(analysis.cost_pct_of_profit_high, 1.0);
}

/// Zero revenue with no ongoing costs: net is zero and break-even is
/// infinite, never a panic.
#[test]
fn zero_net_revenue_yields_infinite_break_even() {
    let config = CalcConfig::default_nz();
    let analysis = analyze(
        &config.implementation_costs,
        &[],
        0.0,
        config.profit_benchmark_millions,
    );

    assert!(analysis.years_to_break_even_low.is_infinite());
    assert!(analysis.years_to_break_even_low > 0.0);
    assert!(analysis.years_to_break_even_high.is_infinite());
}

/// Revenue below ongoing costs: the model surfaces a negative break-even
/// for the display layer to interpret.
#[test]
fn net_loss_yields_negative_break_even() {
    let config = CalcConfig::default_nz();
    let analysis = analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        0.0,
        config.profit_benchmark_millions,
    );

    assert_close(analysis.net_annual_revenue_low, -2.0, "net annual, low");
    assert_close(analysis.net_annual_revenue_high, -8.0, "net annual, high");
    assert!(analysis.years_to_break_even_low < 0.0);
    assert!(analysis.years_to_break_even_high < 0.0);
    assert_eq!(analysis.years_to_break_even_low, -10.5);
    // round1(63 / -8) = -7.9
    assert_eq!(analysis.years_to_break_even_high, -7.9);
}

#[test]
fn roi_follows_net_over_initial() {
    let implementation = vec![CostItem {
        category: "Build".into(),
        low_estimate: 10.0,
        high_estimate: 20.0,
        description: String::new(),
    }];
    let ongoing = vec![CostItem {
        category: "Run".into(),
        low_estimate: 5.0,
        high_estimate: 5.0,
        description: String::new(),
    }];

    // 30M revenue: net 25 at both bounds.
    let analysis = analyze(&implementation, &ongoing, 30_000_000.0, 1_000.0);

    assert_eq!(analysis.roi_low, 250.0); // 25 / 10 * 100
    assert_eq!(analysis.roi_high, 125.0); // 25 / 20 * 100
    assert_eq!(analysis.years_to_break_even_low, 0.4);
    assert_eq!(analysis.years_to_break_even_high, 0.8);
    assert_eq!(analysis.cost_pct_of_profit_low, 1.0);
    assert_eq!(analysis.cost_pct_of_profit_high, 2.0);
}
