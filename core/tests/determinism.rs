//! The models are pure: identical inputs must give bit-identical outputs.

use apifee_core::assumptions::AssumptionInputs;
use apifee_core::config::CalcConfig;
use apifee_core::cost_model::analyze;
use apifee_core::projection::{project, total_annual_revenue};

#[test]
fn repeated_projection_is_bit_identical() {
    let config = CalcConfig::default_nz();
    let inputs = AssumptionInputs {
        api_calls_per_customer: 237.0,
        apps_per_customer: 1.73,
        pct_customers_using_api: 42.0,
        pct_reaching_cap: 11.0,
        payment_initiations_per_customer: 55.0,
    };

    let first = project(&config.banks, &config.fees, &inputs);
    let second = project(&config.banks, &config.fees, &inputs);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(
            a.total_monthly_revenue.to_bits(),
            b.total_monthly_revenue.to_bits(),
            "{}: monthly revenue bits diverged",
            a.name
        );
        assert_eq!(a.annual_revenue.to_bits(), b.annual_revenue.to_bits());
    }
    assert_eq!(
        total_annual_revenue(&first).to_bits(),
        total_annual_revenue(&second).to_bits()
    );
}

#[test]
fn repeated_cost_analysis_is_bit_identical() {
    let config = CalcConfig::default_nz();

    let first = analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        50_268_000.0,
        config.profit_benchmark_millions,
    );
    let second = analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        50_268_000.0,
        config.profit_benchmark_millions,
    );

    assert_eq!(first, second);
    assert_eq!(
        first.years_to_break_even_low.to_bits(),
        second.years_to_break_even_low.to_bits()
    );
}
