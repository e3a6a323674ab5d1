//! Cost/ROI analysis — break-even, ROI, and profit-share metrics built on
//! the aggregate projected revenue.
//!
//! One-shot pure computation, re-run whenever the projection changes.
//! Degenerate inputs (net revenue <= 0) produce a non-finite or negative
//! break-even rather than an error; the display layer decides how to
//! render that.

use crate::config::CostItem;
use crate::types::{Dollars, Millions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisResult {
    /// One-time build cost totals, millions NZD.
    pub total_initial_low: Millions,
    pub total_initial_high: Millions,
    /// Recurring annual cost totals, millions NZD.
    pub total_ongoing_low: Millions,
    pub total_ongoing_high: Millions,
    /// Aggregate projected annual fee revenue, millions NZD.
    pub revenue_millions: Millions,
    pub net_annual_revenue_low: Millions,
    pub net_annual_revenue_high: Millions,
    /// Years, one decimal place. Non-finite or negative when net revenue
    /// cannot repay the build cost.
    pub years_to_break_even_low: f64,
    pub years_to_break_even_high: f64,
    /// Annual return on the initial investment, percent, whole number.
    pub roi_low: f64,
    pub roi_high: f64,
    /// Build cost as a share of the external profit benchmark, percent,
    /// one decimal place.
    pub cost_pct_of_profit_low: f64,
    pub cost_pct_of_profit_high: f64,
}

/// Analyze cost tables against the aggregate annual revenue.
pub fn analyze(
    implementation_costs: &[CostItem],
    ongoing_costs: &[CostItem],
    aggregate_annual_revenue: Dollars,
    profit_benchmark_millions: Millions,
) -> CostAnalysisResult {
    let total_initial_low: Millions =
        implementation_costs.iter().map(|c| c.low_estimate).sum();
    let total_initial_high: Millions =
        implementation_costs.iter().map(|c| c.high_estimate).sum();
    let total_ongoing_low: Millions = ongoing_costs.iter().map(|c| c.low_estimate).sum();
    let total_ongoing_high: Millions =
        ongoing_costs.iter().map(|c| c.high_estimate).sum();

    let revenue_millions = aggregate_annual_revenue / 1_000_000.0;
    let net_annual_revenue_low = revenue_millions - total_ongoing_low;
    let net_annual_revenue_high = revenue_millions - total_ongoing_high;

    let years_to_break_even_low = round1(total_initial_low / net_annual_revenue_low);
    let years_to_break_even_high = round1(total_initial_high / net_annual_revenue_high);

    if !years_to_break_even_low.is_finite()
        || years_to_break_even_low < 0.0
        || !years_to_break_even_high.is_finite()
        || years_to_break_even_high < 0.0
    {
        log::warn!(
            "cost model: projected revenue ({revenue_millions:.2}M) does not cover \
             ongoing costs; break-even is not meaningful"
        );
    }

    let roi_low = (net_annual_revenue_low / total_initial_low * 100.0).round();
    let roi_high = (net_annual_revenue_high / total_initial_high * 100.0).round();

    let cost_pct_of_profit_low =
        (total_initial_low / profit_benchmark_millions * 1000.0).round() / 10.0;
    let cost_pct_of_profit_high =
        (total_initial_high / profit_benchmark_millions * 1000.0).round() / 10.0;

    CostAnalysisResult {
        total_initial_low,
        total_initial_high,
        total_ongoing_low,
        total_ongoing_high,
        revenue_millions,
        net_annual_revenue_low,
        net_annual_revenue_high,
        years_to_break_even_low,
        years_to_break_even_high,
        roi_low,
        roi_high,
        cost_pct_of_profit_low,
        cost_pct_of_profit_high,
    }
}

/// Round to one decimal place. Passes non-finite values through.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
