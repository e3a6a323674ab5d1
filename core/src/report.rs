//! Display strings for the headless runner. The core only builds text;
//! layout is the caller's problem.

use crate::config::FeeSchedule;
use crate::cost_model::CostAnalysisResult;
use crate::types::{Dollars, Millions};

/// Estimated marginal cost for a bank to serve one API call, used to put
/// the 1-cent charge in context.
pub const EST_PROCESSING_COST_PER_CALL: Dollars = 0.0001;

/// Whole New Zealand dollars with thousands separators, en-NZ style.
/// Non-finite amounts render as "n/a".
pub fn format_nzd(amount: Dollars) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Millions of NZD to two decimal places.
pub fn format_millions(m: Millions) -> String {
    if !m.is_finite() {
        return "n/a".to_string();
    }
    format!("NZ${m:.2}M")
}

/// Break-even years for display: one decimal place, or "n/a" when the
/// model produced a non-meaningful (non-finite or negative) value.
pub fn format_years(years: f64) -> String {
    if years.is_finite() && years >= 0.0 {
        format!("{years:.1}")
    } else {
        "n/a".to_string()
    }
}

/// Narrative commentary for the cost analysis tab, one line per insight.
pub fn insights(analysis: &CostAnalysisResult, fees: &FeeSchedule) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    let break_even = if analysis.years_to_break_even_low.is_finite()
        && analysis.years_to_break_even_low >= 0.0
        && analysis.years_to_break_even_high.is_finite()
        && analysis.years_to_break_even_high >= 0.0
    {
        format!(
            "at current rates the investment is recouped in roughly {} to {} years",
            format_years(analysis.years_to_break_even_low),
            format_years(analysis.years_to_break_even_high)
        )
    } else {
        "at current rates projected fee revenue does not cover ongoing costs, so the \
         investment is never recouped"
            .to_string()
    };
    lines.push(format!(
        "Initial API implementation costs range from NZ${:.0}M to NZ${:.0}M against \
         projected annual fee revenue of {}; {}.",
        analysis.total_initial_low,
        analysis.total_initial_high,
        format_millions(analysis.revenue_millions),
        break_even
    ));

    let markup = fees.data_call_fee / EST_PROCESSING_COST_PER_CALL;
    lines.push(format!(
        "Serving an API call costs a bank about NZ${EST_PROCESSING_COST_PER_CALL} \
         while the charge is NZ${:.2} per call, a markup of roughly {markup:.0}x over \
         operating cost.",
        fees.data_call_fee
    ));

    lines.push(format!(
        "Implementation costs represent just {:.1}% to {:.1}% of the big four's \
         combined annual profits.",
        analysis.cost_pct_of_profit_low, analysis.cost_pct_of_profit_high
    ));

    lines
}
