//! Revenue projection model — per-bank fee revenue from assumption inputs.
//!
//! This model is REACTIVE and total: it is re-run in full whenever an
//! input changes, produces one result per bank in input order, and has no
//! error conditions over its documented domain.

use crate::assumptions::AssumptionInputs;
use crate::config::{BankProfile, FeeSchedule};
use crate::types::{Customers, Dollars};
use serde::{Deserialize, Serialize};

/// A bank's profile extended with its projected fee revenue. All revenue
/// fields are monthly NZD except `annual_revenue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRevenueResult {
    pub name: String,
    pub customer_count: Customers,
    pub color: String,
    pub customers_using_api: Customers,
    pub customers_below_cap: Customers,
    pub customers_hitting_cap: Customers,
    pub revenue_below_cap: Dollars,
    pub revenue_at_cap: Dollars,
    pub payment_initiation_revenue: Dollars,
    pub total_monthly_revenue: Dollars,
    pub annual_revenue: Dollars,
}

impl BankRevenueResult {
    /// Monthly data-access revenue, both sides of the cap.
    pub fn data_api_revenue(&self) -> Dollars {
        self.revenue_below_cap + self.revenue_at_cap
    }
}

/// Project fee revenue for each bank. Order preserved, one result per bank.
pub fn project(
    banks: &[BankProfile],
    fees: &FeeSchedule,
    inputs: &AssumptionInputs,
) -> Vec<BankRevenueResult> {
    banks
        .iter()
        .map(|bank| project_bank(bank, fees, inputs))
        .collect()
}

fn project_bank(
    bank: &BankProfile,
    fees: &FeeSchedule,
    inputs: &AssumptionInputs,
) -> BankRevenueResult {
    // ── Customer segmentation ──────────────────────────────
    let customers_using_api = (bank.customer_count as f64
        * (inputs.pct_customers_using_api / 100.0))
        .round() as Customers;

    let customers_below_cap = (customers_using_api as f64
        * (1.0 - inputs.pct_reaching_cap / 100.0))
        .round()
        .max(0.0) as Customers;

    // Partition invariant: below + hitting == using for pct in [0, 100].
    let customers_hitting_cap = customers_using_api.saturating_sub(customers_below_cap);

    // ── Revenue ────────────────────────────────────────────

    // Uncapped linear segment: per call, per app.
    let revenue_below_cap = customers_below_cap as f64
        * inputs.api_calls_per_customer
        * inputs.apps_per_customer
        * fees.data_call_fee;

    // Capped segment charges the flat cap per app. Approximation carried
    // over from the published model: a customer just over the cap pays the
    // full cap, not min(linear rate, cap).
    let revenue_at_cap =
        customers_hitting_cap as f64 * fees.monthly_cap * inputs.apps_per_customer;

    // Payment initiation fees sit outside the data cap and apply to every
    // API user.
    let payment_initiation_revenue = customers_using_api as f64
        * inputs.payment_initiations_per_customer
        * inputs.apps_per_customer
        * fees.payment_initiation_fee;

    // ── Totals ─────────────────────────────────────────────
    let total_monthly_revenue =
        revenue_below_cap + revenue_at_cap + payment_initiation_revenue;
    let annual_revenue = total_monthly_revenue * 12.0;

    BankRevenueResult {
        name: bank.name.clone(),
        customer_count: bank.customer_count,
        color: bank.color.clone(),
        customers_using_api,
        customers_below_cap,
        customers_hitting_cap,
        revenue_below_cap,
        revenue_at_cap,
        payment_initiation_revenue,
        total_monthly_revenue,
        annual_revenue,
    }
}

/// Combined annual revenue across all bank results.
pub fn total_annual_revenue(results: &[BankRevenueResult]) -> Dollars {
    results.iter().map(|r| r.annual_revenue).sum()
}
