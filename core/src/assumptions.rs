//! User-adjustable assumption inputs.
//!
//! The front end owns the current values and hands them to the models by
//! value on every change. Range clamping happens here, at the control
//! boundary; the models themselves accept any non-negative numbers.

use crate::config::FeeSchedule;
use crate::error::{CalcError, CalcResult};
use crate::types::Dollars;
use serde::{Deserialize, Serialize};

/// The five dials the calculator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionInputs {
    /// Monthly data API calls per active customer.
    pub api_calls_per_customer: f64,
    /// Average concurrent open-banking apps per customer.
    pub apps_per_customer: f64,
    /// Share of bank customers using open banking, percent.
    pub pct_customers_using_api: f64,
    /// Share of API users exceeding the monthly cap, percent.
    pub pct_reaching_cap: f64,
    /// Monthly payment initiations per active customer.
    pub payment_initiations_per_customer: f64,
}

impl Default for AssumptionInputs {
    fn default() -> Self {
        Self {
            api_calls_per_customer: 150.0,
            apps_per_customer: 2.0,
            pct_customers_using_api: 10.0,
            pct_reaching_cap: 30.0,
            payment_initiations_per_customer: 20.0,
        }
    }
}

impl AssumptionInputs {
    /// By-name setter for front ends that patch one dial at a time.
    pub fn set(&mut self, name: &str, value: f64) -> CalcResult<()> {
        match name {
            "api_calls_per_customer" => self.api_calls_per_customer = value,
            "apps_per_customer" => self.apps_per_customer = value,
            "pct_customers_using_api" => self.pct_customers_using_api = value,
            "pct_reaching_cap" => self.pct_reaching_cap = value,
            "payment_initiations_per_customer" => {
                self.payment_initiations_per_customer = value
            }
            _ => {
                return Err(CalcError::UnknownParameter {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Pull every field into its control range. Logs a warning for each
    /// value that had to move.
    pub fn clamped(&self, ranges: &AssumptionRanges) -> Self {
        Self {
            api_calls_per_customer: ranges
                .api_calls
                .clamp("api_calls_per_customer", self.api_calls_per_customer),
            apps_per_customer: ranges
                .apps
                .clamp("apps_per_customer", self.apps_per_customer),
            pct_customers_using_api: ranges
                .adoption_pct
                .clamp("pct_customers_using_api", self.pct_customers_using_api),
            pct_reaching_cap: ranges
                .cap_pct
                .clamp("pct_reaching_cap", self.pct_reaching_cap),
            payment_initiations_per_customer: ranges.initiations.clamp(
                "payment_initiations_per_customer",
                self.payment_initiations_per_customer,
            ),
        }
    }

    /// Monthly data-access cost for one customer on one app at the current
    /// call volume — the preview figure shown next to the calls control.
    pub fn data_cost_per_customer(&self, fees: &FeeSchedule) -> DataCostPreview {
        let monthly_cost = self.api_calls_per_customer * fees.data_call_fee;
        DataCostPreview {
            monthly_cost,
            capped: monthly_cost > fees.monthly_cap,
        }
    }
}

/// Uncapped linear cost plus whether the cap would kick in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataCostPreview {
    pub monthly_cost: Dollars,
    pub capped: bool,
}

/// Bounds and step size for one input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    fn clamp(&self, label: &str, value: f64) -> f64 {
        if value < self.min || value > self.max {
            let clamped = value.clamp(self.min, self.max);
            log::warn!(
                "assumptions: {label}={value} outside [{}, {}], clamped to {clamped}",
                self.min,
                self.max
            );
            clamped
        } else {
            value
        }
    }
}

/// Control ranges for all five dials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionRanges {
    pub api_calls: ParamRange,
    pub apps: ParamRange,
    pub adoption_pct: ParamRange,
    pub cap_pct: ParamRange,
    pub initiations: ParamRange,
}

impl Default for AssumptionRanges {
    fn default() -> Self {
        Self {
            api_calls: ParamRange {
                min: 10.0,
                max: 500.0,
                step: 10.0,
            },
            apps: ParamRange {
                min: 1.0,
                max: 10.0,
                step: 0.01,
            },
            adoption_pct: ParamRange {
                min: 1.0,
                max: 100.0,
                step: 1.0,
            },
            cap_pct: ParamRange {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
            initiations: ParamRange {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
        }
    }
}
