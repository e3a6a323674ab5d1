//! Static reference data: bank profiles, the statutory fee schedule, and
//! the implementation/ongoing cost tables.
//!
//! Loaded from the data/ directory. In tests (or when no data directory is
//! present) use `CalcConfig::default_nz()`.

use crate::error::{CalcError, CalcResult};
use crate::types::{Customers, Dollars, Millions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankProfile {
    pub name: String,
    pub customer_count: Customers,
    /// Brand color, passed through to the display layer untouched.
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
struct BanksFile {
    banks: Vec<BankProfile>,
}

/// Per-unit charges banks may levy under the Customer and Product Data
/// Act 2025. All fees apply per app, so a customer on multiple apps
/// generates multiples of each charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Charge per successful data API call.
    pub data_call_fee: Dollars,
    /// Maximum monthly data-access charge per customer.
    pub monthly_cap: Dollars,
    /// Charge per payment initiation. Not subject to the data cap.
    pub payment_initiation_fee: Dollars,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            data_call_fee: 0.01,
            monthly_cap: 5.0,
            payment_initiation_fee: 0.05,
        }
    }
}

/// One row of a cost table. Estimates are in millions NZD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub category: String,
    pub low_estimate: Millions,
    pub high_estimate: Millions,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CostModelFile {
    implementation_costs: Vec<CostItem>,
    ongoing_costs: Vec<CostItem>,
    profit_benchmark_millions: Millions,
}

#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub banks: Vec<BankProfile>,
    pub fees: FeeSchedule,
    /// One-time build costs.
    pub implementation_costs: Vec<CostItem>,
    /// Recurring annual costs.
    pub ongoing_costs: Vec<CostItem>,
    /// Combined annual profit of the big four (millions NZD), the
    /// denominator for the cost-as-share-of-profit metric.
    pub profit_benchmark_millions: Millions,
}

impl CalcConfig {
    /// Load from the data/ directory.
    pub fn load(data_dir: &str) -> CalcResult<Self> {
        let banks_path = format!("{data_dir}/banks.json");
        let banks_file: BanksFile = serde_json::from_str(&read(&banks_path)?)?;

        let fee_path = format!("{data_dir}/fee_schedule.json");
        let fees: FeeSchedule = serde_json::from_str(&read(&fee_path)?)?;

        let cost_path = format!("{data_dir}/cost_model.json");
        let cost_file: CostModelFile = serde_json::from_str(&read(&cost_path)?)?;

        log::info!(
            "config: loaded {} banks, {} implementation cost rows, {} ongoing cost rows from {data_dir}",
            banks_file.banks.len(),
            cost_file.implementation_costs.len(),
            cost_file.ongoing_costs.len()
        );

        Ok(Self {
            banks: banks_file.banks,
            fees,
            implementation_costs: cost_file.implementation_costs,
            ongoing_costs: cost_file.ongoing_costs,
            profit_benchmark_millions: cost_file.profit_benchmark_millions,
        })
    }

    /// Hardcoded NZ reference data, used by tests and as the fallback when
    /// no data directory is present. Customer counts are approximate.
    pub fn default_nz() -> Self {
        let banks = vec![
            BankProfile {
                name: "ANZ".into(),
                customer_count: 2_000_000,
                color: "#0072CE".into(),
            },
            BankProfile {
                name: "ASB".into(),
                customer_count: 1_400_000,
                color: "#FFB600".into(),
            },
            BankProfile {
                name: "BNZ".into(),
                customer_count: 1_200_000,
                color: "#0075C9".into(),
            },
            BankProfile {
                name: "Westpac".into(),
                customer_count: 1_300_000,
                color: "#D5002B".into(),
            },
        ];

        let implementation_costs = vec![
            CostItem {
                category: "API Development".into(),
                low_estimate: 5.0,
                high_estimate: 15.0,
                description: "Designing RESTful APIs, integrating with legacy core banking systems, testing".into(),
            },
            CostItem {
                category: "Security & Compliance".into(),
                low_estimate: 3.0,
                high_estimate: 10.0,
                description: "Encryption, OAuth 2.0 implementation, fraud monitoring, regulatory audits".into(),
            },
            CostItem {
                category: "Third-Party Support".into(),
                low_estimate: 2.0,
                high_estimate: 5.0,
                description: "Developer portals, sandbox environments, documentation, and SDKs".into(),
            },
            CostItem {
                category: "Legacy System Upgrades".into(),
                low_estimate: 10.0,
                high_estimate: 30.0,
                description: "Modernizing outdated infrastructure to enable API connectivity".into(),
            },
            CostItem {
                category: "Legal & Accreditation".into(),
                low_estimate: 1.0,
                high_estimate: 3.0,
                description: "Compliance with the Customer and Product Data Act 2025, legal reviews".into(),
            },
        ];

        let ongoing_costs = vec![CostItem {
            category: "Maintenance & Operations".into(),
            low_estimate: 2.0,
            high_estimate: 8.0,
            description: "Hosting (cloud), API monitoring, bug fixes, version updates".into(),
        }];

        Self {
            banks,
            fees: FeeSchedule::default(),
            implementation_costs,
            ongoing_costs,
            // Big four combined profits, FY2023.
            profit_benchmark_millions: 6_400.0,
        }
    }
}

fn read(path: &str) -> CalcResult<String> {
    std::fs::read_to_string(path).map_err(|source| CalcError::ConfigRead {
        path: path.to_string(),
        source,
    })
}
