//! apifee-core — projected open-banking API fee revenue for NZ's big four.
//!
//! Everything here is pure computation: the `fee-runner` binary (or any UI
//! front end) owns input controls and display. Derived records are
//! recomputed from scratch on every input change and never stored.

pub mod assumptions;
pub mod config;
pub mod cost_model;
pub mod error;
pub mod projection;
pub mod report;
pub mod types;
