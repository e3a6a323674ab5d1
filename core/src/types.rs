//! Shared primitive types used across the calculator.

/// A monetary amount in New Zealand dollars.
pub type Dollars = f64;

/// A monetary amount in millions of New Zealand dollars.
pub type Millions = f64;

/// A customer head count.
pub type Customers = u64;
