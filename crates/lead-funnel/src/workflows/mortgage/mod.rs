//! Mortgage estimate proxy and weekly-rate lookup.
//!
//! Estimate requests are range-checked locally, forwarded to the external
//! calculator, and returned as a typed monthly/annual payment breakdown.
//! The weekly rate quote is memoized in-process for an hour.

pub mod calculator;
pub mod domain;
pub mod rates;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use calculator::{ApiNinjasCalculator, CalculatorError, MortgageCalculator};
pub use domain::{
    EstimateParameters, EstimateRequest, EstimateValidationError, MortgageEstimate,
    PaymentBreakdown, RateQuote,
};
pub use rates::RateCache;
pub use router::mortgage_router;
pub use service::{MortgageError, MortgageEstimateService};
