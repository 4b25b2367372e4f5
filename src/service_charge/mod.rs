//! Recurring community service charges

mod components;
mod estimator;

pub use components::{ComponentFees, CLEANING_RATE_PER_SQFT, MISC_CHARGE_RATE};
pub use estimator::{ServiceChargeEstimator, ServiceChargeResult, REFERENCE_SIZES};
