//! Mortgage amortization

mod amortization;
mod engine;

pub use amortization::{
    annuity_payment, installment_count, monthly_rate, remaining_balance, AmortizationSchedule,
    Installment,
};
pub use engine::{LoanAmortizationEngine, LoanResult, MAX_TENURE_YEARS};
