//! Mortgage calculation for a purchase price and down payment

use serde::{Deserialize, Serialize};

use super::amortization::{annuity_payment, installment_count, monthly_rate, AmortizationSchedule};
use crate::error::{check, Result};

/// Longest supported mortgage tenure
pub const MAX_TENURE_YEARS: u32 = 35;

/// Result of a loan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    // Inputs
    pub price: f64,
    pub down_payment: f64,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    pub tenure_years: u32,

    // Loan
    pub loan_amount: f64,
    /// Loan amount as a percentage of price
    pub loan_to_value_ratio: f64,
    pub number_of_installments: u32,
    pub monthly_payment: f64,
    pub total_payable: f64,
    pub total_interest: f64,

    // Installment splits
    pub first_installment_principal: f64,
    pub first_installment_interest: f64,
    pub last_installment_principal: f64,
    pub last_installment_interest: f64,
}

/// Level-payment mortgage calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanAmortizationEngine;

impl LoanAmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Monthly installment for a principal, annual rate (percent) and tenure
    pub fn compute_monthly_payment(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<f64> {
        check::positive("principal", principal)?;
        check::interest_rate("interest_rate", annual_rate_percent)?;
        check::years("tenure_years", tenure_years, 1, MAX_TENURE_YEARS)?;

        Ok(annuity_payment(
            principal,
            monthly_rate(annual_rate_percent),
            installment_count(tenure_years),
        ))
    }

    /// Full loan result for a purchase
    pub fn compute_loan_result(
        &self,
        price: f64,
        down_payment: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<LoanResult> {
        let schedule = self.amortization_schedule(price, down_payment, annual_rate_percent, tenure_years)?;

        let loan_amount = price - down_payment;
        let r = schedule.monthly_rate;
        let n = installment_count(tenure_years);
        let monthly_payment = schedule.payment;

        let total_payable = monthly_payment * n as f64;
        let total_interest = total_payable - loan_amount;

        let first_installment_interest = loan_amount * r;
        let first_installment_principal = monthly_payment - first_installment_interest;

        let (last_installment_principal, last_installment_interest) = schedule
            .last()
            .map(|row| (row.principal, row.interest))
            .unwrap_or((0.0, 0.0));

        log::debug!(
            "loan {:.2} at {}% over {} months: payment {:.2}, interest {:.2}",
            loan_amount,
            annual_rate_percent,
            n,
            monthly_payment,
            total_interest
        );

        Ok(LoanResult {
            price,
            down_payment,
            interest_rate: annual_rate_percent,
            tenure_years,
            loan_amount,
            loan_to_value_ratio: loan_amount / price * 100.0,
            number_of_installments: n,
            monthly_payment,
            total_payable,
            total_interest,
            first_installment_principal,
            first_installment_interest,
            last_installment_principal,
            last_installment_interest,
        })
    }

    /// Month-by-month schedule for a purchase
    pub fn amortization_schedule(
        &self,
        price: f64,
        down_payment: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<AmortizationSchedule> {
        check::positive("price", price)?;
        check::down_payment(down_payment, price)?;

        let loan_amount = price - down_payment;
        let payment = self.compute_monthly_payment(loan_amount, annual_rate_percent, tenure_years)?;

        Ok(AmortizationSchedule::build(
            loan_amount,
            monthly_rate(annual_rate_percent),
            installment_count(tenure_years),
            payment,
        ))
    }
}
