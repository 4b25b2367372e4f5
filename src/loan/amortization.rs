//! Annuity formulas and the month-by-month amortization schedule
//!
//! These functions do no validation; the engine and the rent-vs-buy
//! analyzer check their inputs before calling in.

use serde::{Deserialize, Serialize};

/// Monthly rate from an annual rate in percent (4.5 -> 0.00375)
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of monthly installments in a loan tenure
pub fn installment_count(tenure_years: u32) -> u32 {
    tenure_years * 12
}

/// Level monthly payment that repays `principal` over `installments` months
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r is zero.
pub fn annuity_payment(principal: f64, monthly_rate: f64, installments: u32) -> f64 {
    if monthly_rate.abs() < 1e-10 {
        return principal / installments as f64;
    }

    let growth = (1.0 + monthly_rate).powi(installments as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Outstanding balance after `payments_made` level payments
///
/// Uses the present value of the remaining payments rather than stepping
/// through the schedule.
pub fn remaining_balance(
    loan_amount: f64,
    monthly_rate: f64,
    installments: u32,
    payments_made: u32,
) -> f64 {
    if payments_made >= installments {
        return 0.0;
    }

    if monthly_rate.abs() < 1e-10 {
        return loan_amount * (1.0 - payments_made as f64 / installments as f64);
    }

    let payment = annuity_payment(loan_amount, monthly_rate, installments);
    let remaining = (installments - payments_made) as i32;
    (payment / monthly_rate) * (1.0 - (1.0 + monthly_rate).powi(-remaining))
}

/// A single month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-indexed installment number
    pub number: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance left after this installment
    pub closing_balance: f64,
}

/// Full amortization schedule for a level-payment loan
///
/// The final installment is not adjusted to absorb floating-point residue,
/// so `residual_balance()` is close to but not exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub payment: f64,
    installments: Vec<Installment>,
}

impl AmortizationSchedule {
    /// Step the balance forward through every installment
    pub fn build(loan_amount: f64, monthly_rate: f64, installments: u32, payment: f64) -> Self {
        let mut rows = Vec::with_capacity(installments as usize);
        let mut balance = loan_amount;

        for number in 1..=installments {
            let interest = balance * monthly_rate;
            let principal = payment - interest;
            balance -= principal;

            rows.push(Installment {
                number,
                payment,
                principal,
                interest,
                closing_balance: balance,
            });
        }

        Self {
            loan_amount,
            monthly_rate,
            payment,
            installments: rows,
        }
    }

    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    pub fn first(&self) -> Option<&Installment> {
        self.installments.first()
    }

    pub fn last(&self) -> Option<&Installment> {
        self.installments.last()
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn total_principal(&self) -> f64 {
        self.installments.iter().map(|i| i.principal).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.installments.iter().map(|i| i.interest).sum()
    }

    /// Balance left after the final installment (rounding residue)
    pub fn residual_balance(&self) -> f64 {
        self.installments
            .last()
            .map(|i| i.closing_balance)
            .unwrap_or(self.loan_amount)
    }
}
