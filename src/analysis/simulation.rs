//! Month-by-month building blocks shared by the analysis and the projection

use super::params::RentVsBuyParams;
use crate::loan::{annuity_payment, installment_count, monthly_rate, remaining_balance};

/// Tenure of the balance schedule used by the break-even search
pub(super) const BREAK_EVEN_TENURE_YEARS: u32 = 30;

/// Level-payment loan on `price - down_payment`
#[derive(Debug, Clone, Copy)]
pub(super) struct Mortgage {
    loan_amount: f64,
    monthly_rate: f64,
    installments: u32,
    pub payment: f64,
}

impl Mortgage {
    /// The loan actually taken out, on its own rate and tenure
    pub fn for_params(params: &RentVsBuyParams) -> Self {
        Self::new(
            params.loan_amount(),
            monthly_rate(params.interest_rate),
            installment_count(params.loan_tenure_years),
        )
    }

    /// Balance schedule the break-even search nets against property value
    ///
    /// Accrues at the investment return rate over a fixed
    /// [`BREAK_EVEN_TENURE_YEARS`], whatever the loan's own terms.
    pub fn break_even_basis(params: &RentVsBuyParams) -> Self {
        Self::new(
            params.loan_amount(),
            monthly_rate(params.investment_return_rate),
            installment_count(BREAK_EVEN_TENURE_YEARS),
        )
    }

    fn new(loan_amount: f64, monthly_rate: f64, installments: u32) -> Self {
        Self {
            loan_amount,
            monthly_rate,
            installments,
            payment: annuity_payment(loan_amount, monthly_rate, installments),
        }
    }

    /// Installments actually paid within `years`
    pub fn payments_within(&self, years: u32) -> u32 {
        (years * 12).min(self.installments)
    }

    pub fn balance_after(&self, years: u32) -> f64 {
        remaining_balance(
            self.loan_amount,
            self.monthly_rate,
            self.installments,
            self.payments_within(years),
        )
    }
}

pub(super) fn property_value(price: f64, appreciation_rate: f64, years: u32) -> f64 {
    price * (1.0 + appreciation_rate / 100.0).powi(years as i32)
}

/// Rent paid over `years`, rising once a year
pub(super) fn total_rent(monthly_rent: f64, rent_increase_rate: f64, years: u32) -> f64 {
    let mut total = 0.0;
    let mut rent = monthly_rent;
    for _ in 0..years {
        total += rent * 12.0;
        rent *= 1.0 + rent_increase_rate / 100.0;
    }
    total
}

/// Renter's portfolio, seeded with the down payment
///
/// Each month the renter invests whatever owning would have cost above the
/// rent, then the portfolio earns a month of return. Rent rises after every
/// twelfth month. Yields the value at the end of each year.
#[derive(Debug, Clone)]
pub(super) struct InvestmentPath {
    value: f64,
    rent: f64,
    owning_cost: f64,
    monthly_return: f64,
    rent_growth: f64,
}

impl InvestmentPath {
    pub fn new(params: &RentVsBuyParams, mortgage_payment: f64) -> Self {
        Self {
            value: params.down_payment,
            rent: params.monthly_rent,
            owning_cost: mortgage_payment + params.maintenance_cost / 12.0 + params.property_tax / 12.0,
            monthly_return: params.investment_return_rate / 100.0 / 12.0,
            rent_growth: 1.0 + params.rent_increase_rate / 100.0,
        }
    }

    /// Portfolio value after `years` full years
    pub fn value_after(mut self, years: u32) -> f64 {
        let mut value = self.value;
        for _ in 0..years {
            value = self.step_year();
        }
        value
    }

    fn step_year(&mut self) -> f64 {
        for _ in 0..12 {
            let surplus = self.owning_cost - self.rent;
            if surplus > 0.0 {
                self.value += surplus;
            }
            self.value *= 1.0 + self.monthly_return;
        }
        self.rent *= self.rent_growth;
        self.value
    }
}

impl Iterator for InvestmentPath {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.step_year())
    }
}
