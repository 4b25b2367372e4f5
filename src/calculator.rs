//! One-stop calculator over a shared rate table
//!
//! Loads configuration once, then serves every calculation as a plain
//! function of its inputs. Each operation comes in up to three forms:
//! raw values, a [`PropertyProfile`], or a property id resolved through a
//! [`PropertySource`].

use std::path::Path;

use crate::analysis::{RentVsBuyAnalysisResult, RentVsBuyAnalyzer, RentVsBuyParams, YearlySnapshot};
use crate::checklist::{BuyerProfile, DocumentChecklist};
use crate::comparison::{ComparisonEngine, ComparisonResult};
use crate::error::{ConfigError, Result};
use crate::fees::{CostBreakdownResult, FeeSchedule, FeeScheduleCalculator, PurchaseExtras};
use crate::loan::{AmortizationSchedule, LoanAmortizationEngine, LoanResult};
use crate::property::{PropertyProfile, PropertySource, PropertyType};
use crate::rates::RateTable;
use crate::service_charge::{ServiceChargeEstimator, ServiceChargeResult};

/// Property finance calculator
///
/// # Example
/// ```ignore
/// let calc = Calculator::from_csv()?;
///
/// let loan = calc.compute_loan(1_000_000.0, 200_000.0, 4.5, 25)?;
/// let charges = calc.estimate_service_charge("Dubai Marina", &PropertyType::Apartment, 1_000.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    rates: RateTable,
    fees: FeeScheduleCalculator,
    loans: LoanAmortizationEngine,
    comparisons: ComparisonEngine,
    analyzer: RentVsBuyAnalyzer,
}

impl Calculator {
    /// Calculator with the built-in community rates
    pub fn new() -> Self {
        Self::with_rates(RateTable::dubai_default())
    }

    /// Load rates from `data/rates/`
    pub fn from_csv() -> std::result::Result<Self, ConfigError> {
        Ok(Self::with_rates(RateTable::from_csv()?))
    }

    /// Load rates from a specific directory
    pub fn from_csv_path(path: &Path) -> std::result::Result<Self, ConfigError> {
        Ok(Self::with_rates(RateTable::from_csv_path(path)?))
    }

    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            rates,
            fees: FeeScheduleCalculator::default(),
            loans: LoanAmortizationEngine::new(),
            comparisons: ComparisonEngine::new(),
            analyzer: RentVsBuyAnalyzer::new(),
        }
    }

    /// Replace the acquisition fee schedule
    pub fn with_fee_schedule(mut self, schedule: FeeSchedule) -> Self {
        self.fees = FeeScheduleCalculator::new(schedule);
        self
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn fee_schedule(&self) -> &FeeSchedule {
        self.fees.schedule()
    }

    // ------------------------------------------------------------------
    // Plain values
    // ------------------------------------------------------------------

    pub fn compute_cost_breakdown(
        &self,
        price: f64,
        mortgage_amount: f64,
        life_insurance_cost: f64,
        maintenance_deposit: f64,
        utility_fees: f64,
        moving_costs: f64,
    ) -> Result<CostBreakdownResult> {
        let extras = PurchaseExtras {
            life_insurance_cost,
            maintenance_deposit,
            utility_connection_fees: utility_fees,
            moving_costs,
        };
        self.fees.compute(price, mortgage_amount, extras)
    }

    pub fn compute_loan(
        &self,
        price: f64,
        down_payment: f64,
        interest_rate: f64,
        tenure_years: u32,
    ) -> Result<LoanResult> {
        self.loans.compute_loan_result(price, down_payment, interest_rate, tenure_years)
    }

    pub fn loan_schedule(
        &self,
        price: f64,
        down_payment: f64,
        interest_rate: f64,
        tenure_years: u32,
    ) -> Result<AmortizationSchedule> {
        self.loans.amortization_schedule(price, down_payment, interest_rate, tenure_years)
    }

    pub fn estimate_service_charge(
        &self,
        community_name: &str,
        property_type: &PropertyType,
        property_size: f64,
    ) -> Result<ServiceChargeResult> {
        self.estimator().estimate(community_name, property_type, property_size)
    }

    pub fn compare_properties(
        &self,
        price1: f64,
        price2: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        self.comparisons.compare_properties(price1, price2, appreciation_rate, holding_years)
    }

    pub fn compare_rent_vs_buy(
        &self,
        price: f64,
        monthly_rent: f64,
        rent_increase_rate: f64,
        discount_rate: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        self.comparisons.compare_rent_vs_buy(
            price,
            monthly_rent,
            rent_increase_rate,
            discount_rate,
            appreciation_rate,
            holding_years,
        )
    }

    pub fn analyze_rent_vs_buy(&self, params: &RentVsBuyParams) -> Result<RentVsBuyAnalysisResult> {
        self.analyzer.analyze(params)
    }

    pub fn rent_vs_buy_projection(&self, params: &RentVsBuyParams) -> Result<Vec<YearlySnapshot>> {
        self.analyzer.yearly_projection(params)
    }

    pub fn reference_matrix(&self) -> Vec<ServiceChargeResult> {
        self.estimator().generate_reference_matrix()
    }

    pub fn reference_estimates_for(&self, community_name: &str) -> Vec<ServiceChargeResult> {
        self.estimator().reference_estimates_for(community_name)
    }

    pub fn document_checklist(&self, buyer: &BuyerProfile) -> DocumentChecklist {
        DocumentChecklist::generate(buyer)
    }

    // ------------------------------------------------------------------
    // Property profiles
    // ------------------------------------------------------------------

    pub fn cost_breakdown_for(
        &self,
        property: &PropertyProfile,
        mortgage_amount: f64,
        extras: PurchaseExtras,
    ) -> Result<CostBreakdownResult> {
        property.validate()?;
        self.fees.compute(property.price, mortgage_amount, extras)
    }

    pub fn loan_for(
        &self,
        property: &PropertyProfile,
        down_payment: f64,
        interest_rate: f64,
        tenure_years: u32,
    ) -> Result<LoanResult> {
        property.validate()?;
        self.compute_loan(property.price, down_payment, interest_rate, tenure_years)
    }

    /// Service charges for the property's own community, type and size
    pub fn service_charge_for(&self, property: &PropertyProfile) -> Result<ServiceChargeResult> {
        property.validate()?;
        self.estimate_service_charge(&property.community_name, &property.property_type, property.size)
    }

    pub fn compare_profiles(
        &self,
        first: &PropertyProfile,
        second: &PropertyProfile,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        first.validate()?;
        second.validate()?;
        self.compare_properties(first.price, second.price, appreciation_rate, holding_years)
    }

    pub fn rent_vs_buy_for(
        &self,
        property: &PropertyProfile,
        monthly_rent: f64,
        rent_increase_rate: f64,
        discount_rate: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        property.validate()?;
        self.compare_rent_vs_buy(
            property.price,
            monthly_rent,
            rent_increase_rate,
            discount_rate,
            appreciation_rate,
            holding_years,
        )
    }

    /// Analysis priced at the property's price, whatever `params.price` says
    pub fn analyze_property(
        &self,
        property: &PropertyProfile,
        params: &RentVsBuyParams,
    ) -> Result<RentVsBuyAnalysisResult> {
        property.validate()?;
        let params = RentVsBuyParams {
            price: property.price,
            ..params.clone()
        };
        self.analyze_rent_vs_buy(&params)
    }

    // ------------------------------------------------------------------
    // Property ids
    // ------------------------------------------------------------------

    pub fn loan_by_id<S: PropertySource + ?Sized>(
        &self,
        source: &S,
        property_id: u64,
        down_payment: f64,
        interest_rate: f64,
        tenure_years: u32,
    ) -> Result<LoanResult> {
        let property = source.property(property_id)?;
        self.loan_for(&property, down_payment, interest_rate, tenure_years)
    }

    pub fn service_charge_by_id<S: PropertySource + ?Sized>(
        &self,
        source: &S,
        property_id: u64,
    ) -> Result<ServiceChargeResult> {
        let property = source.property(property_id)?;
        self.service_charge_for(&property)
    }

    pub fn compare_by_ids<S: PropertySource + ?Sized>(
        &self,
        source: &S,
        first_id: u64,
        second_id: u64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        let first = source.property(first_id)?;
        let second = source.property(second_id)?;
        self.compare_profiles(&first, &second, appreciation_rate, holding_years)
    }

    pub fn rent_vs_buy_by_id<S: PropertySource + ?Sized>(
        &self,
        source: &S,
        property_id: u64,
        monthly_rent: f64,
        rent_increase_rate: f64,
        discount_rate: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<ComparisonResult> {
        let property = source.property(property_id)?;
        self.rent_vs_buy_for(
            &property,
            monthly_rent,
            rent_increase_rate,
            discount_rate,
            appreciation_rate,
            holding_years,
        )
    }

    pub fn analyze_by_id<S: PropertySource + ?Sized>(
        &self,
        source: &S,
        property_id: u64,
        params: &RentVsBuyParams,
    ) -> Result<RentVsBuyAnalysisResult> {
        let property = source.property(property_id)?;
        self.analyze_property(&property, params)
    }

    fn estimator(&self) -> ServiceChargeEstimator<'_> {
        ServiceChargeEstimator::new(&self.rates)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
