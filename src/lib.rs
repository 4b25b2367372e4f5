//! Property Finance - deterministic calculators for buying residential property
//!
//! This library provides:
//! - One-time acquisition cost breakdowns (transfer, agency and mortgage fees)
//! - Mortgage amortization with first and last installment splits
//! - Community service charge estimates and a reference matrix
//! - Property-vs-property and NPV rent-vs-buy comparisons
//! - Month-by-month rent-vs-buy net worth analysis
//! - Purchase document checklists

pub mod error;
pub mod rates;
pub mod property;
pub mod loan;
pub mod fees;
pub mod service_charge;
pub mod comparison;
pub mod analysis;
pub mod checklist;
pub mod calculator;

// Re-export commonly used types
pub use error::{CalcError, ConfigError};
pub use rates::{CommunityRates, RateTable};
pub use property::{PropertyCatalog, PropertyProfile, PropertySource, PropertyType};
pub use loan::{AmortizationSchedule, LoanAmortizationEngine, LoanResult};
pub use fees::{CostBreakdownResult, FeeSchedule, FeeScheduleCalculator, PurchaseExtras};
pub use service_charge::{ServiceChargeEstimator, ServiceChargeResult};
pub use comparison::{ComparisonEngine, ComparisonResult};
pub use analysis::{RentVsBuyAnalysisResult, RentVsBuyAnalyzer, RentVsBuyParams};
pub use checklist::{BuyerProfile, DocumentChecklist};
pub use calculator::Calculator;
