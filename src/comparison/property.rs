use serde::{Deserialize, Serialize};

use super::{future_value, roi, total_cost_of_ownership, MAX_HOLDING_YEARS};
use crate::error::{check, Result};

/// Side-by-side appreciation outlook for two properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyComparison {
    pub price1: f64,
    pub price2: f64,
    pub appreciation_rate: f64,
    pub holding_years: u32,

    pub property1_future_value: f64,
    pub property2_future_value: f64,
    /// Percent
    pub property1_roi: f64,
    /// Percent
    pub property2_roi: f64,
    pub property1_total_cost: f64,
    pub property2_total_cost: f64,
}

impl PropertyComparison {
    pub(super) fn compute(
        price1: f64,
        price2: f64,
        appreciation_rate: f64,
        holding_years: u32,
    ) -> Result<Self> {
        check::positive("price1", price1)?;
        check::positive("price2", price2)?;
        check::non_negative("appreciation_rate", appreciation_rate)?;
        check::years("holding_years", holding_years, 1, MAX_HOLDING_YEARS)?;

        Ok(Self {
            price1,
            price2,
            appreciation_rate,
            holding_years,
            property1_future_value: future_value(price1, appreciation_rate, holding_years),
            property2_future_value: future_value(price2, appreciation_rate, holding_years),
            property1_roi: roi(price1, appreciation_rate, holding_years),
            property2_roi: roi(price2, appreciation_rate, holding_years),
            property1_total_cost: total_cost_of_ownership(price1),
            property2_total_cost: total_cost_of_ownership(price2),
        })
    }

    /// Absolute gain of property 2 over property 1 at the end of the hold
    pub fn value_gain_difference(&self) -> f64 {
        (self.property2_future_value - self.price2) - (self.property1_future_value - self.price1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_rate_same_roi() {
        let c = PropertyComparison::compute(900_000.0, 2_100_000.0, 4.0, 10).unwrap();

        // ROI depends only on rate and years
        assert_relative_eq!(c.property1_roi, c.property2_roi, max_relative = 1e-12);
        assert_relative_eq!(c.property1_roi, (1.04f64.powi(10) - 1.0) * 100.0, max_relative = 1e-9);

        assert_relative_eq!(c.property1_total_cost, 1_170_000.0, max_relative = 1e-12);
        assert_relative_eq!(c.property2_total_cost, 2_730_000.0, max_relative = 1e-12);
        assert!(c.value_gain_difference() > 0.0);
    }

    #[test]
    fn test_validation() {
        let field = |r: Result<PropertyComparison>| r.unwrap_err().field();

        assert_eq!(field(PropertyComparison::compute(0.0, 1.0, 3.0, 5)), Some("price1"));
        assert_eq!(field(PropertyComparison::compute(1.0, -1.0, 3.0, 5)), Some("price2"));
        assert_eq!(field(PropertyComparison::compute(1.0, 1.0, -0.1, 5)), Some("appreciation_rate"));
        assert_eq!(field(PropertyComparison::compute(1.0, 1.0, 3.0, 0)), Some("holding_years"));
        assert_eq!(field(PropertyComparison::compute(1.0, 1.0, 3.0, 101)), Some("holding_years"));
        assert_eq!(field(PropertyComparison::compute(1.0, 1.0, 3.0, u32::MAX)), Some("holding_years"));
        assert!(PropertyComparison::compute(1.0, 1.0, 3.0, MAX_HOLDING_YEARS).is_ok());
    }
}
