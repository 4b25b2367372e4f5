//! Error types shared by every calculator

use thiserror::Error;

/// Failure of a calculation call
///
/// Calculations validate all inputs before doing any work, so a returned
/// error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An input lies outside its documented domain
    #[error("invalid {field}: {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },

    /// A referenced entity does not exist in the property source
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: u64 },
}

impl CalcError {
    pub fn validation(field: &'static str, constraint: impl Into<String>) -> Self {
        CalcError::Validation {
            field,
            constraint: constraint.into(),
        }
    }

    /// Name of the offending field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalcError::Validation { field, .. } => Some(field),
            CalcError::NotFound { .. } => None,
        }
    }
}

/// Failure while loading configuration or input files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid value in {file}: {message}")]
    Invalid { file: String, message: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// Input guards used by the calculators
///
/// Every guard also rejects NaN and infinities, which would otherwise slip
/// through ordinary comparisons.
pub(crate) mod check {
    use super::{CalcError, Result};

    fn finite(field: &'static str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(CalcError::validation(field, "must be a finite number"))
        }
    }

    pub fn positive(field: &'static str, value: f64) -> Result<()> {
        finite(field, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(CalcError::validation(field, format!("must be positive, got {}", value)))
        }
    }

    pub fn non_negative(field: &'static str, value: f64) -> Result<()> {
        finite(field, value)?;
        if value >= 0.0 {
            Ok(())
        } else {
            Err(CalcError::validation(field, format!("cannot be negative, got {}", value)))
        }
    }

    /// `min <= value <= max`
    pub fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
        finite(field, value)?;
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(CalcError::validation(
                field,
                format!("must be between {} and {}, got {}", min, max, value),
            ))
        }
    }

    /// Annual interest rate in percent, `0 < rate <= 100`
    pub fn interest_rate(field: &'static str, value: f64) -> Result<()> {
        finite(field, value)?;
        if value > 0.0 && value <= 100.0 {
            Ok(())
        } else {
            Err(CalcError::validation(
                field,
                format!("must be greater than 0 and at most 100, got {}", value),
            ))
        }
    }

    pub fn years(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(CalcError::validation(
                field,
                format!("must be between {} and {} years, got {}", min, max, value),
            ))
        }
    }

    /// `0 <= down_payment < price`
    pub fn down_payment(value: f64, price: f64) -> Result<()> {
        non_negative("down_payment", value)?;
        if value < price {
            Ok(())
        } else {
            Err(CalcError::validation(
                "down_payment",
                format!("must be less than the property price {}, got {}", price, value),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = check::positive("price", -1.0).unwrap_err();
        assert_eq!(err.field(), Some("price"));
        assert!(err.to_string().starts_with("invalid price:"));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(check::non_negative("maintenance_cost", f64::NAN).is_err());
        assert!(check::within("appreciation_rate", f64::INFINITY, -20.0, 20.0).is_err());
    }

    #[test]
    fn test_down_payment_bounds() {
        assert!(check::down_payment(0.0, 100.0).is_ok());
        assert!(check::down_payment(99.99, 100.0).is_ok());
        assert!(check::down_payment(100.0, 100.0).is_err());
        assert!(check::down_payment(-0.01, 100.0).is_err());
    }

    #[test]
    fn test_interest_rate_bounds() {
        assert!(check::interest_rate("interest_rate", 0.0).is_err());
        assert!(check::interest_rate("interest_rate", 100.0).is_ok());
        assert!(check::interest_rate("interest_rate", 100.01).is_err());
    }

    #[test]
    fn test_not_found_display() {
        let err = CalcError::NotFound { entity: "property", id: 7 };
        assert_eq!(err.to_string(), "property not found with id 7");
        assert_eq!(err.field(), None);
    }
}
