//! Error types for the lunar calendar engine.

use thiserror::Error;

/// Main error type for lunar calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LunarError {
    /// A solar or lunar date component fails a structural range or day-count check.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidDate {
        /// Name of the offending field (e.g. "month", "day").
        field: &'static str,
        /// The invalid value.
        value: i64,
        /// Human-readable reason.
        reason: String,
    },

    /// A year falls outside the supported 1900-2100 window.
    #[error("{parameter} {value} is out of the supported range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name (always "year" today).
        parameter: &'static str,
        /// The out-of-range value.
        value: i64,
        /// Minimum supported value, inclusive.
        min: i64,
        /// Maximum supported value, inclusive.
        max: i64,
    },

    /// A lunar quadruple does not correspond to any real calendar date.
    #[error("lunar date does not exist: {reason}")]
    DateNotExist {
        /// Description of why the date cannot be constructed.
        reason: String,
    },
}

/// Type alias for `Result`s in this crate.
pub type Result<T> = std::result::Result<T, LunarError>;

/// Lowest supported Gregorian year (spec.md §3 "Supported range").
pub const MIN_YEAR: i64 = 1900;
/// Highest supported Gregorian year (spec.md §3 "Supported range").
pub const MAX_YEAR: i64 = 2100;

/// Validates that `value` falls within `[min, max]`, tagging failures with `parameter`.
#[inline]
pub fn validate_range(value: i64, min: i64, max: i64, parameter: &'static str) -> Result<()> {
    if value < min || value > max {
        Err(LunarError::OutOfRange { parameter, value, min, max })
    } else {
        Ok(())
    }
}

/// Validates a Gregorian year against the supported window. Advisory only: out-of-range
/// years still compute (spec.md §9 open question (b)).
#[inline]
pub fn validate_year(year: i64) -> Result<()> {
    validate_range(year, MIN_YEAR, MAX_YEAR, "year")
}

/// Validates a month number (1..=12).
#[inline]
pub fn validate_month(month: i64) -> Result<()> {
    if !(1..=12).contains(&month) {
        Err(LunarError::InvalidDate {
            field: "month",
            value: month,
            reason: "expected 1..=12".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Validates a day-of-month against an explicit upper bound (caller derives the bound).
#[inline]
pub fn validate_day_of_month(day: i64, days_in_month: i64) -> Result<()> {
    if day < 1 || day > days_in_month {
        Err(LunarError::InvalidDate {
            field: "day",
            value: day,
            reason: format!("expected 1..={days_in_month}"),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LunarError::InvalidDate {
            field: "month",
            value: 13,
            reason: "expected 1..=12".to_string(),
        };
        assert_eq!(err.to_string(), "invalid month: 13 (expected 1..=12)");
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(2100).is_ok());
        assert!(validate_year(1899).is_err());
        assert!(validate_year(2101).is_err());
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_day_of_month() {
        assert!(validate_day_of_month(30, 30).is_ok());
        assert!(validate_day_of_month(0, 30).is_err());
        assert!(validate_day_of_month(31, 30).is_err());
    }
}
