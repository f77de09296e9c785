//! Validation and parsing for user-supplied orbital parameters.
//!
//! Field edits arrive as free text from the host's form. A field that fails
//! to parse or violates its invariant is dropped and the body keeps its
//! previous value; the error only ever reaches the log.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveAxis(f64),

    #[error("eccentricity must lie in [0, 1], got {0}")]
    EccentricityOutOfRange(f64),

    #[error("period must be positive, got {0}")]
    NonPositivePeriod(f64),
}

pub fn validate_axis(a: f64) -> Result<f64, ParamError> {
    // NaN fails the comparison as well
    if a > 0.0 {
        Ok(a)
    } else {
        Err(ParamError::NonPositiveAxis(a))
    }
}

pub fn validate_eccentricity(e: f64) -> Result<f64, ParamError> {
    if (0.0..=1.0).contains(&e) {
        Ok(e)
    } else {
        Err(ParamError::EccentricityOutOfRange(e))
    }
}

pub fn validate_period(period: f64) -> Result<f64, ParamError> {
    if period > 0.0 {
        Ok(period)
    } else {
        Err(ParamError::NonPositivePeriod(period))
    }
}

/// Parse the longest numeric prefix of `text`, the way browser form code
/// reads number fields: leading whitespace is skipped, trailing garbage is
/// ignored, and `Infinity` is accepted.
pub fn parse_number(text: &str) -> Result<f64, ParamError> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A lone "." only counts when digits precede it
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return Err(ParamError::NotANumber(text.to_string()));
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .map_err(|_| ParamError::NotANumber(text.to_string()))
}
