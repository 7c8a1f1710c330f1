//! Numeric value model for repcode words.
//!
//! Values are never stored as binary floats: exact digit preservation is a
//! hard requirement for round-trip fidelity, so decimals keep both digit
//! strings verbatim (including trailing zeros) and integers keep an
//! arbitrary-precision decimal digit string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric value attached to one word.
///
/// `Integer` holds a normalized magnitude (no leading zeros, never `-0`), so
/// derived equality is ordinary integer equality with no width limit.
/// `Decimal` holds its digit groups exactly as written and equality is
/// structural: `9.870` and `9.87` are distinct values even though they are
/// mathematically equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericValue {
    /// A whole number, e.g. `G92` or `T-1`.
    Integer {
        /// True for an explicit `-` sign. An explicit `+` is not preserved.
        negative: bool,
        /// Decimal digits of the magnitude, normalized.
        digits: String,
    },
    /// A number with a decimal point, e.g. `X-1.23456` or `F1.0`.
    Decimal {
        /// True for an explicit `-` sign. An explicit `+` is not preserved.
        negative: bool,
        /// Digits before the point, verbatim except that the empty group
        /// produced by inputs like `.22` is stored as `0`, matching how it
        /// renders.
        int_digits: String,
        /// Digits after the point, verbatim, trailing zeros included.
        frac_digits: String,
    },
}

impl NumericValue {
    /// Create an integer value from a sign flag and a raw digit run.
    ///
    /// Leading zeros are stripped and a zero magnitude drops its sign, so
    /// `007` equals `7` and `-0` equals `0`.
    pub fn integer(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            NumericValue::Integer {
                negative: false,
                digits: "0".to_string(),
            }
        } else {
            NumericValue::Integer {
                negative,
                digits: trimmed.to_string(),
            }
        }
    }

    /// Create a decimal value; both digit groups are kept verbatim.
    ///
    /// The one exception is an empty integer group (the `.22` input shape),
    /// which is stored as `0` so the stored form always matches the rendered
    /// form and round-trips exactly.
    pub fn decimal(negative: bool, int_digits: &str, frac_digits: &str) -> Self {
        let int_digits = if int_digits.is_empty() {
            "0"
        } else {
            int_digits
        };
        NumericValue::Decimal {
            negative,
            int_digits: int_digits.to_string(),
            frac_digits: frac_digits.to_string(),
        }
    }

    /// Create an integer value from a native integer.
    pub fn from_i64(n: i64) -> Self {
        NumericValue::Integer {
            negative: n < 0,
            digits: n.unsigned_abs().to_string(),
        }
    }

    /// Whether the value carries a `-` sign.
    pub fn is_negative(&self) -> bool {
        match self {
            NumericValue::Integer { negative, .. } => *negative,
            NumericValue::Decimal { negative, .. } => *negative,
        }
    }

    /// Whether the value is an integer (no decimal point in the source).
    pub fn is_integer(&self) -> bool {
        matches!(self, NumericValue::Integer { .. })
    }
}

impl fmt::Display for NumericValue {
    /// Renders the canonical text form: `-` prefix only for negative values,
    /// digit groups unchanged, and a bare `0` integer part for values parsed
    /// from the `.N` shape (so `.22` renders as `0.22`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer { negative, digits } => {
                if *negative {
                    write!(f, "-")?;
                }
                write!(f, "{}", digits)
            }
            NumericValue::Decimal {
                negative,
                int_digits,
                frac_digits,
            } => {
                if *negative {
                    write!(f, "-")?;
                }
                let int_part = if int_digits.is_empty() {
                    "0"
                } else {
                    int_digits
                };
                write!(f, "{}.{}", int_part, frac_digits)
            }
        }
    }
}
