//! Constant values carried by `const` declarations.
//!
//! Numeric values are kept as exact decimal strings so arbitrary-precision
//! constants survive the trip from the loader unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstValue {
    /// A value the loader could not evaluate.
    Unknown,
    Bool {
        value: bool,
    },
    String {
        value: String,
    },
    /// Decimal digits with an optional leading `-`.
    Int {
        value: String,
    },
    Float(Rational),
    Complex {
        re: Rational,
        im: Rational,
    },
}

impl ConstValue {
    pub fn int(value: impl Into<String>) -> Self {
        ConstValue::Int {
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        ConstValue::String {
            value: value.into(),
        }
    }

    pub fn float(num: impl Into<String>, den: impl Into<String>) -> Self {
        ConstValue::Float(Rational::new(num, den))
    }
}

/// An exact rational `num/den` in lowest terms, `den` positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub num: String,
    #[serde(default = "Rational::one")]
    pub den: String,
}

impl Rational {
    pub fn new(num: impl Into<String>, den: impl Into<String>) -> Self {
        Self {
            num: num.into(),
            den: den.into(),
        }
    }

    fn one() -> String {
        "1".to_string()
    }

    pub fn is_integer(&self) -> bool {
        self.den == "1"
    }
}
