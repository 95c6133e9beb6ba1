// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::str::FromStr;

use serde::ser::Serializer;
use serde::Serialize;

/// Numeric scalar of the value model.
///
/// Integers are kept in an exact representation as long as they fit; only
/// fractional or out-of-range literals fall back to floats. This keeps
/// structural equality of integer constants exact, which the constraint
/// matcher relies on.
#[derive(Clone)]
pub enum Number {
    UInt(u64),
    Int(i64),
    Float(f64),
}

impl Number {
    fn to_f64_lossy(&self) -> f64 {
        match self {
            Number::UInt(v) => *v as f64,
            Number::Int(v) => *v as f64,
            Number::Float(v) => *v,
        }
    }

    /// Exact integer view, if this number is a non-fractional value in i64 range.
    fn to_i128_exact(&self) -> Option<i128> {
        match self {
            Number::UInt(v) => Some(*v as i128),
            Number::Int(v) => Some(*v as i128),
            Number::Float(f) => {
                if !f.is_finite() || f.fract() != 0.0 {
                    return None;
                }
                let candidate = *f as i128;
                if (candidate as f64) == *f {
                    Some(candidate)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self.to_i128_exact() {
            Some(v) => u64::try_from(v).ok(),
            None => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.to_i128_exact() {
            Some(v) => i64::try_from(v).ok(),
            None => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.to_f64_lossy()
    }

    pub fn format_decimal(&self) -> String {
        match self {
            Number::UInt(v) => v.to_string(),
            Number::Int(v) => v.to_string(),
            Number::Float(f) => {
                // Whole floats print like integers so that equal numbers
                // have equal renderings.
                if let Some(i) = self.to_i128_exact() {
                    i.to_string()
                } else {
                    f.to_string()
                }
            }
        }
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format_decimal())
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self.format_decimal();
        let v = serde_json::Number::from_str(&s)
            .map_err(|_| serde::ser::Error::custom("could not serialize number"))?;
        v.serialize(serializer)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::UInt(value)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::UInt(value as u64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseNumberError;

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNumberError);
        }

        let is_integer_literal =
            !trimmed.contains('.') && !trimmed.contains('e') && !trimmed.contains('E');

        if is_integer_literal {
            if let Ok(u) = trimmed.parse::<u64>() {
                return Ok(Number::UInt(u));
            }
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(Number::Int(i));
            }
        }

        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.to_i128_exact(), other.to_i128_exact()) {
            return a == b;
        }

        let a = self.to_f64_lossy();
        let b = other.to_f64_lossy();
        if a.is_nan() || b.is_nan() {
            return false;
        }
        a == b
    }
}

impl Eq for Number {}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.to_i128_exact(), other.to_i128_exact()) {
            return a.cmp(&b);
        }

        self.to_f64_lossy()
            .partial_cmp(&other.to_f64_lossy())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
