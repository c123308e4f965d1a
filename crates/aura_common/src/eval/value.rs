//! Runtime values for the restricted expression evaluator.
//!
//! Three kinds: integers, floats, booleans. Arithmetic mirrors the formats
//! users expect from a calculator: integer operations stay integral where
//! they can, division always produces a float, and booleans render as
//! "True"/"False" in answers.

use crate::error::EvalError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn add(self, rhs: Value) -> Result<Value, EvalError> {
        match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => Ok(a
                .checked_add(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 + b as f64))),
            NumPair::Floats(a, b) => Ok(Value::Float(a + b)),
        }
    }

    pub fn sub(self, rhs: Value) -> Result<Value, EvalError> {
        match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => Ok(a
                .checked_sub(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 - b as f64))),
            NumPair::Floats(a, b) => Ok(Value::Float(a - b)),
        }
    }

    pub fn mul(self, rhs: Value) -> Result<Value, EvalError> {
        match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => Ok(a
                .checked_mul(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 * b as f64))),
            NumPair::Floats(a, b) => Ok(Value::Float(a * b)),
        }
    }

    /// True division: always a float, like a desk calculator.
    pub fn div(self, rhs: Value) -> Result<Value, EvalError> {
        let (a, b) = match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => (a as f64, b as f64),
            NumPair::Floats(a, b) => (a, b),
        };
        if b == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Value::Float(a / b))
    }

    /// Floor-style modulo: the result takes the sign of the divisor.
    pub fn rem(self, rhs: Value) -> Result<Value, EvalError> {
        match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // i64::MIN % -1 overflows; the result is 0 for any a
                if b == -1 {
                    return Ok(Value::Int(0));
                }
                Ok(Value::Int(((a % b) + b) % b))
            }
            NumPair::Floats(a, b) => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(Value::Float(a - b * (a / b).floor()))
            }
        }
    }

    pub fn pow(self, rhs: Value) -> Result<Value, EvalError> {
        match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => {
                if b >= 0 {
                    match u32::try_from(b).ok().and_then(|e| a.checked_pow(e)) {
                        Some(n) => Ok(Value::Int(n)),
                        None => Ok(Value::Float((a as f64).powf(b as f64))),
                    }
                } else {
                    // Negative exponent leaves the integers, e.g. 2 ** -1
                    let r = (a as f64).powf(b as f64);
                    float_or_error(r)
                }
            }
            NumPair::Floats(a, b) => float_or_error(a.powf(b)),
        }
    }

    pub fn neg(self) -> Result<Value, EvalError> {
        match self {
            Value::Int(n) => Ok(n
                .checked_neg()
                .map(Value::Int)
                .unwrap_or(Value::Float(-(n as f64)))),
            Value::Float(f) => Ok(Value::Float(-f)),
            Value::Bool(_) => Err(EvalError::TypeMismatch),
        }
    }

    pub fn compare(self, rhs: Value) -> Result<std::cmp::Ordering, EvalError> {
        let (a, b) = match numeric_pair(self, rhs)? {
            NumPair::Ints(a, b) => (a as f64, b as f64),
            NumPair::Floats(a, b) => (a, b),
        };
        a.partial_cmp(&b).ok_or(EvalError::TypeMismatch)
    }

    pub fn eq_value(self, rhs: Value) -> Result<bool, EvalError> {
        match (self, rhs) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
            (Value::Bool(_), _) | (_, Value::Bool(_)) => Err(EvalError::TypeMismatch),
            _ => Ok(self.compare(rhs)? == std::cmp::Ordering::Equal),
        }
    }

    pub fn as_bool(self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(b),
            _ => Err(EvalError::TypeMismatch),
        }
    }
}

enum NumPair {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numeric_pair(a: Value, b: Value) -> Result<NumPair, EvalError> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Ok(NumPair::Ints(a, b)),
        (Value::Int(a), Value::Float(b)) => Ok(NumPair::Floats(a as f64, b)),
        (Value::Float(a), Value::Int(b)) => Ok(NumPair::Floats(a, b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(NumPair::Floats(a, b)),
        _ => Err(EvalError::TypeMismatch),
    }
}

fn float_or_error(f: f64) -> Result<Value, EvalError> {
    if f.is_nan() {
        Err(EvalError::TypeMismatch)
    } else {
        Ok(Value::Float(f))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => {
                // Keep the trailing ".0" on whole floats so division
                // results read as floats (7 / 2 -> 3.5, 6 / 2 -> 3.0).
                if x.fract() == 0.0 && x.is_finite() {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arithmetic_stays_integral() {
        assert_eq!(Value::Int(7).add(Value::Int(3)).unwrap(), Value::Int(10));
        assert_eq!(Value::Int(7).mul(Value::Int(3)).unwrap(), Value::Int(21));
    }

    #[test]
    fn test_division_is_true_division() {
        assert_eq!(Value::Int(7).div(Value::Int(2)).unwrap(), Value::Float(3.5));
        assert_eq!(Value::Int(6).div(Value::Int(2)).unwrap(), Value::Float(3.0));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        assert_eq!(
            Value::Int(1).div(Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Value::Int(1).rem(Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_takes_divisor_sign() {
        assert_eq!(Value::Int(-7).rem(Value::Int(3)).unwrap(), Value::Int(2));
        assert_eq!(Value::Int(7).rem(Value::Int(-3)).unwrap(), Value::Int(-2));
        assert_eq!(
            Value::Int(i64::MIN).rem(Value::Int(-1)).unwrap(),
            Value::Int(0)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(Value::Int(2).pow(Value::Int(10)).unwrap(), Value::Int(1024));
        assert_eq!(Value::Int(2).pow(Value::Int(-1)).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let big = Value::Int(i64::MAX);
        match big.add(Value::Int(1)).unwrap() {
            Value::Float(f) => assert!(f > 9.2e18),
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn test_bool_arithmetic_rejected() {
        assert_eq!(
            Value::Bool(true).add(Value::Int(1)),
            Err(EvalError::TypeMismatch)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(10).to_string(), "10");
        assert_eq!(Value::Float(3.5).to_string(), "3.5");
        assert_eq!(Value::Float(3.0).to_string(), "3.0");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
    }
}
