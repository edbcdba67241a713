//! Pure arithmetic operations and their domain errors.
//!
//! These functions are transport agnostic. The HTTP layer validates raw
//! parameters, calls [`evaluate`], and maps [`CalcError`] onto response
//! payloads.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failures raised while validating or evaluating an arithmetic request.
///
/// Every variant maps to a client error at the HTTP boundary; none of them
/// abort the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A required parameter was missing, empty, or not parseable as a number.
    #[error("Invalid input: All parameters must be valid numbers")]
    InvalidInput,
    /// Division with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,
    /// Modulo with a zero divisor.
    #[error("Modulo by zero is not allowed")]
    ModuloByZero,
    /// Square root of a negative number.
    #[error("Cannot compute square root of a negative number")]
    NegativeSquareRoot,
    /// Operation name outside the fixed set. Unreachable through the route
    /// table, which only binds known operations.
    #[error("Invalid operation")]
    UnknownOperation,
}

/// The fixed set of arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
    SquareRoot,
    Modulo,
}

impl Operation {
    /// Route-style operation name, also used as the logging service tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
            Self::Exponentiation => "exponentiation",
            Self::SquareRoot => "square-root",
            Self::Modulo => "modulo",
        }
    }

    /// Whether the operation consumes a second operand.
    pub fn is_binary(self) -> bool {
        !matches!(self, Self::SquareRoot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition" => Ok(Self::Addition),
            "subtraction" => Ok(Self::Subtraction),
            "multiplication" => Ok(Self::Multiplication),
            "division" => Ok(Self::Division),
            "exponentiation" => Ok(Self::Exponentiation),
            "square-root" => Ok(Self::SquareRoot),
            "modulo" => Ok(Self::Modulo),
            _ => Err(CalcError::UnknownOperation),
        }
    }
}

/// `n1 + n2`.
pub fn add(n1: f64, n2: f64) -> f64 {
    n1 + n2
}

/// `n1 - n2`.
pub fn subtract(n1: f64, n2: f64) -> f64 {
    n1 - n2
}

/// `n1 * n2`.
pub fn multiply(n1: f64, n2: f64) -> f64 {
    n1 * n2
}

/// `n1 / n2`; a zero divisor is a domain error, not an IEEE infinity.
pub fn divide(n1: f64, n2: f64) -> Result<f64, CalcError> {
    if n2 == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(n1 / n2)
}

/// `n1` raised to `n2`, with `f64::powf` semantics for fractional and
/// negative exponents.
pub fn power(n1: f64, n2: f64) -> f64 {
    n1.powf(n2)
}

/// Non-negative square root of `n`.
pub fn sqrt(n: f64) -> Result<f64, CalcError> {
    if n < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}

/// Floating-point remainder of `n1 / n2`; the sign follows the dividend.
pub fn modulo(n1: f64, n2: f64) -> Result<f64, CalcError> {
    if n2 == 0.0 {
        return Err(CalcError::ModuloByZero);
    }
    Ok(n1 % n2)
}

/// Evaluate `op` over validated operands.
///
/// Binary operations require `n2`; square-root ignores it when present. A
/// missing second operand is reported as invalid input, mirroring the
/// validator's contract (the HTTP layer rejects such requests before
/// dispatch, so the arm is defensive).
pub fn evaluate(op: Operation, n1: f64, n2: Option<f64>) -> Result<f64, CalcError> {
    match (op, n2) {
        (Operation::SquareRoot, _) => sqrt(n1),
        (Operation::Addition, Some(n2)) => Ok(add(n1, n2)),
        (Operation::Subtraction, Some(n2)) => Ok(subtract(n1, n2)),
        (Operation::Multiplication, Some(n2)) => Ok(multiply(n1, n2)),
        (Operation::Division, Some(n2)) => divide(n1, n2),
        (Operation::Exponentiation, Some(n2)) => Ok(power(n1, n2)),
        (Operation::Modulo, Some(n2)) => modulo(n1, n2),
        (_, None) => Err(CalcError::InvalidInput),
    }
}
