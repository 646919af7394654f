//! Numeric operations behind each operator symbol.
//!
//! Every operation is a pure function over `f64` that either returns a
//! number or names the reason it has no answer. The parser attaches that
//! reason to the operator token that asked for it.

use abacus_lexer::symbol::FACTORIAL_LIMIT;
use abacus_lexer::{ErrorKind, Symbol};

pub type UnaryOperation = fn(f64) -> Result<f64, ErrorKind>;
pub type BinaryOperation = fn(f64, f64) -> Result<f64, ErrorKind>;

/// Operation applied by a prefix (`+ − √`) or postfix (`% !`) operator.
pub fn unary_operation(symbol: Symbol) -> Option<UnaryOperation> {
    match symbol {
        Symbol::Add => Some(identity),
        Symbol::Subtract => Some(negate),
        Symbol::SquareRoot => Some(square_root),
        Symbol::Percentage => Some(percentage),
        Symbol::Factorial => Some(factorial),
        _ => None,
    }
}

/// Operation applied by an infix operator.
pub fn binary_operation(symbol: Symbol) -> Option<BinaryOperation> {
    match symbol {
        Symbol::Add => Some(add),
        Symbol::Subtract => Some(subtract),
        Symbol::Multiply | Symbol::ImpliedMultiply => Some(multiply),
        Symbol::Divide => Some(divide),
        Symbol::Exponent => Some(power),
        _ => None,
    }
}

fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

pub fn identity(x: f64) -> Result<f64, ErrorKind> {
    Ok(x)
}

/// Unlike `-x`, never produces negative zero.
pub fn negate(x: f64) -> Result<f64, ErrorKind> {
    Ok(0.0 - x)
}

pub fn add(x: f64, y: f64) -> Result<f64, ErrorKind> {
    Ok(x + y)
}

pub fn subtract(x: f64, y: f64) -> Result<f64, ErrorKind> {
    Ok(x - y)
}

/// A zero operand yields exactly `0`, so `-3 × 0` is not `-0`.
pub fn multiply(x: f64, y: f64) -> Result<f64, ErrorKind> {
    if x == 0.0 || y == 0.0 {
        return Ok(0.0);
    }
    Ok(x * y)
}

pub fn divide(x: f64, y: f64) -> Result<f64, ErrorKind> {
    if y == 0.0 {
        return Err(ErrorKind::DivideByZero);
    }
    Ok(x / y)
}

/// A negative base with a fractional exponent has no real result.
pub fn power(x: f64, y: f64) -> Result<f64, ErrorKind> {
    if x < 0.0 && !is_integer(y) {
        return Err(ErrorKind::Complex);
    }
    Ok(x.powf(y))
}

pub fn square_root(x: f64) -> Result<f64, ErrorKind> {
    if x < 0.0 {
        return Err(ErrorKind::Complex);
    }
    Ok(x.sqrt())
}

pub fn percentage(x: f64) -> Result<f64, ErrorKind> {
    Ok(x / 100.0)
}

/// Defined for the integers `0..=18`; larger arguments leave the range in
/// which a double holds every integer exactly.
pub fn factorial(x: f64) -> Result<f64, ErrorKind> {
    if x < 0.0 || !is_integer(x) {
        return Err(ErrorKind::FactorialDomain);
    }
    if x > FACTORIAL_LIMIT {
        return Err(ErrorKind::OperationRange);
    }
    let mut product = 1.0;
    let mut i = 2.0;
    while i <= x {
        product *= i;
        i += 1.0;
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negate_has_no_negative_zero() {
        let zero = negate(0.0).unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
        assert_eq!(negate(3.0), Ok(-3.0));
    }

    #[test]
    fn test_multiply_by_zero_is_positive_zero() {
        let zero = multiply(-3.0, 0.0).unwrap();
        assert!(zero.is_sign_positive());
        assert_eq!(multiply(-3.0, 2.0), Ok(-6.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(1.0, 0.0), Err(ErrorKind::DivideByZero));
        assert_eq!(divide(1.0, -0.0), Err(ErrorKind::DivideByZero));
        assert_eq!(divide(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), Ok(1024.0));
        assert_eq!(power(-2.0, 3.0), Ok(-8.0));
        assert_eq!(power(4.0, 0.5), Ok(2.0));
        assert_eq!(power(-8.0, 1.0 / 3.0), Err(ErrorKind::Complex));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(-1.0), Err(ErrorKind::Complex));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(50.0), Ok(0.5));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
        assert_eq!(factorial(18.0), Ok(6_402_373_705_728_000.0));
    }

    #[test]
    fn test_factorial_errors() {
        assert_eq!(factorial(-1.0), Err(ErrorKind::FactorialDomain));
        assert_eq!(factorial(2.5), Err(ErrorKind::FactorialDomain));
        assert_eq!(factorial(19.0), Err(ErrorKind::OperationRange));
    }

    #[test]
    fn test_tables() {
        assert!(unary_operation(Symbol::Multiply).is_none());
        assert!(binary_operation(Symbol::Factorial).is_none());
        let neg = unary_operation(Symbol::Subtract).unwrap();
        let sub = binary_operation(Symbol::Subtract).unwrap();
        assert_eq!(neg(2.0), Ok(-2.0));
        assert_eq!(sub(5.0, 2.0), Ok(3.0));
        let implied = binary_operation(Symbol::ImpliedMultiply).unwrap();
        assert_eq!(implied(4.0, 3.0), Ok(12.0));
    }
}
