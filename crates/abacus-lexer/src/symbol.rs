//! The fixed symbol set of the expression language and the canonical
//! message fragments attached to invalid tokens.

use serde::Serialize;

/// Decimal separator inside number literals.
pub const DECIMAL_POINT: char = '.';

/// Exponent suffixes accepted in number literals (`7e11`, `7E-11`).
pub const LOWER_E: char = 'e';
pub const UPPER_E: char = 'E';

/// Words that look like numbers in a browser console but are not literals here.
pub const NOT_A_NUMBER: &[&str] = &["NaN", "undefined", "Infinity"];

/// Largest argument accepted by factorial: 18! < 2^53 < 19!.
pub const FACTORIAL_LIMIT: f64 = 18.0;

/// Token classification.
///
/// Several surface spellings unify to one symbol (`-` and `−` are both
/// `Subtract`). `ImpliedMultiply` is never typed; the scanner synthesizes it
/// from adjacency such as `2(3)` or `(2)(3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Number,
    Error,
    Eof,
    OpenParen,
    CloseParen,
    Add,
    Subtract,
    Multiply,
    ImpliedMultiply,
    Divide,
    Exponent,
    SquareRoot,
    Percentage,
    Factorial,
}

impl Symbol {
    /// Map a single-character spelling to its symbol.
    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            '+' => Some(Symbol::Add),
            // U+2212 minus sign and U+002D hyphen-minus
            '\u{2212}' | '-' => Some(Symbol::Subtract),
            '\u{00d7}' | '*' => Some(Symbol::Multiply),
            '\u{00f7}' | '/' => Some(Symbol::Divide),
            '^' => Some(Symbol::Exponent),
            '\u{221a}' => Some(Symbol::SquareRoot),
            '%' => Some(Symbol::Percentage),
            '!' => Some(Symbol::Factorial),
            '(' => Some(Symbol::OpenParen),
            ')' => Some(Symbol::CloseParen),
            _ => None,
        }
    }

    /// Symbols a user types as an operator key.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Symbol::Add
                | Symbol::Subtract
                | Symbol::Multiply
                | Symbol::Divide
                | Symbol::Exponent
                | Symbol::SquareRoot
                | Symbol::Percentage
                | Symbol::Factorial
        )
    }

    /// Canonical display spelling, used by token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Number => "number",
            Symbol::Error => "error",
            Symbol::Eof => "eof",
            Symbol::OpenParen => "(",
            Symbol::CloseParen => ")",
            Symbol::Add => "+",
            Symbol::Subtract => "\u{2212}",
            Symbol::Multiply => "\u{00d7}",
            Symbol::ImpliedMultiply => "imp-\u{00d7}",
            Symbol::Divide => "\u{00f7}",
            Symbol::Exponent => "^",
            Symbol::SquareRoot => "\u{221a}",
            Symbol::Percentage => "%",
            Symbol::Factorial => "!",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a token is invalid. The `Display` text of each variant is the
/// fragment shown to the user in a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    // Numeric
    #[error("Takes only non-negative integers.")]
    FactorialDomain,
    #[error("Number outside range.")]
    NumberRange,
    #[error("Operation outside number range.")]
    OperationRange,
    #[error("Cannot divide by zero.")]
    DivideByZero,
    #[error("Creates complex number.")]
    Complex,

    // Lexical
    #[error("Unknown identifier.")]
    UnknownIdentifier,
    #[error("Leading zero.")]
    LeadingZero,
    #[error("Misplaced decimal.")]
    MisplacedDecimal,
    #[error("Misplaced exponent suffix.")]
    MisplacedExponent,
    #[error("Not a number.")]
    NotANumber,

    // Structural
    #[error("Dangling digit.")]
    DanglingDigit,
    #[error("Dangling operator.")]
    DanglingOperator,
    #[error("Not a prefix operation.")]
    NotPrefix,
    #[error("Not an infix operation.")]
    NotInfix,
    #[error("Empty expression.")]
    EmptyExpression,
    #[error("Incomplete expression.")]
    IncompleteExpression,
    #[error("Mismatched parenthesis.")]
    MismatchedParen,
    #[error("Empty parentheses.")]
    EmptyParens,
}
