//! Abacus Formatter
//!
//! Turns an evaluation outcome into text for a display: the number on
//! success, or a three-line diagnostic on failure.
//!
//! ```text
//! source → Scanner::scan → Parser::parse → format → Ok(result) | Err(diagnostic)
//! ```
//!
//! ```
//! assert_eq!(abacus_format::evaluate_expression("5!"), Ok("120".to_string()));
//! assert!(abacus_format::evaluate_expression("5 ÷ 0").is_err());
//! ```

pub mod diagnostic;

use abacus_lexer::Token;
use abacus_parser::Parser;

pub use diagnostic::Diagnostic;

/// Evaluate an expression and render the outcome.
///
/// This is the single entry point a calculator front end needs. The
/// `Ok`/`Err` split tells it whether to show a result or a diagnostic.
pub fn evaluate_expression(source: &str) -> Result<String, String> {
    format(Parser::evaluate(source), source)
}

/// Render a parse outcome. `source` is the text that was evaluated.
pub fn format(result: Result<f64, Vec<Token>>, source: &str) -> Result<String, String> {
    match result {
        Ok(value) => Ok(format_number(value)),
        Err(errors) => {
            log::debug!("formatting {} error(s) for {:?}", errors.len(), source);
            Err(Diagnostic::new(source, errors).render())
        }
    }
}

/// Shortest decimal that reads back as the same `f64`.
///
/// Very large and very small magnitudes switch to exponent notation with
/// an explicit sign (`1e+21`, `1e-7`), matching what a browser prints, and
/// both the result and its rendering can be fed back into the scanner.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Also covers negative zero.
        return "0".to_string();
    }
    if !n.is_finite() || (1e-6..1e21).contains(&n.abs()) {
        return format!("{n}");
    }

    let exponential = format!("{n:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
