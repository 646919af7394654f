//! Abacus Parser
//!
//! Evaluates a token stream (from `abacus-lexer`) with a single-pass Pratt
//! parser. There is no syntax tree: handlers compute values as they parse,
//! and failures come back as the list of tokens that explain them.
//!
//! ```
//! use abacus_parser::Parser;
//!
//! assert_eq!(Parser::evaluate("2 ^ 2 ^ 3"), Ok(256.0));
//! let errors = Parser::evaluate("1 / 0").unwrap_err();
//! assert_eq!(errors[0].message, "Cannot divide by zero.");
//! ```

pub mod operation;
pub mod parser;
pub mod table;

pub use parser::Parser;
