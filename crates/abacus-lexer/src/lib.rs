//! Abacus Lexer
//!
//! Tokenizes arithmetic expressions typed on a calculator keypad (or a
//! keyboard) into a stream of position-annotated tokens. Scanning never
//! fails: invalid input becomes `Error` tokens carrying a message, so the
//! parser can report every problem in one pass.
//!
//! # Example
//!
//! ```
//! use abacus_lexer::{Scanner, Symbol};
//!
//! let tokens = Scanner::scan("2(3)");
//! assert_eq!(tokens[1].symbol, Symbol::ImpliedMultiply);
//! assert_eq!(tokens.last().map(|t| t.symbol), Some(Symbol::Eof));
//! ```

pub mod classify;
pub mod scanner;
pub mod symbol;
pub mod token;

pub use scanner::{normalize, Scanner};
pub use symbol::{ErrorKind, Symbol};
pub use token::Token;
