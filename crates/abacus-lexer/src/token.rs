use serde::Serialize;

use crate::symbol::{ErrorKind, Symbol};

/// A token produced by the scanner.
///
/// `column` and `length` count characters in the normalized source (every
/// whitespace run collapsed to one space), which is the text a diagnostic
/// re-displays. Synthesized tokens have `length == 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub symbol: Symbol,
    pub value: Option<String>,
    pub message: String,
    pub column: usize,
    pub length: usize,
}

impl Token {
    pub fn new(symbol: Symbol, column: usize, length: usize) -> Self {
        Self {
            symbol,
            value: None,
            message: String::new(),
            column,
            length,
        }
    }

    /// A literal carrying its raw lexeme.
    pub fn number(lexeme: String, column: usize) -> Self {
        let length = lexeme.chars().count();
        Self {
            symbol: Symbol::Number,
            value: Some(lexeme),
            message: String::new(),
            column,
            length,
        }
    }

    /// An invalid lexeme with the reason it was rejected.
    pub fn error(lexeme: String, kind: ErrorKind, column: usize, length: usize) -> Self {
        let mut token = Self {
            symbol: Symbol::Error,
            value: Some(lexeme),
            message: String::new(),
            column,
            length,
        };
        token.push_error(kind);
        token
    }

    /// Append a message fragment. Fragments are separated by one space.
    pub fn push_error(&mut self, kind: ErrorKind) {
        if !self.message.is_empty() {
            self.message.push(' ');
        }
        self.message.push_str(&kind.to_string());
    }

    /// Characters covered by this token's caret marker. Zero-length tokens
    /// still get a single caret.
    pub fn width(&self) -> usize {
        self.length.max(1)
    }

    pub fn is_error(&self) -> bool {
        self.symbol == Symbol::Error
    }

    pub fn is_eof(&self) -> bool {
        self.symbol == Symbol::Eof
    }
}
