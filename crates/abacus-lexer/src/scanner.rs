use crate::classify::{
    is_ascii_letter, is_digit, is_exponent_suffix, is_not_a_number, is_plus_minus, is_space,
};
use crate::symbol::{ErrorKind, Symbol, DECIMAL_POINT};
use crate::token::Token;

/// Collapse every whitespace run into a single space.
///
/// Token positions index into this text, and diagnostics print it back, so
/// carets line up no matter how the user spaced the input.
pub fn normalize(source: &str) -> String {
    let mut normalized = String::with_capacity(source.len());
    let mut in_space = false;
    for ch in source.chars() {
        if is_space(ch) {
            if !in_space {
                normalized.push(' ');
            }
            in_space = true;
        } else {
            normalized.push(ch);
            in_space = false;
        }
    }
    normalized
}

/// Expression scanner.
///
/// Never fails: unrecognized input becomes an [`Symbol::Error`] token that
/// carries its own message, and the parser decides what to do with it.
///
/// - `Vec<char>` source so multi-byte symbols (`×`, `÷`, `√`) count as one column
/// - `start`/`pos` cursor pair delimiting the current lexeme
/// - Implied multiplication synthesized as zero-length tokens
pub struct Scanner {
    chars: Vec<char>,
    start: usize,
    pos: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    /// Create a scanner over the normalized form of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: normalize(source).chars().collect(),
            start: 0,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the entire source. The result always ends with exactly one EOF token.
    pub fn scan(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        log::trace!("scanned {} tokens from {:?}", scanner.tokens.len(), source);
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
        let eof = Token::new(Symbol::Eof, self.chars.len(), 0);
        self.tokens.push(eof);
    }

    fn scan_token(&mut self) {
        self.start = self.pos;
        let ch = self.peek();
        self.advance();

        match ch {
            c if is_space(c) => {}

            ')' => {
                self.add(Symbol::CloseParen);
                // (7 + 11)(11 + 7) and (7 + 11)7
                self.implied_multiply(|c| is_digit(c) || c == '(');
            }

            c if is_digit(c) => self.scan_number(c),

            DECIMAL_POINT => self.add_error(ErrorKind::MisplacedDecimal),

            c if is_ascii_letter(c) => self.scan_word(),

            c => match Symbol::from_char(c) {
                Some(symbol) => self.add(symbol),
                None => self.add_error(ErrorKind::UnknownIdentifier),
            },
        }
    }

    // --- Scanners ---

    /// Scan a number literal: digits, an optional fraction, and an optional
    /// exponent (`7e11`, `7e-11`). A leading zero before another digit is
    /// rejected on its own so `07` reports the zero, not the whole literal.
    fn scan_number(&mut self, first: char) {
        if first == '0' && is_digit(self.peek()) {
            self.add_error(ErrorKind::LeadingZero);
            return;
        }

        self.consume_digits();

        if self.peek() == DECIMAL_POINT && is_digit(self.peek_next()) {
            self.advance();
            self.consume_digits();
        }

        if is_exponent_suffix(self.peek()) {
            if is_digit(self.peek_next()) {
                self.advance();
                self.consume_digits();
            } else if is_plus_minus(self.peek_next()) && is_digit(self.peek_at(2)) {
                self.advance();
                self.advance();
                self.consume_digits();
            }
        }

        let token = Token::number(self.lexeme(), self.start);
        self.tokens.push(token);
        // 7(1 + 2)
        self.implied_multiply(|c| c == '(');
    }

    /// Scan a run of ASCII letters. No words are valid, but some deserve a
    /// more specific message than "unknown identifier".
    fn scan_word(&mut self) {
        while is_ascii_letter(self.peek()) {
            self.advance();
        }

        let word = self.lexeme();
        let kind = if is_not_a_number(&word) {
            ErrorKind::NotANumber
        } else if self.pos - self.start == 1 && is_exponent_suffix(self.chars[self.start]) {
            ErrorKind::MisplacedExponent
        } else {
            ErrorKind::UnknownIdentifier
        };
        self.add_error(kind);
    }

    /// Emit a zero-length multiplication if the next non-space character
    /// continues a product.
    fn implied_multiply(&mut self, continues: fn(char) -> bool) {
        self.skip_whitespace();
        if continues(self.peek()) {
            let token = Token::new(Symbol::ImpliedMultiply, self.pos, 0);
            self.tokens.push(token);
        }
    }

    // --- Helpers ---

    fn add(&mut self, symbol: Symbol) {
        let token = Token::new(symbol, self.start, self.pos - self.start);
        self.tokens.push(token);
    }

    fn add_error(&mut self, kind: ErrorKind) {
        let token = Token::error(self.lexeme(), kind, self.start, self.pos - self.start);
        self.tokens.push(token);
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.pos].iter().collect()
    }

    fn consume_digits(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while is_space(self.peek()) {
            self.advance();
        }
    }

    fn peek(&self) -> char {
        self.peek_at(0)
    }

    fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    fn peek_at(&self, offset: usize) -> char {
        self.chars.get(self.pos + offset).copied().unwrap_or('\0')
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
