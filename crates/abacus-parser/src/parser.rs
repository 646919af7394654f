//! Pratt parser for Abacus expressions.
//!
//! Top-down operator precedence parsing, as described by Vaughan Pratt:
//! each symbol carries semantic code (see [`crate::table`]) and parsing a
//! token stream means running that code for each token, left to right.
//! Nothing builds a tree. Every handler evaluates as it goes and returns
//! either a number or the token that went wrong.

use abacus_lexer::{ErrorKind, Scanner, Symbol, Token};

use crate::operation::{binary_operation, unary_operation};
use crate::table::{binding, binding_power, rule};

/// Deepest nesting of groups and prefix operators before the parser gives
/// up on the expression instead of on its call stack.
const MAX_DEPTH: usize = 256;

/// Expression parser and evaluator.
///
/// Holds a forward-only cursor over one token stream. Once the cursor
/// reaches EOF it stays there: every further read returns the EOF token.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Create a parser for the given tokens. A stream missing its EOF gets one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let column = tokens.last().map_or(0, |t| t.column + t.length);
            tokens.push(Token::new(Symbol::Eof, column, 0));
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Scan and evaluate a source string.
    pub fn evaluate(source: &str) -> Result<f64, Vec<Token>> {
        Self::parse(Scanner::scan(source))
    }

    /// Evaluate a token stream.
    ///
    /// On failure returns every error found: the first structural or
    /// numeric error followed by each lexical error token after it.
    pub fn parse(tokens: Vec<Token>) -> Result<f64, Vec<Token>> {
        let mut parser = Parser::new(tokens);
        let result = parser
            .parse_expression(binding::NONE)
            .and_then(|value| parser.expect_consumed(value));

        match result {
            Ok(value) => {
                log::debug!("evaluated to {value}");
                Ok(value)
            }
            Err(error) => {
                let errors = parser.flush(error);
                log::debug!("parse failed with {} error(s)", errors.len());
                Err(errors)
            }
        }
    }

    /// Parse an expression whose operators bind tighter than `rbp`.
    ///
    /// Nesting past [`MAX_DEPTH`] fails on the token that would open the
    /// next level.
    fn parse_expression(&mut self, rbp: u8) -> Result<f64, Token> {
        if self.depth >= MAX_DEPTH {
            let mut token = self.next();
            token.push_error(ErrorKind::OperationRange);
            return Err(token);
        }

        self.depth += 1;
        let result = self.parse_nested(rbp);
        self.depth -= 1;
        result
    }

    fn parse_nested(&mut self, rbp: u8) -> Result<f64, Token> {
        let mut token = self.next();
        let Some(prefix) = rule(token.symbol).prefix else {
            token.push_error(ErrorKind::NotPrefix);
            return Err(token);
        };
        let mut left = prefix(self, token)?;

        while rbp < binding_power(self.peek()) {
            let mut token = self.next();
            let Some(infix) = rule(token.symbol).infix else {
                token.push_error(ErrorKind::NotInfix);
                return Err(token);
            };
            left = infix(self, left, token)?;
        }

        Ok(left)
    }

    /// A successful parse must end at EOF; the first leftover token is the error.
    fn expect_consumed(&mut self, value: f64) -> Result<f64, Token> {
        if self.is_consumed() {
            return Ok(value);
        }

        let mut token = self.next();
        match token.symbol {
            Symbol::Number => token.push_error(ErrorKind::DanglingDigit),
            Symbol::CloseParen => token.push_error(ErrorKind::MismatchedParen),
            Symbol::OpenParen => token.push_error(ErrorKind::NotInfix),
            symbol if symbol.is_operator() => token.push_error(ErrorKind::DanglingOperator),
            // Error tokens already say what is wrong with them.
            _ => {}
        }
        Err(token)
    }

    // =========================================================================
    // Prefix handlers (nud)
    // =========================================================================

    /// EOF in prefix position: the input ran out before an operand.
    pub(crate) fn parse_eof(&mut self, mut token: Token) -> Result<f64, Token> {
        if self.tokens.len() == 1 {
            // Nothing but (possibly) whitespace: the error spans all of it.
            token.length = token.column;
            token.column = 0;
            token.push_error(ErrorKind::EmptyExpression);
        } else {
            token.push_error(ErrorKind::IncompleteExpression);
        }
        Err(token)
    }

    /// A `)` in prefix position was never opened.
    pub(crate) fn parse_close_paren(&mut self, mut token: Token) -> Result<f64, Token> {
        token.push_error(ErrorKind::MismatchedParen);
        Err(token)
    }

    pub(crate) fn parse_number(&mut self, mut token: Token) -> Result<f64, Token> {
        // `7e−3` is written with the minus sign; `str::parse` wants a hyphen.
        let literal = token
            .value
            .as_deref()
            .unwrap_or_default()
            .replace('\u{2212}', "-");

        match literal.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            Ok(number) if number.is_infinite() => {
                token.push_error(ErrorKind::NumberRange);
                Err(token)
            }
            _ => {
                token.push_error(ErrorKind::NotANumber);
                Err(token)
            }
        }
    }

    /// Parse a parenthesized group and its closing `)`.
    pub(crate) fn parse_grouping(&mut self, mut token: Token) -> Result<f64, Token> {
        if self.peek() == Symbol::CloseParen {
            token.push_error(ErrorKind::EmptyParens);
            return Err(token);
        }

        let value = self.parse_expression(binding::NONE)?;

        if self.peek() != Symbol::CloseParen {
            token.push_error(ErrorKind::MismatchedParen);
            return Err(token);
        }
        self.next(); // consume `)`
        Ok(value)
    }

    /// Prefix `+`, `−`, and `√`: parse the operand at the operator's own
    /// binding power, then apply.
    pub(crate) fn parse_unary(&mut self, mut token: Token) -> Result<f64, Token> {
        let operand = self.parse_expression(binding_power(token.symbol))?;
        let Some(operation) = unary_operation(token.symbol) else {
            token.push_error(ErrorKind::NotPrefix);
            return Err(token);
        };
        settle(token, operation(operand))
    }

    // =========================================================================
    // Infix handlers (led)
    // =========================================================================

    /// Left-associative binary operator: `8 − 4 − 2` is `(8 − 4) − 2`.
    pub(crate) fn parse_left(&mut self, left: f64, token: Token) -> Result<f64, Token> {
        let rbp = binding_power(token.symbol);
        self.parse_binary(left, token, rbp)
    }

    /// Right-associative binary operator: `2 ^ 2 ^ 3` is `2 ^ (2 ^ 3)`.
    pub(crate) fn parse_right(&mut self, left: f64, token: Token) -> Result<f64, Token> {
        let rbp = binding_power(token.symbol) - 1;
        self.parse_binary(left, token, rbp)
    }

    /// Postfix `%` and `!` apply to the value on their left.
    pub(crate) fn parse_postfix(&mut self, left: f64, mut token: Token) -> Result<f64, Token> {
        let Some(operation) = unary_operation(token.symbol) else {
            token.push_error(ErrorKind::NotInfix);
            return Err(token);
        };
        settle(token, operation(left))
    }

    fn parse_binary(&mut self, left: f64, mut token: Token, rbp: u8) -> Result<f64, Token> {
        let right = self.parse_expression(rbp)?;
        let Some(operation) = binary_operation(token.symbol) else {
            token.push_error(ErrorKind::NotInfix);
            return Err(token);
        };
        settle(token, operation(left, right))
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Consume and return the next token. Sticks at EOF.
    fn next(&mut self) -> Token {
        let end = self.end();
        if self.pos >= end {
            return self.tokens[end].clone();
        }
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn peek(&self) -> Symbol {
        self.tokens[self.pos].symbol
    }

    fn is_consumed(&self) -> bool {
        self.pos >= self.end()
    }

    fn end(&self) -> usize {
        self.tokens.len() - 1
    }

    /// Drain the rest of the stream, collecting lexical errors after `error`.
    fn flush(&mut self, error: Token) -> Vec<Token> {
        let mut errors = vec![error];
        while !self.is_consumed() {
            let token = self.next();
            if token.is_error() {
                errors.push(token);
            }
        }
        errors
    }
}

/// Attach an operation's outcome to its operator token.
fn settle(mut token: Token, outcome: Result<f64, ErrorKind>) -> Result<f64, Token> {
    match outcome {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => {
            token.push_error(ErrorKind::OperationRange);
            Err(token)
        }
        Err(kind) => {
            token.push_error(kind);
            Err(token)
        }
    }
}
