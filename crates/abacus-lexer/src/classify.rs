//! Character and lexeme predicates shared by the scanner and its callers.

use crate::symbol::{Symbol, LOWER_E, NOT_A_NUMBER, UPPER_E};

/// Space, tab, line feed, carriage return, vertical tab, or form feed.
pub fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{000b}' | '\u{000c}')
}

pub fn is_paren(ch: char) -> bool {
    matches!(ch, '(' | ')')
}

/// A denary digit. Only ASCII `0` through `9` count.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// `e` or `E`, the exponent suffix of a floating-point literal.
pub fn is_exponent_suffix(ch: char) -> bool {
    ch == LOWER_E || ch == UPPER_E
}

pub fn is_minus(ch: char) -> bool {
    Symbol::from_char(ch) == Some(Symbol::Subtract)
}

/// Signs allowed between an exponent suffix and its digits.
pub fn is_plus_minus(ch: char) -> bool {
    ch == '+' || is_minus(ch)
}

/// Any operator key, including the prefix `√` and the postfix `%` and `!`.
pub fn is_operator(ch: char) -> bool {
    Symbol::from_char(ch).is_some_and(Symbol::is_operator)
}

/// `NaN`, `undefined`, or `Infinity`.
pub fn is_not_a_number(word: &str) -> bool {
    NOT_A_NUMBER.contains(&word)
}
