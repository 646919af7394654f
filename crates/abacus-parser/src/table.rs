//! Parse table: binding power and handlers for every symbol.
//!
//! A Pratt parser gives each symbol semantic code. The prefix handler (nud)
//! runs when the symbol starts an expression; the infix handler (led) runs
//! when it continues one. A symbol without a handler for the position it
//! appears in is a parse error.

use abacus_lexer::{Symbol, Token};

use crate::parser::Parser;

pub type PrefixHandler = fn(&mut Parser, Token) -> Result<f64, Token>;
pub type InfixHandler = fn(&mut Parser, f64, Token) -> Result<f64, Token>;

/// Binding powers. Higher binds tighter.
pub mod binding {
    pub const NONE: u8 = 0;
    pub const SUM: u8 = 10;
    pub const PRODUCT: u8 = 20;
    pub const IMPLIED_PRODUCT: u8 = 30;
    pub const EXPONENT: u8 = 40;
    pub const POSTFIX: u8 = 50;
}

#[derive(Clone, Copy)]
pub struct ParseRule {
    pub binding_power: u8,
    pub prefix: Option<PrefixHandler>,
    pub infix: Option<InfixHandler>,
}

impl ParseRule {
    const fn new(
        binding_power: u8,
        prefix: Option<PrefixHandler>,
        infix: Option<InfixHandler>,
    ) -> Self {
        Self {
            binding_power,
            prefix,
            infix,
        }
    }
}

/// Look up the rule for a symbol.
pub fn rule(symbol: Symbol) -> ParseRule {
    match symbol {
        Symbol::Error => ParseRule::new(binding::NONE, None, None),
        Symbol::Eof => ParseRule::new(binding::NONE, Some(Parser::parse_eof), None),
        Symbol::Number => ParseRule::new(binding::NONE, Some(Parser::parse_number), None),
        Symbol::OpenParen => ParseRule::new(binding::NONE, Some(Parser::parse_grouping), None),
        Symbol::CloseParen => {
            ParseRule::new(binding::NONE, Some(Parser::parse_close_paren), None)
        }
        // √ takes everything to its right: √9 + 7 is √16.
        Symbol::SquareRoot => ParseRule::new(binding::NONE, Some(Parser::parse_unary), None),
        Symbol::Add | Symbol::Subtract => ParseRule::new(
            binding::SUM,
            Some(Parser::parse_unary),
            Some(Parser::parse_left),
        ),
        Symbol::Multiply | Symbol::Divide => {
            ParseRule::new(binding::PRODUCT, None, Some(Parser::parse_left))
        }
        Symbol::ImpliedMultiply => {
            ParseRule::new(binding::IMPLIED_PRODUCT, None, Some(Parser::parse_left))
        }
        Symbol::Exponent => ParseRule::new(binding::EXPONENT, None, Some(Parser::parse_right)),
        Symbol::Percentage | Symbol::Factorial => {
            ParseRule::new(binding::POSTFIX, None, Some(Parser::parse_postfix))
        }
    }
}

/// Binding power of a symbol, as seen by the infix loop.
pub fn binding_power(symbol: Symbol) -> u8 {
    rule(symbol).binding_power
}
