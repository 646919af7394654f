use std::fmt;

use abacus_lexer::{normalize, Token};

/// Caret-annotated report of every error found in one evaluation.
///
/// ```text
/// 07 + 1 / 0
/// ^
/// 1. Leading zero. Not a prefix operation.
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    source: String,
    errors: Vec<Token>,
}

impl Diagnostic {
    /// `source` may be raw input; it is normalized the same way the scanner
    /// normalizes it so token columns line up.
    pub fn new(source: &str, errors: Vec<Token>) -> Self {
        Self {
            source: normalize(source),
            errors,
        }
    }

    pub fn errors(&self) -> &[Token] {
        &self.errors
    }

    /// Line 1: the normalized source.
    pub fn source_line(&self) -> &str {
        &self.source
    }

    /// Line 2: one caret group under each error token, in order. A group
    /// spans the token's lexeme, and zero-length tokens still get one caret.
    pub fn caret_line(&self) -> String {
        let mut line = String::new();
        let mut end = 0;
        for token in &self.errors {
            let column = token.column.max(end);
            line.push_str(&" ".repeat(column - end));
            line.push_str(&"^".repeat(token.width()));
            end = column + token.width();
        }
        line
    }

    /// Line 3: numbered messages, in the order the errors were found.
    pub fn message_line(&self) -> String {
        self.errors
            .iter()
            .enumerate()
            .map(|(i, token)| format!("{}. {}", i + 1, token.message))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.source_line(),
            self.caret_line(),
            self.message_line()
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_parser::Parser;
    use pretty_assertions::assert_eq;

    fn diagnose(source: &str) -> Diagnostic {
        Diagnostic::new(source, Parser::evaluate(source).unwrap_err())
    }

    #[test]
    fn test_single_error() {
        assert_eq!(
            diagnose("(1 + 2").render(),
            "(1 + 2\n^\n1. Mismatched parenthesis."
        );
    }

    #[test]
    fn test_caret_offsets_between_errors() {
        let diagnostic = diagnose("1 + a + b");
        assert_eq!(diagnostic.caret_line(), "    ^   ^");
        assert_eq!(
            diagnostic.message_line(),
            "1. Unknown identifier. Not a prefix operation. 2. Unknown identifier."
        );
    }

    #[test]
    fn test_caret_group_covers_lexeme() {
        let diagnostic = diagnose("2 + abc - NaN");
        assert_eq!(diagnostic.caret_line(), "    ^^^   ^^^");
    }

    #[test]
    fn test_source_line_is_normalized() {
        let diagnostic = diagnose("1\t\t/\n 0");
        assert_eq!(diagnostic.source_line(), "1 / 0");
        assert_eq!(diagnostic.caret_line(), "  ^");
    }

    #[test]
    fn test_empty_expression_caret_at_column_zero() {
        assert_eq!(diagnose("").render(), "\n^\n1. Empty expression.");
    }

    #[test]
    fn test_incomplete_expression_points_past_end() {
        let diagnostic = diagnose("1 +");
        assert_eq!(diagnostic.caret_line(), "   ^");
        assert_eq!(diagnostic.message_line(), "1. Incomplete expression.");
    }

    #[test]
    fn test_overlapping_columns_never_move_backwards() {
        let mut first = Token::new(abacus_lexer::Symbol::Error, 2, 3);
        first.message = "first".into();
        let mut second = Token::new(abacus_lexer::Symbol::Error, 3, 1);
        second.message = "second".into();
        let diagnostic = Diagnostic::new("abcdefg", vec![first, second]);
        assert_eq!(diagnostic.caret_line(), "  ^^^^");
        assert_eq!(diagnostic.to_string(), "abcdefg\n  ^^^^\n1. first 2. second");
    }
}
