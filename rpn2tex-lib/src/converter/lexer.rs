use crate::converter::diagnostic::Diagnostic;
use crate::converter::operator::OperatorKind;
use crate::converter::token::{Position, Token};
use itertools::Itertools;
use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits the given RPN source text into positioned tokens.
///
/// # Arguments
///
/// * `source`: The raw RPN text, e.g. `5 3 + 2 *`.
///
/// returns: The tokens in source order, always terminated by a single
/// `Token::EndOfInput`, or a lexical diagnostic for the first character
/// that cannot start a token.
///
/// # Examples
///
/// ```
/// use rpn2tex::converter::lexer::tokenize;
/// # use rpn2tex::converter::diagnostic::Diagnostic;
///
/// # fn main() -> Result<(), Diagnostic> {
/// let tokens = tokenize("5 -3 -")?;
/// assert_eq!(tokens.len(), 4);
/// # Ok(()) }
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Diagnostic> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = scanner.next_token()? {
        trace!("scanned {:?}", token);
        tokens.push(token);
    }
    tokens.push(Token::EndOfInput(scanner.position()));

    Ok(tokens)
}

struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, character)| character)
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, character) = self.chars.next()?;
        if character == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(character)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    /// Consumes consecutive ASCII digits. Digits never contain a newline,
    /// so the column advances by the number consumed.
    fn skip_digits(&mut self) {
        let count = self
            .chars
            .peeking_take_while(|(_, character)| character.is_ascii_digit())
            .count();
        self.column += count;
    }

    fn next_token(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.skip_whitespace();

        let start = self.offset();
        let position = self.position();
        let character = match self.peek() {
            Some(character) => character,
            None => return Ok(None),
        };

        let token = match character {
            '+' => self.operator(OperatorKind::Plus, position),
            '*' => self.operator(OperatorKind::Star, position),
            '/' => self.operator(OperatorKind::Slash, position),
            '-' => {
                self.advance();
                if self.peek().map_or(false, |next| next.is_ascii_digit()) {
                    self.scan_number(start, position)
                } else {
                    Token::Operator(OperatorKind::Minus, position)
                }
            }
            digit if digit.is_ascii_digit() => self.scan_number(start, position),
            other => return Err(unexpected_character(other, position)),
        };

        Ok(Some(token))
    }

    fn operator(&mut self, operator: OperatorKind, position: Position) -> Token {
        self.advance();
        Token::Operator(operator, position)
    }

    /// Scans an integer part and an optional fractional part. `start` is the
    /// byte offset where the literal began, which precedes the digits when a
    /// sign was already consumed.
    fn scan_number(&mut self, start: usize, position: Position) -> Token {
        self.skip_digits();
        if self.peek() == Some('.') {
            self.advance();
            self.skip_digits();
        }
        let end = self.offset();
        Token::Number(self.source[start..end].to_string(), position)
    }
}

fn unexpected_character(character: char, position: Position) -> Diagnostic {
    Diagnostic::lexical(format!("Unexpected character '{}'", character), position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::diagnostic::DiagnosticKind;
    use parameterized_macro::parameterized;

    fn number(text: &str, line: usize, column: usize) -> Token {
        Token::Number(text.to_string(), Position::new(line, column))
    }

    fn operator(operator: OperatorKind, line: usize, column: usize) -> Token {
        Token::Operator(operator, Position::new(line, column))
    }

    fn end(line: usize, column: usize) -> Token {
        Token::EndOfInput(Position::new(line, column))
    }

    #[test]
    fn simple_expression_returns_positioned_tokens() {
        let tokens = tokenize("5 3 +").unwrap();

        assert_eq!(
            tokens,
            vec![
                number("5", 1, 1),
                number("3", 1, 3),
                operator(OperatorKind::Plus, 1, 5),
                end(1, 6),
            ]
        );
    }

    #[test]
    fn all_operators_are_recognized() {
        let tokens = tokenize("+ - * /").unwrap();

        assert_eq!(
            tokens,
            vec![
                operator(OperatorKind::Plus, 1, 1),
                operator(OperatorKind::Minus, 1, 3),
                operator(OperatorKind::Star, 1, 5),
                operator(OperatorKind::Slash, 1, 7),
                end(1, 8),
            ]
        );
    }

    #[test]
    fn empty_input_yields_only_end_of_input() {
        assert_eq!(tokenize("").unwrap(), vec![end(1, 1)]);
    }

    #[test]
    fn whitespace_only_input_yields_only_end_of_input() {
        assert_eq!(tokenize(" \t\r\n ").unwrap(), vec![end(2, 2)]);
    }

    #[parameterized(
        source = {
            "42",
            "3.14",
            "-2",
            "007",
            "5.",
            "0.50",
            "-0.25",
        }
    )]
    fn number_text_is_preserved_verbatim(source: &str) {
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0], number(source, 1, 1));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn minus_followed_by_digit_is_a_sign() {
        let tokens = tokenize("5 -3 +").unwrap();

        assert_eq!(
            tokens,
            vec![
                number("5", 1, 1),
                number("-3", 1, 3),
                operator(OperatorKind::Plus, 1, 6),
                end(1, 7),
            ]
        );
    }

    #[test]
    fn minus_followed_by_space_is_an_operator() {
        let tokens = tokenize("5 3 - 2").unwrap();

        assert_eq!(tokens[2], operator(OperatorKind::Minus, 1, 5));
        assert_eq!(tokens[3], number("2", 1, 7));
    }

    #[test]
    fn minus_at_end_of_input_is_an_operator() {
        let tokens = tokenize("5 3 -").unwrap();

        assert_eq!(
            tokens,
            vec![
                number("5", 1, 1),
                number("3", 1, 3),
                operator(OperatorKind::Minus, 1, 5),
                end(1, 6),
            ]
        );
    }

    #[test]
    fn minus_directly_after_number_without_space_starts_a_new_literal() {
        let tokens = tokenize("3-2").unwrap();

        assert_eq!(tokens, vec![number("3", 1, 1), number("-2", 1, 2), end(1, 4)]);
    }

    #[test]
    fn operators_need_no_surrounding_whitespace() {
        let tokens = tokenize("1 2+").unwrap();

        assert_eq!(tokens[2], operator(OperatorKind::Plus, 1, 4));
    }

    #[test]
    fn newlines_advance_line_and_reset_column() {
        let tokens = tokenize("5\n  3\n+").unwrap();

        assert_eq!(
            tokens,
            vec![
                number("5", 1, 1),
                number("3", 2, 3),
                operator(OperatorKind::Plus, 3, 1),
                end(3, 2),
            ]
        );
    }

    #[parameterized(
        source = {
            "2 3 ^",
            "5 @",
            "x",
            ".5",
            "1 2 +\n3 (",
        },
        expected_message = {
            "Unexpected character '^'",
            "Unexpected character '@'",
            "Unexpected character 'x'",
            "Unexpected character '.'",
            "Unexpected character '('",
        },
        expected_line = { 1, 1, 1, 1, 2 },
        expected_column = { 5, 3, 1, 1, 3 }
    )]
    fn unexpected_character_returns_lexical_diagnostic(
        source: &str,
        expected_message: &str,
        expected_line: usize,
        expected_column: usize,
    ) {
        let diagnostic = tokenize(source).unwrap_err();

        assert_eq!(diagnostic.kind, DiagnosticKind::Lexical);
        assert_eq!(diagnostic.message, expected_message);
        assert_eq!(diagnostic.line, expected_line);
        assert_eq!(diagnostic.column, expected_column);
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let diagnostic = tokenize("1.2.3").unwrap_err();

        assert_eq!(diagnostic.message, "Unexpected character '.'");
        assert_eq!(diagnostic.column, 4);
    }
}
