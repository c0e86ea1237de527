use crate::converter::operator::OperatorKind;
use std::fmt;
use std::fmt::Formatter;

/// A 1-based line and column in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A discrete part of an RPN expression
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// The numeric text exactly as written, sign and decimal point included.
    Number(String, Position),
    Operator(OperatorKind, Position),
    EndOfInput(Position),
}

impl Token {
    pub fn position(&self) -> Position {
        match self {
            Token::Number(_, position)
            | Token::Operator(_, position)
            | Token::EndOfInput(position) => *position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text, _) => write!(f, "{}", text),
            Token::Operator(operator, _) => write!(f, "{}", operator),
            Token::EndOfInput(_) => write!(f, "<end of input>"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self, self.position())
    }
}
