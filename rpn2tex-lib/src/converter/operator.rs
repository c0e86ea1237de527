use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// One of the four binary arithmetic operators understood by the converter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Plus,
    Minus,
    Star,
    Slash,
}

/// How operators of equal precedence group. All four operators group
/// left-to-right.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
}

impl OperatorKind {
    /// The character the operator is written as in RPN source.
    pub fn symbol(&self) -> char {
        match self {
            OperatorKind::Plus => '+',
            OperatorKind::Minus => '-',
            OperatorKind::Star => '*',
            OperatorKind::Slash => '/',
        }
    }

    /// The LaTeX math-mode glyph used when rendering the operator.
    pub fn latex_glyph(&self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Star => r"\times",
            OperatorKind::Slash => r"\div",
        }
    }

    /// Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            OperatorKind::Plus | OperatorKind::Minus => 1,
            OperatorKind::Star | OperatorKind::Slash => 2,
        }
    }

    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    pub fn is_commutative(&self) -> bool {
        matches!(self, OperatorKind::Plus | OperatorKind::Star)
    }
}

impl TryFrom<char> for OperatorKind {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(OperatorKind::Plus),
            '-' => Ok(OperatorKind::Minus),
            '*' => Ok(OperatorKind::Star),
            '/' => Ok(OperatorKind::Slash),
            other => Err(other),
        }
    }
}

impl FromStr for OperatorKind {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => OperatorKind::try_from(symbol).map_err(|_| ()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
