use crate::converter::operator::OperatorKind;
use crate::converter::syntax::syntax_visitor::{
    walk_binary_operation, DepthMeter, LiteralCounter, SyntaxVisitor,
};
use crate::converter::token::Position;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An arithmetic expression as produced by the parser. Every operation
/// owns both of its operands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    // Terminal symbols (leaves)
    Literal {
        text: String,
        position: Position,
    },
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: OperatorKind,
        left: Box<Expression>,
        right: Box<Expression>,
        position: Position,
    },
}

impl Expression {
    pub fn new_literal(text: impl Into<String>, position: Position) -> Expression {
        Expression::Literal {
            text: text.into(),
            position,
        }
    }

    pub fn new_binary_operation(
        operator: OperatorKind,
        left: Expression,
        right: Expression,
        position: Position,
    ) -> Expression {
        Expression::BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            position,
        }
    }

    /// Where the literal, or the operator of an operation, was written.
    pub fn position(&self) -> Position {
        match self {
            Expression::Literal { position, .. } | Expression::BinaryOperation { position, .. } => {
                *position
            }
        }
    }

    pub fn operator(&self) -> Option<OperatorKind> {
        match self {
            Expression::Literal { .. } => None,
            Expression::BinaryOperation { operator, .. } => Some(*operator),
        }
    }

    pub fn precedence(&self) -> Option<u8> {
        self.operator().map(|operator| operator.precedence())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal { .. })
    }

    pub fn literal_count(&self) -> usize {
        let mut counter = LiteralCounter::default();
        self.accept(&mut counter);
        counter.count
    }

    /// The number of operators on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut meter = DepthMeter::default();
        self.accept(&mut meter);
        meter.deepest
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Expression::Literal { text, position } => visitor.visit_literal(text, *position),
            Expression::BinaryOperation {
                operator,
                left,
                right,
                ..
            } => visitor.visit_binary_operation(*operator, left, right),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, text: &str, _position: Position) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: OperatorKind,
        left: &Expression,
        right: &Expression,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left, right);
        self.builder.end_child();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_tree() -> Expression {
        // (5 + 3) * 2
        let five = Expression::new_literal("5", Position::new(1, 1));
        let three = Expression::new_literal("3", Position::new(1, 3));
        let plus =
            Expression::new_binary_operation(OperatorKind::Plus, five, three, Position::new(1, 5));
        let two = Expression::new_literal("2", Position::new(1, 7));
        Expression::new_binary_operation(OperatorKind::Star, plus, two, Position::new(1, 9))
    }

    #[test]
    fn operation_reports_operator_and_precedence() {
        let tree = create_tree();

        assert_eq!(tree.operator(), Some(OperatorKind::Star));
        assert_eq!(tree.precedence(), Some(2));
        assert_eq!(tree.position(), Position::new(1, 9));
        assert!(!tree.is_literal());
    }

    #[test]
    fn literal_has_no_operator() {
        let literal = Expression::new_literal("0.50", Position::new(2, 4));

        assert_eq!(literal.operator(), None);
        assert_eq!(literal.precedence(), None);
        assert_eq!(literal.position(), Position::new(2, 4));
        assert!(literal.is_literal());
    }

    #[test]
    fn literal_count_and_depth_describe_tree_shape() {
        let tree = create_tree();

        assert_eq!(tree.literal_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(Expression::new_literal("1", Position::default()).depth(), 0);
    }

    #[test]
    fn print_succeeds() {
        let tree = create_tree();

        let printed = format!("{}", tree);

        assert!(printed.starts_with("expression"));
        for label in ["*", "+", "5", "3", "2"] {
            assert!(printed.contains(label), "missing {} in {}", label, printed);
        }
    }
}
