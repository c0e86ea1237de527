use crate::converter::operator::OperatorKind;
use crate::converter::syntax::expression_tree::Expression;
use crate::converter::token::Position;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal(&mut self, _text: &str, _position: Position) {}
    fn visit_binary_operation(
        &mut self,
        _operator: OperatorKind,
        left: &Expression,
        right: &Expression,
    ) {
        walk_binary_operation(self, left, right)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left: &Expression,
    right: &Expression,
) {
    left.accept(visitor);
    right.accept(visitor);
}

/// Counts the literal leaves of a tree.
#[derive(Default)]
pub(crate) struct LiteralCounter {
    pub(crate) count: usize,
}

impl SyntaxVisitor for LiteralCounter {
    fn visit_literal(&mut self, _text: &str, _position: Position) {
        self.count += 1;
    }
}

/// Tracks the deepest nesting of operators seen during a walk.
#[derive(Default)]
pub(crate) struct DepthMeter {
    current: usize,
    pub(crate) deepest: usize,
}

impl SyntaxVisitor for DepthMeter {
    fn visit_binary_operation(
        &mut self,
        _operator: OperatorKind,
        left: &Expression,
        right: &Expression,
    ) {
        self.current += 1;
        self.deepest = self.deepest.max(self.current);
        walk_binary_operation(self, left, right);
        self.current -= 1;
    }
}
