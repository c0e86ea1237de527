use crate::converter::operator::OperatorKind;
use crate::converter::syntax::expression_tree::Expression;

/// Renders the expression tree as infix LaTeX wrapped in math-mode delimiters.
///
/// Parentheses are only inserted where the infix reading would otherwise
/// produce a different tree.
///
/// # Arguments
///
/// * `expression`: The tree to render.
///
/// returns: The LaTeX source, e.g. `$( 5 + 3 ) \times 2$`.
///
/// # Examples
///
/// ```
/// use rpn2tex::converter::operator::OperatorKind;
/// use rpn2tex::converter::renderer::render;
/// use rpn2tex::converter::syntax::expression_tree::Expression;
/// use rpn2tex::converter::token::Position;
///
/// let position = Position::default();
/// let sum = Expression::new_binary_operation(
///     OperatorKind::Plus,
///     Expression::new_literal("5", position),
///     Expression::new_literal("3", position),
///     position,
/// );
/// let product = Expression::new_binary_operation(
///     OperatorKind::Star,
///     sum,
///     Expression::new_literal("2", position),
///     position,
/// );
/// assert_eq!(render(&product), r"$( 5 + 3 ) \times 2$");
/// ```
pub fn render(expression: &Expression) -> String {
    let mut output = String::from("$");
    build_expression(expression, &mut output);
    output.push('$');
    output
}

fn build_expression(expression: &Expression, output: &mut String) {
    match expression {
        Expression::Literal { text, .. } => output.push_str(text),
        Expression::BinaryOperation {
            operator,
            left,
            right,
            ..
        } => {
            let precedence = operator.precedence();

            parenthesize_if(output, needs_parens(left, precedence, false), |output| {
                build_expression(left, output)
            });
            output.push(' ');
            output.push_str(operator.latex_glyph());
            output.push(' ');
            parenthesize_if(output, needs_parens(right, precedence, true), |output| {
                build_expression(right, output)
            });
        }
    }
}

fn parenthesize_if(
    output: &mut String,
    predicate: bool,
    build_interior: impl FnOnce(&mut String),
) {
    if predicate {
        output.push_str("( ");
    }

    build_interior(output);

    if predicate {
        output.push_str(" )");
    }
}

/// Decides whether `child`, printed as an operand of an operator with
/// `parent_precedence`, must be wrapped in parentheses.
///
/// A child binding looser than its parent always needs them. A child of
/// equal precedence needs them only on the right side of the parent, and
/// only when the child itself is `-` or `/`.
pub fn needs_parens(child: &Expression, parent_precedence: u8, is_right_side: bool) -> bool {
    match child {
        Expression::Literal { .. } => false,
        Expression::BinaryOperation { operator, .. } => {
            let child_precedence = operator.precedence();
            if child_precedence < parent_precedence {
                return true;
            }

            child_precedence == parent_precedence
                && is_right_side
                && matches!(operator, OperatorKind::Minus | OperatorKind::Slash)
        }
    }
}
