use crate::converter::diagnostic::Diagnostic;
use crate::converter::syntax::expression_tree::Expression;
use crate::converter::token::{Position, Token};
use log::debug;

/// Builds the expression tree described by the given postfix tokens.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in postfix notation, normally terminated by `Token::EndOfInput`.
///
/// returns: The root of the generated expression tree, or a structural
/// diagnostic when an operator lacks operands or the tokens do not reduce
/// to exactly one expression.
///
/// # Examples
///
/// ```
/// use rpn2tex::converter::lexer::tokenize;
/// use rpn2tex::converter::parser::parse;
/// # use rpn2tex::converter::diagnostic::Diagnostic;
///
/// # fn main() -> Result<(), Diagnostic> {
/// let tokens = tokenize("5 3 + 2 *")?;
/// let tree = parse(&tokens)?;
/// assert_eq!(tree.literal_count(), 3);
/// # Ok(()) }
/// ```
pub fn parse(tokens: &[Token]) -> Result<Expression, Diagnostic> {
    let mut operands: Vec<Expression> = Vec::new();
    let mut end_position = tokens.last().map(Token::position).unwrap_or_default();

    for token in tokens {
        match token {
            Token::Number(text, position) => {
                operands.push(Expression::new_literal(text.clone(), *position))
            }
            Token::Operator(operator, position) => {
                let (right, left) = match (operands.pop(), operands.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => {
                        return Err(Diagnostic::structural(
                            format!("Operator '{}' requires two operands", operator),
                            *position,
                        ))
                    }
                };
                operands.push(Expression::new_binary_operation(
                    *operator, left, right, *position,
                ));
            }
            Token::EndOfInput(position) => {
                end_position = *position;
                break;
            }
        }
    }

    into_single_root(operands, end_position)
}

fn into_single_root(
    mut operands: Vec<Expression>,
    end_position: Position,
) -> Result<Expression, Diagnostic> {
    match operands.len() {
        0 => Err(Diagnostic::structural("Empty expression", end_position)),
        1 => {
            let root = operands.remove(0);
            debug!("parsed expression tree:\n{}", root);
            Ok(root)
        }
        remaining => Err(Diagnostic::structural(
            format!(
                "Invalid RPN: {} values remain on stack (missing operators?)",
                remaining
            ),
            end_position,
        )),
    }
}
