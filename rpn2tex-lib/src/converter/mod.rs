pub mod diagnostic;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod renderer;
pub mod syntax;
pub mod token;

use crate::converter::diagnostic::Diagnostic;
use crate::converter::syntax::expression_tree::Expression;
use log::debug;

/// Converts the given RPN expression into infix LaTeX.
///
/// # Arguments
///
/// * `source`: A text expression in postfix format.
///
/// returns: The LaTeX math-mode source, or the diagnostic of the stage that rejected the input.
///
/// # Examples
///
/// ```
/// use rpn2tex::converter::convert;
/// # use rpn2tex::converter::diagnostic::Diagnostic;
///
/// # fn main() -> Result<(), Diagnostic> {
/// let latex = convert("5 3 + 2 *")?;
/// assert_eq!(latex, r"$( 5 + 3 ) \times 2$");
/// # Ok(()) }
/// ```
pub fn convert(source: &str) -> Result<String, Diagnostic> {
    let expression = parse_source(source)?;
    let latex = renderer::render(&expression);
    debug!("rendered {} characters of LaTeX", latex.len());
    Ok(latex)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `source`: The text-representation of the postfix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use rpn2tex::converter::parse_source;
/// # use rpn2tex::converter::diagnostic::Diagnostic;
///
/// # fn main() -> Result<(), Diagnostic> {
/// let tree = parse_source("2 3 4 + *")?;
/// assert_eq!(tree.depth(), 2);
/// # Ok(()) }
/// ```
pub fn parse_source(source: &str) -> Result<Expression, Diagnostic> {
    let tokens = lexer::tokenize(source)?;
    debug!("scanned {} tokens", tokens.len());
    parser::parse(&tokens)
}
