//! Pratt parser for surface expressions
//!
//! Precedence-climbing parser over the tokenizer's output. All operator
//! precedence lives in a single table, which keeps the grammar additions
//! (if any) to one match arm plus a precedence entry.

use super::error::{ParseError, ParseResult};
use super::tokenizer::{Token, Tokenizer};
use crate::ast::{BinaryOperator, ExpressionNode, UnaryOperator};

/// Operator precedence levels (higher = tighter binding)
///
/// Mirrors Python's arithmetic precedence, which the expression language
/// follows: `**` binds tighter than unary minus on its left operand
/// (`-x**2` is `-(x**2)`), and unary minus binds tighter than `*` and `/`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Additive operators (+, -)
    Additive = 1,
    /// Multiplicative operators (*, /)
    Multiplicative = 2,
    /// Unary sign operators (+, -)
    Unary = 3,
    /// Power operator (**), right associative
    Power = 4,
}

impl Precedence {
    /// Convert precedence to raw u8 for fast comparison
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Next higher precedence level, used for left-associative operators
    #[inline(always)]
    pub const fn next_level(self) -> Self {
        match self {
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Power,
            Precedence::Power => Precedence::Power, // Already highest
        }
    }

    /// Check if this precedence is right associative
    #[inline(always)]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Precedence::Power)
    }
}

/// Precedence lookup via direct pattern matching
#[inline(always)]
fn get_precedence(token: &Token<'_>) -> Option<Precedence> {
    match token {
        Token::Plus | Token::Minus => Some(Precedence::Additive),
        Token::Multiply | Token::Divide => Some(Precedence::Multiplicative),
        Token::Power => Some(Precedence::Power),
        _ => None,
    }
}

/// Convert token to binary operator
#[inline(always)]
fn token_to_binary_op(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Multiply => Some(BinaryOperator::Multiply),
        Token::Divide => Some(BinaryOperator::Divide),
        Token::Power => Some(BinaryOperator::Power),
        _ => None,
    }
}

/// Pratt parser over the surface expression grammar
pub struct PrattParser<'input> {
    tokenizer: Tokenizer<'input>,
    current_token: Option<Token<'input>>,
}

impl<'input> PrattParser<'input> {
    /// Create a parser and read the first token
    pub fn new(input: &'input str) -> ParseResult<Self> {
        let mut parser = Self {
            tokenizer: Tokenizer::new(input),
            current_token: None,
        };
        parser.advance()?;
        Ok(parser)
    }

    /// Advance to the next token
    #[inline(always)]
    fn advance(&mut self) -> ParseResult<()> {
        self.current_token = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Peek at the current token
    #[inline(always)]
    fn current(&self) -> Option<&Token<'input>> {
        self.current_token.as_ref()
    }

    /// Position of the current token, or end of input
    #[inline(always)]
    fn position(&self) -> usize {
        self.tokenizer.token_start()
    }

    fn unexpected(&self, token: &Token<'input>) -> ParseError {
        ParseError::UnexpectedToken {
            token: token.to_string(),
            position: self.position(),
        }
    }

    fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            position: self.tokenizer.position(),
        }
    }

    /// Consume an expected token or fail with its position
    fn expect(&mut self, expected: Token<'input>) -> ParseResult<()> {
        match &self.current_token {
            Some(token) if std::mem::discriminant(token) == std::mem::discriminant(&expected) => {
                self.advance()
            }
            Some(token) => Err(ParseError::SyntaxError {
                position: self.position(),
                message: format!("expected '{expected}', found '{token}'"),
            }),
            None => Err(ParseError::SyntaxError {
                position: self.tokenizer.position(),
                message: format!("expected '{expected}', found end of input"),
            }),
        }
    }

    /// Parse with precedence climbing from `min_precedence`
    fn parse_expression_with_precedence(
        &mut self,
        min_precedence: Precedence,
    ) -> ParseResult<ExpressionNode> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.current() {
            let Some(precedence) = get_precedence(token) else {
                break;
            };
            if precedence.as_u8() < min_precedence.as_u8() {
                break;
            }
            let Some(op) = token_to_binary_op(token) else {
                break;
            };
            self.advance()?;

            let right = if precedence.is_right_associative() {
                self.parse_expression_with_precedence(precedence)?
            } else {
                self.parse_expression_with_precedence(precedence.next_level())?
            };
            left = ExpressionNode::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse a prefix sign or fall through to a primary expression
    fn parse_unary(&mut self) -> ParseResult<ExpressionNode> {
        match self.current() {
            Some(Token::Minus) => {
                self.advance()?;
                let operand = self.parse_expression_with_precedence(Precedence::Unary)?;
                Ok(ExpressionNode::unary(UnaryOperator::Minus, operand))
            }
            Some(Token::Plus) => {
                self.advance()?;
                let operand = self.parse_expression_with_precedence(Precedence::Unary)?;
                Ok(ExpressionNode::unary(UnaryOperator::Plus, operand))
            }
            _ => self.parse_primary(),
        }
    }

    /// Parse primary expressions: numbers, variables, calls, groups
    fn parse_primary(&mut self) -> ParseResult<ExpressionNode> {
        match self.current() {
            Some(Token::Number(value)) => {
                let value = *value;
                self.advance()?;
                Ok(ExpressionNode::number(value))
            }

            Some(Token::Identifier(name)) => {
                let name = *name;
                self.advance()?;
                match self.current() {
                    // Namespace-qualified call: `np.sin(x)`
                    Some(Token::Dot) => {
                        self.advance()?;
                        let member = match self.current() {
                            Some(Token::Identifier(member)) => *member,
                            Some(token) => return Err(self.unexpected(&token.clone())),
                            None => return Err(self.end_of_input()),
                        };
                        self.advance()?;
                        // The grammar has no attribute access; a qualified
                        // name must be a call
                        if !matches!(self.current(), Some(Token::LeftParen)) {
                            return Err(ParseError::SyntaxError {
                                position: self.position(),
                                message: format!(
                                    "'{name}.{member}' must be called, e.g. '{name}.{member}(x)'"
                                ),
                            });
                        }
                        let args = self.parse_call_arguments()?;
                        Ok(ExpressionNode::qualified_call(name, member, args))
                    }
                    // Plain call: `sin(x)`
                    Some(Token::LeftParen) => {
                        let args = self.parse_call_arguments()?;
                        Ok(ExpressionNode::function_call(name, args))
                    }
                    _ => Ok(ExpressionNode::variable(name)),
                }
            }

            Some(Token::LeftParen) => {
                self.advance()?;
                let expr = self.parse_expression_with_precedence(Precedence::Additive)?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }

            Some(token) => Err(self.unexpected(&token.clone())),
            None => Err(self.end_of_input()),
        }
    }

    /// Parse a parenthesized argument list; arity is checked at evaluation
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<ExpressionNode>> {
        self.expect(Token::LeftParen)?;

        let mut args = Vec::new();
        if matches!(self.current(), Some(Token::RightParen)) {
            self.advance()?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression_with_precedence(Precedence::Additive)?);
            match self.current() {
                Some(Token::Comma) => self.advance()?,
                Some(Token::RightParen) => {
                    self.advance()?;
                    return Ok(args);
                }
                Some(token) => return Err(self.unexpected(&token.clone())),
                None => return Err(self.end_of_input()),
            }
        }
    }
}

/// Parse a surface expression string into an AST
pub fn parse_expression(input: &str) -> ParseResult<ExpressionNode> {
    let mut parser = PrattParser::new(input)?;
    let expr = parser.parse_expression_with_precedence(Precedence::Additive)?;

    // The whole input must be one expression
    if let Some(token) = parser.current() {
        return Err(parser.unexpected(&token.clone()));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExpressionNode as E;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_expression("1 + 2 * 3").expect("parse");
        assert_eq!(
            expr,
            E::binary(
                BinaryOperator::Add,
                E::number(1.0),
                E::binary(BinaryOperator::Multiply, E::number(2.0), E::number(3.0)),
            )
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse_expression("10 - 4 - 3").expect("parse");
        assert_eq!(expr.to_string(), "((10 - 4) - 3)");
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse_expression("2 ** 3 ** 2").expect("parse");
        assert_eq!(expr.to_string(), "(2 ** (3 ** 2))");
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        // Python semantics: -x**2 is -(x**2)
        let expr = parse_expression("-x**2").expect("parse");
        assert_eq!(
            expr,
            E::unary(
                UnaryOperator::Minus,
                E::binary(BinaryOperator::Power, E::variable("x"), E::number(2.0)),
            )
        );
    }

    #[test]
    fn unary_minus_allowed_in_exponent() {
        let expr = parse_expression("2 ** -3").expect("parse");
        assert_eq!(expr.to_string(), "(2 ** (-3))");
    }

    #[test]
    fn parses_qualified_call() {
        let expr = parse_expression("np.sin(x) * np.cos(y)").expect("parse");
        assert_eq!(
            expr,
            E::binary(
                BinaryOperator::Multiply,
                E::qualified_call("np", "sin", vec![E::variable("x")]),
                E::qualified_call("np", "cos", vec![E::variable("y")]),
            )
        );
    }

    #[test]
    fn parses_nested_gaussian() {
        let expr = parse_expression("x * y * np.exp(-(x**2 + y**2))").expect("parse");
        assert_eq!(expr.to_string(), "((x * y) * np.exp((-((x ** 2) + (y ** 2)))))");
    }

    #[test]
    fn rejects_attribute_access_without_call() {
        let err = parse_expression("np.pi").expect_err("attribute access is not in the grammar");
        assert!(matches!(err, ParseError::SyntaxError { .. }));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = parse_expression("x y").expect_err("two expressions");
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                token: "y".to_string(),
                position: 2
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_expression("").expect_err("empty input");
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        let err = parse_expression("sin(x").expect_err("unclosed call");
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn rejects_python_statements() {
        assert!(parse_expression("__import__('os')").is_err());
        assert!(parse_expression("os.system('ls')").is_err());
        assert!(parse_expression("1/0 if True else x").is_err());
    }

    #[test]
    fn empty_argument_list_parses_and_defers_arity() {
        // `sin()` is grammatical; the registry rejects it at evaluation time
        let expr = parse_expression("sin()").expect("parse");
        assert_eq!(expr, E::function_call("sin", vec![]));
    }
}
