use log::trace;

use crate::{
    errors::ParseError,
    stack::Stack,
    syntax::{
        operators::lookup,
        tokens::{Delimiter, Spanned, SpannedTok, Token},
    },
};

/// Infix to postfix conversion.
///
/// Numbers go straight to the output. An incoming operator first pops every
/// stacked operator it yields to (lower-or-equal precedence for left
/// associative operators, strictly lower for right associative ones), so
/// `2-3-2` becomes `2 3 - 2 -` while `2^3^2` becomes `2 3 2 ^ ^`.
pub struct ShuntingYard {
    output: Vec<SpannedTok>,
    operators: Stack<SpannedTok>,
    depth: usize,
    max_depth: usize,
}

impl ShuntingYard {
    pub fn new(max_depth: usize) -> Self {
        Self {
            output: vec![],
            operators: Stack::new(),
            depth: 0,
            max_depth,
        }
    }

    pub fn convert(
        mut self,
        tokens: impl IntoIterator<Item = SpannedTok>,
    ) -> Result<Vec<SpannedTok>, ParseError> {
        for tok in tokens {
            match tok.elem {
                Token::Num(_) => self.output.push(tok),
                Token::Op(sym) => self.operator(sym, tok),
                Token::Delimiter(Delimiter::LParen) => {
                    if self.depth >= self.max_depth {
                        return Err(ParseError::NestingTooDeep {
                            max: self.max_depth,
                            span: tok.span,
                        });
                    }
                    self.depth += 1;
                    self.operators.push(tok);
                }
                Token::Delimiter(Delimiter::RParen) => self.close(tok)?,
            }
        }
        while let Some(tok) = self.operators.pop() {
            if tok.elem.is_lparen() {
                return Err(ParseError::UnbalancedParentheses { span: tok.span });
            }
            self.output.push(tok);
        }
        trace!("postfix: {:?}", self.output);
        Ok(self.output)
    }

    fn operator(&mut self, sym: char, tok: SpannedTok) {
        let op = match lookup(sym) {
            Some(op) => op,
            // No precedence: pops nothing and is never popped by a later
            // operator. The evaluator reports it as unsupported.
            None => return self.operators.push(tok),
        };
        while let Some(top) = self.operators.pop_if(|top| match top.elem {
            Token::Op(top_sym) => lookup(top_sym).map_or(false, |top_op| op.yields_to(top_op)),
            _ => false,
        }) {
            self.output.push(top);
        }
        self.operators.push(tok);
    }

    fn close(&mut self, rparen: SpannedTok) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Spanned {
                    elem: Token::Delimiter(Delimiter::LParen),
                    ..
                }) => {
                    self.depth -= 1;
                    return Ok(());
                }
                Some(tok) => self.output.push(tok),
                None => return Err(ParseError::UnbalancedParentheses { span: rparen.span }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn postfix(source: &str) -> Result<Vec<Token>, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(ShuntingYard::new(16)
            .convert(tokens)?
            .into_iter()
            .map(|tok| tok.elem)
            .collect())
    }

    fn num(n: f64) -> Token {
        Token::Num(n)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            postfix("10*5+3"),
            Ok(vec![num(10.0), num(5.0), Token::Op('*'), num(3.0), Token::Op('+')])
        );
        assert_eq!(
            postfix("3+10*5"),
            Ok(vec![num(3.0), num(10.0), num(5.0), Token::Op('*'), Token::Op('+')])
        );
    }

    #[test]
    fn subtraction_groups_left() {
        assert_eq!(
            postfix("2-3-2"),
            Ok(vec![num(2.0), num(3.0), Token::Op('-'), num(2.0), Token::Op('-')])
        );
    }

    #[test]
    fn power_groups_right() {
        assert_eq!(
            postfix("2^3^2"),
            Ok(vec![num(2.0), num(3.0), num(2.0), Token::Op('^'), Token::Op('^')])
        );
    }

    #[test]
    fn power_binds_tighter_than_multiplication() {
        assert_eq!(
            postfix("2*3^2"),
            Ok(vec![num(2.0), num(3.0), num(2.0), Token::Op('^'), Token::Op('*')])
        );
    }

    #[test]
    fn parentheses_override_precedence_and_vanish() {
        assert_eq!(
            postfix("(100-20)/4"),
            Ok(vec![num(100.0), num(20.0), Token::Op('-'), num(4.0), Token::Op('/')])
        );
    }

    #[test]
    fn unclosed_paren_points_at_the_open_paren() {
        assert_eq!(
            postfix("(3+4"),
            Err(ParseError::UnbalancedParentheses { span: 0..1 })
        );
    }

    #[test]
    fn unopened_paren_points_at_the_close_paren() {
        assert_eq!(
            postfix("3+4)"),
            Err(ParseError::UnbalancedParentheses { span: 3..4 })
        );
    }

    #[test]
    fn nesting_beyond_the_limit_fails() {
        let tokens = Lexer::new("((1))").tokenize().unwrap();
        assert_eq!(
            ShuntingYard::new(1).convert(tokens),
            Err(ParseError::NestingTooDeep { max: 1, span: 1..2 })
        );
        let tokens = Lexer::new("(1)+(1)").tokenize().unwrap();
        assert!(ShuntingYard::new(1).convert(tokens).is_ok());
    }

    #[test]
    fn unknown_operator_is_stacked_after_its_operands() {
        let tokens = vec![
            Spanned::new(num(1.0), 0..1),
            Spanned::new(Token::Op('%'), 1..2),
            Spanned::new(num(2.0), 2..3),
            Spanned::new(Token::Op('+'), 3..4),
            Spanned::new(num(3.0), 4..5),
        ];
        let out: Vec<Token> = ShuntingYard::new(4)
            .convert(tokens)
            .unwrap()
            .into_iter()
            .map(|tok| tok.elem)
            .collect();
        assert_eq!(
            out,
            vec![num(1.0), num(2.0), num(3.0), Token::Op('+'), Token::Op('%')]
        );
    }

    #[test]
    fn unknown_operator_is_rejected_by_the_evaluator() {
        let tokens = vec![
            Spanned::new(num(1.0), 0..1),
            Spanned::new(Token::Op('%'), 1..2),
            Spanned::new(num(2.0), 2..3),
        ];
        let postfix = ShuntingYard::new(4).convert(tokens).unwrap();
        assert_eq!(
            crate::eval::evaluate_postfix(&postfix),
            Err(crate::errors::EvalError::UnsupportedOperator { op: '%', span: 1..2 })
        );
    }
}
