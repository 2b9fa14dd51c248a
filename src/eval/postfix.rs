use log::trace;

use crate::{
    errors::EvalError,
    source_pos::Span,
    stack::Stack,
    syntax::tokens::{SpannedTok, Token},
};

/// Reduces a postfix sequence to a single value.
pub fn evaluate_postfix<'t>(
    postfix: impl IntoIterator<Item = &'t SpannedTok>,
) -> Result<f64, EvalError> {
    let mut values = Stack::new();
    for tok in postfix {
        match tok.elem {
            Token::Num(n) => values.push(n),
            Token::Op(op) => {
                // `b` was pushed last.
                let (a, b) = match (values.pop(), values.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    _ => {
                        return Err(EvalError::InsufficientOperands {
                            op,
                            span: tok.span.clone(),
                        })
                    }
                };
                values.push(apply(op, a, b, &tok.span)?);
            }
            Token::Delimiter(_) => {
                return Err(EvalError::StrayDelimiter {
                    span: tok.span.clone(),
                })
            }
        }
    }
    match values.pop() {
        Some(result) if values.is_empty() => {
            trace!("result: {}", result);
            Ok(result)
        }
        Some(_) => Err(EvalError::MalformedExpression {
            values: values.len() + 1,
        }),
        None => Err(EvalError::MalformedExpression { values: 0 }),
    }
}

pub fn apply(op: char, a: f64, b: f64, span: &Span) -> Result<f64, EvalError> {
    Ok(match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' if b == 0.0 => return Err(EvalError::DivisionByZero { span: span.clone() }),
        '/' => a / b,
        '^' => a.powf(b),
        _ => {
            return Err(EvalError::UnsupportedOperator {
                op,
                span: span.clone(),
            })
        }
    })
}
