use thiserror::Error;

use crate::source_pos::Span;

/// Failures of the postfix evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("operator '{op}' at offset {} is missing an operand", .span.start)]
    InsufficientOperands { op: char, span: Span },

    #[error("division by zero at offset {}", .span.start)]
    DivisionByZero { span: Span },

    #[error("unsupported operator '{op}' at offset {}", .span.start)]
    UnsupportedOperator { op: char, span: Span },

    #[error("expression left {values} values instead of one")]
    MalformedExpression { values: usize },

    // Parentheses never survive a successful conversion.
    #[error("internal error: parenthesis at offset {} reached the evaluator", .span.start)]
    StrayDelimiter { span: Span },
}

impl EvalError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::InsufficientOperands { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::UnsupportedOperator { span, .. }
            | EvalError::StrayDelimiter { span } => Some(span),
            EvalError::MalformedExpression { .. } => None,
        }
    }
}
