use thiserror::Error;

use crate::source_pos::Span;

use super::{eval_err::EvalError, syntax_err::ParseError};

/// Error returned by [`crate::evaluate`]; wraps whichever stage failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of an [`EvaluationError`], for callers that only
/// need to choose a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnbalancedParentheses,
    NumberOutOfRange,
    NestingTooDeep,
    InputTooLong,
    InsufficientOperands,
    DivisionByZero,
    UnsupportedOperator,
    MalformedExpression,
    Internal,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::Parse(err) => match err {
                ParseError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
                ParseError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
                ParseError::NumberOutOfRange { .. } => ErrorKind::NumberOutOfRange,
                ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
                ParseError::InputTooLong { .. } => ErrorKind::InputTooLong,
            },
            EvaluationError::Eval(err) => match err {
                EvalError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
                EvalError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
                EvalError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
                EvalError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
                EvalError::StrayDelimiter { .. } => ErrorKind::Internal,
            },
        }
    }

    /// True when the failure points at a bug in the pipeline rather than bad input.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            EvaluationError::Parse(err) => err.span(),
            EvaluationError::Eval(err) => err.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_wrapped_error() {
        let err: EvaluationError = ParseError::UnbalancedParentheses { span: 0..1 }.into();
        assert_eq!(err.kind(), ErrorKind::UnbalancedParentheses);
        assert_eq!(err.span(), Some(&(0..1)));

        let err: EvaluationError = EvalError::MalformedExpression { values: 2 }.into();
        assert_eq!(err.kind(), ErrorKind::MalformedExpression);
        assert_eq!(err.span(), None);
        assert!(!err.is_internal());
    }

    #[test]
    fn stray_delimiter_is_internal() {
        let err: EvaluationError = EvalError::StrayDelimiter { span: 3..4 }.into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.is_internal());
    }

    #[test]
    fn messages_name_the_offset() {
        let err: EvaluationError = ParseError::InvalidCharacter {
            found: 'a',
            span: 4..5,
        }
        .into();
        assert_eq!(err.to_string(), "invalid character 'a' at offset 4");

        let err: EvaluationError = EvalError::DivisionByZero { span: 2..3 }.into();
        assert_eq!(err.to_string(), "division by zero at offset 2");
    }
}
