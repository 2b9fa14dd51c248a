use thiserror::Error;

use crate::source_pos::Span;

/// Failures of the tokenizer and the infix-to-postfix converter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid character {found:?} at offset {}", .span.start)]
    InvalidCharacter { found: char, span: Span },

    #[error("unbalanced parenthesis at offset {}", .span.start)]
    UnbalancedParentheses { span: Span },

    #[error("number literal at offset {} is out of range", .span.start)]
    NumberOutOfRange { span: Span },

    #[error("parentheses nested deeper than {max} at offset {}", .span.start)]
    NestingTooDeep { max: usize, span: Span },

    #[error("expression is {len} bytes long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

impl ParseError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::UnbalancedParentheses { span }
            | ParseError::NumberOutOfRange { span }
            | ParseError::NestingTooDeep { span, .. } => Some(span),
            ParseError::InputTooLong { .. } => None,
        }
    }
}
