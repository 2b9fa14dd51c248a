pub use crate::source_pos::{Span, Spanned};

pub type SpannedTok = Spanned<Token>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    // Always finite; the lexer rejects literals that overflow.
    Num(f64),

    Op(char),

    Delimiter(Delimiter),
}

impl Token {
    pub fn is_op(&self) -> bool {
        matches!(self, Token::Op(_))
    }

    pub fn is_lparen(&self) -> bool {
        matches!(self, Token::Delimiter(Delimiter::LParen))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}

impl TryFrom<char> for Delimiter {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '(' => Delimiter::LParen,
            ')' => Delimiter::RParen,
            _ => return Err(()),
        })
    }
}
