use std::{iter::Peekable, str::CharIndices};

use log::trace;

use crate::{
    errors::ParseError,
    syntax::{
        operators::is_operator,
        tokens::{Delimiter, Span, Spanned, SpannedTok, Token},
    },
};

/// Whitespace dropped before scanning: ASCII blanks only, so a
/// non-breaking space is an invalid character.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

pub fn is_accepted(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '(' || c == ')' || is_operator(c)
}

/// Fails on the first character outside `[0-9+\-*/().^]`, ignoring whitespace.
pub fn validate(source: &str) -> Result<(), ParseError> {
    match source
        .char_indices()
        .find(|(_, c)| !is_blank(*c) && !is_accepted(*c))
    {
        Some((pos, found)) => Err(ParseError::InvalidCharacter {
            found,
            span: pos..pos + found.len_utf8(),
        }),
        None => Ok(()),
    }
}

/// Literal being accumulated: an optional leading `-`, digits and at most one `.`.
struct PendingNum {
    text: String,
    span: Span,
    has_digit: bool,
    has_dot: bool,
}

impl PendingNum {
    fn new(start: usize) -> Self {
        Self {
            text: String::new(),
            span: start..start,
            has_digit: false,
            has_dot: false,
        }
    }

    fn push(&mut self, pos: usize, c: char) {
        self.text.push(c);
        self.span.end = pos + c.len_utf8();
        match c {
            '.' => self.has_dot = true,
            '-' => (),
            _ => self.has_digit = true,
        }
    }

    fn finish(self) -> Result<SpannedTok, ParseError> {
        let first = self.span.start..self.span.start + 1;
        if !self.has_digit {
            return Err(ParseError::InvalidCharacter {
                found: self.text.chars().next().unwrap_or('.'),
                span: first,
            });
        }
        let value: f64 = self.text.parse().map_err(|_| ParseError::InvalidCharacter {
            found: self.text.chars().next().unwrap_or('.'),
            span: first,
        })?;
        if !value.is_finite() {
            return Err(ParseError::NumberOutOfRange { span: self.span });
        }
        Ok(Spanned::new(Token::Num(value), self.span))
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<SpannedTok>,
    pending: Option<PendingNum>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: vec![],
            pending: None,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<SpannedTok>, ParseError> {
        validate(self.source)?;
        while let Some((pos, char)) = self.next() {
            match char {
                c if is_blank(c) => (),
                c if c.is_ascii_digit() => self.literal(pos).push(pos, c),
                '.' => {
                    if self.pending.as_ref().map_or(false, |num| num.has_dot) {
                        return Err(ParseError::InvalidCharacter {
                            found: '.',
                            span: pos..pos + 1,
                        });
                    }
                    self.literal(pos).push(pos, '.')
                }
                '-' => {
                    self.flush()?;
                    if self.expects_operand() {
                        self.literal(pos).push(pos, '-')
                    } else {
                        self.tokens.push(Spanned::new(Token::Op('-'), pos..pos + 1))
                    }
                }
                c => {
                    self.flush()?;
                    let elem = match Delimiter::try_from(c) {
                        Ok(delimiter) => Token::Delimiter(delimiter),
                        Err(()) if is_operator(c) => Token::Op(c),
                        Err(()) => {
                            return Err(ParseError::InvalidCharacter {
                                found: c,
                                span: pos..pos + c.len_utf8(),
                            })
                        }
                    };
                    self.tokens.push(Spanned::new(elem, pos..pos + c.len_utf8()));
                }
            }
        }
        self.flush()?;
        trace!("tokens: {:?}", self.tokens);
        Ok(self.tokens)
    }

    /// A `-` opens a negative literal at the start of the stream and right
    /// after an operator or `(`; anywhere else it is subtraction.
    fn expects_operand(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(Spanned { elem, .. }) => elem.is_op() || elem.is_lparen(),
        }
    }

    fn literal(&mut self, start: usize) -> &mut PendingNum {
        self.pending.get_or_insert_with(|| PendingNum::new(start))
    }

    fn flush(&mut self) -> Result<(), ParseError> {
        if let Some(num) = self.pending.take() {
            self.tokens.push(num.finish()?);
        }
        Ok(())
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}
