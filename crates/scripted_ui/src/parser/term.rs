//! Untyped syntax tree of declarative source.
//!
//! ```text
//! term := IDENT [ '(' args ')' ] [ '{' term* '}' ] | NUMBER | STRING
//!       | '(' args ')' | '{' term* '}'
//! args := [ arg { ',' arg } [','] ]
//! arg  := IDENT '=' term | term
//! ```
//!
//! Terms know nothing about node kinds; the registry gives them meaning.

use super::lexer::{Spanned, Token};
use crate::error::{ParseError, ParseResult, SourcePos};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TermKind {
    /// A bare identifier: a tag without arguments, or an enum value.
    Ident(String),
    Number(f64),
    Str(String),
    /// Parenthesized arguments without a tag.
    Tuple(Vec<Arg>),
    /// Brace-delimited terms without a tag.
    Block(Vec<Term>),
    /// A tag followed by arguments, a block, or both.
    Tagged {
        tag: String,
        args: Vec<Arg>,
        block: Option<Vec<Term>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Term {
    pub kind: TermKind,
    pub pos: SourcePos,
}

/// One argument, optionally named.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arg {
    pub name: Option<String>,
    pub pos: SourcePos,
    pub value: Term,
}

impl Term {
    /// Text of an identifier or string term.
    pub(crate) fn as_name(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Ident(name) | TermKind::Str(name) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TermKind::Ident(ident) if ident == name)
    }
}

pub(crate) struct TermParser<'src> {
    tokens: Vec<Spanned<'src>>,
    cursor: usize,
}

impl<'src> TermParser<'src> {
    pub(crate) fn new(tokens: Vec<Spanned<'src>>) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.cursor).map(|spanned| &spanned.token)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token<'src>> {
        self.tokens.get(self.cursor + ahead).map(|spanned| &spanned.token)
    }

    fn next(&mut self, expected: &'static str) -> ParseResult<Spanned<'src>> {
        let spanned = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd { expected })?;
        self.cursor += 1;
        Ok(spanned)
    }

    fn expect(&mut self, token: &Token<'src>, expected: &'static str) -> ParseResult<()> {
        let spanned = self.next(expected)?;
        if &spanned.token == token {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                pos: spanned.pos,
                found: spanned.token.to_string(),
                expected,
            })
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Parses every remaining term.
    pub(crate) fn terms(&mut self) -> ParseResult<Vec<Term>> {
        let mut terms = Vec::new();
        while !self.at_end() {
            terms.push(self.term()?);
        }
        Ok(terms)
    }

    pub(crate) fn term(&mut self) -> ParseResult<Term> {
        let Spanned { token, pos } = self.next("a term")?;
        let kind = match token {
            Token::Number(value) => TermKind::Number(value),
            Token::Str(text) => TermKind::Str(text),
            Token::OpenParen => TermKind::Tuple(self.args_tail()?),
            Token::OpenBrace => TermKind::Block(self.block_tail()?),
            Token::Ident(name) => {
                let args = if self.peek() == Some(&Token::OpenParen) {
                    self.cursor += 1;
                    Some(self.args_tail()?)
                } else {
                    None
                };
                let block = if self.peek() == Some(&Token::OpenBrace) {
                    self.cursor += 1;
                    Some(self.block_tail()?)
                } else {
                    None
                };
                if args.is_none() && block.is_none() {
                    TermKind::Ident(name.to_owned())
                } else {
                    TermKind::Tagged {
                        tag: name.to_owned(),
                        args: args.unwrap_or_default(),
                        block,
                    }
                }
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    pos,
                    found: other.to_string(),
                    expected: "a term",
                })
            }
        };
        Ok(Term { kind, pos })
    }

    /// Arguments after an opening parenthesis, up to and including the closing one.
    fn args_tail(&mut self) -> ParseResult<Vec<Arg>> {
        let mut args = Vec::new();
        loop {
            if self.peek() == Some(&Token::CloseParen) {
                self.cursor += 1;
                return Ok(args);
            }
            args.push(self.arg()?);
            match self.peek() {
                Some(Token::Comma) => self.cursor += 1,
                _ => {
                    self.expect(&Token::CloseParen, "',' or ')'")?;
                    return Ok(args);
                }
            }
        }
    }

    fn arg(&mut self) -> ParseResult<Arg> {
        if let (Some(Token::Ident(name)), Some(Token::Equals)) = (self.peek(), self.peek_at(1)) {
            let name = (*name).to_owned();
            let pos = self.tokens[self.cursor].pos;
            self.cursor += 2;
            let value = self.term()?;
            return Ok(Arg {
                name: Some(name),
                pos,
                value,
            });
        }
        let value = self.term()?;
        Ok(Arg {
            name: None,
            pos: value.pos,
            value,
        })
    }

    /// Terms after an opening brace, up to and including the closing one.
    fn block_tail(&mut self) -> ParseResult<Vec<Term>> {
        let mut terms = Vec::new();
        loop {
            match self.peek() {
                Some(Token::CloseBrace) => {
                    self.cursor += 1;
                    return Ok(terms);
                }
                Some(_) => terms.push(self.term()?),
                None => return Err(ParseError::UnexpectedEnd { expected: "'}'" }),
            }
        }
    }
}
