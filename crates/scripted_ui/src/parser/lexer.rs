//! Tokenizer for declarative UI source.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseError, ParseResult, SourcePos};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'src> {
    Ident(&'src str),
    Number(f64),
    Str(String),
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    Comma,
    Equals,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Number(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "{text:?}"),
            Self::OpenParen => f.write_str("("),
            Self::CloseParen => f.write_str(")"),
            Self::OpenBrace => f.write_str("{"),
            Self::CloseBrace => f.write_str("}"),
            Self::Comma => f.write_str(","),
            Self::Equals => f.write_str("="),
        }
    }
}

/// A token with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned<'src> {
    pub token: Token<'src>,
    pub pos: SourcePos,
}

struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    const fn pos(&self) -> SourcePos {
        SourcePos {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |&(i, _)| i)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn eat_while(&mut self, mut accept: impl FnMut(char) -> bool) -> &'src str {
        let start = self.offset();
        while self.peek().is_some_and(&mut accept) {
            self.bump();
        }
        let end = self.offset();
        let source = self.source;
        &source[start..end]
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => {
                    self.eat_while(|c| c != '\n');
                }
                _ => return,
            }
        }
    }

    fn string(&mut self, pos: SourcePos) -> ParseResult<Token<'src>> {
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(text)),
                Some('\\') => match self.bump() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(c) => text.push(c),
                    None => return Err(ParseError::UnterminatedString { pos }),
                },
                Some(c) => text.push(c),
                None => return Err(ParseError::UnterminatedString { pos }),
            }
        }
    }

    fn number(&mut self, pos: SourcePos) -> ParseResult<Token<'src>> {
        let start = self.offset();
        if self.peek() == Some('-') {
            self.bump();
        }
        self.eat_while(|c| c.is_ascii_digit() || c == '.');
        let end = self.offset();
        let source = self.source;
        let text = &source[start..end];
        text.parse().map(Token::Number).map_err(|_| ParseError::InvalidNumber {
            pos,
            text: text.to_owned(),
        })
    }

    fn next_token(&mut self) -> Option<ParseResult<Spanned<'src>>> {
        self.skip_trivia();
        let pos = self.pos();
        let c = self.peek()?;
        let token = match c {
            '(' | ')' | '{' | '}' | ',' | '=' => {
                self.bump();
                Ok(match c {
                    '(' => Token::OpenParen,
                    ')' => Token::CloseParen,
                    '{' => Token::OpenBrace,
                    '}' => Token::CloseBrace,
                    ',' => Token::Comma,
                    _ => Token::Equals,
                })
            }
            '"' => self.string(pos),
            '-' | '0'..='9' | '.' => self.number(pos),
            c if c.is_alphabetic() || c == '_' => {
                Ok(Token::Ident(self.eat_while(|c| c.is_alphanumeric() || c == '_')))
            }
            found => Err(ParseError::UnexpectedChar { pos, found }),
        };
        Some(token.map(|token| Spanned { token, pos }))
    }
}

/// Splits `source` into tokens. `#` comments and whitespace are dropped.
pub(crate) fn tokenize(source: &str) -> ParseResult<Vec<Spanned<'_>>> {
    let mut lexer = Lexer::new(source);
    std::iter::from_fn(|| lexer.next_token()).collect()
}
