//! # Error Types
//!
//! Parsing and configuration errors. Data-shape mismatches inside a live tree
//! are not errors in this sense: they are rendered as inline placeholders (see
//! [`DataMismatch`]).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::DataKind;

/// Line/column position in declarative source, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePos {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors produced while building a tree from declarative source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A character that cannot start any token.
    #[error("{pos}: unexpected character '{found}'")]
    UnexpectedChar {
        /// Where.
        pos: SourcePos,
        /// The offending character.
        found: char,
    },

    /// A string literal without its closing quote.
    #[error("{pos}: unterminated string")]
    UnterminatedString {
        /// Where the string starts.
        pos: SourcePos,
    },

    /// A numeric literal that does not parse.
    #[error("{pos}: invalid number '{text}'")]
    InvalidNumber {
        /// Where.
        pos: SourcePos,
        /// The literal text.
        text: String,
    },

    /// Input ended in the middle of a construct.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A token that does not fit the grammar here.
    #[error("{pos}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        /// Where.
        pos: SourcePos,
        /// Token text.
        found: String,
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A node literal is missing a required field.
    #[error("{pos}: {tag} is missing field '{field}'")]
    MissingField {
        /// Where the node starts.
        pos: SourcePos,
        /// Node tag.
        tag: String,
        /// Field name.
        field: &'static str,
    },

    /// A node literal names a field its kind does not have.
    #[error("{pos}: {tag} has no field '{field}'")]
    UnknownField {
        /// Where the node starts.
        pos: SourcePos,
        /// Node tag.
        tag: String,
        /// Field name as written.
        field: String,
    },

    /// A node literal has more positional arguments than fields.
    #[error("{pos}: too many arguments for {tag}")]
    TooManyArguments {
        /// Where the node starts.
        pos: SourcePos,
        /// Node tag.
        tag: String,
    },

    /// A field value of the wrong shape.
    #[error("{pos}: field '{field}' of {tag} expects {expected}")]
    InvalidValue {
        /// Where the value starts.
        pos: SourcePos,
        /// Node tag.
        tag: String,
        /// Field name.
        field: &'static str,
        /// Expected shape.
        expected: &'static str,
    },
}

/// Result type for tree building.
pub type ParseResult<T> = Result<T, ParseError>;

/// A node received a Data Value of a different alternative than it reads.
///
/// The display text is the placeholder drawn in place of the node.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not {expected}")]
pub struct DataMismatch {
    /// What the node reads.
    pub expected: DataKind,
    /// What it got.
    pub found: DataKind,
}

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The TOML is malformed or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A keybinding names a key that does not exist.
    #[error("binding '{binding}' uses unknown key '{key}'")]
    UnknownKey {
        /// Action name.
        binding: String,
        /// Key description as written.
        key: String,
    },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
