//! Error types for the Logo interpreter.

use std::fmt;

use super::position::FilePosition;

/// An error raised while lexing, parsing, or evaluating a program.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoError {
    pub message: String,
    pub position: Option<FilePosition>,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lexer or parser rejected the source.
    Syntax,
    UndefinedProcedure,
    ArityMismatch,
    UnboundSymbol,
    RecursionLimit,
    /// A binding held the wrong sort of value. Never caused by user input.
    Internal,
}

impl LogoError {
    pub fn syntax(message: impl Into<String>, position: FilePosition) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
            kind: ErrorKind::Syntax,
        }
    }

    pub fn runtime(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            kind,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
            kind: ErrorKind::Internal,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    pub fn is_runtime(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UndefinedProcedure
                | ErrorKind::ArityMismatch
                | ErrorKind::UnboundSymbol
                | ErrorKind::RecursionLimit
        )
    }
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at {position}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for LogoError {}
