//! Token types for the Logo lexer.

use std::fmt;

use super::position::FilePosition;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Position of the token's first character, so diagnostics point at the
    /// token itself rather than just past it.
    pub position: FilePosition,
    /// Literal text for `Number`, `Symbol` and `Identifier`.
    pub content: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, position: FilePosition) -> Self {
        Self {
            kind,
            position,
            content: None,
        }
    }

    pub fn with_content(kind: TokenKind, position: FilePosition, content: String) -> Self {
        Self {
            kind,
            position,
            content: Some(content),
        }
    }

    /// The literal text, or an empty string for tokens without content.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(content) => write!(f, "{}({content})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Repeat,
    Rotate,
    Forward,
    Backward,
    PenUp,
    PenDown,
    To,
    End,

    // Delimiters
    LBrace,
    RBrace,

    // Literals
    Number,
    Symbol,
    Identifier,

    Eof,
}

impl TokenKind {
    /// Keyword lookup on an already lowercased word.
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "repeat" => Some(Self::Repeat),
            "rotate" => Some(Self::Rotate),
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            "penup" => Some(Self::PenUp),
            "pendown" => Some(Self::PenDown),
            "to" => Some(Self::To),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Repeat => "REPEAT",
            Self::Rotate => "ROTATE",
            Self::Forward => "FORWARD",
            Self::Backward => "BACKWARD",
            Self::PenUp => "PENUP",
            Self::PenDown => "PENDOWN",
            Self::To => "TO",
            Self::End => "END",
            Self::LBrace => "[",
            Self::RBrace => "]",
            Self::Number => "NUMBER",
            Self::Symbol => "SYMBOL",
            Self::Identifier => "IDENTIFIER",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
