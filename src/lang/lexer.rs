//! Lexer for the Logo language.
//!
//! Converts source text into a lazy stream of [`Token`]s. Tokens are produced
//! on demand by [`Lexer::pop`]; one token of lookahead is available through
//! [`Lexer::peek`], backed by a single pushback slot.

use super::error::LogoError;
use super::position::FilePosition;
use super::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    position: FilePosition,
    buffer: Option<Token>,
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            position: FilePosition::default(),
            buffer: None,
            exhausted: false,
        }
    }

    /// Consume and return the next token.
    pub fn pop(&mut self) -> Result<Token, LogoError> {
        match self.buffer.take() {
            Some(token) => Ok(token),
            None => self.next_token(),
        }
    }

    /// Return the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, LogoError> {
        let token = match self.buffer.take() {
            Some(token) => token,
            None => self.next_token()?,
        };
        let token: &Token = self.buffer.insert(token);
        Ok(token)
    }

    /// Consume the next token, failing unless it has the expected kind.
    pub fn match_token(&mut self, expected: TokenKind) -> Result<Token, LogoError> {
        let token = self.pop()?;
        if token.kind != expected {
            return Err(LogoError::syntax(
                format!("expecting '{expected}' got '{token}'"),
                token.position,
            ));
        }
        Ok(token)
    }

    /// Consume the next token only if it has the given kind.
    pub fn maybe_match(&mut self, expected: TokenKind) -> Result<Option<Token>, LogoError> {
        let token = self.pop()?;
        if token.kind == expected {
            Ok(Some(token))
        } else {
            self.push_back(token);
            Ok(None)
        }
    }

    fn push_back(&mut self, token: Token) {
        debug_assert!(self.buffer.is_none(), "pushback slot already occupied");
        self.buffer = Some(token);
    }

    fn next_token(&mut self) -> Result<Token, LogoError> {
        self.skip_whitespace_and_comments();

        let start = self.position;
        let Some(ch) = self.current() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        let token = match ch {
            '[' => self.single_char(TokenKind::LBrace),
            ']' => self.single_char(TokenKind::RBrace),
            ':' => self.lex_symbol(),
            '-' | '0'..='9' => self.lex_number()?,
            c if c.is_alphabetic() => self.lex_word(),
            _ => {
                return Err(LogoError::syntax(
                    format!("unexpected character '{ch}'"),
                    start,
                ));
            }
        };

        tracing::trace!(token = %token, position = %token.position, "lexed");
        Ok(token)
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next_char(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += 1;
        self.position.advance(ch);
        Some(ch)
    }

    fn take_while(&mut self, out: &mut String, cond: impl Fn(char) -> bool) {
        while let Some(ch) = self.current() {
            if !cond(ch) {
                break;
            }
            out.push(ch);
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.current().is_some_and(char::is_whitespace) {
                self.advance();
            }
            if self.current() != Some('#') {
                break;
            }
            // Line comment, newline included.
            while let Some(ch) = self.advance() {
                if ch == '\n' {
                    break;
                }
            }
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, start)
    }

    fn lex_word(&mut self) -> Token {
        let start = self.position;
        let mut word = String::new();
        self.take_while(&mut word, is_identifier_char);

        match TokenKind::keyword(&word.to_lowercase()) {
            Some(kind) => Token::new(kind, start),
            None => Token::with_content(TokenKind::Identifier, start, word),
        }
    }

    fn lex_symbol(&mut self) -> Token {
        let start = self.position;
        let mut name = String::new();
        if let Some(colon) = self.advance() {
            name.push(colon);
        }
        self.take_while(&mut name, is_identifier_char);
        Token::with_content(TokenKind::Symbol, start, name)
    }

    fn lex_number(&mut self) -> Result<Token, LogoError> {
        let start = self.position;
        let mut literal = String::new();

        if self.current() == Some('-') {
            if !self.next_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LogoError::syntax("unexpected '-'", start));
            }
            literal.push('-');
            self.advance();
        }

        self.take_while(&mut literal, |c| c.is_ascii_digit());

        if self.current() == Some('.') {
            literal.push('.');
            self.advance();
            let before = literal.len();
            self.take_while(&mut literal, |c| c.is_ascii_digit());
            if literal.len() == before {
                return Err(LogoError::syntax(
                    format!("expecting a digit after '.' in number '{literal}'"),
                    self.position,
                ));
            }
        }

        Ok(Token::with_content(TokenKind::Number, start, literal))
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Yields every token up to and including the first `Eof`, or the first
/// error, then stops.
impl Iterator for Lexer {
    type Item = Result<Token, LogoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.pop();
        match &result {
            Ok(token) if token.kind == TokenKind::Eof => self.exhausted = true,
            Err(_) => self.exhausted = true,
            Ok(_) => {}
        }
        Some(result)
    }
}
