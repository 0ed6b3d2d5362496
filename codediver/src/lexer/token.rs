// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator, TokenKind};

/// Decoded value of a `NUMBER` or `STRING` token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => number.fmt(f),
            Self::String(string) => f.write_fmt(format_args!("\"{string}\"")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: u32,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    #[must_use]
    pub fn with_literal(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    #[must_use]
    pub fn end_of_file(line: u32) -> Self {
        Self::new(TokenKind::EndOfFile, "", line)
    }

    #[must_use]
    pub const fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind.is_keyword(keyword)
    }

    #[must_use]
    pub const fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind.is_punctuator(punctuator)
    }

    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier)
    }

    #[must_use]
    pub const fn is_end_of_file(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }

    /// The `where` fragment of a syntax diagnostic pointing at this token.
    #[must_use]
    pub fn location_hint(&self) -> String {
        if self.is_end_of_file() {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.lexeme)
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => f.write_fmt(format_args!("{} {} {literal}", self.kind, self.lexeme)),
            None => f.write_fmt(format_args!("{} {}", self.kind, self.lexeme)),
        }
    }
}
