// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::Comparison;

use super::{Keyword, Punctuator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Punctuator(Punctuator),

    Identifier,
    String,
    Number,

    EndOfFile,
}

impl TokenKind {
    #[must_use]
    pub const fn is_keyword(&self, keyword: Keyword) -> bool {
        match self {
            Self::Keyword(this) => *this as u8 == keyword as u8,
            _ => false,
        }
    }

    #[must_use]
    pub const fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        match self {
            Self::Punctuator(this) => *this as u8 == punctuator as u8,
            _ => false,
        }
    }

    /// Relational operator spelled either as punctuation or as a keyword.
    #[must_use]
    pub const fn as_comparison(&self) -> Option<Comparison> {
        match self {
            Self::Keyword(keyword) => keyword.as_comparison(),
            Self::Punctuator(punctuator) => punctuator.as_comparison(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Identifier | Self::Keyword(..))
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::Identifier => f.write_str("IDENTIFIER"),
            Self::String => f.write_str("STRING"),
            Self::Number => f.write_str("NUMBER"),
            Self::EndOfFile => f.write_str("EOF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TokenKind::Keyword(Keyword::WorkingStorageSection), "WORKING-STORAGE SECTION")]
    #[case(TokenKind::Punctuator(Punctuator::NotEquals), "<>")]
    #[case(TokenKind::Identifier, "IDENTIFIER")]
    #[case(TokenKind::EndOfFile, "EOF")]
    fn display(#[case] kind: TokenKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }
}
