// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::Comparison;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    Comma,
    Period,
    HyphenMinus,
    PlusSign,
    Asterisk,
    Solidus,
    EqualsSign,
    LeftParenthesis,
    RightParenthesis,
    Colon,
    Assignment,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    NotEquals,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Comma => ",",
            Self::Period => ".",
            Self::HyphenMinus => "-",
            Self::PlusSign => "+",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::EqualsSign => "=",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::Colon => ":",
            Self::Assignment => ":=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::NotEquals => "<>",
        }
    }

    /// `:=` compares for equality, like `EQUALS`.
    #[must_use]
    pub const fn as_comparison(&self) -> Option<Comparison> {
        match self {
            Self::EqualsSign | Self::Assignment => Some(Comparison::Equality),
            Self::NotEquals => Some(Comparison::Inequality),
            Self::LessThan => Some(Comparison::LessThan),
            Self::LessThanOrEqual => Some(Comparison::LessThanOrEqual),
            Self::GreaterThan => Some(Comparison::GreaterThan),
            Self::GreaterThanOrEqual => Some(Comparison::GreaterThanOrEqual),
            _ => None,
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
