// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::IntoEnumIterator;

use crate::Comparison;

/// Reserved words. Multi-word keywords are spelled with single spaces and
/// are only ever produced by the scanner's coalescing step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
pub enum Keyword {
    #[strum(serialize = "IDENTIFICATION DIVISION")]
    IdentificationDivision,
    #[strum(serialize = "ENVIRONMENT DIVISION")]
    EnvironmentDivision,
    #[strum(serialize = "DATA DIVISION")]
    DataDivision,
    #[strum(serialize = "PROCEDURE DIVISION")]
    ProcedureDivision,
    #[strum(serialize = "WORKING-STORAGE SECTION")]
    WorkingStorageSection,
    #[strum(serialize = "SECTION")]
    Section,

    #[strum(serialize = "MOVE")]
    Move,
    #[strum(serialize = "ADD")]
    Add,
    #[strum(serialize = "SUBTRACT")]
    Subtract,
    #[strum(serialize = "MULTIPLY")]
    Multiply,
    #[strum(serialize = "DIVIDE")]
    Divide,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "END-IF")]
    EndIf,
    #[strum(serialize = "PERFORM")]
    Perform,
    #[strum(serialize = "DISPLAY")]
    Display,
    #[strum(serialize = "STOP")]
    Stop,
    #[strum(serialize = "RUN")]
    Run,
    #[strum(serialize = "GOBACK")]
    GoBack,
    #[strum(serialize = "ACCEPT")]
    Accept,
    #[strum(serialize = "COMPUTE")]
    Compute,
    #[strum(serialize = "CALL")]
    Call,
    #[strum(serialize = "GOTO")]
    GoTo,

    #[strum(serialize = "PIC")]
    Pic,
    #[strum(serialize = "VALUE")]
    Value,
    #[strum(serialize = "TO")]
    To,
    #[strum(serialize = "FROM")]
    From,
    #[strum(serialize = "USING")]
    Using,
    #[strum(serialize = "BY")]
    By,
    #[strum(serialize = "INTO")]
    Into,
    #[strum(serialize = "AT")]
    At,
    #[strum(serialize = "OF")]
    Of,
    #[strum(serialize = "IS")]
    Is,

    #[strum(serialize = "ZERO")]
    Zero,
    #[strum(serialize = "SPACE")]
    Space,

    #[strum(serialize = "EQUALS")]
    Equals,
    #[strum(serialize = "GREATER THAN")]
    GreaterThan,
    #[strum(serialize = "LESS THAN")]
    LessThan,
    #[strum(serialize = "GREATER THAN OR EQUAL TO")]
    GreaterEqual,
    #[strum(serialize = "LESS THAN OR EQUAL TO")]
    LessEqual,
    #[strum(serialize = "NOT")]
    Not,
}

impl Keyword {
    /// Words after which the scanner tries to merge the preceding tokens
    /// into a multi-word keyword.
    pub const PHRASE_ENDINGS: &'static [&'static str] = &["DIVISION", "SECTION", "THAN", "TO"];

    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Looks up an upper-cased word or space-separated phrase.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(keyword) = Self::iter().find(|x| x.as_ref() == input) {
            return Some(keyword);
        }

        match input {
            "PICTURE" => Some(Self::Pic),
            "ZEROS" | "ZEROES" => Some(Self::Zero),
            "SPACES" => Some(Self::Space),
            "EQUAL TO" => Some(Self::Equals),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_multi_word(&self) -> bool {
        self.as_ref().contains(' ')
    }

    #[must_use]
    pub const fn is_division_marker(&self) -> bool {
        matches!(self,
            Self::IdentificationDivision
                | Self::EnvironmentDivision
                | Self::DataDivision
                | Self::ProcedureDivision
        )
    }

    /// Verbs the statement dispatcher recognizes; error recovery stops in
    /// front of these.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self,
            Self::Move
                | Self::Add
                | Self::Subtract
                | Self::Multiply
                | Self::Divide
                | Self::If
                | Self::Perform
                | Self::Display
                | Self::Stop
                | Self::GoBack
        )
    }

    #[must_use]
    pub const fn as_comparison(&self) -> Option<Comparison> {
        match self {
            Self::Equals => Some(Comparison::Equality),
            Self::Not => Some(Comparison::Inequality),
            Self::GreaterThan => Some(Comparison::GreaterThan),
            Self::LessThan => Some(Comparison::LessThan),
            Self::GreaterEqual => Some(Comparison::GreaterThanOrEqual),
            Self::LessEqual => Some(Comparison::LessThanOrEqual),
            _ => None,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
