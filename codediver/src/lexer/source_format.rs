// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

/// Layout of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// Columns 1-6 are the sequence area, column 7 the indicator and code
    /// starts at column 8.
    #[default]
    Fixed,

    /// Every column is code.
    Free,
}

/// Meaning of column 7 in fixed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Normal,
    Comment,
    Continuation,
    Debug,
}

impl Indicator {
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            '*' | '/' => Self::Comment,
            '-' => Self::Continuation,
            'D' | 'd' => Self::Debug,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn carries_code(&self) -> bool {
        matches!(self, Self::Normal | Self::Continuation)
    }
}

const INDICATOR_COLUMN: usize = 6;

impl SourceFormat {
    /// Returns the part of the physical line that should be tokenized, or
    /// `None` when the line carries no code.
    #[must_use]
    pub fn code_area<'line>(&self, line: &'line str) -> Option<&'line str> {
        match self {
            Self::Free => Some(line),
            Self::Fixed => {
                let mut chars = line.char_indices().skip(INDICATOR_COLUMN);
                let (_, indicator) = chars.next()?;

                if !Indicator::from_char(indicator).carries_code() {
                    return None;
                }

                let (offset, _) = chars.next()?;
                Some(&line[offset..])
            }
        }
    }
}
