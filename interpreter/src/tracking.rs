// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, str::FromStr};

use codediver::{ConfigSectionTracking, Value};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ComponentKind {
    Variable,
    Section,
}

/// The component whose activity is reported while a program runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedComponent {
    pub kind: ComponentKind,
    pub name: String,
}

impl TrackedComponent {
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Variable,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn section(name: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Section,
            name: name.into(),
        }
    }

    pub fn parse(kind: &str, name: &str) -> Result<Self, strum::ParseError> {
        Ok(Self {
            kind: ComponentKind::from_str(kind)?,
            name: name.to_string(),
        })
    }

    /// Tracking is off unless both the kind and the name are set.
    pub fn from_config(config: &ConfigSectionTracking) -> Result<Option<Self>, strum::ParseError> {
        if config.kind.is_empty() || config.name.is_empty() {
            return Ok(None);
        }

        Self::parse(&config.kind, &config.name).map(Some)
    }

    #[must_use]
    pub fn tracks_variable(&self, name: &str) -> bool {
        self.kind == ComponentKind::Variable && self.name == name
    }

    /// Section names are compared case-insensitively, like `PERFORM` does.
    #[must_use]
    pub fn tracks_section(&self, name: &str) -> bool {
        self.kind == ComponentKind::Section && self.name.eq_ignore_ascii_case(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrackingEvent {
    Accessed { name: String, value: Value },
    Initialized { name: String, value: Value },
    Updated { name: String, value: Value },
    Performed { name: String },
}

impl Display for TrackingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accessed { name, value } => f.write_fmt(format_args!("Tracked variable '{name}' accessed with value: {value}")),
            Self::Initialized { name, value } => f.write_fmt(format_args!("Tracked variable '{name}' initialized with value: {value}")),
            Self::Updated { name, value } => f.write_fmt(format_args!("Tracked variable '{name}' updated with value: {value}")),
            Self::Performed { name } => f.write_fmt(format_args!("Tracked section '{name}' performed")),
        }
    }
}
