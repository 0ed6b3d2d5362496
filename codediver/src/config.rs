// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

use crate::SourceFormat;

/// Default bound on nested `PERFORM`s. Every level costs a few host stack
/// frames, so the bound has to hold on a 2 MiB thread.
pub const DEFAULT_MAX_PERFORM_DEPTH: usize = 200;

/// Contents of a `codediver.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub scanner: ConfigSectionScanner,
    pub runtime: ConfigSectionRuntime,
    pub tracking: ConfigSectionTracking,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionScanner {
    pub format: SourceFormat,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRuntime {
    pub max_perform_depth: usize,
}

impl Default for ConfigSectionRuntime {
    fn default() -> Self {
        Self {
            max_perform_depth: DEFAULT_MAX_PERFORM_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionTracking {
    /// `variable` or `section`. Tracking is off when either field is empty.
    pub kind: String,
    pub name: String,
}
