// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod config;
mod diagnostics;
mod lexer;
mod registry;
mod value;

pub use self::{
    ast::*,
    config::{
        ConfigRoot,
        ConfigSectionLog,
        ConfigSectionRuntime,
        ConfigSectionScanner,
        ConfigSectionTracking,
        DEFAULT_MAX_PERFORM_DEPTH,
    },
    diagnostics::{
        Diagnostic,
        Diagnostics,
        Severity,
    },
    lexer::*,
    registry::SectionRegistry,
    value::Value,
};
