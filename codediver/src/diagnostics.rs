// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use log::warn;
use strum::AsRefStr;

use crate::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum Severity {
    Error,
    RuntimeError,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: u32,

    /// Either empty, ` at end` or ` at '<lexeme>'`.
    pub location: String,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Error => f.write_fmt(format_args!("[line {}] Error{}: {}", self.line, self.location, self.message)),
            Severity::RuntimeError => f.write_fmt(format_args!("{}\n[line {}]", self.message, self.line)),
            Severity::Warning => f.write_fmt(format_args!("[line {}] Warning: {}", self.line, self.message)),
        }
    }
}

/// Error sink shared by the scanner, the parser and the interpreter of one
/// run. Errors are written to stderr unless the sink is silent.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
    entries: Vec<Diagnostic>,
    silent: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records diagnostics without printing them.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    pub fn report(&mut self, line: u32, location: &str, message: &str) {
        self.had_error = true;
        self.push(Diagnostic {
            severity: Severity::Error,
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }

    pub fn error_at(&mut self, token: &Token, message: &str) {
        self.report(token.line, &token.location_hint(), message);
    }

    pub fn runtime_error(&mut self, message: &str, line: u32) {
        self.had_runtime_error = true;
        self.push(Diagnostic {
            severity: Severity::RuntimeError,
            line,
            location: String::new(),
            message: message.to_string(),
        });
    }

    pub fn warning(&mut self, line: u32, message: &str) {
        warn!("[line {line}] {message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            line,
            location: String::new(),
            message: message.to_string(),
        });
    }

    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
        self.entries.clear();
    }

    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    #[must_use]
    pub const fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|entry| entry.severity != Severity::Warning)
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        if !self.silent {
            eprintln!("{diagnostic}");
        }

        self.entries.push(diagnostic);
    }
}
