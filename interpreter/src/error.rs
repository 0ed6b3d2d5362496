// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use codediver::{ArithmeticVerb, Comparison};
use strum::AsRefStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: u32,
}

impl RuntimeError {
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Renders like the diagnostic written to stderr: the message, then the
/// line on its own.
impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}\n[line {}]", self.kind, self.line))
    }
}

impl Error for RuntimeError {}

#[derive(Debug, Clone, PartialEq, Error, AsRefStr)]
pub enum RuntimeErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    #[error("Section '{name}' not found.")]
    SectionNotFound { name: String },

    #[error("Operands of {verb} must be numbers, got {value_type} and {target_type}.")]
    ArithmeticOperands { verb: ArithmeticVerb, value_type: String, target_type: String },

    #[error("Operands of '{operator}' must be two numbers or two strings, got {left_type} and {right_type}.")]
    ComparisonOperands { operator: Comparison, left_type: String, right_type: String },

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Maximum PERFORM depth of {depth} exceeded while performing '{name}'.")]
    PerformDepthExceeded { depth: usize, name: String },

    #[error("Could not write output: {message}")]
    Output { message: String },
}

impl RuntimeErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
