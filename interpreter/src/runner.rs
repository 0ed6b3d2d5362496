// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{collections::HashMap, io::{stdout, Write}};

use codediver::{
    parse, parse_fragment, scan, ConfigRoot, Diagnostic, Diagnostics, SectionRegistry,
    SourceFormat, Value, DEFAULT_MAX_PERFORM_DEPTH,
};
use log::debug;

use crate::{Debugger, Interpreter, RunOutcome, TrackedComponent};

/// Result of running a program, usable as a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    SyntaxError,
    RuntimeError,
}

impl ExitStatus {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::SyntaxError => 65,
            Self::RuntimeError => 70,
        }
    }

    #[must_use]
    pub fn from_diagnostics(diagnostics: &Diagnostics) -> Self {
        if diagnostics.had_error() {
            Self::SyntaxError
        } else if diagnostics.had_runtime_error() {
            Self::RuntimeError
        } else {
            Self::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub format: SourceFormat,
    pub tracked: Option<TrackedComponent>,
    pub max_perform_depth: usize,

    /// Keep diagnostics out of stderr. They are still part of the report.
    pub silent: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            format: SourceFormat::default(),
            tracked: None,
            max_perform_depth: DEFAULT_MAX_PERFORM_DEPTH,
            silent: false,
        }
    }
}

impl RunOptions {
    pub fn from_config(config: &ConfigRoot) -> Result<Self, strum::ParseError> {
        Ok(Self {
            format: config.scanner.format,
            tracked: TrackedComponent::from_config(&config.tracking)?,
            max_perform_depth: config.runtime.max_perform_depth,
            silent: false,
        })
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub status: ExitStatus,

    /// `None` when the program never ran because of syntax errors.
    pub outcome: Option<RunOutcome>,
    pub diagnostics: Vec<Diagnostic>,
    pub variables: HashMap<String, Value>,
}

/// Runs fixed-format source text, writing output to stdout and diagnostics
/// to stderr.
pub fn run_source(text: &str, tracked: Option<TrackedComponent>) -> ExitStatus {
    let options = RunOptions {
        tracked,
        ..RunOptions::default()
    };

    run_source_with(text, &options, ()).status
}

pub fn run_source_with<D: Debugger>(text: &str, options: &RunOptions, debugger: D) -> RunReport {
    run_source_to(text, options, debugger, Box::new(stdout()))
}

pub fn run_source_to<D: Debugger>(text: &str, options: &RunOptions, debugger: D, output: Box<dyn Write>) -> RunReport {
    let mut diagnostics = if options.silent {
        Diagnostics::silent()
    } else {
        Diagnostics::new()
    };

    let mut registry = SectionRegistry::new();

    let tokens = scan(text, options.format, &mut diagnostics);
    let statements = parse(&tokens, &mut registry, &mut diagnostics);

    if diagnostics.had_error() {
        debug!("Not running program with {} syntax error(s)", diagnostics.errors().count());
        return RunReport {
            status: ExitStatus::SyntaxError,
            outcome: None,
            diagnostics: diagnostics.entries().to_vec(),
            variables: HashMap::new(),
        };
    }

    debug!("Registered sections: {:?}", registry.names());

    let mut interpreter = Interpreter::new(debugger)
        .with_output(output)
        .with_tracking(options.tracked.clone())
        .with_max_perform_depth(options.max_perform_depth);

    let outcome = interpreter.run(&statements, &registry, &mut diagnostics);

    RunReport {
        status: ExitStatus::from_diagnostics(&diagnostics),
        outcome: Some(outcome),
        diagnostics: diagnostics.entries().to_vec(),
        variables: interpreter.into_variables(),
    }
}

/// Interactive session: free-format fragments sharing one variable store
/// and one section registry.
pub struct Session<D>
        where D: Debugger {
    interpreter: Interpreter<D>,
    registry: SectionRegistry,
    diagnostics: Diagnostics,
    stopped: bool,
}

impl<D> Session<D>
        where D: Debugger {
    #[must_use]
    pub fn new(interpreter: Interpreter<D>, silent: bool) -> Self {
        Self {
            interpreter,
            registry: SectionRegistry::new(),
            diagnostics: if silent { Diagnostics::silent() } else { Diagnostics::new() },
            stopped: false,
        }
    }

    /// Runs one fragment. Errors of earlier fragments do not carry over.
    pub fn execute(&mut self, line: &str) -> ExitStatus {
        self.diagnostics.reset();

        let tokens = scan(line, SourceFormat::Free, &mut self.diagnostics);
        let statements = parse_fragment(&tokens, &mut self.registry, &mut self.diagnostics);

        if self.diagnostics.had_error() {
            return ExitStatus::SyntaxError;
        }

        let outcome = self.interpreter.run_fragment(&statements, &self.registry, &mut self.diagnostics);
        if outcome == RunOutcome::Stopped {
            self.stopped = true;
        }

        ExitStatus::from_diagnostics(&self.diagnostics)
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.entries()
    }

    #[must_use]
    pub fn interpreter(&self) -> &Interpreter<D> {
        &self.interpreter
    }
}
