// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::sink, sync::{Arc, Mutex}};

use codediver::{scan, Diagnostics, SourceFormat, Token};
use codediver_interpreter::{run_source_to, Debugger, RunOptions, RunReport, TrackedComponent, TrackingEvent};

/// Everything a program wrote to stdout, with the report of the run.
pub struct Captured {
    pub stdout: Vec<String>,
    pub report: RunReport,
}

pub fn interpret(input: &str, format: SourceFormat, tracked: Option<TrackedComponent>) -> Captured {
    interpret_with(input, &RunOptions {
        format,
        tracked,
        silent: true,
        ..RunOptions::default()
    })
}

pub fn interpret_with(input: &str, options: &RunOptions) -> Captured {
    let buffer = Arc::new(Mutex::new(Vec::new()));

    let report = run_source_to(input, options, TestDebugger {
        buffer: Arc::clone(&buffer),
    }, Box::new(sink()));

    let stdout = Arc::try_unwrap(buffer).unwrap().into_inner().unwrap();
    Captured { stdout, report }
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    interpret(input, SourceFormat::Free, None).stdout
}

pub fn interpret_with_tracking(input: &str, tracked: TrackedComponent) -> Captured {
    interpret(input, SourceFormat::Free, Some(tracked))
}

pub fn scan_tokens(input: &str, format: SourceFormat) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::silent();
    let tokens = scan(input, format, &mut diagnostics);
    (tokens, diagnostics)
}

struct TestDebugger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl Debugger for TestDebugger {
    fn on_output(&mut self, line: &str) {
        self.buffer.lock().unwrap().push(line.to_string());
    }

    fn on_tracking(&mut self, event: &TrackingEvent) {
        self.buffer.lock().unwrap().push(event.to_string());
    }
}
