// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use codediver::{Section, Statement};

use crate::{RuntimeError, TrackingEvent};

/// Observer of a run. Every hook defaults to doing nothing.
pub trait Debugger {
    fn on_exit(&mut self) {}

    fn on_statement(&mut self, statement: &Statement) { _ = statement }

    /// A line written by `DISPLAY`, without the line terminator.
    fn on_output(&mut self, line: &str) { _ = line }

    fn on_tracking(&mut self, event: &TrackingEvent) { _ = event }

    fn enter_section(&mut self, name: &str, section: &Section) {
        _ = name;
        _ = section;
    }

    fn leave_section(&mut self, name: &str) {
        _ = name;
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        _ = error;
    }
}

impl Debugger for () {
}
