// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod debugger;
mod error;
mod interpreter;
mod runner;
mod tracking;

pub use self::{
    debugger::Debugger,
    error::{
        RuntimeError,
        RuntimeErrorKind,
    },
    interpreter::{
        Interpreter,
        RunOutcome,
    },
    runner::{
        run_source,
        run_source_to,
        run_source_with,
        ExitStatus,
        RunOptions,
        RunReport,
        Session,
    },
    tracking::{
        ComponentKind,
        TrackedComponent,
        TrackingEvent,
    },
};
