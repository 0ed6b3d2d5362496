// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{
    io::{stdin, stdout, BufRead, Write},
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use clap::Subcommand;
use codediver::{parse, scan, AstPrinter, ConfigRoot, Diagnostics, SectionRegistry};
use codediver_interpreter::{
    run_source_with, ExitStatus, Interpreter, RunOptions, RunOutcome, Session, TrackedComponent,
};
use colored::Colorize;
use log::{debug, LevelFilter};
use logger::Logger;

/// Exit code for unreadable input or configuration.
const EXIT_IO_ERROR: i32 = 74;

const CONFIG_FILE_NAME: &str = "codediver.toml";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file. Defaults to `codediver.toml` next to the source.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a program.
    Run {
        file: PathBuf,

        /// Reports every access of a variable or every PERFORM of a section.
        #[arg(long, num_args = 2, value_names = ["KIND", "NAME"])]
        track: Option<Vec<String>>,
    },

    /// Prints the tokens of a program.
    Tokens {
        file: PathBuf,
    },

    /// Prints the parsed tree of a program.
    Ast {
        file: PathBuf,
    },

    /// Reads free-format sentences from stdin and runs them one line at a time.
    Repl,
}

impl Commands {
    fn file(&self) -> Option<&Path> {
        match self {
            Self::Run { file, .. } | Self::Tokens { file } | Self::Ast { file } => Some(file.as_path()),
            Self::Repl => None,
        }
    }
}

fn main() {
    let args = Args::parse_args();

    match execute(args) {
        Ok(status) => exit(status.code()),
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            exit(EXIT_IO_ERROR);
        }
    }
}

fn execute(args: Args) -> anyhow::Result<ExitStatus> {
    let config = load_config(args.config.as_deref(), args.command.file())?;

    let level = if args.verbose || config.log.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level)?;

    let mut options = RunOptions::from_config(&config)
        .context("invalid [tracking] kind in configuration, expected `variable` or `section`")?;

    match args.command {
        Commands::Run { file, track } => {
            if let Some(track) = track {
                let [kind, name] = track.as_slice() else {
                    anyhow::bail!("--track takes a kind and a name");
                };

                options.tracked = Some(TrackedComponent::parse(kind, name)
                    .with_context(|| format!("unknown component kind `{kind}`, expected `variable` or `section`"))?);
            }

            let source = read_source(&file)?;
            let report = run_source_with(&source, &options, ());

            print_summary(&file, report.status, report.diagnostics.len(), report.outcome);
            Ok(report.status)
        }

        Commands::Tokens { file } => {
            let source = read_source(&file)?;
            let mut diagnostics = Diagnostics::new();

            for token in scan(&source, options.format, &mut diagnostics) {
                println!("{:>4} {token}", token.line);
            }

            Ok(ExitStatus::from_diagnostics(&diagnostics))
        }

        Commands::Ast { file } => {
            let source = read_source(&file)?;
            let mut diagnostics = Diagnostics::new();
            let mut registry = SectionRegistry::new();

            let tokens = scan(&source, options.format, &mut diagnostics);
            let statements = parse(&tokens, &mut registry, &mut diagnostics);
            print!("{}", AstPrinter::print(&statements));

            Ok(ExitStatus::from_diagnostics(&diagnostics))
        }

        Commands::Repl => repl(&options),
    }
}

fn repl(options: &RunOptions) -> anyhow::Result<ExitStatus> {
    let interpreter = Interpreter::new(())
        .with_tracking(options.tracked.clone())
        .with_max_perform_depth(options.max_perform_depth);

    let mut session = Session::new(interpreter, false);
    let mut status = ExitStatus::Ok;

    let mut lines = stdin().lock().lines();
    loop {
        print!("{} ", ">".bright_blue().bold());
        stdout().flush().context("could not write prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        status = session.execute(&line);
        if session.is_stopped() {
            debug!("Session stopped");
            break;
        }
    }

    Ok(status)
}

fn load_config(explicit: Option<&Path>, source: Option<&Path>) -> anyhow::Result<ConfigRoot> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let directory = source
                .and_then(Path::parent)
                .unwrap_or_else(|| Path::new("."));

            let path = directory.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(ConfigRoot::default());
            }
            path
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read configuration {}", path.display()))?;

    parse_config(&text)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn parse_config(text: &str) -> anyhow::Result<ConfigRoot> {
    Ok(toml::from_str(text)?)
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))
}

fn print_summary(file: &Path, status: ExitStatus, diagnostics: usize, outcome: Option<RunOutcome>) {
    match status {
        ExitStatus::Ok => {
            if outcome == Some(RunOutcome::Stopped) {
                debug!("{} stopped", file.display());
            }
        }

        ExitStatus::SyntaxError => {
            eprintln!("{}: {} not run, {diagnostics} {} found",
                "syntax".red().bold(),
                file.display(),
                if diagnostics == 1 { "problem" } else { "problems" },
            );
        }

        ExitStatus::RuntimeError => {
            eprintln!("{}: {} finished with {diagnostics} runtime {}",
                "runtime".yellow().bold(),
                file.display(),
                if diagnostics == 1 { "error" } else { "errors" },
            );
        }
    }
}
