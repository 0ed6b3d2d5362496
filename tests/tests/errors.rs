// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use codediver::{Keyword, Severity, SourceFormat, TokenKind, DEFAULT_MAX_PERFORM_DEPTH};
use codediver_interpreter::{ExitStatus, RunOptions, RunOutcome};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret, interpret_with, scan_tokens};

fn init_logger() {
    _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn comment_lines_yield_no_tokens() {
    init_logger();

    let (tokens, diagnostics) = scan_tokens("000100* MOVE 1 TO X.\n000200/ PAGE\n", SourceFormat::Fixed);

    assert!(!diagnostics.had_error());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFile);
}

#[test]
fn working_storage_section_is_one_token() {
    let (tokens, _) = scan_tokens("000100 DATA DIVISION.\n000200 WORKING-STORAGE SECTION.\n", SourceFormat::Fixed);

    assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::WorkingStorageSection));
    assert_eq!(tokens[2].lexeme, "WORKING-STORAGE SECTION");
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn one_malformed_sentence_yields_one_diagnostic() {
    init_logger();

    let captured = interpret(r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            MOVE 1 TO X.
            MOVE TO.
            DISPLAY X.
    "#, SourceFormat::Free, None);

    assert_eq!(captured.report.status, ExitStatus::SyntaxError);
    assert_eq!(captured.report.outcome, None);
    assert_eq!(captured.report.diagnostics.len(), 1);
    assert_eq!(captured.report.diagnostics[0].line, 5);
    assert!(captured.stdout.is_empty());
}

#[test]
fn lexical_errors_are_syntax_errors() {
    let captured = interpret("PROCEDURE DIVISION.\nMAIN SECTION.\nDISPLAY \"open.\n", SourceFormat::Free, None);

    assert_eq!(captured.report.status, ExitStatus::SyntaxError);
    assert_eq!(captured.report.diagnostics[0].to_string(), "[line 3] Error: Unterminated string.");
}

#[test]
fn missing_section_is_a_runtime_error() {
    let captured = interpret(r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM MISSING.
            DISPLAY "not reached".
    "#, SourceFormat::Free, None);

    assert!(captured.stdout.is_empty());
    assert_eq!(captured.report.status, ExitStatus::RuntimeError);
    assert_eq!(captured.report.status.code(), 70);

    let diagnostic = &captured.report.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::RuntimeError);
    assert_eq!(diagnostic.to_string(), "Section 'MISSING' not found.\n[line 4]");
}

#[test]
fn runtime_error_only_aborts_the_innermost_body() {
    let captured = interpret(r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM BROKEN.
            DISPLAY "still running".
            STOP RUN.
        BROKEN SECTION.
            DISPLAY "before".
            ADD 1 TO NOWHERE.
            DISPLAY "after".
    "#, SourceFormat::Free, None);

    assert_eq!(captured.stdout, vec!["before", "still running"]);
    assert_eq!(captured.report.status, ExitStatus::RuntimeError);
    assert_eq!(captured.report.outcome, Some(RunOutcome::Stopped));
    assert_eq!(captured.report.diagnostics.len(), 1);
    assert_eq!(captured.report.diagnostics[0].message, "Undefined variable 'NOWHERE'.");
}

#[rstest]
#[case("ADD \"one\" TO X.", "Operands of ADD must be numbers, got string and number.")]
#[case("DIVIDE 0 INTO X.", "Division by zero.")]
#[case("IF X > \"text\" DISPLAY X END-IF.", "Operands of '>' must be two numbers or two strings, got number and string.")]
#[case("MOVE Y TO X.", "Undefined variable 'Y'.")]
fn runtime_error_messages(#[case] sentence: &str, #[case] message: &str) {
    let source = format!("PROCEDURE DIVISION.\nMAIN SECTION.\nMOVE 1 TO X.\nPERFORM BODY.\nSTOP RUN.\nBODY SECTION.\n{sentence}\n");
    let captured = interpret(&source, SourceFormat::Free, None);

    assert_eq!(captured.report.status, ExitStatus::RuntimeError);
    assert_eq!(captured.report.diagnostics[0].message, message);
}

#[test]
fn runaway_perform_is_bounded() {
    let options = RunOptions {
        format: SourceFormat::Free,
        max_perform_depth: 64,
        silent: true,
        ..RunOptions::default()
    };

    let captured = interpret_with(r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM AGAIN.
            DISPLAY "done".
            STOP RUN.
        AGAIN SECTION.
            PERFORM AGAIN.
    "#, &options);

    assert_eq!(captured.stdout, vec!["done"]);
    assert_eq!(captured.report.diagnostics.len(), 1);
    assert_eq!(
        captured.report.diagnostics[0].message,
        "Maximum PERFORM depth of 64 exceeded while performing 'AGAIN'.",
    );
}

#[rstest]
#[case(r#"
    PROCEDURE DIVISION.
    MAIN SECTION.
        PERFORM AGAIN.
        DISPLAY "done".
        STOP RUN.
    AGAIN SECTION.
        PERFORM AGAIN.
"#)]
#[case(r#"
    PROCEDURE DIVISION.
    MAIN SECTION.
        MOVE 1 TO N.
        PERFORM AGAIN.
        DISPLAY "done".
        STOP RUN.
    LOOPS SECTION.
    AGAIN.
        IF N = 1
            PERFORM AGAIN
        END-IF.
"#)]
fn default_perform_depth_holds_on_a_test_thread(#[case] source: &str) {
    let captured = interpret(source, SourceFormat::Free, None);

    assert_eq!(captured.stdout, vec!["done"]);
    assert_eq!(captured.report.status, ExitStatus::RuntimeError);
    assert_eq!(captured.report.diagnostics.len(), 1);
    assert_eq!(
        captured.report.diagnostics[0].message,
        format!("Maximum PERFORM depth of {DEFAULT_MAX_PERFORM_DEPTH} exceeded while performing 'AGAIN'."),
    );
}
