// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use codediver::{Severity, SourceFormat, Value};
use codediver_interpreter::{ExitStatus, RunOutcome, TrackedComponent};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret, interpret_and_return_stdout, interpret_with_tracking};

#[rstest]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            MOVE 5 TO X.
            DISPLAY X.
            STOP RUN.
    "#,
    &[
        "5",
    ],
)]
#[case(
    r#"
        DATA DIVISION.
        WORKING-STORAGE SECTION.
        01 X PIC 99 VALUE 10.
        PROCEDURE DIVISION.
        MAIN SECTION.
            ADD 3 TO X.
            DISPLAY X.
            SUBTRACT 4 FROM X.
            DISPLAY X.
            MULTIPLY 2 BY X.
            DISPLAY X.
            DIVIDE 3 INTO X.
            DISPLAY X.
            STOP RUN.
    "#,
    &[
        "13",
        "9",
        "18",
        "6",
    ],
)]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM CALC.
            STOP RUN.
        CALC SECTION.
            DISPLAY "hi".
    "#,
    &[
        "hi",
    ],
)]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM calc.
            STOP RUN.
        CALC SECTION.
            DISPLAY "found".
    "#,
    &[
        "found",
    ],
)]
#[case(
    r#"
        DATA DIVISION.
        WORKING-STORAGE SECTION.
        01 A PIC 9 VALUE 1.
        01 B PIC 9 VALUE 2.
        PROCEDURE DIVISION.
        MAIN SECTION.
            IF A < B
                DISPLAY "less"
            END-IF.
            IF A > B
                DISPLAY "greater"
            END-IF.
            IF A NOT = B
                DISPLAY "different"
            END-IF.
            IF B IS GREATER THAN A
                DISPLAY "words"
            END-IF.
            STOP RUN.
    "#,
    &[
        "less",
        "different",
        "words",
    ],
)]
#[case(
    r#"
        DATA DIVISION.
        WORKING-STORAGE SECTION.
        01 GREETING PIC X(10) VALUE "Hello".
        01 COUNTER PIC 99.
        PROCEDURE DIVISION.
        MAIN SECTION.
            DISPLAY GREETING ", " COUNTER.
            STOP RUN.
    "#,
    &[
        "Hello, 0",
    ],
)]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            MOVE 0 TO N.
            PERFORM STEP.
            PERFORM STEP.
            DISPLAY N.
            STOP RUN.
        STEP SECTION.
            ADD 1 TO N.
            IF N = 2
                DISPLAY "second"
            END-IF.
    "#,
    &[
        "second",
        "2",
    ],
)]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            MOVE 7 TO N.
            PERFORM SHOW.
            STOP RUN.
        SHOW-ALL SECTION.
        SHOW.
            DISPLAY "paragraph " N.
    "#,
    &[
        "paragraph 7",
    ],
)]
#[case(
    r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            MOVE 1 TO X.
            DIVIDE 4 INTO X.
            DISPLAY X.
            MULTIPLY -1 BY X.
            DISPLAY X.
            STOP RUN.
    "#,
    &[
        "0.25",
        "-0.25",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn round_trip_exits_ok() {
    let captured = interpret("PROCEDURE DIVISION.\nMAIN SECTION.\nMOVE 5 TO X. DISPLAY X. STOP RUN.\n", SourceFormat::Free, None);

    assert_eq!(captured.stdout, vec!["5"]);
    assert_eq!(captured.report.status, ExitStatus::Ok);
    assert_eq!(captured.report.outcome, Some(RunOutcome::Stopped));
}

#[test]
fn fixed_format_program() {
    let source = concat!(
        "000100 IDENTIFICATION DIVISION.\n",
        "000200 PROGRAM-ID. HELLO.\n",
        "000300* This line is a comment.\n",
        "000400 DATA DIVISION.\n",
        "000500 WORKING-STORAGE\n",
        "000600     SECTION.\n",
        "000700 01 WS-TOTAL PIC 9(4) VALUE 40.\n",
        "000800 PROCEDURE DIVISION.\n",
        "000900 MAIN-LOGIC SECTION.\n",
        "001000     ADD 2 TO WS-TOTAL.\n",
        "001100     DISPLAY \"TOTAL: \" WS-TOTAL.\n",
        "001200     STOP RUN.\n",
    );

    let captured = interpret(source, SourceFormat::Fixed, None);

    assert_eq!(captured.stdout, vec!["TOTAL: 42"]);
    assert_eq!(captured.report.status, ExitStatus::Ok);
    assert_eq!(captured.report.variables.get("WS-TOTAL"), Some(&Value::Number(42.0)));
}

#[test]
fn identification_paragraphs_with_dates_are_skipped() {
    let captured = interpret(r#"
        IDENTIFICATION DIVISION.
        PROGRAM-ID. HELLO.
        DATE-WRITTEN. 2024-01-15.
        PROCEDURE DIVISION.
        MAIN SECTION.
            DISPLAY "hi".
            STOP RUN.
    "#, SourceFormat::Free, None);

    assert_eq!(captured.stdout, vec!["hi"]);
    assert_eq!(captured.report.status, ExitStatus::Ok);
    assert!(captured.report.diagnostics.is_empty());
}

#[test]
fn later_section_with_the_same_name_wins_with_a_warning() {
    let captured = interpret(r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM GREET.
            STOP RUN.
        GREET SECTION.
            DISPLAY "first".
        GREET SECTION.
            DISPLAY "second".
    "#, SourceFormat::Free, None);

    assert_eq!(captured.stdout, vec!["second"]);
    assert_eq!(captured.report.status, ExitStatus::Ok);
    assert_eq!(captured.report.diagnostics.len(), 1);
    assert_eq!(captured.report.diagnostics[0].severity, Severity::Warning);
    assert_eq!(captured.report.diagnostics[0].line, 8);
}

#[test]
fn tracking_reports_accesses_without_changing_the_run() {
    let source = r#"
        DATA DIVISION.
        WORKING-STORAGE SECTION.
        01 X PIC 99 VALUE 10.
        PROCEDURE DIVISION.
        MAIN SECTION.
            ADD 5 TO X.
            DISPLAY X.
            STOP RUN.
    "#;

    let plain = interpret(source, SourceFormat::Free, None);
    let tracked = interpret_with_tracking(source, TrackedComponent::variable("X"));

    assert_eq!(plain.stdout, vec!["15"]);
    assert_eq!(tracked.stdout, vec![
        "Tracked variable 'X' initialized with value: 10",
        "Tracked variable 'X' updated with value: 15",
        "Tracked variable 'X' accessed with value: 15",
        "15",
    ]);
    assert_eq!(plain.report.variables, tracked.report.variables);
    assert_eq!(plain.report.status, tracked.report.status);
}

#[test]
fn tracking_other_names_is_silent() {
    let source = "PROCEDURE DIVISION.\nMAIN SECTION.\nMOVE 1 TO x. MOVE 2 TO Y. DISPLAY Y.\n";
    let tracked = interpret_with_tracking(source, TrackedComponent::variable("X"));

    assert_eq!(tracked.stdout, vec!["2"]);
}

#[test]
fn tracking_sections() {
    let source = r#"
        PROCEDURE DIVISION.
        MAIN SECTION.
            PERFORM CALC.
            STOP RUN.
        CALC SECTION.
            DISPLAY "hi".
    "#;

    let tracked = interpret_with_tracking(source, TrackedComponent::section("Calc"));
    assert_eq!(tracked.stdout, vec![
        "Tracked section 'CALC' performed",
        "hi",
    ]);
}
