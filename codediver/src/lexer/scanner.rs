// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use log::trace;
use strum::AsRefStr;
use thiserror::Error;

use crate::Diagnostics;

use super::{Keyword, Literal, Punctuator, SourceFormat, Token, TokenKind};

/// Upper bound on the number of already emitted tokens a multi-word keyword
/// can span, excluding its final word.
const MAX_PHRASE_PREFIX: usize = 4;

pub struct Scanner<'source> {
    source: &'source str,
    format: SourceFormat,

    tokens: Vec<Token>,
    errors: Vec<ScanError>,

    chars: Vec<char>,
    start: usize,
    current: usize,
    line: u32,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            format: SourceFormat::Fixed,
            tokens: Vec::new(),
            errors: Vec::new(),
            chars: Vec::new(),
            start: 0,
            current: 0,
            line: 0,
        }
    }

    #[must_use]
    pub fn with_format(self, format: SourceFormat) -> Self {
        Self {
            format,
            ..self
        }
    }

    /// Scans the whole source. The token list always ends with an
    /// end-of-file token, even when errors were found.
    pub fn collect_all(mut self) -> (Vec<Token>, Vec<ScanError>) {
        let source = self.source;

        for (index, physical_line) in source.lines().enumerate() {
            self.line = index as u32 + 1;

            let Some(code) = self.format.code_area(physical_line) else {
                trace!("Line {} carries no code", self.line);
                continue;
            };

            self.scan_line(code);
        }

        self.tokens.push(Token::end_of_file(self.line.max(1)));
        (self.tokens, self.errors)
    }

    fn scan_line(&mut self, code: &str) {
        self.chars = code.chars().collect();
        self.current = 0;

        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            ',' => self.add_punctuator(Punctuator::Comma),
            '.' => self.add_punctuator(Punctuator::Period),
            '-' => self.add_punctuator(Punctuator::HyphenMinus),
            '+' => self.add_punctuator(Punctuator::PlusSign),
            '*' => self.add_punctuator(Punctuator::Asterisk),
            '/' => self.add_punctuator(Punctuator::Solidus),
            '=' => self.add_punctuator(Punctuator::EqualsSign),
            '(' => self.add_punctuator(Punctuator::LeftParenthesis),
            ')' => self.add_punctuator(Punctuator::RightParenthesis),

            '<' => {
                let punctuator = if self.consume_if('=') {
                    Punctuator::LessThanOrEqual
                } else if self.consume_if('>') {
                    Punctuator::NotEquals
                } else {
                    Punctuator::LessThan
                };
                self.add_punctuator(punctuator);
            }

            '>' => {
                let punctuator = if self.consume_if('=') {
                    Punctuator::GreaterThanOrEqual
                } else {
                    Punctuator::GreaterThan
                };
                self.add_punctuator(punctuator);
            }

            ':' => {
                let punctuator = if self.consume_if('=') {
                    Punctuator::Assignment
                } else {
                    Punctuator::Colon
                };
                self.add_punctuator(punctuator);
            }

            ' ' | '\t' | '\r' => (),

            '"' | '\'' => self.consume_string(c),

            '!' => self.current = self.chars.len(),

            '0'..='9' => self.consume_number(),

            c if is_identifier_start(c) => self.consume_identifier_or_keyword(),

            character => {
                self.errors.push(ScanError {
                    line: self.line,
                    kind: ScanErrorKind::UnexpectedCharacter { character },
                });
            }
        }
    }

    fn consume_string(&mut self, quote: char) {
        while let Some(c) = self.peek() {
            if c == quote {
                break;
            }

            self.current += 1;
        }

        if self.is_at_end() {
            self.errors.push(ScanError {
                line: self.line,
                kind: ScanErrorKind::UnterminatedString,
            });
            return;
        }

        // closing quote
        self.current += 1;

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_token_with_literal(TokenKind::String, Literal::String(value));
    }

    fn consume_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;

            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.current += 1;
            }
        }

        match self.lexeme().parse::<f64>() {
            Ok(number) => self.add_token_with_literal(TokenKind::Number, Literal::Number(number)),
            Err(..) => {
                self.errors.push(ScanError {
                    line: self.line,
                    kind: ScanErrorKind::InvalidNumber,
                });
            }
        }
    }

    fn consume_identifier_or_keyword(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.current += 1;
        }

        let lexeme = self.lexeme();
        let word = lexeme.to_ascii_uppercase();

        if Keyword::PHRASE_ENDINGS.contains(&word.as_str()) && self.coalesce(&lexeme, &word) {
            return;
        }

        let kind = match Keyword::parse(&word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    /// Merges the trailing words of the token list with `word` when together
    /// they spell a multi-word keyword. The merged token keeps the line of
    /// its first word.
    fn coalesce(&mut self, lexeme: &str, word: &str) -> bool {
        for count in (1..=MAX_PHRASE_PREFIX).rev() {
            let Some(start) = self.tokens.len().checked_sub(count) else {
                continue;
            };

            let prefix = &self.tokens[start..];
            if !prefix.iter().all(|token| token.kind.is_word()) {
                continue;
            }

            let mut phrase = String::new();
            for token in prefix {
                phrase += &token.lexeme.to_ascii_uppercase();
                phrase.push(' ');
            }
            phrase += word;

            let Some(keyword) = Keyword::parse(&phrase) else {
                continue;
            };

            let line = prefix[0].line;
            let mut merged = prefix.iter()
                .map(|token| token.lexeme.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            merged.push(' ');
            merged += lexeme;

            trace!("Coalesced `{merged}` into {keyword:?} on line {line}");

            self.tokens.truncate(start);
            self.tokens.push(Token::new(TokenKind::Keyword(keyword), merged, line));
            return true;
        }

        false
    }

    fn add_punctuator(&mut self, punctuator: Punctuator) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(TokenKind::Punctuator(punctuator), lexeme, self.line));
    }

    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::with_literal(kind, lexeme, literal, self.line));
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.current += 1;
        true
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// Scans `source` and forwards every scan error to `diagnostics`.
pub fn scan(source: &str, format: SourceFormat, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let (tokens, errors) = Scanner::new(source).with_format(format).collect_all();

    for error in &errors {
        diagnostics.report(error.line, &error.location_hint(), &error.to_string());
    }

    tokens
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    pub line: u32,
    pub kind: ScanErrorKind,
}

impl ScanError {
    #[must_use]
    pub fn location_hint(&self) -> String {
        match self.kind {
            ScanErrorKind::UnexpectedCharacter { character } => format!(" at '{character}'"),
            _ => String::new(),
        }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for ScanError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum ScanErrorKind {
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },

    #[error("Unterminated string.")]
    UnterminatedString,

    #[error("Invalid number.")]
    InvalidNumber,
}

impl ScanErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Prefixes every line with an empty sequence area and indicator.
    fn fixed(lines: &[&str]) -> String {
        lines.iter()
            .map(|line| format!("       {line}\n"))
            .collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|token| token.kind).collect()
    }

    fn scan_free(input: &str) -> (Vec<Token>, Vec<ScanError>) {
        Scanner::new(input).with_format(SourceFormat::Free).collect_all()
    }

    #[rstest]
    #[case("<", Punctuator::LessThan)]
    #[case("<=", Punctuator::LessThanOrEqual)]
    #[case("<>", Punctuator::NotEquals)]
    #[case(">", Punctuator::GreaterThan)]
    #[case(">=", Punctuator::GreaterThanOrEqual)]
    #[case(":=", Punctuator::Assignment)]
    #[case(":", Punctuator::Colon)]
    #[case("=", Punctuator::EqualsSign)]
    #[case(".", Punctuator::Period)]
    #[case("(", Punctuator::LeftParenthesis)]
    fn punctuators(#[case] input: &str, #[case] expected: Punctuator) {
        let (tokens, errors) = scan_free(input);
        assert_eq!(errors, Vec::new());
        assert_eq!(kinds(&tokens), vec![TokenKind::Punctuator(expected), TokenKind::EndOfFile]);
        assert_eq!(tokens[0].lexeme, input);
    }

    #[test]
    fn code_starts_at_column_eight() {
        let (tokens, errors) = Scanner::new("000100 MOVE 1 TO X.").collect_all();
        assert_eq!(errors, Vec::new());
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Move),
            TokenKind::Number,
            TokenKind::Keyword(Keyword::To),
            TokenKind::Identifier,
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::EndOfFile,
        ]);
    }

    #[test]
    fn comment_line_yields_no_tokens() {
        let source = "      * DISPLAY \"HIDDEN\".\n       STOP RUN.\n";
        let (tokens, _) = Scanner::new(source).collect_all();
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Stop),
            TokenKind::Keyword(Keyword::Run),
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::EndOfFile,
        ]);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn continuation_line_is_code() {
        let source = "       DISPLAY\n      - X.\n";
        let (tokens, _) = Scanner::new(source).collect_all();
        assert_eq!(tokens[1].lexeme, "X");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn working_storage_section_is_one_token() {
        let source = fixed(&["DATA DIVISION.", "WORKING-STORAGE SECTION."]);
        let (tokens, errors) = Scanner::new(&source).collect_all();
        assert_eq!(errors, Vec::new());
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::DataDivision),
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::Keyword(Keyword::WorkingStorageSection),
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::EndOfFile,
        ]);
        assert_eq!(tokens[2].lexeme, "WORKING-STORAGE SECTION");
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn coalesced_token_keeps_line_of_first_word() {
        let source = fixed(&["PROCEDURE", "DIVISION."]);
        let (tokens, _) = Scanner::new(&source).collect_all();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::ProcedureDivision));
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn named_section_stays_two_tokens() {
        let (tokens, _) = scan_free("CALC SECTION.");
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::Section),
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::EndOfFile,
        ]);
    }

    #[rstest]
    #[case("x greater than y", Keyword::GreaterThan)]
    #[case("X LESS THAN Y", Keyword::LessThan)]
    #[case("X GREATER THAN OR EQUAL TO Y", Keyword::GreaterEqual)]
    #[case("X LESS THAN OR EQUAL TO Y", Keyword::LessEqual)]
    #[case("X EQUAL TO Y", Keyword::Equals)]
    fn relational_phrases(#[case] input: &str, #[case] expected: Keyword) {
        let (tokens, errors) = scan_free(input);
        assert_eq!(errors, Vec::new());
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Identifier,
            TokenKind::Keyword(expected),
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]);
    }

    #[test]
    fn move_to_is_not_coalesced() {
        let (tokens, _) = scan_free("MOVE A TO B");
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Move),
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::To),
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]);
    }

    #[rstest]
    #[case("42", 42.0)]
    #[case("3.25", 3.25)]
    #[case("007", 7.0)]
    fn numbers(#[case] input: &str, #[case] expected: f64) {
        let (tokens, _) = scan_free(input);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].literal, Some(Literal::Number(expected)));
    }

    #[test]
    fn number_followed_by_period() {
        let (tokens, _) = scan_free("MOVE 10.");
        assert_eq!(tokens[1].literal, Some(Literal::Number(10.0)));
        assert_eq!(tokens[2].kind, TokenKind::Punctuator(Punctuator::Period));
    }

    #[rstest]
    #[case("\"Hello, world\"", "Hello, world")]
    #[case("'single'", "single")]
    #[case("\"it's\"", "it's")]
    fn strings(#[case] input: &str, #[case] expected: &str) {
        let (tokens, errors) = scan_free(input);
        assert_eq!(errors, Vec::new());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, input);
        assert_eq!(tokens[0].literal, Some(Literal::String(expected.to_string())));
    }

    #[test]
    fn unterminated_string_does_not_stop_scanning() {
        let source = fixed(&["DISPLAY \"OOPS", "STOP RUN."]);
        let (tokens, errors) = Scanner::new(&source).collect_all();
        assert_eq!(errors, vec![ScanError { line: 1, kind: ScanErrorKind::UnterminatedString }]);
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Display),
            TokenKind::Keyword(Keyword::Stop),
            TokenKind::Keyword(Keyword::Run),
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::EndOfFile,
        ]);
    }

    #[test]
    fn unexpected_character_is_skipped() {
        let (tokens, errors) = scan_free("X @ Y");
        assert_eq!(errors, vec![ScanError { line: 1, kind: ScanErrorKind::UnexpectedCharacter { character: '@' } }]);
        assert_eq!(errors[0].location_hint(), " at '@'");
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile]);
    }

    #[test]
    fn exclamation_mark_comments_out_rest_of_line() {
        let (tokens, _) = scan_free("DISPLAY X ! DISPLAY Y\nSTOP");
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Display),
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::Stop),
            TokenKind::EndOfFile,
        ]);
    }

    #[test]
    fn identifiers_keep_hyphens_and_case() {
        let (tokens, _) = scan_free("ws-Total");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "ws-Total");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let (tokens, _) = scan_free("perform end-if");
        assert_eq!(kinds(&tokens), vec![
            TokenKind::Keyword(Keyword::Perform),
            TokenKind::Keyword(Keyword::EndIf),
            TokenKind::EndOfFile,
        ]);
    }

    #[rstest]
    #[case("")]
    #[case("      *only a comment")]
    fn empty_input_still_ends_with_end_of_file(#[case] input: &str) {
        let (tokens, errors) = Scanner::new(input).collect_all();
        assert!(errors.is_empty());
        assert_eq!(kinds(&tokens), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn scan_reports_into_diagnostics() {
        let mut diagnostics = Diagnostics::silent();
        let tokens = scan("X # Y", SourceFormat::Free, &mut diagnostics);
        assert_eq!(tokens.len(), 3);
        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.entries()[0].to_string(), "[line 1] Error at '#': Unexpected character.");
    }
}
