// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use log::{debug, trace};
use strum::AsRefStr;
use thiserror::Error;

use crate::{
    ArithmeticStatement, ArithmeticVerb, AssignExpression, BinaryExpression, Comparison,
    Diagnostics, DisplayStatement, DivisionStatement, Expression, IfStatement, Keyword, Literal,
    MoveStatement, PerformStatement, Punctuator, Section, SectionRegistry, Statement,
    StatementKind, Token, TokenKind, Value,
};

/// Level number of condition names, which declare no storage.
const CONDITION_NAME_LEVEL: f64 = 88.0;

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    diagnostics: Vec<ParseDiagnostic>,
    replaced_sections: Vec<Token>,
    reported_end_of_file: bool,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let line = tokens.last().map(|token| token.line).unwrap_or(1);

        Self {
            tokens,
            cursor: 0,
            diagnostics: Vec::new(),
            replaced_sections: Vec::new(),
            reported_end_of_file: false,
            end_of_file_token: Token::end_of_file(line),
        }
    }

    /// Parses a complete program: a sequence of divisions.
    pub fn parse_program(&mut self, registry: &mut SectionRegistry) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            let token = self.peek_token().clone();

            match token.kind {
                TokenKind::Keyword(marker) if marker.is_division_marker() => {
                    statements.push(self.parse_division(marker, registry));
                }

                _ => {
                    self.emit_diagnostic(ParseDiagnostic::UnexpectedToken { token });
                    _ = self.consume_token();
                }
            }
        }

        statements
    }

    /// Parses divisions as well as bare procedural sentences, sections and
    /// paragraphs. Used for interactive input.
    pub fn parse_fragment(&mut self, registry: &mut SectionRegistry) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let TokenKind::Keyword(marker) = self.peek_token().kind {
                if marker.is_division_marker() {
                    statements.push(self.parse_division(marker, registry));
                    continue;
                }
            }

            statements.extend(self.parse_procedure_item(registry));
        }

        statements
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    /// Names of sections that replaced an earlier section of the same name.
    #[must_use]
    pub fn replaced_sections(&self) -> &[Token] {
        &self.replaced_sections
    }

    fn parse_division(&mut self, marker: Keyword, registry: &mut SectionRegistry) -> Statement {
        let header = self.consume_token();
        trace!("Parsing {marker} on line {}", header.line);

        let body = if marker == Keyword::ProcedureDivision {
            if self.peek_token().is_keyword(Keyword::Using) {
                // The operands of `USING` name linkage items, which are not modelled.
                while !self.is_at_end() && !self.peek_token().is_punctuator(Punctuator::Period) {
                    _ = self.consume_token();
                }
            }

            self.consume_punctuator_if(Punctuator::Period);
            self.parse_procedure_body(registry)
        } else {
            self.consume_punctuator_if(Punctuator::Period);
            self.parse_declaration_body(marker, registry)
        };

        self.check_end_of_file();

        Statement::new(header.line, StatementKind::Division(DivisionStatement {
            marker,
            body,
        }))
    }

    fn parse_declaration_body(&mut self, marker: Keyword, registry: &mut SectionRegistry) -> Vec<Statement> {
        let mut body = Vec::new();

        while !self.is_at_end() && !self.is_at_division_header() {
            if self.is_at_section_header() {
                body.push(self.parse_declaration_block(marker, registry));
                continue;
            }

            body.extend(self.parse_declaration_sentence(marker));
        }

        body
    }

    fn parse_declaration_block(&mut self, marker: Keyword, registry: &mut SectionRegistry) -> Statement {
        let (line, name) = self.parse_section_header();
        let mut body = Vec::new();

        while !self.is_at_end() && !self.is_at_division_header() && !self.is_at_section_header() {
            body.extend(self.parse_declaration_sentence(marker));
        }

        let section = self.register(registry, name, body);
        Statement::new(line, StatementKind::DeclarationBlock(section))
    }

    /// Level entries only exist in the DATA DIVISION. Elsewhere a leading
    /// number is part of a paragraph like `DATE-WRITTEN. 2024-01-15.`.
    fn parse_declaration_sentence(&mut self, marker: Keyword) -> Option<Statement> {
        let token = self.peek_token();

        if marker == Keyword::DataDivision && token.kind == TokenKind::Number {
            return self.parse_level_entry();
        }

        if token.is_keyword(Keyword::Move) {
            return self.parse_sentence();
        }

        debug!("Skipping declaration sentence starting with `{}` on line {}", token.lexeme, token.line);
        self.skip_sentence();
        None
    }

    /// `NN name [PIC picture] [VALUE [IS] literal] .`
    fn parse_level_entry(&mut self) -> Option<Statement> {
        let level_token = self.consume_token();
        let level = match level_token.literal {
            Some(Literal::Number(level)) => level,
            _ => 0.0,
        };

        let name = self.peek_token().clone();
        if !name.is_identifier() {
            self.emit_expected(ParseDiagnostic::ExpectedIdentifier { token: name, context: "after level number" });
            self.synchronize();
            return None;
        }
        _ = self.consume_token();

        let mut picture: Option<String> = None;
        let mut initial: Option<Value> = None;

        while !self.is_at_end()
            && !self.peek_token().is_punctuator(Punctuator::Period)
            && !self.is_at_division_header()
            && !self.is_at_section_header()
        {
            let token = self.consume_token();

            match token.kind {
                TokenKind::Keyword(Keyword::Pic) => {
                    picture = Some(self.parse_picture());
                }

                TokenKind::Keyword(Keyword::Value) => {
                    self.consume_keyword_if(Keyword::Is);

                    let token = self.peek_token().clone();
                    match self.parse_expression() {
                        Some(Expression::Literal(value)) => initial = Some(value),
                        Some(..) => {
                            self.emit_diagnostic(ParseDiagnostic::ExpectedLiteral { token });
                            self.synchronize();
                            return None;
                        }
                        None => {
                            self.synchronize();
                            return None;
                        }
                    }
                }

                _ => trace!("Ignoring clause token `{}` of {}", token.lexeme, name.lexeme),
            }
        }

        if !self.consume_punctuator_if(Punctuator::Period) && !self.is_at_end() {
            let token = self.peek_token().clone();
            self.emit_diagnostic(ParseDiagnostic::ExpectedPeriod { token });
        }

        if level == CONDITION_NAME_LEVEL || name.lexeme.eq_ignore_ascii_case("FILLER") {
            debug!("Level {level} entry {} declares no storage", name.lexeme);
            return None;
        }

        let value = initial.unwrap_or_else(|| default_value_for_picture(picture.as_deref()));

        Some(Statement::new(level_token.line, StatementKind::Move(MoveStatement {
            value: Expression::Assign(AssignExpression {
                name: name.clone(),
                value: Box::new(Expression::Literal(value)),
            }),
            target: name,
        })))
    }

    fn parse_picture(&mut self) -> String {
        self.consume_keyword_if(Keyword::Is);

        let mut picture = String::new();
        while !self.is_at_end() {
            let token = self.peek_token();
            if token.is_punctuator(Punctuator::Period) || token.is_keyword(Keyword::Value) {
                break;
            }

            picture += &token.lexeme;
            _ = self.consume_token();
        }

        picture
    }

    fn parse_procedure_body(&mut self, registry: &mut SectionRegistry) -> Vec<Statement> {
        let mut body = Vec::new();

        while !self.is_at_end() && !self.is_at_division_header() {
            body.extend(self.parse_procedure_item(registry));
        }

        body
    }

    fn parse_procedure_item(&mut self, registry: &mut SectionRegistry) -> Option<Statement> {
        if self.is_at_section_header() {
            return Some(self.parse_executable_section(registry));
        }

        if self.is_at_paragraph_header() {
            return Some(self.parse_paragraph(registry));
        }

        self.parse_sentence()
    }

    fn parse_executable_section(&mut self, registry: &mut SectionRegistry) -> Statement {
        let (line, name) = self.parse_section_header();
        let mut body = Vec::new();

        while !self.is_at_end() && !self.is_at_division_header() && !self.is_at_section_header() {
            if self.is_at_paragraph_header() {
                body.push(self.parse_paragraph(registry));
            } else {
                body.extend(self.parse_sentence());
            }
        }

        let section = self.register(registry, name, body);
        Statement::new(line, StatementKind::ExecutableBlock(section))
    }

    fn parse_paragraph(&mut self, registry: &mut SectionRegistry) -> Statement {
        let name = self.consume_token();
        _ = self.consume_token();

        let mut body = Vec::new();
        while !self.is_at_end()
            && !self.is_at_division_header()
            && !self.is_at_section_header()
            && !self.is_at_paragraph_header()
        {
            body.extend(self.parse_sentence());
        }

        let line = name.line;
        let section = self.register(registry, Some(name), body);
        Statement::new(line, StatementKind::ExecutableBlock(section))
    }

    fn register(&mut self, registry: &mut SectionRegistry, name: Option<Token>, body: Vec<Statement>) -> Rc<Section> {
        let section = Rc::new(Section { name, body });

        if let Some(name) = &section.name {
            if registry.register(&name.lexeme, Rc::clone(&section)).is_some() {
                self.replaced_sections.push(name.clone());
            }
        }

        section
    }

    /// Consumes `SECTION`, `name SECTION` or `WORKING-STORAGE SECTION`,
    /// followed by an optional period.
    fn parse_section_header(&mut self) -> (u32, Option<Token>) {
        let first = self.consume_token();

        let name = match first.kind {
            TokenKind::Keyword(Keyword::WorkingStorageSection) => {
                Some(Token::new(TokenKind::Identifier, "WORKING-STORAGE", first.line))
            }
            TokenKind::Keyword(Keyword::Section) => None,
            _ => {
                _ = self.consume_token();
                Some(first.clone())
            }
        };

        self.consume_punctuator_if(Punctuator::Period);
        trace!("Section {:?} starts on line {}", name.as_ref().map(|x| &x.lexeme), first.line);
        (first.line, name)
    }

    /// Parses one statement and its terminating period.
    fn parse_sentence(&mut self) -> Option<Statement> {
        let Some(statement) = self.parse_statement() else {
            self.synchronize();
            return None;
        };

        if self.consume_punctuator_if(Punctuator::Period) {
            return Some(statement);
        }

        if self.is_at_end() {
            self.check_end_of_file();
        } else {
            let token = self.peek_token().clone();
            self.emit_diagnostic(ParseDiagnostic::ExpectedPeriod { token });
            self.synchronize();
        }

        Some(statement)
    }

    pub fn parse_statement(&mut self) -> Option<Statement> {
        let token = self.peek_token().clone();
        let line = token.line;

        let kind = match token.kind {
            TokenKind::Keyword(Keyword::Move) => {
                _ = self.consume_token();
                StatementKind::Move(self.parse_move_statement()?)
            }

            TokenKind::Keyword(Keyword::Add) => {
                _ = self.consume_token();
                StatementKind::Arithmetic(self.parse_arithmetic_statement(ArithmeticVerb::Add, &[Keyword::To])?)
            }

            TokenKind::Keyword(Keyword::Subtract) => {
                _ = self.consume_token();
                StatementKind::Arithmetic(self.parse_arithmetic_statement(ArithmeticVerb::Subtract, &[Keyword::From])?)
            }

            TokenKind::Keyword(Keyword::Multiply) => {
                _ = self.consume_token();
                StatementKind::Arithmetic(self.parse_arithmetic_statement(ArithmeticVerb::Multiply, &[Keyword::By])?)
            }

            TokenKind::Keyword(Keyword::Divide) => {
                _ = self.consume_token();
                StatementKind::Arithmetic(self.parse_arithmetic_statement(ArithmeticVerb::Divide, &[Keyword::By, Keyword::Into])?)
            }

            TokenKind::Keyword(Keyword::If) => {
                _ = self.consume_token();
                StatementKind::If(self.parse_if_statement()?)
            }

            TokenKind::Keyword(Keyword::Perform) => {
                _ = self.consume_token();
                let target = self.expect_identifier("after PERFORM")?;
                StatementKind::Perform(PerformStatement { target })
            }

            TokenKind::Keyword(Keyword::Display) => {
                _ = self.consume_token();
                StatementKind::Display(self.parse_display_statement()?)
            }

            TokenKind::Keyword(Keyword::Stop) => {
                _ = self.consume_token();
                self.consume_keyword_if(Keyword::Run);
                StatementKind::Stop
            }

            TokenKind::Keyword(Keyword::GoBack) => {
                _ = self.consume_token();
                StatementKind::Stop
            }

            TokenKind::EndOfFile => {
                self.check_end_of_file();
                return None;
            }

            _ => {
                self.emit_diagnostic(ParseDiagnostic::UnexpectedToken { token });
                _ = self.consume_token();
                return None;
            }
        };

        Some(Statement::new(line, kind))
    }

    fn parse_move_statement(&mut self) -> Option<MoveStatement> {
        let value = self.parse_expression()?;
        self.expect_keyword(Keyword::To, "after MOVE value")?;
        let target = self.expect_identifier("after TO")?;

        Some(MoveStatement {
            value: Expression::Assign(AssignExpression {
                name: target.clone(),
                value: Box::new(value),
            }),
            target,
        })
    }

    fn parse_arithmetic_statement(&mut self, verb: ArithmeticVerb, separators: &[Keyword]) -> Option<ArithmeticStatement> {
        let value = self.parse_expression()?;

        let separator = self.peek_token();
        if !separators.iter().any(|keyword| separator.is_keyword(*keyword)) {
            let token = separator.clone();
            self.emit_expected(ParseDiagnostic::ExpectedKeyword { token, expected: separators[0], context: verb.name_for_context() });
            return None;
        }
        _ = self.consume_token();

        let target = self.expect_identifier("as the receiving field")?;

        Some(ArithmeticStatement {
            verb,
            value,
            target,
        })
    }

    /// `IF <identifier> [IS] <relop> <operand> <statements> END-IF`
    fn parse_if_statement(&mut self) -> Option<IfStatement> {
        let left = self.parse_identifier_operand("after IF")?;
        self.consume_keyword_if(Keyword::Is);

        let operator = self.parse_comparison()?;
        let right = self.parse_expression()?;

        let condition = Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });

        let mut body = Vec::new();
        loop {
            let token = self.peek_token().clone();

            match token.kind {
                TokenKind::Keyword(Keyword::EndIf) => {
                    _ = self.consume_token();
                    break;
                }

                TokenKind::EndOfFile => {
                    self.report_end_of_file();
                    return None;
                }

                TokenKind::Punctuator(Punctuator::Period) => {
                    _ = self.consume_token();
                }

                _ if self.is_at_division_header() || self.is_at_section_header() => {
                    self.emit_diagnostic(ParseDiagnostic::ExpectedKeyword { token, expected: Keyword::EndIf, context: "to close IF" });
                    return None;
                }

                _ => match self.parse_statement() {
                    Some(statement) => body.push(statement),
                    None => self.synchronize(),
                },
            }
        }

        Some(IfStatement {
            condition,
            body,
        })
    }

    fn parse_comparison(&mut self) -> Option<Comparison> {
        let token = self.peek_token().clone();

        if token.is_keyword(Keyword::Not) {
            _ = self.consume_token();

            let next = self.peek_token();
            let comparison = match next.kind.as_comparison() {
                Some(Comparison::GreaterThan) => Comparison::LessThanOrEqual,
                Some(Comparison::LessThan) => Comparison::GreaterThanOrEqual,
                Some(Comparison::Equality) => Comparison::Inequality,
                _ => return Some(Comparison::Inequality),
            };

            _ = self.consume_token();
            return Some(comparison);
        }

        match token.kind.as_comparison() {
            Some(comparison) => {
                _ = self.consume_token();
                Some(comparison)
            }

            None => {
                self.emit_expected(ParseDiagnostic::ExpectedComparison { token });
                None
            }
        }
    }

    fn parse_display_statement(&mut self) -> Option<DisplayStatement> {
        let mut values = vec![self.parse_expression()?];

        loop {
            if self.consume_punctuator_if(Punctuator::Comma) {
                values.push(self.parse_expression()?);
                continue;
            }

            if !self.is_at_expression_start() {
                break;
            }

            values.push(self.parse_expression()?);
        }

        Some(DisplayStatement { values })
    }

    /// `IDENTIFIER [OF IDENTIFIER]`, where the qualification is dropped.
    fn parse_identifier_operand(&mut self, context: &'static str) -> Option<Expression> {
        let name = self.expect_identifier(context)?;

        if self.consume_keyword_if(Keyword::Of) {
            let record = self.expect_identifier("after OF")?;
            trace!("Flattening {} OF {} to {}", name.lexeme, record.lexeme, name.lexeme);
        }

        Some(Expression::Variable(name))
    }

    pub fn parse_expression(&mut self) -> Option<Expression> {
        let token = self.peek_token().clone();

        match token.kind {
            TokenKind::Number | TokenKind::String => {
                _ = self.consume_token();
                Some(Expression::Literal(literal_value(&token)))
            }

            TokenKind::Identifier => self.parse_identifier_operand("in expression"),

            TokenKind::Keyword(Keyword::Zero) => {
                _ = self.consume_token();
                Some(Expression::Literal(Value::Number(0.0)))
            }

            TokenKind::Keyword(Keyword::Space) => {
                _ = self.consume_token();
                Some(Expression::Literal(Value::String(" ".to_string())))
            }

            TokenKind::Punctuator(sign @ (Punctuator::HyphenMinus | Punctuator::PlusSign))
                if self.peek_next_token().kind == TokenKind::Number =>
            {
                _ = self.consume_token();
                let number = self.consume_token();
                let Value::Number(value) = literal_value(&number) else {
                    self.emit_diagnostic(ParseDiagnostic::ExpectedExpression { token: number });
                    return None;
                };

                let value = if sign == Punctuator::HyphenMinus { -value } else { value };
                Some(Expression::Literal(Value::Number(value)))
            }

            _ => {
                self.emit_expected(ParseDiagnostic::ExpectedExpression { token });
                None
            }
        }
    }

    fn is_at_expression_start(&self) -> bool {
        let token = self.peek_token();
        match token.kind {
            TokenKind::Number | TokenKind::String | TokenKind::Identifier => true,
            TokenKind::Keyword(Keyword::Zero | Keyword::Space) => true,
            TokenKind::Punctuator(Punctuator::HyphenMinus | Punctuator::PlusSign) => {
                self.peek_next_token().kind == TokenKind::Number
            }
            _ => false,
        }
    }

    /// Skips to the start of the next sentence: past the next period, or up
    /// to a statement verb, `END-IF`, a section or division header, or the
    /// end of the file.
    pub fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.peek_token();

            if token.is_punctuator(Punctuator::Period) {
                _ = self.consume_token();
                return;
            }

            if let TokenKind::Keyword(keyword) = token.kind {
                if keyword.starts_statement() || keyword == Keyword::EndIf {
                    return;
                }
            }

            if self.is_at_division_header() || self.is_at_section_header() {
                return;
            }

            _ = self.consume_token();
        }
    }

    /// Skips a sentence that carries no meaning for the program, such as
    /// `PROGRAM-ID. HELLO.`.
    fn skip_sentence(&mut self) {
        let first = self.consume_token();
        if first.is_punctuator(Punctuator::Period) {
            return;
        }

        while !self.is_at_end() && !self.is_at_division_header() && !self.is_at_section_header() {
            if self.consume_token().is_punctuator(Punctuator::Period) {
                break;
            }
        }
    }

    fn is_at_division_header(&self) -> bool {
        match self.peek_token().kind {
            TokenKind::Keyword(keyword) => keyword.is_division_marker(),
            _ => false,
        }
    }

    fn is_at_section_header(&self) -> bool {
        let token = self.peek_token();

        token.is_keyword(Keyword::Section)
            || token.is_keyword(Keyword::WorkingStorageSection)
            || (token.is_identifier() && self.peek_next_token().is_keyword(Keyword::Section))
    }

    fn is_at_paragraph_header(&self) -> bool {
        self.peek_token().is_identifier() && self.peek_next_token().is_punctuator(Punctuator::Period)
    }

    fn expect_identifier(&mut self, context: &'static str) -> Option<Token> {
        let token = self.peek_token().clone();

        if !token.is_identifier() {
            self.emit_expected(ParseDiagnostic::ExpectedIdentifier { token, context });
            return None;
        }

        _ = self.consume_token();
        Some(token)
    }

    fn expect_keyword(&mut self, expected: Keyword, context: &'static str) -> Option<Token> {
        let token = self.peek_token().clone();

        if !token.is_keyword(expected) {
            self.emit_expected(ParseDiagnostic::ExpectedKeyword { token, expected, context });
            return None;
        }

        _ = self.consume_token();
        Some(token)
    }

    fn consume_keyword_if(&mut self, keyword: Keyword) -> bool {
        if !self.peek_token().is_keyword(keyword) {
            return false;
        }

        _ = self.consume_token();
        true
    }

    fn consume_punctuator_if(&mut self, punctuator: Punctuator) -> bool {
        if !self.peek_token().is_punctuator(punctuator) {
            return false;
        }

        _ = self.consume_token();
        true
    }

    /// Emits `diagnostic`, unless the parser ran out of tokens, in which case
    /// the end of the file is what is reported.
    fn emit_expected(&mut self, diagnostic: ParseDiagnostic) {
        if self.is_at_end() {
            self.report_end_of_file();
        } else {
            self.emit_diagnostic(diagnostic);
        }
    }

    fn emit_diagnostic(&mut self, diagnostic: ParseDiagnostic) {
        trace!("{}: {diagnostic}", diagnostic.name());
        self.diagnostics.push(diagnostic);
    }

    /// Reports an unexpected end of file, unless the program ended cleanly
    /// with a period.
    fn check_end_of_file(&mut self) {
        if !self.is_at_end() {
            return;
        }

        let ended_cleanly = self.cursor.checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .is_some_and(|token| token.is_punctuator(Punctuator::Period));

        if !ended_cleanly {
            self.report_end_of_file();
        }
    }

    fn report_end_of_file(&mut self) {
        if self.reported_end_of_file {
            return;
        }

        self.reported_end_of_file = true;
        let token = self.peek_token().clone();
        self.emit_diagnostic(ParseDiagnostic::UnexpectedEndOfFile { token });
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().is_end_of_file()
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    fn peek_next_token(&self) -> &Token {
        self.tokens.get(self.cursor + 1).unwrap_or(&self.end_of_file_token)
    }

    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if !token.is_end_of_file() {
            self.cursor += 1;
        }
        token
    }
}

/// Parses `tokens` as a program, forwarding every diagnostic to
/// `diagnostics` and registering every named block in `registry`.
pub fn parse(tokens: &[Token], registry: &mut SectionRegistry, diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_program(registry);
    forward_diagnostics(&parser, diagnostics);
    statements
}

/// Parses interactive input, see [`Parser::parse_fragment`].
pub fn parse_fragment(tokens: &[Token], registry: &mut SectionRegistry, diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse_fragment(registry);
    forward_diagnostics(&parser, diagnostics);
    statements
}

fn forward_diagnostics(parser: &Parser<'_>, diagnostics: &mut Diagnostics) {
    for diagnostic in parser.diagnostics() {
        diagnostics.error_at(diagnostic.token(), &diagnostic.to_string());
    }

    for name in parser.replaced_sections() {
        diagnostics.warning(name.line, &format!("Section '{}' replaces an earlier section with the same name.", name.lexeme));
    }
}

fn literal_value(token: &Token) -> Value {
    match &token.literal {
        Some(Literal::Number(number)) => Value::Number(*number),
        Some(Literal::String(string)) => Value::String(string.clone()),
        None => Value::Absent,
    }
}

/// Initial value of an item declared without a `VALUE` clause.
fn default_value_for_picture(picture: Option<&str>) -> Value {
    let Some(picture) = picture else {
        return Value::Absent;
    };

    let alphanumeric = picture.chars().any(|c| matches!(c.to_ascii_uppercase(), 'X' | 'A'));
    if alphanumeric {
        Value::String(String::new())
    } else {
        Value::Number(0.0)
    }
}

impl ArithmeticVerb {
    const fn name_for_context(&self) -> &'static str {
        match self {
            Self::Add => "after ADD value",
            Self::Subtract => "after SUBTRACT value",
            Self::Multiply => "after MULTIPLY value",
            Self::Divide => "after DIVIDE value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("Unexpected token.")]
    UnexpectedToken { token: Token },

    #[error("Expected '.' after statement.")]
    ExpectedPeriod { token: Token },

    #[error("Unexpected end of file.")]
    UnexpectedEndOfFile { token: Token },

    #[error("Expected '{expected}' {context}.")]
    ExpectedKeyword { token: Token, expected: Keyword, context: &'static str },

    #[error("Expected identifier {context}.")]
    ExpectedIdentifier { token: Token, context: &'static str },

    #[error("Expected expression.")]
    ExpectedExpression { token: Token },

    #[error("Expected literal after VALUE.")]
    ExpectedLiteral { token: Token },

    #[error("Expected relational operator.")]
    ExpectedComparison { token: Token },
}

impl ParseDiagnostic {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { token } => token,
            Self::ExpectedPeriod { token } => token,
            Self::UnexpectedEndOfFile { token } => token,
            Self::ExpectedKeyword { token, .. } => token,
            Self::ExpectedIdentifier { token, .. } => token,
            Self::ExpectedExpression { token } => token,
            Self::ExpectedLiteral { token } => token,
            Self::ExpectedComparison { token } => token,
        }
    }
}
