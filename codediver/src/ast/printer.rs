// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Write;

use crate::{
    ArithmeticStatement, AssignExpression, BinaryExpression, DisplayStatement, DivisionStatement,
    ExpressionVisitor, IfStatement, MoveStatement, PerformStatement, Section, Statement,
    StatementVisitor, Token, Value,
};

const INDENT: &str = "  ";

/// Renders a statement tree as parenthesized prefix notation, one statement
/// per line, children indented below their parent.
#[derive(Debug, Default)]
pub struct AstPrinter {
    output: String,
    depth: usize,
}

impl AstPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn print(statements: &[Statement]) -> String {
        let mut printer = Self::new();
        for statement in statements {
            statement.accept(&mut printer);
        }
        printer.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output += INDENT;
        }
        self.output += text;
        self.output.push('\n');
    }

    fn nested(&mut self, header: &str, body: &[Statement]) {
        self.line(header);
        self.depth += 1;
        for statement in body {
            statement.accept(self);
        }
        self.depth -= 1;
    }

    fn block(&mut self, kind: &str, section: &Section) {
        let header = match &section.name {
            Some(name) => format!("({kind} {})", name.lexeme),
            None => format!("({kind})"),
        };
        self.nested(&header, &section.body);
    }
}

impl ExpressionVisitor for AstPrinter {
    type Output = String;

    fn visit_literal(&mut self, value: &Value) -> String {
        match value {
            Value::String(string) => format!("\"{string}\""),
            other => other.to_string(),
        }
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_assign(&mut self, expression: &AssignExpression) -> String {
        let value = expression.value.accept(self);
        format!("(assign {} {value})", expression.name.lexeme)
    }

    fn visit_binary(&mut self, expression: &BinaryExpression) -> String {
        let left = expression.left.accept(self);
        let right = expression.right.accept(self);
        format!("({} {left} {right})", expression.operator)
    }
}

impl StatementVisitor for AstPrinter {
    type Output = ();

    fn visit_division(&mut self, statement: &DivisionStatement) {
        let header = format!("(division {})", statement.marker.as_ref());
        self.nested(&header, &statement.body);
    }

    fn visit_declaration_block(&mut self, section: &Section) {
        self.block("declarations", section);
    }

    fn visit_executable_block(&mut self, section: &Section) {
        self.block("section", section);
    }

    fn visit_move(&mut self, statement: &MoveStatement) {
        let value = statement.value.accept(self);
        self.line(&format!("(move {value} {})", statement.target.lexeme));
    }

    fn visit_arithmetic(&mut self, statement: &ArithmeticStatement) {
        let value = statement.value.accept(self);
        let verb = statement.verb.name().to_ascii_lowercase();
        self.line(&format!("({verb} {value} {})", statement.target.lexeme));
    }

    fn visit_if(&mut self, statement: &IfStatement) {
        let condition = statement.condition.accept(self);
        self.nested(&format!("(if {condition})"), &statement.body);
    }

    fn visit_perform(&mut self, statement: &PerformStatement) {
        self.line(&format!("(perform {})", statement.target.lexeme));
    }

    fn visit_display(&mut self, statement: &DisplayStatement) {
        let mut text = String::from("(display");
        for value in &statement.values {
            let value = value.accept(self);
            _ = write!(text, " {value}");
        }
        text.push(')');
        self.line(&text);
    }

    fn visit_stop(&mut self) {
        self.line("(stop)");
    }
}
