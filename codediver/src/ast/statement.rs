// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, rc::Rc};

use strum::AsRefStr;

use crate::{Expression, Keyword, Token};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: u32,
    pub kind: StatementKind,
}

impl Statement {
    #[must_use]
    pub const fn new(line: u32, kind: StatementKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Division(DivisionStatement),

    /// Section of a non-procedure division. Its direct `Move` children
    /// declare the variables of the program.
    DeclarationBlock(Rc<Section>),

    /// Section or paragraph of the procedure division, reachable through
    /// `PERFORM`.
    ExecutableBlock(Rc<Section>),

    Move(MoveStatement),
    Arithmetic(ArithmeticStatement),
    If(IfStatement),
    Perform(PerformStatement),
    Display(DisplayStatement),
    Stop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionStatement {
    pub marker: Keyword,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Absent for a bare `SECTION.` header.
    pub name: Option<Token>,
    pub body: Vec<Statement>,
}

impl Section {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_ref().map_or("", |token| token.lexeme.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveStatement {
    /// Always an [`Expression::Assign`] to `target`.
    pub value: Expression,
    pub target: Token,
}

impl MoveStatement {
    /// The expression being moved, without the assignment wrapper.
    #[must_use]
    pub fn source(&self) -> &Expression {
        match &self.value {
            Expression::Assign(assign) => &assign.value,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum ArithmeticVerb {
    #[strum(serialize = "ADD")]
    Add,
    #[strum(serialize = "SUBTRACT")]
    Subtract,
    #[strum(serialize = "MULTIPLY")]
    Multiply,
    #[strum(serialize = "DIVIDE")]
    Divide,
}

impl ArithmeticVerb {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    /// Computes `target <verb> operand`.
    #[must_use]
    pub fn apply(&self, target: f64, operand: f64) -> f64 {
        match self {
            Self::Add => target + operand,
            Self::Subtract => target - operand,
            Self::Multiply => target * operand,
            Self::Divide => target / operand,
        }
    }
}

impl Display for ArithmeticVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticStatement {
    pub verb: ArithmeticVerb,
    pub value: Expression,
    pub target: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformStatement {
    pub target: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStatement {
    pub values: Vec<Expression>,
}
