// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Write};

use crate::{Token, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Literal(Value),
    Variable(Token),
    Assign(AssignExpression),
    Binary(BinaryExpression),
}

impl Expression {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Token> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(Value::String(string)) => {
                f.write_char('"')?;
                f.write_str(string)?;
                f.write_char('"')
            }
            Self::Literal(value) => value.fmt(f),
            Self::Variable(name) => f.write_str(&name.lexeme),
            Self::Assign(expr) => expr.fmt(f),
            Self::Binary(expr) => expr.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignExpression {
    pub name: Token,
    pub value: Box<Expression>,
}

impl Display for AssignExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} := {}", self.name.lexeme, self.value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: Comparison,
    pub right: Box<Expression>,
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} {} {}", self.left, self.operator, self.right))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equality,
    Inequality,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "=",
            Self::Inequality => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
        }
    }

    /// Whether operands must be ordered rather than merely compared for
    /// equality.
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        !matches!(self, Self::Equality | Self::Inequality)
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
