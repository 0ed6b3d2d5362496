// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{
    ArithmeticStatement, AssignExpression, BinaryExpression, DisplayStatement, DivisionStatement,
    Expression, IfStatement, MoveStatement, PerformStatement, Section, Statement, StatementKind,
    Token, Value,
};

pub trait ExpressionVisitor {
    type Output;

    fn visit_literal(&mut self, value: &Value) -> Self::Output;
    fn visit_variable(&mut self, name: &Token) -> Self::Output;
    fn visit_assign(&mut self, expression: &AssignExpression) -> Self::Output;
    fn visit_binary(&mut self, expression: &BinaryExpression) -> Self::Output;
}

pub trait StatementVisitor {
    type Output;

    fn visit_division(&mut self, statement: &DivisionStatement) -> Self::Output;
    fn visit_declaration_block(&mut self, section: &Section) -> Self::Output;
    fn visit_executable_block(&mut self, section: &Section) -> Self::Output;
    fn visit_move(&mut self, statement: &MoveStatement) -> Self::Output;
    fn visit_arithmetic(&mut self, statement: &ArithmeticStatement) -> Self::Output;
    fn visit_if(&mut self, statement: &IfStatement) -> Self::Output;
    fn visit_perform(&mut self, statement: &PerformStatement) -> Self::Output;
    fn visit_display(&mut self, statement: &DisplayStatement) -> Self::Output;
    fn visit_stop(&mut self) -> Self::Output;
}

impl Expression {
    pub fn accept<V: ExpressionVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal(value) => visitor.visit_literal(value),
            Self::Variable(name) => visitor.visit_variable(name),
            Self::Assign(expression) => visitor.visit_assign(expression),
            Self::Binary(expression) => visitor.visit_binary(expression),
        }
    }
}

impl Statement {
    pub fn accept<V: StatementVisitor>(&self, visitor: &mut V) -> V::Output {
        match &self.kind {
            StatementKind::Division(statement) => visitor.visit_division(statement),
            StatementKind::DeclarationBlock(section) => visitor.visit_declaration_block(section),
            StatementKind::ExecutableBlock(section) => visitor.visit_executable_block(section),
            StatementKind::Move(statement) => visitor.visit_move(statement),
            StatementKind::Arithmetic(statement) => visitor.visit_arithmetic(statement),
            StatementKind::If(statement) => visitor.visit_if(statement),
            StatementKind::Perform(statement) => visitor.visit_perform(statement),
            StatementKind::Display(statement) => visitor.visit_display(statement),
            StatementKind::Stop => visitor.visit_stop(),
        }
    }
}
