// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod parser;
mod printer;
mod statement;
mod visitor;

pub use self::{
    expression::{
        AssignExpression,
        BinaryExpression,
        Comparison,
        Expression,
    },
    parser::{
        parse,
        parse_fragment,
        ParseDiagnostic,
        Parser,
    },
    printer::AstPrinter,
    statement::{
        ArithmeticStatement,
        ArithmeticVerb,
        DisplayStatement,
        DivisionStatement,
        IfStatement,
        MoveStatement,
        PerformStatement,
        Section,
        Statement,
        StatementKind,
    },
    visitor::{
        ExpressionVisitor,
        StatementVisitor,
    },
};
