// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{
    cmp::Ordering, collections::HashMap, io::{stdout, Write}
};

use codediver::{
    ArithmeticStatement, ArithmeticVerb, AssignExpression, BinaryExpression, Comparison,
    Diagnostics, DisplayStatement, Expression, Keyword, MoveStatement, PerformStatement,
    SectionRegistry, Statement, StatementKind, Value, DEFAULT_MAX_PERFORM_DEPTH,
};
use log::{debug, trace, warn};

use crate::{Debugger, RuntimeError, RuntimeErrorKind, TrackedComponent, TrackingEvent};

type RuntimeResult<T> = Result<T, RuntimeErrorKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,

    /// `STOP RUN` or `GOBACK` ended the program early.
    Stopped,
}

pub struct Interpreter<D>
        where D: Debugger {
    variables: HashMap<String, Value>,
    debugger: D,
    tracked: Option<TrackedComponent>,
    output: Box<dyn Write>,
    max_perform_depth: usize,
    perform_depth: usize,
}

impl<D> Interpreter<D>
        where D: Debugger {
    pub fn new(debugger: D) -> Self {
        Self {
            variables: HashMap::new(),
            debugger,
            tracked: None,
            output: Box::new(stdout()),
            max_perform_depth: DEFAULT_MAX_PERFORM_DEPTH,
            perform_depth: 0,
        }
    }

    #[must_use]
    pub fn with_output(self, output: Box<dyn Write>) -> Self {
        Self {
            output,
            ..self
        }
    }

    #[must_use]
    pub fn with_tracking(self, tracked: Option<TrackedComponent>) -> Self {
        Self {
            tracked,
            ..self
        }
    }

    #[must_use]
    pub fn with_max_perform_depth(self, max_perform_depth: usize) -> Self {
        Self {
            max_perform_depth,
            ..self
        }
    }

    /// Executes a parsed program. Runtime errors are reported to
    /// `diagnostics` and abort only the body they occurred in.
    pub fn run(&mut self, statements: &[Statement], registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> RunOutcome {
        let outcome = self.run_body(statements, BodyKind::Procedural, registry, diagnostics);
        self.finish(diagnostics);
        outcome
    }

    /// Executes interactive input. Top-level `MOVE`s declare their target,
    /// as they would inside a section.
    pub fn run_fragment(&mut self, statements: &[Statement], registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> RunOutcome {
        let outcome = self.run_body(statements, BodyKind::Declaring, registry, diagnostics);
        self.finish(diagnostics);
        outcome
    }

    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    #[must_use]
    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    #[must_use]
    pub fn into_variables(self) -> HashMap<String, Value> {
        self.variables
    }

    #[must_use]
    pub fn debugger(&self) -> &D {
        &self.debugger
    }

    fn finish(&mut self, diagnostics: &mut Diagnostics) {
        if let Err(e) = self.output.flush() {
            diagnostics.runtime_error(&RuntimeErrorKind::Output { message: e.to_string() }.to_string(), 0);
        }

        self.debugger.on_exit();
    }

    fn run_body(&mut self, body: &[Statement], kind: BodyKind, registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> RunOutcome {
        match self.execute_body(body, kind, registry, diagnostics) {
            StatementResult::Continue => RunOutcome::Completed,
            StatementResult::Stop => RunOutcome::Stopped,
        }
    }

    fn execute_body(&mut self, body: &[Statement], kind: BodyKind, registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> StatementResult {
        for statement in body {
            match self.execute_statement(statement, kind, registry, diagnostics) {
                Ok(StatementResult::Continue) => continue,
                Ok(StatementResult::Stop) => return StatementResult::Stop,

                Err(kind) => {
                    let error = RuntimeError {
                        kind,
                        line: statement.line,
                    };

                    debug!("Abandoning body after {}", error.kind.name());
                    self.debugger.on_runtime_error(&error);
                    diagnostics.runtime_error(&error.message(), error.line);
                    return StatementResult::Continue;
                }
            }
        }

        StatementResult::Continue
    }

    fn execute_statement(&mut self, statement: &Statement, body: BodyKind, registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> RuntimeResult<StatementResult> {
        self.debugger.on_statement(statement);

        match &statement.kind {
            StatementKind::Division(division) => {
                let kind = if division.marker == Keyword::ProcedureDivision {
                    BodyKind::Procedural
                } else {
                    BodyKind::Declaring
                };

                Ok(self.execute_body(&division.body, kind, registry, diagnostics))
            }

            StatementKind::DeclarationBlock(section) | StatementKind::ExecutableBlock(section) => {
                trace!("Entering block {} from above", section.name());
                Ok(self.execute_body(&section.body, BodyKind::Declaring, registry, diagnostics))
            }

            StatementKind::Move(statement) => {
                match body {
                    BodyKind::Declaring => self.execute_declaration(statement)?,
                    BodyKind::Procedural => {
                        _ = self.execute_expression(&statement.value)?;
                    }
                }

                Ok(StatementResult::Continue)
            }

            StatementKind::Arithmetic(statement) => {
                self.execute_arithmetic(statement)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::If(statement) => {
                if !self.execute_condition(&statement.condition)? {
                    return Ok(StatementResult::Continue);
                }

                Ok(self.execute_body(&statement.body, BodyKind::Procedural, registry, diagnostics))
            }

            StatementKind::Perform(statement) => {
                self.execute_perform(statement, registry, diagnostics)
            }

            StatementKind::Display(statement) => {
                self.execute_display(statement)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::Stop => {
                debug!("Program stopped on line {}", statement.line);
                Ok(StatementResult::Stop)
            }
        }
    }

    /// Binds the target of a `MOVE` without requiring it to exist.
    fn execute_declaration(&mut self, statement: &MoveStatement) -> RuntimeResult<()> {
        let value = self.execute_expression(statement.source())?;
        let name = &statement.target.lexeme;

        self.track_variable(name, &value, |name, value| TrackingEvent::Initialized { name, value });
        self.variables.insert(name.clone(), value);
        Ok(())
    }

    fn execute_arithmetic(&mut self, statement: &ArithmeticStatement) -> RuntimeResult<()> {
        let operand = self.execute_expression(&statement.value)?;
        let name = &statement.target.lexeme;

        let Some(current) = self.variables.get(name) else {
            return Err(RuntimeErrorKind::UndefinedVariable { name: name.clone() });
        };

        let (Some(number), Some(target)) = (operand.as_number(), current.as_number()) else {
            return Err(RuntimeErrorKind::ArithmeticOperands {
                verb: statement.verb,
                value_type: operand.type_name().to_string(),
                target_type: current.type_name().to_string(),
            });
        };

        if statement.verb == ArithmeticVerb::Divide && number == 0.0 {
            return Err(RuntimeErrorKind::DivisionByZero);
        }

        let result = Value::Number(statement.verb.apply(target, number));
        self.track_variable(name, &result, |name, value| TrackingEvent::Updated { name, value });
        self.variables.insert(name.clone(), result);
        Ok(())
    }

    fn execute_perform(&mut self, statement: &PerformStatement, registry: &SectionRegistry, diagnostics: &mut Diagnostics) -> RuntimeResult<StatementResult> {
        let name = statement.target.lexeme.to_ascii_uppercase();

        let Some(section) = registry.lookup(&name) else {
            return Err(RuntimeErrorKind::SectionNotFound { name });
        };

        if self.perform_depth >= self.max_perform_depth {
            return Err(RuntimeErrorKind::PerformDepthExceeded {
                depth: self.max_perform_depth,
                name,
            });
        }

        if self.tracked.as_ref().is_some_and(|tracked| tracked.tracks_section(&name)) {
            self.emit_tracking(TrackingEvent::Performed { name: name.clone() });
        }

        debug!("Performing {name} at depth {}", self.perform_depth + 1);
        self.debugger.enter_section(&name, &section);
        self.perform_depth += 1;

        let result = self.execute_body(&section.body, BodyKind::Procedural, registry, diagnostics);

        self.perform_depth -= 1;
        self.debugger.leave_section(&name);
        Ok(result)
    }

    fn execute_display(&mut self, statement: &DisplayStatement) -> RuntimeResult<()> {
        let mut line = String::new();
        for value in &statement.values {
            line += &self.execute_expression(value)?.to_string();
        }

        self.write_line(&line)?;
        self.debugger.on_output(&line);
        Ok(())
    }

    fn execute_condition(&mut self, condition: &Expression) -> RuntimeResult<bool> {
        Ok(matches!(self.execute_expression(condition)?, Value::Boolean(true)))
    }

    pub fn execute_expression(&mut self, expression: &Expression) -> RuntimeResult<Value> {
        match expression {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Variable(name) => self.execute_variable(&name.lexeme),
            Expression::Assign(expression) => self.execute_assign(expression),
            Expression::Binary(expression) => self.execute_comparison(expression),
        }
    }

    fn execute_variable(&mut self, name: &str) -> RuntimeResult<Value> {
        let Some(value) = self.variables.get(name).cloned() else {
            return Err(RuntimeErrorKind::UndefinedVariable { name: name.to_string() });
        };

        self.track_variable(name, &value, |name, value| TrackingEvent::Accessed { name, value });
        Ok(value)
    }

    fn execute_assign(&mut self, expression: &AssignExpression) -> RuntimeResult<Value> {
        let value = self.execute_expression(&expression.value)?;
        let name = &expression.name.lexeme;

        let Some(slot) = self.variables.get_mut(name) else {
            return Err(RuntimeErrorKind::UndefinedVariable { name: name.clone() });
        };

        *slot = value.clone();
        self.track_variable(name, &value, |name, value| TrackingEvent::Updated { name, value });
        Ok(value)
    }

    fn execute_comparison(&mut self, expression: &BinaryExpression) -> RuntimeResult<Value> {
        let left = self.execute_expression(&expression.left)?;
        let right = self.execute_expression(&expression.right)?;
        let operator = expression.operator;

        let ordering = match (&left, &right) {
            (Value::Number(left), Value::Number(right)) => left.partial_cmp(right),
            (Value::String(left), Value::String(right)) => Some(left.cmp(right)),

            _ if !operator.is_ordering() => {
                let equal = left == right;
                return Ok(Value::Boolean(equal == (operator == Comparison::Equality)));
            }

            _ => {
                return Err(RuntimeErrorKind::ComparisonOperands {
                    operator,
                    left_type: left.type_name().to_string(),
                    right_type: right.type_name().to_string(),
                });
            }
        };

        Ok(Value::Boolean(compare(operator, ordering)))
    }

    fn track_variable(&mut self, name: &str, value: &Value, event: impl FnOnce(String, Value) -> TrackingEvent) {
        if self.tracked.as_ref().is_some_and(|tracked| tracked.tracks_variable(name)) {
            self.emit_tracking(event(name.to_string(), value.clone()));
        }
    }

    /// Tracking never alters a run, so a failing write is only logged.
    fn emit_tracking(&mut self, event: TrackingEvent) {
        if let Err(e) = writeln!(self.output, "{event}") {
            warn!("Could not write tracking event: {e}");
        }

        self.debugger.on_tracking(&event);
    }

    fn write_line(&mut self, line: &str) -> RuntimeResult<()> {
        writeln!(self.output, "{line}")
            .map_err(|e| RuntimeErrorKind::Output { message: e.to_string() })
    }
}

/// `None` ordering comes from NaN operands, which only compare unequal.
fn compare(operator: Comparison, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return operator == Comparison::Inequality;
    };

    match operator {
        Comparison::Equality => ordering == Ordering::Equal,
        Comparison::Inequality => ordering != Ordering::Equal,
        Comparison::GreaterThan => ordering == Ordering::Greater,
        Comparison::GreaterThanOrEqual => ordering != Ordering::Less,
        Comparison::LessThan => ordering == Ordering::Less,
        Comparison::LessThanOrEqual => ordering != Ordering::Greater,
    }
}

/// How direct `MOVE` children of a body are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    /// Binds the target, whether it exists or not.
    Declaring,

    /// Assigns to an existing variable.
    Procedural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
enum StatementResult {
    Continue,
    Stop,
}
