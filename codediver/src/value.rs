// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use strum::AsRefStr;

#[derive(Debug, Clone, PartialEq, AsRefStr)]
pub enum Value {
    #[strum(serialize = "number")]
    Number(f64),

    #[strum(serialize = "string")]
    String(String),

    #[strum(serialize = "boolean")]
    Boolean(bool),

    /// Declared item without a picture or initial value.
    #[strum(serialize = "absent")]
    Absent,
}

impl Value {
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => {
                // `-0` prints as `0`; integral values print without a fraction.
                let number = if *number == 0.0 { 0.0 } else { *number };
                number.fmt(f)
            }
            Self::String(string) => f.write_str(string),
            Self::Boolean(true) => f.write_str("true"),
            Self::Boolean(false) => f.write_str("false"),
            Self::Absent => f.write_str("nil"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Number(5.0), "5")]
    #[case(Value::Number(-0.0), "0")]
    #[case(Value::Number(2.5), "2.5")]
    #[case(Value::Number(-18.0), "-18")]
    #[case(Value::String("hi".into()), "hi")]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Absent, "nil")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Number(1.0), "number")]
    #[case(Value::String(String::new()), "string")]
    #[case(Value::Absent, "absent")]
    fn type_name(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.type_name(), expected);
    }
}
