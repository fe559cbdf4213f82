use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

/// Create an [`AnyValue`] matcher.
pub fn any_value() -> AnyValue {
    AnyValue
}

/// Matcher that accepts every value.
#[must_use]
#[derive(Debug)]
pub struct AnyValue;

impl Matcher for AnyValue {
    fn matches(&self, _value: &Value, _mismatch: &mut Vec<String>) -> bool {
        true
    }
}

impl Display for AnyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<any value>")
    }
}
