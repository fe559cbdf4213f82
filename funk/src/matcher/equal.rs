use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

use super::Matcher;

/* EqualTo */

/// Create an [`EqualTo`] matcher for the passed `value`.
pub fn equal_to<V: Into<Value>>(value: V) -> EqualTo {
    EqualTo(value.into())
}

/// Matcher that accepts values that are equal to the expected one.
#[must_use]
#[derive(Debug)]
pub struct EqualTo(pub Value);

impl Matcher for EqualTo {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        if self.0 == *value {
            true
        } else {
            mismatch.push(format!("got {value:?}"));

            false
        }
    }
}

impl Display for EqualTo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}

/* Is */

/// Create an [`Is`] matcher for the passed `value`.
pub fn is_<V: Into<Value>>(value: V) -> Is {
    Is(value.into())
}

/// Matcher that only accepts the very same value, not just an equal one.
///
/// Clones of a [`Value`] and handles to the same mock are the same value.
#[must_use]
#[derive(Debug)]
pub struct Is(pub Value);

impl Matcher for Is {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        if self.0.is_same(value) {
            true
        } else {
            mismatch.push(format!("got: {value:?}"));

            false
        }
    }
}

impl Display for Is {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<is: {:?}>", self.0)
    }
}
