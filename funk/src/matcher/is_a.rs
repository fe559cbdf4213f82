use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Object, Value};

use super::Matcher;

/// Create an [`IsA`] matcher for the type `T`.
pub fn is_a<T: Object>() -> IsA {
    IsA {
        type_id: TypeId::of::<T>(),
        type_name: type_name::<T>(),
    }
}

/// Matcher that accepts values of a specific type.
#[must_use]
#[derive(Debug)]
pub struct IsA {
    type_id: TypeId,
    type_name: &'static str,
}

impl Matcher for IsA {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        if value.type_id() == self.type_id {
            true
        } else {
            mismatch.push(format!("got {}", describe(value.type_name())));

            false
        }
    }
}

impl Display for IsA {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&describe(self.type_name))
    }
}

fn describe(type_name: &str) -> String {
    format!("<value of type: {type_name}>")
}
