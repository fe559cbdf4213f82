//! The [`misc`](self) module contains different helper functions and traits,
//! mostly used to render invocations and mismatch descriptions.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Render positional and keyword arguments as `a, b, key=value`.
pub fn arguments_str<P, K>(positional: &[P], keyword: &BTreeMap<String, K>) -> String
where
    P: Display,
    K: Display,
{
    positional
        .iter()
        .map(ToString::to_string)
        .chain(keyword.iter().map(|(key, value)| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a function call as `name(a, b, key=value)`.
pub fn function_call_str<P, K>(name: &str, positional: &[P], keyword: &BTreeMap<String, K>) -> String
where
    P: Display,
    K: Display,
{
    format!("{name}({})", arguments_str(positional, keyword))
}

/// Render a method call as `object.method(a, b, key=value)`.
pub fn method_call_str<P, K>(
    object: &str,
    method: &str,
    positional: &[P],
    keyword: &BTreeMap<String, K>,
) -> String
where
    P: Display,
    K: Display,
{
    format!("{object}.{}", function_call_str(method, positional, keyword))
}

/// Prefix every line but the first of `text` with `prefix`.
#[must_use]
pub fn indent(text: &str, prefix: &str) -> String {
    text.replace('\n', &format!("\n{prefix}"))
}

/// Outcome of a test body wrapped by [`with_mocks`](crate::with_mocks).
///
/// Verification only runs if the body finished successfully.
#[doc(hidden)]
pub trait Outcome {
    /// Returns `true` if the test body succeeded.
    fn is_success(&self) -> bool;
}

impl Outcome for () {
    fn is_success(&self) -> bool {
        true
    }
}

impl<T, E> Outcome for Result<T, E> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }
}
