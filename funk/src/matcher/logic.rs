use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::Value;

use super::{join_matchers, to_matcher, BoxedMatcher, IntoMatcher, Matcher};

/* Not */

/// Create a [`Not`] matcher that inverts the passed `matcher`.
pub fn not_<M: IntoMatcher>(matcher: M) -> Not {
    Not(to_matcher(matcher))
}

/// Matcher that accepts every value the inner matcher rejects.
#[must_use]
pub struct Not(BoxedMatcher);

impl Matcher for Not {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        if self.0.is_match(value) {
            mismatch.push(format!("matched: {}", self.0));

            false
        } else {
            true
        }
    }
}

impl Display for Not {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "not {}", self.0)
    }
}

/* AllOf */

/// Create an [`AllOf`] matcher from the passed `matchers`.
///
/// See [`all_of!`](crate::all_of) to mix matchers and raw values.
pub fn all_of<I>(matchers: I) -> AllOf
where
    I: IntoIterator<Item = BoxedMatcher>,
{
    AllOf(matchers.into_iter().collect())
}

/// Matcher that accepts values that are accepted by all inner matchers.
#[must_use]
pub struct AllOf(Vec<BoxedMatcher>);

impl Matcher for AllOf {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        self.0.iter().all(|matcher| matcher.matches(value, mismatch))
    }
}

impl Display for AllOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&join_matchers(" and ", &self.0))
    }
}

/* AnyOf */

/// Create an [`AnyOf`] matcher from the passed `matchers`.
///
/// See [`any_of!`](crate::any_of) to mix matchers and raw values.
pub fn any_of<I>(matchers: I) -> AnyOf
where
    I: IntoIterator<Item = BoxedMatcher>,
{
    AnyOf(matchers.into_iter().collect())
}

/// Matcher that accepts values that are accepted by at least one inner matcher.
#[must_use]
pub struct AnyOf(Vec<BoxedMatcher>);

impl Matcher for AnyOf {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        if self.0.iter().any(|matcher| matcher.is_match(value)) {
            true
        } else {
            mismatch.push(format!(
                "did not match any of: {}",
                join_matchers(", ", &self.0)
            ));

            false
        }
    }
}

impl Display for AnyOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&join_matchers(" or ", &self.0))
    }
}

/// Create an [`AllOf`](crate::matcher::AllOf) matcher from matchers and raw
/// values.
#[macro_export]
macro_rules! all_of {
    ($( $matcher:expr ),* $(,)?) => {{
        let matchers: ::std::vec::Vec<$crate::matcher::BoxedMatcher> =
            ::std::vec![$( $crate::matcher::to_matcher($matcher) ),*];

        $crate::matcher::all_of(matchers)
    }};
}

/// Create an [`AnyOf`](crate::matcher::AnyOf) matcher from matchers and raw
/// values.
#[macro_export]
macro_rules! any_of {
    ($( $matcher:expr ),* $(,)?) => {{
        let matchers: ::std::vec::Vec<$crate::matcher::BoxedMatcher> =
            ::std::vec![$( $crate::matcher::to_matcher($matcher) ),*];

        $crate::matcher::any_of(matchers)
    }};
}
