use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::misc::arguments_str;
use crate::Value;

use super::{to_matcher, BoxedMatcher, IntoMatcher, Matcher};

/// Create an empty [`HasAttr`] matcher. Use [`HasAttr::attr`] or the
/// [`has_attr!`](crate::has_attr) macro to add attributes.
pub fn has_attr() -> HasAttr {
    HasAttr::default()
}

/// Matcher that accepts values with attributes that match the expected ones.
///
/// Attributes are checked in order of their names.
#[must_use]
#[derive(Default, Clone)]
pub struct HasAttr {
    attrs: BTreeMap<String, BoxedMatcher>,
}

impl HasAttr {
    /// Create a new [`HasAttr`] matcher without any attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the attribute `name` to match the passed `matcher`. Raw values
    /// are compared for equality.
    pub fn attr<K, M>(mut self, name: K, matcher: M) -> Self
    where
        K: Into<String>,
        M: IntoMatcher,
    {
        self.attrs.insert(name.into(), to_matcher(matcher));

        self
    }
}

impl Matcher for HasAttr {
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool {
        for (name, matcher) in &self.attrs {
            let Some(attr) = value.attr(name) else {
                mismatch.push(format!("value was missing attribute: {name}"));

                return false;
            };

            if !matcher.is_match(&attr) {
                mismatch.push(format!("got <value with attribute: {name}={attr:?}>"));

                return false;
            }
        }

        true
    }
}

impl Display for HasAttr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "<value with attributes: {}>",
            arguments_str::<BoxedMatcher, _>(&[], &self.attrs)
        )
    }
}

/// Create a [`HasAttr`](crate::matcher::HasAttr) matcher from `name = matcher`
/// pairs. Raw values are compared for equality.
///
/// ```
/// use funk::{has_attr, matcher::{is_a, Matcher}, Data};
///
/// let matcher = has_attr!(width = 20, height = is_a::<i32>());
///
/// assert!(matcher.is_match(&Data::new().with("width", 20).with("height", 10).into()));
/// ```
#[macro_export]
macro_rules! has_attr {
    ($( $name:ident = $matcher:expr ),* $(,)?) => {
        $crate::matcher::HasAttr::new()
            $( .attr(stringify!($name), $matcher) )*
    };
}
