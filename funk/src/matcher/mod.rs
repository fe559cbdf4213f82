//! The [`matcher`](self) module contains the matchers that are used to check
//! the arguments of an invocation against an expected call.

mod any;
mod contains;
mod equal;
mod has_attr;
mod is_a;
mod logic;

use std::fmt::Display;
use std::sync::Arc;

use crate::{Data, Mock, Value};

pub use any::{any_value, AnyValue};
pub use contains::{contains_exactly, ContainsExactly};
pub use equal::{equal_to, is_, EqualTo, Is};
pub use has_attr::{has_attr, HasAttr};
pub use is_a::{is_a, IsA};
pub use logic::{all_of, any_of, not_, AllOf, AnyOf, Not};

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is mostly used to verify the arguments of an expected call.
///
/// The [`Display`] implementation describes what the matcher accepts.
pub trait Matcher: Display + Send + Sync {
    /// Returns `true` if the passed `value` matches the expectation, `false`
    /// otherwise. If the value does not match, exactly one human readable
    /// description of the mismatch is appended to `mismatch`.
    fn matches(&self, value: &Value, mismatch: &mut Vec<String>) -> bool;

    /// Returns `true` if the passed `value` matches, discarding any mismatch
    /// description.
    fn is_match(&self, value: &Value) -> bool {
        self.matches(value, &mut Vec::new())
    }
}

/// Shared, type erased [`Matcher`].
pub type BoxedMatcher = Arc<dyn Matcher>;

/// Conversion into a [`BoxedMatcher`].
///
/// Matchers are used as they are. Raw values are wrapped in an [`EqualTo`]
/// matcher.
pub trait IntoMatcher {
    /// Convert `self` into a [`BoxedMatcher`].
    fn into_matcher(self) -> BoxedMatcher;
}

impl<M> IntoMatcher for M
where
    M: Matcher + 'static,
{
    fn into_matcher(self) -> BoxedMatcher {
        Arc::new(self)
    }
}

impl IntoMatcher for BoxedMatcher {
    fn into_matcher(self) -> BoxedMatcher {
        self
    }
}

macro_rules! impl_into_matcher {
    ($( $type:ty ),+ $(,)?) => {
        $(
            impl IntoMatcher for $type {
                fn into_matcher(self) -> BoxedMatcher {
                    Arc::new(equal_to(self))
                }
            }
        )+
    };
}

impl_into_matcher!((), bool, char, String, &str, Value, Data, Mock, Vec<Value>);
impl_into_matcher!(i8, i16, i32, i64, i128, isize);
impl_into_matcher!(u8, u16, u32, u64, u128, usize);
impl_into_matcher!(f32, f64);

impl<T> IntoMatcher for Vec<T>
where
    T: crate::Object + Clone + PartialEq,
{
    fn into_matcher(self) -> BoxedMatcher {
        Arc::new(equal_to(self))
    }
}

/// Convert the passed `value` into a matcher. Raw values are wrapped in an
/// [`EqualTo`] matcher.
pub fn to_matcher<M: IntoMatcher>(value: M) -> BoxedMatcher {
    value.into_matcher()
}

fn join_matchers(glue: &str, matchers: &[BoxedMatcher]) -> String {
    matchers
        .iter()
        .map(|matcher| format!("({matcher})"))
        .collect::<Vec<_>>()
        .join(glue)
}
