//! The [`args`](self) module contains the arguments of an actual invocation
//! ([`Args`]) and the argument shape an expected call accepts ([`Params`]).

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::matcher::{to_matcher, BoxedMatcher, IntoMatcher};
use crate::misc::arguments_str;
use crate::Value;

/// Positional and keyword arguments of an invocation.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl Args {
    /// Create a new empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg<V: Into<Value>>(mut self, value: V) -> Self {
        self.positional.push(value.into());

        self
    }

    /// Add the keyword argument `name`.
    #[must_use]
    pub fn kwarg<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.keyword.insert(name.into(), value.into());

        self
    }

    /// Positional arguments in invocation order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Keyword arguments sorted by name.
    #[must_use]
    pub fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Get the positional argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Get the keyword argument `name`.
    #[must_use]
    pub fn get_kwarg(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&arguments_str(&self.positional, &self.keyword))
    }
}

/// Argument shape of an expected call: one matcher for every positional and
/// every keyword argument.
#[derive(Default, Clone)]
pub struct Params {
    positional: Vec<BoxedMatcher>,
    keyword: BTreeMap<String, BoxedMatcher>,
}

impl Params {
    /// Create a new parameter list that only accepts calls without arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a matcher for the next positional argument. Raw values are
    /// compared for equality.
    #[must_use]
    pub fn arg<M: IntoMatcher>(mut self, matcher: M) -> Self {
        self.positional.push(to_matcher(matcher));

        self
    }

    /// Add a matcher for the keyword argument `name`. Raw values are compared
    /// for equality.
    #[must_use]
    pub fn kwarg<K, M>(mut self, name: K, matcher: M) -> Self
    where
        K: Into<String>,
        M: IntoMatcher,
    {
        self.keyword.insert(name.into(), to_matcher(matcher));

        self
    }

    /// Returns `true` if the passed `args` match this parameter list. If not,
    /// a description of the mismatch is appended to `mismatch`.
    ///
    /// The arguments are accepted if the number of positional arguments and
    /// the names of the keyword arguments match exactly, and every matcher
    /// accepts its argument.
    pub fn accepts(&self, args: &Args, mismatch: &mut Vec<String>) -> bool {
        if self.positional.len() != args.positional.len() {
            mismatch.push("wrong number of positional arguments".into());

            return false;
        }

        let missing = self
            .keyword
            .keys()
            .filter(|key| !args.keyword.contains_key(*key))
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            mismatch.push(format!("missing keyword arguments: {}", missing.join(", ")));

            return false;
        }

        let unexpected = args
            .keyword
            .keys()
            .filter(|key| !self.keyword.contains_key(*key))
            .map(String::as_str)
            .collect::<Vec<_>>();
        if !unexpected.is_empty() {
            mismatch.push(format!(
                "unexpected keyword arguments: {}",
                unexpected.join(", ")
            ));

            return false;
        }

        let mut accepted = true;
        let mut lines = Vec::new();

        for (matcher, value) in self.positional.iter().zip(&args.positional) {
            lines.push(describe_argument(None, matcher, value, &mut accepted));
        }

        for (key, matcher) in &self.keyword {
            let value = &args.keyword[key];
            lines.push(describe_argument(Some(key.as_str()), matcher, value, &mut accepted));
        }

        if !accepted {
            mismatch.push(format!("arguments did not match\n{}", lines.join("\n")));
        }

        accepted
    }
}

fn describe_argument(
    key: Option<&str>,
    matcher: &BoxedMatcher,
    value: &Value,
    accepted: &mut bool,
) -> String {
    let mut mismatch = Vec::new();
    let verdict = if matcher.matches(value, &mut mismatch) {
        "matched".to_owned()
    } else {
        *accepted = false;

        mismatch.join(", ")
    };

    match key {
        Some(key) => format!("{key}={matcher} [{verdict}]"),
        None => format!("{matcher} [{verdict}]"),
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&arguments_str(&self.positional, &self.keyword))
    }
}

/// Implementation detail of [`args!`](crate::args) and [`params!`](crate::params).
#[doc(hidden)]
#[macro_export]
macro_rules! __build_args {
    (@acc [$( $out:tt )*]) => {
        $( $out )*
    };
    (@acc [$( $out:tt )*] $key:ident = $value:expr $(, $( $rest:tt )* )?) => {
        $crate::__build_args!(@acc [$( $out )* .kwarg(stringify!($key), $value)] $( $( $rest )* )?)
    };
    (@acc [$( $out:tt )*] $value:expr $(, $( $rest:tt )* )?) => {
        $crate::__build_args!(@acc [$( $out )* .arg($value)] $( $( $rest )* )?)
    };
}

/// Build the [`Args`] of an invocation.
///
/// Positional arguments are written as plain expressions, keyword arguments as
/// `name = expr`.
///
/// ```
/// let args = funk::args!(1, "x", key = 3);
///
/// assert_eq!("1, \"x\", key=3", args.to_string());
/// ```
#[macro_export]
macro_rules! args {
    ($( $tokens:tt )*) => {
        $crate::__build_args!(@acc [$crate::Args::new()] $( $tokens )*)
    };
}

/// Build the [`Params`] of an expected call.
///
/// Works like [`args!`](crate::args), but every argument may be a matcher or
/// a raw value that is compared for equality.
///
/// ```
/// use funk::matcher::any_value;
///
/// let params = funk::params!(1, any_value(), key = 3);
///
/// assert_eq!("1, <any value>, key=3", params.to_string());
/// ```
#[macro_export]
macro_rules! params {
    ($( $tokens:tt )*) => {
        $crate::__build_args!(@acc [$crate::Params::new()] $( $tokens )*)
    };
}
