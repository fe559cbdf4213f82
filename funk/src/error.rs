//! The [`error`](self) module defines the [`Error`] type that is returned by
//! all fallible operations of this crate.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::action::Raised;
use crate::misc::indent;

/// Error returned by configuring, invoking or verifying mocks.
///
/// The message of every variant is part of the public interface: tests assert
/// on it, so the wording is kept stable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An expectation was set for a method the base type does not define.
    #[error("Method {method} is not defined on {base}")]
    UndefinedMethod {
        /// Name of the base type.
        base: String,
        /// Name of the requested method.
        method: String,
    },

    /// An expectation was set for a member of the base type that is not a method.
    #[error("Member {method} of {base} is not callable")]
    NotCallable {
        /// Name of the base type.
        base: String,
        /// Name of the requested member.
        method: String,
    },

    /// No registered call accepted the invocation.
    #[error("Unexpected invocation: {invocation}\n{}", describe_candidates(.target, .candidates))]
    UnexpectedInvocation {
        /// Rendering of the actual invocation, e.g. `database.save("y")`.
        invocation: String,
        /// Qualified name of the invoked method, e.g. `database.save`.
        target: String,
        /// Every registered call that was tried, with the reason it rejected
        /// the invocation.
        candidates: Vec<Candidate>,
    },

    /// A call was still open when the mocks were verified.
    #[error("Not all expectations were satisfied. Expected call: {expected}")]
    Unsatisfied {
        /// Rendering of the unsatisfied call.
        expected: String,
    },

    /// A call of a sequence was invoked before an earlier one.
    #[error("Invocation out of order. Expected {expected}, but got {actual}.")]
    OutOfOrder {
        /// Rendering of the call the sequence expected next.
        expected: String,
        /// Rendering of the call that was invoked.
        actual: String,
    },

    /// A call of a sequence was invoked after the sequence was finished.
    #[error("Invocation out of order. Expected no more calls in sequence, but got {actual}.")]
    NoMoreCalls {
        /// Rendering of the call that was invoked.
        actual: String,
    },

    /// A bounded call was invoked more often than expected.
    #[error("{call} cannot be called any more times")]
    Exhausted {
        /// Rendering of the exhausted call.
        call: String,
    },

    /// A call was invoked directly with arguments it does not accept.
    #[error("{call} was called with wrong arguments: {reason}")]
    WrongArguments {
        /// Rendering of the call.
        call: String,
        /// Why the arguments were rejected.
        reason: String,
    },

    /// The error a call was configured to raise.
    #[error("{0}")]
    Raised(Raised),
}

impl Error {
    /// Returns the configured error if this is [`Error::Raised`].
    #[must_use]
    pub fn raised(&self) -> Option<&Raised> {
        match self {
            Self::Raised(raised) => Some(raised),
            _ => None,
        }
    }
}

/// A registered call that rejected an invocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Candidate {
    /// Rendering of the call, e.g. `database.save("x")`.
    pub call: String,

    /// Why the call rejected the invocation. May span several lines.
    pub reason: String,
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.call, indent(&self.reason, "    "))
    }
}

fn describe_candidates(target: &str, candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "No expectations set.".into();
    }

    let mut ret = format!("The following expectations on {target} did not match:");
    for candidate in candidates {
        ret.push_str("\n    ");
        ret.push_str(&indent(&candidate.to_string(), "    "));
    }

    ret
}
