//! The [`sequence`](self) module contains the [`Sequence`] type that is used
//! to manage the order of different call expectations.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::call::{Call, WeakCall};
use crate::Error;

/// A sequence is used to manage the order of call expectations.
///
/// Calls are added to the sequence using [`Call::in_sequence`]. When a call
/// of the sequence is invoked, all calls in front of it have to be satisfied
/// already. Satisfied calls stay at the front of the sequence until a later
/// call is invoked, so unbounded calls may be invoked any number of times
/// before the sequence moves on.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct Sequence {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default, Debug)]
struct Inner {
    expected: VecDeque<WeakCall>,
}

impl Sequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `call` to the end of the sequence.
    pub fn add_expected_call(&self, call: &Call) {
        self.inner.lock().expected.push_back(call.downgrade());
    }

    /// Record the invocation of `call`.
    ///
    /// Satisfied calls in front of `call` are removed from the sequence.
    ///
    /// # Errors
    /// - [`Error::NoMoreCalls`] if every call of the sequence is finished
    /// - [`Error::OutOfOrder`] if an unsatisfied call is in front of `call`
    pub fn add_actual_call(&self, call: &Call) -> Result<(), Error> {
        let mut inner = self.inner.lock();

        while let Some(front) = inner.expected.front() {
            if front.is(call) || !front.is_satisfied() {
                break;
            }

            inner.expected.pop_front();
        }

        match inner.expected.front() {
            None => Err(Error::NoMoreCalls {
                actual: call.to_string(),
            }),
            Some(front) if !front.is(call) => {
                tracing::debug!(expected = %front, actual = %call, "invocation out of order");

                Err(Error::OutOfOrder {
                    expected: front.to_string(),
                    actual: call.to_string(),
                })
            }
            Some(_) => Ok(()),
        }
    }
}
