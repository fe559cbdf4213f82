//! The [`call`](self) module implements the [`Call`] type: a single expected
//! or allowed invocation of a mock.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::action::{Action, Invoke, Raised};
use crate::{Args, CallCount, Error, Params, Sequence, Value};

/// Expected (bounded) or allowed (unbounded) invocation of a mock.
///
/// A [`Call`] is a handle: clones refer to the same expectation. The builder
/// methods consume and return the handle, so the result may be dropped once
/// the call is configured. The mock keeps its own handle.
#[derive(Clone)]
pub struct Call {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    name: String,
    params: Option<Params>,
    count: CallCount,
    action: Action,
    sequences: Vec<Sequence>,
}

impl Call {
    /// Create a new call with the passed `name` and call `count`.
    ///
    /// The call accepts any arguments and returns [`Value::none`] until it is
    /// configured otherwise.
    pub fn new<N: Into<String>>(name: N, count: CallCount) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                name: name.into(),
                params: None,
                count,
                action: Action::Nothing,
                sequences: Vec::new(),
            })),
        }
    }

    /// Only accept invocations whose arguments match `params`.
    pub fn with_args(self, params: Params) -> Self {
        self.inner.lock().params = Some(params);

        self
    }

    /// Return `value` when invoked.
    pub fn returns<V: Into<Value>>(self, value: V) -> Self {
        self.inner.lock().action = Action::Return(value.into());

        self
    }

    /// Fail with [`Error::Raised`] carrying `error` when invoked.
    pub fn raises<E: Into<Raised>>(self, error: E) -> Self {
        self.inner.lock().action = Action::Raise(error.into());

        self
    }

    /// Return the result of `func`, called with the actual arguments, when
    /// invoked.
    pub fn invokes<F, R>(self, func: F) -> Self
    where
        F: Fn(&Args) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        self.inner.lock().action = Action::Invoke(Invoke::new(func));

        self
    }

    /// Expect exactly `n` invocations.
    pub fn times(self, n: usize) -> Self {
        self.inner.lock().count = CallCount::exactly(n);

        self
    }

    /// Add this call to the passed `sequence`.
    ///
    /// A call may be part of several sequences.
    pub fn in_sequence(self, sequence: &Sequence) -> Self {
        self.inner.lock().sequences.push(sequence.clone());
        sequence.add_expected_call(&self);

        self
    }

    /// Name of the call, e.g. `database.save`.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.lock().name.clone()
    }

    /// Returns `true` if the call has the passed `name`.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.inner.lock().name == name
    }

    /// Returns `true` if the call would accept an invocation with the passed
    /// `args`. If not, the reason is appended to `mismatch`.
    pub fn accepts(&self, args: &Args, mismatch: &mut Vec<String>) -> bool {
        self.inner.lock().accepts(args, mismatch)
    }

    /// Invoke the call with the passed `args`.
    ///
    /// Consumes one invocation of the call count, notifies all sequences the
    /// call is part of and executes the configured action.
    ///
    /// # Errors
    /// - [`Error::Exhausted`] if the call must not be invoked any more
    /// - [`Error::WrongArguments`] if the call does not accept `args`
    /// - [`Error::OutOfOrder`] or [`Error::NoMoreCalls`] if a sequence was violated
    /// - [`Error::Raised`] if the call was configured to raise an error
    pub fn call(&self, args: &Args) -> Result<Value, Error> {
        let (action, sequences) = {
            let mut inner = self.inner.lock();
            let mut mismatch = Vec::new();

            if !inner.accepts(args, &mut mismatch) {
                let call = inner.to_string();

                return Err(if inner.count.none_remaining() {
                    Error::Exhausted { call }
                } else {
                    Error::WrongArguments {
                        call,
                        reason: mismatch.join("\n"),
                    }
                });
            }

            inner.count.decrement();

            tracing::debug!(call = %*inner, %args, "call consumed");

            (inner.action.clone(), inner.sequences.clone())
        };

        for sequence in &sequences {
            sequence.add_actual_call(self)?;
        }

        action.exec(args)
    }

    /// Returns `true` if the call was invoked the expected number of times.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.inner.lock().count.is_satisfied()
    }

    /// Returns `true` if `self` and `other` are handles of the same call.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> WeakCall {
        WeakCall(Arc::downgrade(&self.inner))
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&*self.inner.lock(), f)
    }
}

impl Debug for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let inner = self.inner.lock();

        f.debug_struct("Call")
            .field("call", &inner.to_string())
            .field("count", &inner.count)
            .field("action", &inner.action)
            .finish_non_exhaustive()
    }
}

impl Inner {
    fn accepts(&self, args: &Args, mismatch: &mut Vec<String>) -> bool {
        if self.count.none_remaining() {
            mismatch.push("expectation has already been satisfied".into());

            return false;
        }

        match &self.params {
            Some(params) => params.accepts(args, mismatch),
            None => true,
        }
    }
}

impl Display for Inner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.params {
            Some(params) => write!(f, "{}({params})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Reference to a [`Call`] that does not keep the call alive.
///
/// Used by sequences, so calls and sequences do not keep each other alive.
#[derive(Clone)]
pub(crate) struct WeakCall(Weak<Mutex<Inner>>);

impl WeakCall {
    /// Returns `true` if this refers to the passed `call`.
    pub(crate) fn is(&self, call: &Call) -> bool {
        self.0.as_ptr() == Arc::as_ptr(&call.inner)
    }

    /// Returns `true` if the call is satisfied. Dropped calls are satisfied.
    pub(crate) fn is_satisfied(&self) -> bool {
        self.0
            .upgrade()
            .map_or(true, |inner| inner.lock().count.is_satisfied())
    }
}

impl Display for WeakCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0.upgrade() {
            Some(inner) => Display::fmt(&*inner.lock(), f),
            None => f.write_str("<dropped call>"),
        }
    }
}

impl Debug for WeakCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}
