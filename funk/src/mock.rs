//! The [`mock`](self) module implements the [`Mock`] type: a named test double
//! that dispatches invocations to the calls configured on it.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Candidate;
use crate::misc::{function_call_str, method_call_str};
use crate::value::equals;
use crate::{Args, Base, Call, CallCount, Error, Object, Value};

/// Name of mocks that were created without a name and without a base type.
pub const UNNAMED: &str = "unnamed";

/// Named test double.
///
/// Methods are configured with [`expects`](Mock::expects) and
/// [`allows`](Mock::allows), direct invocations of the mock itself with
/// [`expects_call`](Mock::expects_call) and [`allows_call`](Mock::allows_call).
/// Invocations are dispatched to the configured calls in the order they were
/// configured; the first call that accepts the arguments handles the
/// invocation.
///
/// A [`Mock`] is a handle: clones refer to the same mock.
///
/// ```
/// use funk::{args, params, Mock};
///
/// let database = Mock::new("database");
/// database
///     .expects("save")
///     .unwrap()
///     .with_args(params!("x"))
///     .returns("ok");
///
/// let ret = database.invoke("save", args!("x")).unwrap();
///
/// assert_eq!(Some("ok".to_owned()), ret.get::<String>());
/// assert!(database.verify().is_ok());
/// ```
#[derive(Clone)]
pub struct Mock {
    name: Arc<str>,
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    base: Option<Base>,
    methods: Vec<(String, Vec<Call>)>,
    calls: Vec<Call>,
    attributes: BTreeMap<String, Value>,
}

impl Mock {
    /// Create a new mock named `name` that accepts any method name.
    #[must_use]
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self::with_base(name.into(), None)
    }

    /// Create a new mock of the passed `base` type, named after it.
    #[must_use]
    pub fn of(base: &Base) -> Self {
        Self::with_base(base.default_mock_name(), Some(base.clone()))
    }

    /// Create a new mock of the passed `base` type named `name`.
    #[must_use]
    pub fn of_named<N: Into<String>>(base: &Base, name: N) -> Self {
        Self::with_base(name.into(), Some(base.clone()))
    }

    fn with_base(name: String, base: Option<Base>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(Mutex::new(Inner {
                base,
                ..Inner::default()
            })),
        }
    }

    /// Name of the mock.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expect exactly one invocation of `method`.
    ///
    /// # Errors
    /// Fails if the mock has a base type that does not declare `method` as a
    /// method. See [`Base::check_method`].
    pub fn expects(&self, method: &str) -> Result<Call, Error> {
        self.add_method_call(method, CallCount::exactly(1))
    }

    /// Allow any number of invocations of `method`.
    ///
    /// # Errors
    /// Fails if the mock has a base type that does not declare `method` as a
    /// method. See [`Base::check_method`].
    pub fn allows(&self, method: &str) -> Result<Call, Error> {
        self.add_method_call(method, CallCount::unbounded())
    }

    /// Expect exactly one invocation of the mock itself.
    pub fn expects_call(&self) -> Call {
        self.add_call(CallCount::exactly(1))
    }

    /// Allow any number of invocations of the mock itself.
    pub fn allows_call(&self) -> Call {
        self.add_call(CallCount::unbounded())
    }

    /// Set the plain data attribute `name`.
    pub fn set_attr<N, V>(&self, name: N, value: V) -> &Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.inner
            .lock()
            .attributes
            .insert(name.into(), value.into());

        self
    }

    /// Get the plain data attribute `name`.
    ///
    /// Returns `None` if the attribute was never set, or if calls are
    /// configured for a method of the same name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<Value> {
        let inner = self.inner.lock();
        if inner.method_calls(name).is_some() {
            return None;
        }

        inner.attributes.get(name).cloned()
    }

    /// Get the [`Dispatcher`] of `method`, if calls are configured for it.
    #[must_use]
    pub fn method(&self, method: &str) -> Option<Dispatcher> {
        self.inner
            .lock()
            .method_calls(method)
            .is_some()
            .then(|| Dispatcher {
                mock: self.clone(),
                method: method.into(),
            })
    }

    /// Resolve the member `name` of the mock.
    ///
    /// Configured methods take precedence over plain data attributes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Attr> {
        self.method(name)
            .map(Attr::Method)
            .or_else(|| self.attr(name).map(Attr::Value))
    }

    /// Invoke `method` with the passed `args`.
    ///
    /// # Errors
    /// - [`Error::UnexpectedInvocation`] if no configured call accepts `args`
    /// - any error of [`Call::call`] of the accepting call
    pub fn invoke(&self, method: &str, args: Args) -> Result<Value, Error> {
        let calls = self
            .inner
            .lock()
            .method_calls(method)
            .cloned()
            .unwrap_or_default();

        let target = format!("{}.{method}", self.name);
        let invocation = method_call_str(
            &self.name,
            method,
            args.positional(),
            args.keyword(),
        );

        dispatch(target, invocation, &calls, &args)
    }

    /// Invoke the mock itself with the passed `args`.
    ///
    /// # Errors
    /// - [`Error::UnexpectedInvocation`] if no configured call accepts `args`
    /// - any error of [`Call::call`] of the accepting call
    pub fn call(&self, args: Args) -> Result<Value, Error> {
        let calls = self.inner.lock().calls.clone();
        let invocation = function_call_str(&self.name, args.positional(), args.keyword());

        dispatch(self.name.to_string(), invocation, &calls, &args)
    }

    /// Check that every configured call was invoked the expected number of
    /// times.
    ///
    /// Method calls are checked in the order they were configured, followed by
    /// the direct calls of the mock.
    ///
    /// # Errors
    /// Returns [`Error::Unsatisfied`] for the first unsatisfied call.
    pub fn verify(&self) -> Result<(), Error> {
        let calls = {
            let inner = self.inner.lock();

            inner
                .methods
                .iter()
                .flat_map(|(_, calls)| calls)
                .chain(&inner.calls)
                .cloned()
                .collect::<Vec<_>>()
        };

        match calls.iter().find(|call| !call.is_satisfied()) {
            Some(call) => {
                tracing::debug!(mock = %self.name, call = %call, "unsatisfied expectation");

                Err(Error::Unsatisfied {
                    expected: call.to_string(),
                })
            }
            None => Ok(()),
        }
    }

    /// Returns `true` if `self` and `other` are handles of the same mock.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn add_method_call(&self, method: &str, count: CallCount) -> Result<Call, Error> {
        let mut inner = self.inner.lock();

        if let Some(base) = &inner.base {
            base.check_method(method)?;
        }

        let call = Call::new(format!("{}.{method}", self.name), count);

        match inner.methods.iter_mut().find(|(name, _)| name == method) {
            Some((_, calls)) => calls.push(call.clone()),
            None => inner.methods.push((method.into(), vec![call.clone()])),
        }

        Ok(call)
    }

    fn add_call(&self, count: CallCount) -> Call {
        let call = Call::new(self.name.to_string(), count);
        self.inner.lock().calls.push(call.clone());

        call
    }
}

impl Default for Mock {
    fn default() -> Self {
        Self::new(UNNAMED)
    }
}

impl Debug for Mock {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.name)
    }
}

impl PartialEq for Mock {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Object for Mock {
    fn equals(&self, other: &dyn Object) -> bool {
        equals(self, other)
    }

    fn attr(&self, name: &str) -> Option<Value> {
        Mock::attr(self, name)
    }

    fn identity(&self) -> *const () {
        Arc::as_ptr(&self.inner).cast()
    }
}

impl Inner {
    fn method_calls(&self, method: &str) -> Option<&Vec<Call>> {
        self.methods
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, calls)| calls)
    }
}

/// Resolved member of a [`Mock`], see [`Mock::get`].
#[derive(Debug, Clone)]
pub enum Attr {
    /// A method with configured calls.
    Method(Dispatcher),

    /// A plain data attribute.
    Value(Value),
}

/// Invokes a method of a [`Mock`].
///
/// The calls of the method are looked up when the dispatcher is invoked, so
/// calls configured after the dispatcher was created are taken into account.
#[derive(Clone)]
pub struct Dispatcher {
    mock: Mock,
    method: String,
}

impl Dispatcher {
    /// Invoke the method with the passed `args`. See [`Mock::invoke`].
    ///
    /// # Errors
    /// Same as [`Mock::invoke`].
    pub fn call(&self, args: Args) -> Result<Value, Error> {
        self.mock.invoke(&self.method, args)
    }
}

impl Debug for Dispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.mock.name, self.method)
    }
}

fn dispatch(target: String, invocation: String, calls: &[Call], args: &Args) -> Result<Value, Error> {
    let mut candidates = Vec::new();

    for call in calls {
        let mut mismatch = Vec::new();
        if call.accepts(args, &mut mismatch) {
            return call.call(args);
        }

        tracing::trace!(%call, ?mismatch, "call rejected invocation");

        candidates.push(Candidate {
            call: call.to_string(),
            reason: mismatch.join("\n"),
        });
    }

    tracing::debug!(%invocation, "unexpected invocation");

    Err(Error::UnexpectedInvocation {
        invocation,
        target,
        candidates,
    })
}
