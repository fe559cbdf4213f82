use std::sync::Arc;

use crate::{Args, Value};

/// Action that computes the result of an invocation from its arguments.
#[derive(Clone)]
pub struct Invoke(Arc<dyn Fn(&Args) -> Value + Send + Sync>);

impl Invoke {
    /// Create a new [`Invoke`] action from the passed `func`.
    pub fn new<F, R>(func: F) -> Self
    where
        F: Fn(&Args) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self(Arc::new(move |args: &Args| -> Value { func(args).into() }))
    }

    /// Execute the action with the passed arguments.
    #[must_use]
    pub fn exec(&self, args: &Args) -> Value {
        (self.0)(args)
    }
}
