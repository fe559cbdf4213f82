//! The [`action`](self) module contains the responses a call may execute when
//! it is invoked.

mod invoke;
mod raise;

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Args, Error, Value};

pub use invoke::Invoke;
pub use raise::Raised;

/// Response of a call when it is invoked.
#[derive(Default, Clone)]
pub enum Action {
    /// Return [`Value::none`].
    #[default]
    Nothing,

    /// Return the contained value.
    Return(Value),

    /// Fail with [`Error::Raised`] carrying the contained error.
    Raise(Raised),

    /// Compute the result from the arguments of the invocation.
    Invoke(Invoke),
}

impl Action {
    /// Execute the action for an invocation with the passed `args`.
    ///
    /// # Errors
    /// Returns [`Error::Raised`] if the action is [`Action::Raise`].
    pub fn exec(&self, args: &Args) -> Result<Value, Error> {
        match self {
            Self::Nothing => Ok(Value::none()),
            Self::Return(value) => Ok(value.clone()),
            Self::Raise(raised) => Err(Error::Raised(raised.clone())),
            Self::Invoke(invoke) => Ok(invoke.exec(args)),
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Nothing => write!(f, "Nothing"),
            Self::Return(value) => write!(f, "Return({value:?})"),
            Self::Raise(raised) => write!(f, "Raise({raised:?})"),
            Self::Invoke(_) => write!(f, "Invoke"),
        }
    }
}
