//! The [`call_count`](self) module contains the [`CallCount`] policy that
//! defines how often an expected call may be invoked.

/// Keeps track of the number of remaining invocations of a call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CallCount {
    /// The call is expected exactly `n` times. Holds the number of remaining
    /// invocations.
    Bounded(usize),

    /// The call may be invoked any number of times.
    Unbounded,
}

impl CallCount {
    /// Create a [`CallCount`] that expects exactly `n` invocations.
    #[must_use]
    pub fn exactly(n: usize) -> Self {
        Self::Bounded(n)
    }

    /// Create a [`CallCount`] that allows any number of invocations.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::Unbounded
    }

    /// Returns `true` if the call must not be invoked any more.
    #[must_use]
    pub fn none_remaining(&self) -> bool {
        match self {
            Self::Bounded(remaining) => *remaining == 0,
            Self::Unbounded => false,
        }
    }

    /// Consume one invocation.
    ///
    /// Must only be called if [`none_remaining`](Self::none_remaining) returned
    /// `false`.
    pub fn decrement(&mut self) {
        if let Self::Bounded(remaining) = self {
            debug_assert!(*remaining > 0, "Call count is already exhausted");

            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Returns `true` if the call was invoked the expected number of times.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Bounded(_) => self.none_remaining(),
            Self::Unbounded => true,
        }
    }
}

impl Default for CallCount {
    fn default() -> Self {
        Self::exactly(1)
    }
}
