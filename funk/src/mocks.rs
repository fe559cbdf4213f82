//! The [`mocks`](self) module implements the [`Mocks`] registry that owns all
//! mocks of a single test.

use parking_lot::Mutex;

use crate::{Base, Error, Mock, Sequence};

/// Registry of the mocks created during a single test.
///
/// Use [`verify`](Mocks::verify) at the end of the test, or let
/// [`with_mocks`](crate::with_mocks) do it for you.
#[must_use]
#[derive(Default, Debug)]
pub struct Mocks {
    inner: Mutex<Inner>,
}

#[derive(Default, Debug)]
struct Inner {
    mocks: Vec<Mock>,
}

impl Mocks {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new unnamed mock.
    pub fn mock(&self) -> Mock {
        self.register(Mock::default())
    }

    /// Create a new mock named `name`.
    pub fn mock_named<N: Into<String>>(&self, name: N) -> Mock {
        self.register(Mock::new(name))
    }

    /// Create a new mock of the `base` type, named after it.
    pub fn mock_of(&self, base: &Base) -> Mock {
        self.register(Mock::of(base))
    }

    /// Create a new mock of the `base` type named `name`.
    pub fn mock_of_named<N: Into<String>>(&self, base: &Base, name: N) -> Mock {
        self.register(Mock::of_named(base, name))
    }

    /// Create a new sequence.
    ///
    /// The registry does not keep the sequence. Calls added to it using
    /// [`Call::in_sequence`](crate::Call::in_sequence) do.
    pub fn sequence(&self) -> Sequence {
        Sequence::new()
    }

    /// Verify all mocks in the order they were created.
    ///
    /// # Errors
    /// Returns the error of the first mock that failed verification. See
    /// [`Mock::verify`].
    pub fn verify(&self) -> Result<(), Error> {
        let mocks = self.inner.lock().mocks.clone();

        tracing::debug!(count = mocks.len(), "verify mocks");

        mocks.iter().try_for_each(Mock::verify)
    }

    fn register(&self, mock: Mock) -> Mock {
        self.inner.lock().mocks.push(mock.clone());

        mock
    }
}
