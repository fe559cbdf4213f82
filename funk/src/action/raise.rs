use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

/// Error a call was configured to raise.
///
/// The error is shared, so the caller of a mocked method receives the very
/// same error object the test configured (see [`Raised::ptr_eq`]).
#[derive(Clone)]
pub struct Raised(Arc<dyn StdError + Send + Sync>);

impl Raised {
    /// Create a new [`Raised`] instance from the passed `error`.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Create a new [`Raised`] instance from an already shared `error`.
    #[must_use]
    pub fn from_arc(error: Arc<dyn StdError + Send + Sync>) -> Self {
        Self(error)
    }

    /// Get the configured error.
    #[must_use]
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Get the shared configured error.
    #[must_use]
    pub fn as_arc(&self) -> &Arc<dyn StdError + Send + Sync> {
        &self.0
    }

    /// Get the configured error, if it is an `E`.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref()
    }

    /// Returns `true` if `self` and `other` carry the very same error object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Raised
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Debug for Raised {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for Raised {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&*self.0, f)
    }
}
