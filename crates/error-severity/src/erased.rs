//! Type-erased error values that remember whether they can report a severity.
//!
//! `dyn Error` carries no way to ask "does this value also implement
//! [`SeverityError`]?", so the capability is captured when a concrete error is
//! erased into an [`AnyError`]. [`AnyError::new`] records no severity and the
//! value classifies as fatal; [`AnyError::classified`] keeps the value's own
//! [`SeverityError::severity`] and consults it on every lookup.
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::{Classify, Severity, SeverityError};

type DynError = dyn StdError + Send + Sync + 'static;

trait Erased: Send + Sync + 'static {
    fn as_error(&self) -> &DynError;
    fn reported_severity(&self) -> Option<Severity>;
}

struct Unclassified<E>(E);

impl<E: StdError + Send + Sync + 'static> Erased for Unclassified<E> {
    fn as_error(&self) -> &DynError {
        &self.0
    }

    fn reported_severity(&self) -> Option<Severity> {
        None
    }
}

struct Boxed(Box<DynError>);

impl Erased for Boxed {
    fn as_error(&self) -> &DynError {
        &*self.0
    }

    fn reported_severity(&self) -> Option<Severity> {
        None
    }
}

struct Classified<E>(E);

impl<E: SeverityError + Send + Sync + 'static> Erased for Classified<E> {
    fn as_error(&self) -> &DynError {
        &self.0
    }

    fn reported_severity(&self) -> Option<Severity> {
        Some(self.0.severity())
    }
}

// Keeps `downcast_ref::<E>()` working for errors classified at erasure time.
struct Assigned<E> {
    error: E,
    severity: Severity,
}

impl<E: StdError + Send + Sync + 'static> Erased for Assigned<E> {
    fn as_error(&self) -> &DynError {
        &self.error
    }

    fn reported_severity(&self) -> Option<Severity> {
        Some(self.severity)
    }
}

/// An opaque, cheaply clonable error value for heterogeneous error batches.
///
/// Clones share the same underlying error, so [`AnyError::ptr_eq`] tells
/// apart two equal-looking errors that were erased separately.
#[derive(Clone)]
pub struct AnyError {
    inner: Arc<dyn Erased>,
}

impl AnyError {
    /// Erase an error that does not report a severity. It classifies as fatal.
    ///
    /// The capability is not looked up here: a type that implements
    /// [`SeverityError`] must be erased with [`AnyError::classified`], or it
    /// will classify as fatal regardless of what it reports.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Unclassified(error)),
        }
    }

    /// Erase an error that reports its own severity.
    pub fn classified<E>(error: E) -> Self
    where
        E: SeverityError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Classified(error)),
        }
    }

    /// Erase a foreign error with an explicitly assigned severity.
    pub fn with_severity<E>(error: E, severity: Severity) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Assigned { error, severity }),
        }
    }

    /// Shorthand for [`AnyError::with_severity`] with [`Severity::Warning`].
    pub fn warning<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_severity(error, Severity::Warning)
    }

    /// Shorthand for [`AnyError::with_severity`] with [`Severity::Fatal`].
    pub fn fatal<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_severity(error, Severity::Fatal)
    }

    /// A plain message error with no severity, like an ad-hoc `"..."` error.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::from(message.into())
    }

    /// The severity the wrapped error reports, or `None` if it cannot report one.
    pub fn reported_severity(&self) -> Option<Severity> {
        self.inner.reported_severity()
    }

    /// True when the error was erased together with a severity.
    pub fn is_classified(&self) -> bool {
        self.reported_severity().is_some()
    }

    /// The wrapped error as a trait object.
    pub fn as_dyn_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_error()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.as_error().downcast_ref::<E>()
    }

    /// Identity comparison: true only when both values share one erased error.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&a.inner), Arc::as_ptr(&b.inner))
    }
}

impl Classify for AnyError {
    fn classify(&self) -> Severity {
        self.reported_severity().unwrap_or(Severity::Fatal)
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner.as_error(), f)
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner.as_error(), f)
    }
}

impl StdError for AnyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_error().source()
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for AnyError {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::new(Boxed(error)),
        }
    }
}

impl From<String> for AnyError {
    fn from(message: String) -> Self {
        Self::from(Box::<DynError>::from(message))
    }
}

impl From<&str> for AnyError {
    fn from(message: &str) -> Self {
        Self::from(Box::<DynError>::from(message))
    }
}

/// Attaches a [`Severity`] to an error type that does not report one.
///
/// Display and `source()` are those of the wrapped error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithSeverity<E> {
    error: E,
    severity: Severity,
}

impl<E> WithSeverity<E> {
    pub fn new(error: E, severity: Severity) -> Self {
        Self { error, severity }
    }

    pub fn warning(error: E) -> Self {
        Self::new(error, Severity::Warning)
    }

    pub fn fatal(error: E) -> Self {
        Self::new(error, Severity::Fatal)
    }

    pub fn inner(&self) -> &E {
        &self.error
    }

    pub fn into_inner(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for WithSeverity<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<E: StdError> StdError for WithSeverity<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

impl<E: StdError> SeverityError for WithSeverity<E> {
    fn severity(&self) -> Severity {
        self.severity
    }
}
