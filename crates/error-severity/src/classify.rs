use std::rc::Rc;
use std::sync::Arc;

use super::Severity;

/// An error that reports its own [`Severity`].
///
/// Implement this for error types whose failures should not always halt a
/// batch. Errors that never implement it are classified as fatal.
///
/// ```rust
/// use error_severity::{Severity, SeverityError};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("deprecated field {0}")]
/// struct Deprecated(&'static str);
///
/// impl SeverityError for Deprecated {
///     fn severity(&self) -> Severity {
///         Severity::Warning
///     }
/// }
/// ```
pub trait SeverityError: std::error::Error {
    fn severity(&self) -> Severity;
}

/// Polymorphic severity lookup used by the triage queries.
///
/// Implementors return the reported severity of a classified error unchanged,
/// and [`Severity::Fatal`] for anything that cannot report one.
pub trait Classify {
    fn classify(&self) -> Severity;
}

impl<T: Classify + ?Sized> Classify for &T {
    fn classify(&self) -> Severity {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn classify(&self) -> Severity {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Arc<T> {
    fn classify(&self) -> Severity {
        (**self).classify()
    }
}

impl<T: Classify + ?Sized> Classify for Rc<T> {
    fn classify(&self) -> Severity {
        (**self).classify()
    }
}

// Boxed or borrowed `SeverityError` trait objects classify through the
// pointer impls above.
impl<'a> Classify for dyn SeverityError + 'a {
    fn classify(&self) -> Severity {
        self.severity()
    }
}

impl<'a> Classify for dyn SeverityError + Send + 'a {
    fn classify(&self) -> Severity {
        self.severity()
    }
}

impl<'a> Classify for dyn SeverityError + Send + Sync + 'a {
    fn classify(&self) -> Severity {
        self.severity()
    }
}

/// Free-function form of [`Classify::classify`].
pub fn classify<E: Classify + ?Sized>(error: &E) -> Severity {
    error.classify()
}
