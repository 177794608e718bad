//! Triage queries over an ordered batch of errors.
//!
//! All operations are pure: they read the slice, classify each element via
//! [`Classify`], and never reorder what they return.
use super::{Classify, Severity};

/// True when at least one error classifies as [`Severity::Fatal`].
pub fn contains_fatal_error<E: Classify>(errors: &[E]) -> bool {
    first_fatal_error(errors).is_some()
}

/// The lowest-index error that classifies as [`Severity::Fatal`].
///
/// The returned reference points into `errors`, so when two equal fatal errors
/// are present the earlier one is the one returned.
pub fn first_fatal_error<E: Classify>(errors: &[E]) -> Option<&E> {
    let found = errors.iter().position(|e| e.classify().is_fatal());
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "error_severity",
        len = errors.len(),
        index = ?found,
        "first_fatal_error"
    );
    found.map(|idx| &errors[idx])
}

/// Fatal errors only, in input order.
pub fn fatal_only<E: Classify + Clone>(errors: &[E]) -> Vec<E> {
    filter_by(errors, Severity::Fatal)
}

/// Warnings only, in input order. Errors without a severity never appear here.
pub fn warning_only<E: Classify + Clone>(errors: &[E]) -> Vec<E> {
    filter_by(errors, Severity::Warning)
}

fn filter_by<E: Classify + Clone>(errors: &[E], severity: Severity) -> Vec<E> {
    let out: Vec<E> = errors
        .iter()
        .filter(|e| e.classify() == severity)
        .cloned()
        .collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "error_severity",
        %severity,
        len = errors.len(),
        kept = out.len(),
        "filter_by_severity"
    );
    out
}

/// Split a batch into `(fatal, warning)` in one pass, preserving order within
/// each half.
pub fn partition_by_severity<E, I>(errors: I) -> (Vec<E>, Vec<E>)
where
    E: Classify,
    I: IntoIterator<Item = E>,
{
    errors.into_iter().partition(|e| e.classify().is_fatal())
}

/// The highest severity present, or `None` for an empty batch.
pub fn most_severe<E: Classify>(errors: &[E]) -> Option<Severity> {
    errors.iter().map(Classify::classify).max()
}

/// Method-call form of the triage queries, available on slices and `Vec`s.
///
/// ```rust
/// use error_severity::{AnyError, SeverityExt};
///
/// let errors = vec![AnyError::warning(std::fmt::Error), AnyError::msg("boom")];
/// assert!(errors.contains_fatal());
/// assert_eq!(errors.first_fatal().map(|e| e.to_string()).as_deref(), Some("boom"));
/// assert_eq!(errors.warning_only().len(), 1);
/// ```
pub trait SeverityExt<E: Classify> {
    fn contains_fatal(&self) -> bool;
    fn first_fatal(&self) -> Option<&E>;
    fn fatal_only(&self) -> Vec<E>
    where
        E: Clone;
    fn warning_only(&self) -> Vec<E>
    where
        E: Clone;
    fn most_severe(&self) -> Option<Severity>;
}

impl<E: Classify> SeverityExt<E> for [E] {
    fn contains_fatal(&self) -> bool {
        contains_fatal_error(self)
    }

    fn first_fatal(&self) -> Option<&E> {
        first_fatal_error(self)
    }

    fn fatal_only(&self) -> Vec<E>
    where
        E: Clone,
    {
        fatal_only(self)
    }

    fn warning_only(&self) -> Vec<E>
    where
        E: Clone,
    {
        warning_only(self)
    }

    fn most_severe(&self) -> Option<Severity> {
        most_severe(self)
    }
}
