//! Severity triage for batches of accumulated errors.
//!
//! Errors are either *classified* (they implement [`SeverityError`]) or
//! *unclassified*. Unclassified errors are always treated as
//! [`Severity::Fatal`]: an unknown error is never downgraded to a warning.
//! Callers that want non-fatal handling must classify their error types.
pub mod classify;
pub mod erased;
pub mod query;
pub mod result_ext;
pub mod severity;

// public exports
pub use classify::{Classify, SeverityError, classify};
pub use erased::{AnyError, WithSeverity};
pub use query::{
    SeverityExt, contains_fatal_error, fatal_only, first_fatal_error, most_severe,
    partition_by_severity, warning_only,
};
pub use result_ext::IterResultExt;
pub use severity::{ParseSeverityError, Severity};
