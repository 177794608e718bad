//// Iterator helpers for gathering the errors of a batch of independent results.
//!
//! - `into_errors`: keeps the `Err` payloads in order, dropping successes.
//! - `split_results`: separates successes from errors, each in order.
//!
//! Example
//! ```rust
//! use error_severity::{AnyError, IterResultExt, SeverityExt};
//!
//! let results: Vec<Result<u32, AnyError>> = vec![
//!     Ok(1),
//!     Err(AnyError::warning(std::fmt::Error)),
//!     Ok(2),
//! ];
//! let (values, errors) = results.split_results();
//! assert_eq!(values, vec![1, 2]);
//! assert!(!errors.contains_fatal());
//! ```
pub trait IterResultExt<T, E>: Sized {
    fn into_errors(self) -> Vec<E>;
    fn split_results(self) -> (Vec<T>, Vec<E>);
}

impl<I, T, E> IterResultExt<T, E> for I
where
    I: IntoIterator<Item = Result<T, E>>,
{
    fn into_errors(self) -> Vec<E> {
        self.into_iter().filter_map(Result::err).collect()
    }

    fn split_results(self) -> (Vec<T>, Vec<E>) {
        let mut oks = Vec::new();
        let mut errs = Vec::new();
        for r in self {
            match r {
                Ok(v) => oks.push(v),
                Err(e) => errs.push(e),
            }
        }
        (oks, errs)
    }
}
