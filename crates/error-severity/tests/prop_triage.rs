//! Property tests for the triage queries over arbitrary batches.
//!
//! Covered:
//! - Batches of 0..40 errors mixing classified warnings, classified fatals and
//!   unclassified errors, in any order, with repeated clones of one value.
//! - Invariants:
//!   - `contains_fatal_error` agrees with `first_fatal_error(..).is_some()`.
//!   - `fatal_only` and `warning_only` together keep every element once.
//!   - Both filters keep input order (retained indices strictly increase).
//!   - `first_fatal_error` points at the lowest fatal index.
//!   - Unclassified errors only ever appear in `fatal_only`.
use proptest::prelude::*;

use error_severity::{
    AnyError, Severity, SeverityError, contains_fatal_error, fatal_only, first_fatal_error,
    warning_only,
};

#[derive(Debug, thiserror::Error)]
#[error("stub {severity}")]
struct StubError {
    severity: Severity,
}

impl SeverityError for StubError {
    fn severity(&self) -> Severity {
        self.severity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Warning,
    Fatal,
    Unclassified,
}

fn any_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Warning),
        Just(Kind::Fatal),
        Just(Kind::Unclassified),
    ]
}

fn make(kind: Kind) -> AnyError {
    match kind {
        Kind::Warning => AnyError::classified(StubError {
            severity: Severity::Warning,
        }),
        Kind::Fatal => AnyError::classified(StubError {
            severity: Severity::Fatal,
        }),
        Kind::Unclassified => AnyError::msg("anyError"),
    }
}

// Each generated slot either creates a fresh error or repeats an earlier one.
fn any_batch() -> impl Strategy<Value = (Vec<Kind>, Vec<AnyError>)> {
    proptest::collection::vec((any_kind(), any::<Option<prop::sample::Index>>()), 0..40)
        .prop_map(|slots| {
            let mut kinds = Vec::with_capacity(slots.len());
            let mut errors: Vec<AnyError> = Vec::with_capacity(slots.len());
            for (kind, repeat) in slots {
                match repeat {
                    Some(idx) if !errors.is_empty() => {
                        let i = idx.index(errors.len());
                        kinds.push(kinds[i]);
                        errors.push(errors[i].clone());
                    }
                    _ => {
                        kinds.push(kind);
                        errors.push(make(kind));
                    }
                }
            }
            (kinds, errors)
        })
}

fn is_fatal(kind: Kind) -> bool {
    matches!(kind, Kind::Fatal | Kind::Unclassified)
}

/// Input positions of `kept`, matched left to right by identity.
fn retained_indices(input: &[AnyError], kept: &[AnyError]) -> Option<Vec<usize>> {
    let mut out = Vec::with_capacity(kept.len());
    let mut start = 0;
    for k in kept {
        let offset = input[start..]
            .iter()
            .position(|e| AnyError::ptr_eq(e, k))?;
        out.push(start + offset);
        start += offset + 1;
    }
    Some(out)
}

proptest! {
    #[test]
    fn contains_agrees_with_first((kinds, errors) in any_batch()) {
        prop_assert_eq!(
            contains_fatal_error(&errors),
            first_fatal_error(&errors).is_some()
        );
        prop_assert_eq!(contains_fatal_error(&errors), kinds.iter().any(|k| is_fatal(*k)));
    }

    #[test]
    fn filters_partition_the_batch((kinds, errors) in any_batch()) {
        let fatal = fatal_only(&errors);
        let warning = warning_only(&errors);
        prop_assert_eq!(fatal.len() + warning.len(), errors.len());
        prop_assert_eq!(fatal.len(), kinds.iter().filter(|k| is_fatal(**k)).count());
        prop_assert!(warning.iter().all(|e| e.is_classified()));
    }

    #[test]
    fn filters_preserve_order((kinds, errors) in any_batch()) {
        let fatal = fatal_only(&errors);
        let warning = warning_only(&errors);

        let fatal_idx = retained_indices(&errors, &fatal);
        prop_assert!(fatal_idx.is_some());
        let fatal_idx = fatal_idx.unwrap();
        prop_assert!(fatal_idx.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(fatal_idx.iter().all(|&i| is_fatal(kinds[i])));

        let warning_idx = retained_indices(&errors, &warning);
        prop_assert!(warning_idx.is_some());
        let warning_idx = warning_idx.unwrap();
        prop_assert!(warning_idx.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(warning_idx.iter().all(|&i| kinds[i] == Kind::Warning));
    }

    #[test]
    fn first_fatal_is_lowest_index((kinds, errors) in any_batch()) {
        let expected = kinds.iter().position(|k| is_fatal(*k));
        let got = first_fatal_error(&errors)
            .map(|first| errors.iter().position(|e| std::ptr::eq(e, first)));
        prop_assert_eq!(got.flatten(), expected);
        if let Some(i) = expected {
            prop_assert!(std::ptr::eq(first_fatal_error(&errors).unwrap(), &errors[i]));
        }
    }
}
