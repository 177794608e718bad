//! Coarse-grained classification of an error for batch triage.
//!
//! - Warning: non-halting, the batch may keep going
//! - Fatal: processing should stop
//!
//! The set is closed. Errors that cannot report a severity are treated as
//! [`Severity::Fatal`], see [`crate::Classify`].
use std::fmt;
use std::str::FromStr;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Warning = 0,
    Fatal = 1,
}

impl Severity {
    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Fatal)
    }

    pub fn is_warning(self) -> bool {
        matches!(self, Severity::Warning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {input:?} (expected \"fatal\" or \"warning\")")]
pub struct ParseSeverityError {
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("fatal") {
            Ok(Severity::Fatal)
        } else if trimmed.eq_ignore_ascii_case("warning") {
            Ok(Severity::Warning)
        } else {
            Err(ParseSeverityError {
                input: s.to_string(),
            })
        }
    }
}
