//! Error types for closure calls
//!
//! Construction never fails: value capture clones (infallible) and
//! reference capture borrows (checked at compile time). The only runtime
//! condition is a borrow conflict on the shared slot of a
//! reference-capturing closure, surfaced by the `try_` call variants.

use std::fmt;

/// Errors that can occur when invoking a reference-capturing closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The captured slot was already mutably borrowed at call time
    ReferentBusy { operation: &'static str },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::ReferentBusy { operation } => {
                write!(
                    f,
                    "Referent busy during '{}': the captured slot is mutably borrowed elsewhere",
                    operation
                )
            }
        }
    }
}

impl std::error::Error for CaptureError {}
