//! Runescan error handling.
//!
//! A scan stops with exactly one diagnostic, raised from a state function via
//! [`Cursor::fail`](crate::Cursor::fail). Its `Display` output is a fixed,
//! line-oriented format:
//!
//! ```text
//! Error in line L at position C: <message>
//! context:
//! <window>
//! ```
//!
//! The same value is also a `miette::Diagnostic` carrying the full input and a
//! label at the failing offset, so callers that want rich rendering can hand it
//! to `miette::Report`.

mod builders;
mod internal;

use internal::InternalScanError;
use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// PUBLIC ERROR TYPE
// ============================================================================

/// The diagnostic recorded when a state function fails a scan.
#[derive(Error, Diagnostic, Debug, Clone)]
#[error(transparent)]
#[diagnostic(transparent)]
pub struct ScanError(InternalScanError);

impl ScanError {
    /// 1-based line of the failing position.
    pub fn line(&self) -> usize {
        match &self.0 {
            InternalScanError::Failed { line, .. } => *line,
        }
    }

    /// 1-based column (in runes) of the failing position.
    pub fn column(&self) -> usize {
        match &self.0 {
            InternalScanError::Failed { column, .. } => *column,
        }
    }

    /// Byte offset into the input where the scan stopped.
    pub fn offset(&self) -> usize {
        match &self.0 {
            InternalScanError::Failed { offset, .. } => *offset,
        }
    }

    /// The caller-supplied message, without location or context.
    pub fn message(&self) -> &str {
        match &self.0 {
            InternalScanError::Failed { message, .. } => message,
        }
    }

    /// The window of input surrounding the failing offset.
    pub fn context(&self) -> &str {
        match &self.0 {
            InternalScanError::Failed { context, .. } => context,
        }
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Builds a [`ScanError`] for a zero-based `line`/`column` at byte `offset`.
///
/// `radius` bounds the context window on each side of `offset`.
pub(crate) fn scan_failed(
    source_name: &str,
    input: &str,
    offset: usize,
    line: usize,
    column: usize,
    message: String,
    radius: usize,
) -> ScanError {
    builders::build_failed(source_name, input, offset, line, column, message, radius)
}
