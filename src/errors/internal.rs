//! Internal error implementation - private to the errors module.
//!
//! The derive-based enum lives here so the public `ScanError` wrapper can keep
//! its fields read-only.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone)]
pub(super) enum InternalScanError {
    /// Raised by a state function through `Cursor::fail`.
    ///
    /// `line` and `column` are stored 1-based, exactly as rendered.
    #[error("Error in line {line} at position {column}: {message}\ncontext:\n{context}\n")]
    #[diagnostic(code(runescan::scan::failed))]
    Failed {
        line: usize,
        column: usize,
        offset: usize,
        message: String,
        context: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("stopped here")]
        span: SourceSpan,
    },
}
