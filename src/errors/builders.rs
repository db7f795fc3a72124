//! Internal builder functions for creating errors.

use super::internal::InternalScanError;
use crate::errors::ScanError;
use miette::{NamedSource, SourceSpan};
use std::sync::Arc;

/// Build a Failed error. `line`/`column` are zero-based here and converted for display.
pub(super) fn build_failed(
    source_name: &str,
    input: &str,
    offset: usize,
    line: usize,
    column: usize,
    message: String,
    radius: usize,
) -> ScanError {
    let context = context_window(input, offset, radius).to_string();

    ScanError(InternalScanError::Failed {
        line: line + 1,
        column: column + 1,
        offset,
        message,
        context,
        src: Arc::new(NamedSource::new(source_name, input.to_string())),
        span: SourceSpan::from(offset..offset),
    })
}

/// Returns up to `radius` bytes on each side of `offset`, clamped to the input.
///
/// Bounds that land inside a multi-byte char are moved inwards to the nearest
/// char boundary, so the window never exceeds `radius` bytes per side.
pub(super) fn context_window(input: &str, offset: usize, radius: usize) -> &str {
    let offset = offset.min(input.len());
    let mut start = offset.saturating_sub(radius);
    let mut end = offset.saturating_add(radius).min(input.len());

    while !input.is_char_boundary(start) {
        start += 1;
    }
    while !input.is_char_boundary(end) {
        end -= 1;
    }

    &input[start..end]
}

#[cfg(test)]
mod tests {
    use super::context_window;

    #[test]
    fn window_is_clamped_to_input() {
        assert_eq!(context_window("hello world", 6, 5), "ello world");
        assert_eq!(context_window("hello world", 0, 5), "hello");
        assert_eq!(context_window("hello world", 11, 5), "world");
        assert_eq!(context_window("", 0, 5), "");
    }

    #[test]
    fn window_respects_char_boundaries() {
        // 'é' is two bytes; offset 3 sits right after "aé".
        let input = "aébcdefg";
        let window = context_window(input, 3, 2);
        assert_eq!(window, "ébc");

        // Start lands in the middle of 'é' and is pushed forward.
        assert_eq!(context_window("aébc", 4, 2), "bc");
    }
}
