//! Rune cursor over a borrowed input string.
//!
//! The cursor tracks three things at once: the byte offset of the next unread
//! rune, the start of the token being accumulated, and a zero-based
//! line/column for diagnostics. State functions drive it with small
//! primitives (`read_rune`, `backtrack`, `accept`, `accept_run`, ...) and
//! cut tokens out of the input with `emit`.
//!
//! ## Invariants
//! - `start <= pos <= input.len()`, and both sit on char boundaries.
//! - At most one read can be undone. The undo slot is filled by every read
//!   and emptied by `backtrack`, `emit` and `discard`.
//! - Once a [`Halt`] is recorded the cursor is terminal: reads return `None`
//!   and never move `pos`.

pub mod runeset;

use std::fmt;

use serde::Serialize;

use crate::config::ScanConfig;
use crate::errors::{self, ScanError};

pub use runeset::RuneSet;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Why a cursor stopped.
#[derive(Debug, Clone)]
pub enum Halt {
    /// A read ran past the last rune. This is the normal way a scan ends.
    EndOfInput,
    /// A state function called [`Cursor::fail`].
    Failed(ScanError),
}

impl Halt {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Halt::EndOfInput)
    }
}

/// A zero-based location in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    /// Byte offset of the next unread rune.
    pub offset: usize,
    pub line: usize,
    /// Runes since the last newline.
    pub column: usize,
}

/// The scanning cursor. One per parse, owned by the driver loop.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    last_width: usize,
    line: usize,
    column: usize,
    prev_line: usize,
    prev_column: usize,
    can_backtrack: bool,
    halt: Option<Halt>,
    config: ScanConfig,
}

// ============================================================================
// CONSTRUCTION & ACCESSORS
// ============================================================================

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ScanConfig::default())
    }

    pub fn with_config(input: &'a str, config: ScanConfig) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            last_width: 0,
            line: 0,
            column: 0,
            prev_line: 0,
            prev_column: 0,
            can_backtrack: false,
            halt: None,
            config,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Byte offset of the next unread rune.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current token begins.
    pub fn token_start(&self) -> usize {
        self.start
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Text accumulated since the last `emit`/`discard`, without consuming it.
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Unread input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn halt(&self) -> Option<&Halt> {
        self.halt.as_ref()
    }

    /// Moves the terminal condition out once a scan is over.
    pub fn take_halt(&mut self) -> Option<Halt> {
        self.halt.take()
    }

    /// The recorded diagnostic, if a state function failed.
    pub fn error(&self) -> Option<&ScanError> {
        match &self.halt {
            Some(Halt::Failed(error)) => Some(error),
            _ => None,
        }
    }

    /// True exactly when the cursor stopped because input ran out.
    pub fn is_at_end(&self) -> bool {
        matches!(self.halt, Some(Halt::EndOfInput))
    }

    /// True when any terminal condition is set, end of input included.
    pub fn has_error(&self) -> bool {
        self.halt.is_some()
    }

    fn has_failed(&self) -> bool {
        matches!(self.halt, Some(Halt::Failed(_)))
    }
}

// ============================================================================
// READING
// ============================================================================

impl<'a> Cursor<'a> {
    /// Reads the next rune, or `None` once input is exhausted.
    ///
    /// Running out of input records [`Halt::EndOfInput`]; it is not an error.
    /// A read at the end, or after a failure, does not move the cursor, and
    /// the matching `backtrack` is a no-op.
    pub fn read_rune(&mut self) -> Option<char> {
        self.prev_line = self.line;
        self.prev_column = self.column;
        self.can_backtrack = true;

        if self.has_failed() {
            self.last_width = 0;
            return None;
        }

        let Some(rune) = self.input[self.pos..].chars().next() else {
            self.last_width = 0;
            self.halt = Some(Halt::EndOfInput);
            return None;
        };

        self.last_width = rune.len_utf8();
        self.pos += self.last_width;
        if rune == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(rune)
    }

    /// Undoes the most recent `read_rune`.
    ///
    /// Only one read can be undone. Calling this with nothing to undo (a
    /// second backtrack, or one after `emit`/`discard`) is a caller bug and
    /// leaves the cursor untouched.
    pub fn backtrack(&mut self) {
        if !self.can_backtrack {
            tracing::debug!(offset = self.pos, "backtrack with nothing to undo ignored");
            return;
        }

        self.can_backtrack = false;
        self.pos -= self.last_width;
        self.last_width = 0;
        self.line = self.prev_line;
        self.column = self.prev_column;
    }

    /// Returns the next rune without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let rune = self.read_rune();
        self.backtrack();
        rune
    }

    /// Consumes the next rune if it belongs to `set`.
    pub fn accept(&mut self, set: impl RuneSet) -> bool {
        match self.read_rune() {
            Some(rune) if set.contains_rune(rune) => true,
            _ => {
                self.backtrack();
                false
            }
        }
    }

    /// Consumes runes while they belong to `set`. Returns how many were taken.
    pub fn accept_run(&mut self, set: impl RuneSet) -> usize {
        let mut taken = 0;
        while let Some(rune) = self.read_rune() {
            if !set.contains_rune(rune) {
                break;
            }
            taken += 1;
        }
        self.backtrack();
        taken
    }

    /// Consumes runes up to, not including, the first one in `stop`.
    ///
    /// Stops at end of input when no stop rune is found. Returns how many
    /// runes were consumed.
    pub fn advance_until(&mut self, stop: impl RuneSet) -> usize {
        let mut taken = 0;
        while let Some(rune) = self.read_rune() {
            if stop.contains_rune(rune) {
                break;
            }
            taken += 1;
        }
        self.backtrack();
        taken
    }
}

// ============================================================================
// TOKENS & DIAGNOSTICS
// ============================================================================

impl<'a> Cursor<'a> {
    /// Returns the accumulated token and starts a new one at the current offset.
    pub fn emit(&mut self) -> &'a str {
        let token = &self.input[self.start..self.pos];
        self.discard();
        token
    }

    /// Drops the accumulated token.
    pub fn discard(&mut self) {
        self.start = self.pos;
        self.can_backtrack = false;
    }

    /// Stops the scan with a diagnostic at the current position.
    ///
    /// The first failure wins; later calls are ignored. A failure replaces an
    /// end-of-input halt. See [`fail!`](crate::fail) for formatted messages.
    pub fn fail(&mut self, message: impl fmt::Display) {
        if self.has_failed() {
            tracing::debug!(offset = self.pos, "scan already failed, ignoring {message}");
            return;
        }

        let error = errors::scan_failed(
            &self.config.source_name,
            self.input,
            self.pos,
            self.line,
            self.column,
            message.to_string(),
            self.config.context_radius,
        );
        tracing::debug!(
            line = error.line(),
            column = error.column(),
            reason = error.message(),
            "scan failed"
        );
        self.halt = Some(Halt::Failed(error));
    }
}
