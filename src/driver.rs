//! State-function driver.
//!
//! A grammar is written as a chain of states. Each state reads from the
//! cursor, may grow or shrink the builder stack, and returns the state to run
//! next, or `None` to stop. [`Parser::run`] is an iterative trampoline, so
//! arbitrarily long chains never grow the call stack.
//!
//! The driver does not detect loops: a state that returns itself must
//! consume input or otherwise make progress on every call.

use std::fmt;

use crate::builder::{BuilderStack, TreeNode};
use crate::config::ScanConfig;
use crate::cursor::{Cursor, Halt};
use crate::errors::ScanError;

// ============================================================================
// STATES
// ============================================================================

/// Something the driver can step: given the parser, produce the next state.
///
/// [`State`] implements this for plain functions. An enum of states with a
/// `match` in `step` works just as well.
pub trait Transition<N>: Sized {
    fn step(self, parser: &mut Parser<'_, N>) -> Option<Self>;
}

/// A state function: returns the state to run next, or `None` to stop.
pub struct State<N>(pub fn(&mut Parser<'_, N>) -> Option<State<N>>);

impl<N> State<N> {
    /// Convenience for `Some(State(f))` at the end of a state function.
    pub fn next(f: fn(&mut Parser<'_, N>) -> Option<State<N>>) -> Option<Self> {
        Some(State(f))
    }
}

impl<N> Transition<N> for State<N> {
    fn step(self, parser: &mut Parser<'_, N>) -> Option<Self> {
        (self.0)(parser)
    }
}

impl<N> Clone for State<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for State<N> {}

impl<N> fmt::Debug for State<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({:p})", self.0 as *const ())
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// The context every state function receives: the cursor plus the tree under
/// construction. Fields are public so states can borrow both at once.
#[derive(Debug)]
pub struct Parser<'a, N> {
    pub cursor: Cursor<'a>,
    pub tree: BuilderStack<N>,
}

impl<'a, N: TreeNode> Parser<'a, N> {
    pub fn new(input: &'a str, root: N) -> Self {
        Self::with_config(input, root, ScanConfig::default())
    }

    pub fn with_config(input: &'a str, root: N, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::with_config(input, config),
            tree: BuilderStack::new(root),
        }
    }

    /// The root as attached so far; open subtrees are missing until popped.
    /// See [`BuilderStack::root`].
    pub fn root(&self) -> &N {
        self.tree.root()
    }

    /// Closes all open nodes and returns the root.
    pub fn into_root(self) -> N {
        self.tree.into_root()
    }

    pub fn into_parts(self) -> (Cursor<'a>, BuilderStack<N>) {
        (self.cursor, self.tree)
    }

    /// Runs states starting from `initial` until one returns `None` or the
    /// cursor halts.
    ///
    /// Running out of input is a clean stop. A diagnostic recorded with
    /// [`Cursor::fail`] is returned as the error; it also stays on the cursor.
    pub fn run<S: Transition<N>>(&mut self, initial: S) -> Result<(), ScanError> {
        let mut state = initial;
        let mut steps = 0usize;

        while !self.cursor.has_error() {
            steps += 1;
            tracing::trace!(
                step = steps,
                offset = self.cursor.offset(),
                depth = self.tree.depth(),
                "running state"
            );
            match state.step(self) {
                Some(next) => state = next,
                None => break,
            }
        }

        match self.cursor.halt() {
            None | Some(Halt::EndOfInput) => {
                tracing::debug!(
                    steps,
                    at_end = self.cursor.is_at_end(),
                    offset = self.cursor.offset(),
                    "scan finished"
                );
                Ok(())
            }
            Some(Halt::Failed(error)) => {
                tracing::debug!(steps, line = error.line(), column = error.column(), "scan failed");
                Err(error.clone())
            }
        }
    }
}

/// Parses `input` into `root` starting from `initial`, returning the finished
/// root on success.
///
/// On failure only the diagnostic is returned and the partial tree is
/// dropped. Drive a [`Parser`] directly and call [`Parser::into_root`] after
/// `run` to keep what was built before the failure.
pub fn parse<N, S>(input: &str, root: N, initial: S) -> Result<N, ScanError>
where
    N: TreeNode,
    S: Transition<N>,
{
    parse_with_config(input, root, initial, ScanConfig::default())
}

pub fn parse_with_config<N, S>(
    input: &str,
    root: N,
    initial: S,
    config: ScanConfig,
) -> Result<N, ScanError>
where
    N: TreeNode,
    S: Transition<N>,
{
    let mut parser = Parser::with_config(input, root, config);
    parser.run(initial)?;
    Ok(parser.into_root())
}
