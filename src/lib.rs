//! Runescan: building blocks for hand-written, state-function parsers.
//!
//! - [`Cursor`] reads runes from the input, tracks line/column, supports a
//!   single rune of backtracking and cuts tokens out with `emit`.
//! - [`BuilderStack`] keeps the path from the root to the node currently being
//!   filled, so states can descend (`push`) and return (`pop`).
//! - [`Parser::run`] drives a chain of [`State`] functions until one stops or
//!   the cursor halts.
//!
//! ```rust
//! use runescan::prelude::*;
//! use runescan::tree::Node;
//!
//! fn number(p: &mut Parser<'_, Node<String>>) -> Option<State<Node<String>>> {
//!     p.cursor.accept_run('0'..='9');
//!     let token = p.cursor.emit();
//!     p.tree.current_mut().add_child(Node::leaf(token.to_string()));
//!     None
//! }
//!
//! let root = parse("123abc", Node::leaf(String::new()), State(number)).unwrap();
//! assert_eq!(root.children()[0].value(), "123");
//! ```

pub mod builder;
pub mod config;
pub mod cursor;
pub mod driver;
pub mod errors;
pub mod tree;

pub use builder::{BuilderStack, TreeNode};
pub use config::ScanConfig;
pub use cursor::{Cursor, Halt, Position, RuneSet};
pub use driver::{parse, parse_with_config, Parser, State, Transition};
pub use errors::ScanError;

/// Everything a state function usually needs.
pub mod prelude {
    pub use crate::builder::{BuilderStack, TreeNode};
    pub use crate::cursor::{Cursor, RuneSet};
    pub use crate::driver::{parse, Parser, State, Transition};
    pub use crate::errors::ScanError;
    pub use crate::fail;
}

/// Fails a cursor with a formatted message.
///
/// ```rust
/// use runescan::{fail, Cursor};
/// let mut cursor = Cursor::new("x");
/// fail!(cursor, "unexpected {}", "token");
/// assert!(cursor.has_error());
/// ```
#[macro_export]
macro_rules! fail {
    ($cursor:expr, $($arg:tt)+) => {
        $cursor.fail(::std::format_args!($($arg)+))
    };
}
