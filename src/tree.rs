//! A ready-made tree node for grammars that do not need their own type.

use serde::{Deserialize, Serialize};

use crate::builder::TreeNode;

/// A value with ordered children.
///
/// # Examples
///
/// ```rust
/// use runescan::tree::Node;
/// use runescan::TreeNode;
/// let mut list = Node::leaf("list");
/// list.add_child(Node::leaf("a"));
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.children()[0].value(), &"a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<T> {
    value: T,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(value: T, children: Vec<Node<T>>) -> Self {
        Self { value, children }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Visits this node and its descendants depth-first, parents before
    /// children. The callback receives each node with its depth below `self`.
    pub fn walk<'n>(&'n self, visit: &mut impl FnMut(&'n Node<T>, usize)) {
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            visit(node, depth);
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
    }
}

impl<T: Serialize> Node<T> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<T> TreeNode for Node<T> {
    fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }
}
