//! # Tree Builder Stack
//!
//! ## Purpose
//! Tracks the nesting path while state functions build a tree: the bottom of
//! the stack is the root, the top is the node new children belong to.
//!
//! ## Invariants
//! - The stack is never empty; popping the root is a no-op.
//! - A pushed node is a child of the node below it. It is handed to its
//!   parent's [`TreeNode::add_child`] when it leaves the stack, so parents
//!   receive finished children in the order they were pushed.

/// The one capability the builder needs from a node type.
pub trait TreeNode: Sized {
    /// Attaches `child` according to the node type's own structure rules.
    fn add_child(&mut self, child: Self);
}

/// Stack of open nodes, from the root (bottom) to the current node (top).
#[derive(Debug, Clone)]
pub struct BuilderStack<N> {
    // Invariant: never empty.
    nodes: Vec<N>,
}

impl<N: TreeNode> BuilderStack<N> {
    pub fn new(root: N) -> Self {
        Self { nodes: vec![root] }
    }

    /// Opens `node` as a child of the current node and makes it current.
    pub fn push(&mut self, node: N) {
        self.nodes.push(node);
    }

    /// Closes the current node, attaching it to its parent.
    ///
    /// Returns `false` and leaves the stack alone when only the root is left.
    pub fn pop(&mut self) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }
        match self.nodes.pop() {
            Some(node) => {
                self.top_mut().add_child(node);
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut N {
        self.top_mut()
    }

    /// The bottom node as attached so far.
    ///
    /// Nodes still on the stack have not been handed to their parents yet, so
    /// open subtrees are missing here until they are popped. Use
    /// [`into_root`](Self::into_root) for the complete tree.
    pub fn root(&self) -> &N {
        &self.nodes[0]
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    /// Closes every open node and returns the finished root.
    pub fn into_root(mut self) -> N {
        while self.pop() {}
        // The loop above leaves exactly the root behind.
        self.nodes.swap_remove(0)
    }

    fn top_mut(&mut self) -> &mut N {
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }
}
