//! Depth-first traversal over a node store.

use super::node::{NodeId, NodeStore, TrieNode};

#[derive(Debug)]
struct Frame {
    node: NodeId,
    /// Path length of the parent
    depth: usize,
    /// Edge leading into `node`, `None` for the start node
    edge: Option<u8>,
}

/// Pre-order walk of a subtree, visiting children in ascending character order.
///
/// The walk keeps an explicit stack and a single growable path buffer, so
/// neither key length nor trie depth is bounded by the call stack.
#[derive(Debug)]
pub(crate) struct Walk<'a> {
    store: &'a NodeStore,
    stack: Vec<Frame>,
    path: String,
}

impl<'a> Walk<'a> {
    /// Starts a walk at `start`, whose path from the root is `prefix`.
    pub(crate) fn new(store: &'a NodeStore, start: NodeId, prefix: &str) -> Self {
        Self {
            store,
            stack: vec![Frame {
                node: start,
                depth: prefix.len(),
                edge: None,
            }],
            path: prefix.to_owned(),
        }
    }

    /// Advances to the next node and returns it with its full path.
    pub(crate) fn next_node(&mut self) -> Option<(&'a TrieNode, &str)> {
        let frame = self.stack.pop()?;
        self.path.truncate(frame.depth);
        if let Some(byte) = frame.edge {
            self.path.push(char::from(byte));
        }

        let node = self.store.get(frame.node);
        let depth = self.path.len();
        // Reversed so the smallest character is popped first
        self.stack.extend(node.children().rev().map(|(byte, child)| Frame {
            node: child,
            depth,
            edge: Some(byte),
        }));

        Some((node, self.path.as_str()))
    }
}

/// Lazy iterator over every stored word and its count.
///
/// Created by [`FrequencyTrie::words`](super::FrequencyTrie::words).
#[derive(Debug)]
pub struct Words<'a> {
    walk: Walk<'a>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(store: &'a NodeStore) -> Self {
        Self {
            walk: Walk::new(store, NodeId::ROOT, ""),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = (String, u64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.walk.next_node() {
            if node.is_terminal {
                return Some((path.to_owned(), node.count));
            }
        }
        None
    }
}
