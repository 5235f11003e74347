//! Node storage for the frequency trie.
//!
//! Nodes live in an arena owned by [`NodeStore`] and refer to their children
//! through [`NodeId`] handles. A parent is the only holder of its children's
//! handles, so the arena still forms a strict tree.

use super::error::FrequencyTrieError;
use super::FrequencyTrieResult;

/// Smallest accepted character code (space).
pub const MIN_CHAR: u32 = 32;

/// Exclusive upper bound of accepted character codes.
pub const MAX_CHAR: u32 = 128;

/// Handle to a node inside a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, allocated together with the store.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the frequency trie.
///
/// Each node stands for one character position of the inserted strings that
/// pass through it.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Child handles keyed by character byte, sorted ascending
    children: Vec<(u8, NodeId)>,

    /// Number of times a string ending exactly here was inserted
    pub count: u64,

    /// Whether at least one inserted string ends here
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            count: 0,
            is_terminal: false,
        }
    }

    /// Returns the child reached through `byte`, if any.
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Iterates over children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (u8, NodeId)> + '_ {
        self.children.iter().copied()
    }

    /// Records one more insertion of the string ending at this node.
    pub fn mark_terminal(&mut self) {
        self.is_terminal = true;
        self.count = self.count.saturating_add(1);
    }
}

/// Arena holding every node of one trie.
///
/// A child is always pushed after its parent, so arena order is a
/// topological order of the tree.
#[derive(Debug)]
pub struct NodeStore {
    nodes: Vec<TrieNode>,
    max_nodes: Option<usize>,
}

impl NodeStore {
    /// Creates a store containing only the root node.
    ///
    /// # Arguments
    ///
    /// * `max_nodes` - Optional budget on the total number of nodes, root included.
    pub fn new(max_nodes: Option<usize>) -> Self {
        let mut nodes = Vec::with_capacity(1);
        nodes.push(TrieNode::new());
        Self { nodes, max_nodes }
    }

    /// Returns the node behind `id`.
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Returns the node behind `id` mutably.
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    /// Number of allocated nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the child of `parent` for `byte`, allocating it if missing.
    ///
    /// # Returns
    ///
    /// * `Ok(NodeId)` - The existing or newly created child.
    /// * `Err(FrequencyTrieError::AllocationError)` - If the node budget is
    ///   exhausted or memory could not be reserved. The store is unchanged.
    pub fn child_or_insert(&mut self, parent: NodeId, byte: u8) -> FrequencyTrieResult<NodeId> {
        let slot = match self.nodes[parent.0]
            .children
            .binary_search_by_key(&byte, |&(b, _)| b)
        {
            Ok(i) => return Ok(self.nodes[parent.0].children[i].1),
            Err(slot) => slot,
        };

        if let Some(max) = self.max_nodes {
            if self.nodes.len() >= max {
                return Err(FrequencyTrieError::AllocationError {
                    reason: format!("node budget of {max} exhausted"),
                });
            }
        }

        // Reserve both slots up front so a failure never leaves an orphan node
        self.nodes.try_reserve(1).map_err(allocation_error)?;
        self.nodes[parent.0]
            .children
            .try_reserve(1)
            .map_err(allocation_error)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new());
        self.nodes[parent.0].children.insert(slot, (byte, id));
        Ok(id)
    }

    /// Releases every node, children before parents.
    ///
    /// # Returns
    ///
    /// The number of nodes released.
    pub fn release(mut self) -> usize {
        let released = self.nodes.len();
        // Children sit after their parents, so dropping back to front is post-order
        for node in self.nodes.drain(..).rev() {
            drop(node);
        }
        released
    }
}

fn allocation_error(err: std::collections::TryReserveError) -> FrequencyTrieError {
    FrequencyTrieError::AllocationError {
        reason: err.to_string(),
    }
}

/// Maps a character to its child slot byte.
///
/// # Returns
///
/// * `Ok(u8)` - The slot for characters in `MIN_CHAR..MAX_CHAR`.
/// * `Err(FrequencyTrieError::InvalidCharacter)` - For anything else.
pub fn slot_for(character: char, position: usize) -> FrequencyTrieResult<u8> {
    let code = u32::from(character);
    if (MIN_CHAR..MAX_CHAR).contains(&code) {
        Ok(code as u8)
    } else {
        Err(FrequencyTrieError::InvalidCharacter { character, position })
    }
}
