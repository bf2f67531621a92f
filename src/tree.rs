//! Huffman tree construction.
//!
//! Counts symbol frequencies, seeds a min-heap with one leaf per distinct
//! symbol, and repeatedly merges the two lowest-weight nodes until a single
//! root remains.
//!
//! The build is fully deterministic: leaves enter the heap in ascending
//! symbol order, every heap entry carries an insertion sequence number, and
//! equal weights break toward the earlier-inserted entry. The first of the
//! two extracted minima becomes the left child.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::heap::MinHeap;

/// Mapping from symbol to its occurrence count.
pub type FreqTable = HashMap<char, u64>;

/// Count how often each symbol occurs in `text`.
pub fn count_frequencies(text: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    for ch in text.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// A node of the Huffman tree.
///
/// Leaves carry a symbol and its frequency; internal nodes carry the summed
/// weight of exactly two children. The tree is exclusively owned and
/// read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A terminal node holding one distinct input symbol.
    Leaf {
        /// The symbol this leaf represents.
        symbol: char,
        /// Occurrence count of the symbol.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached on bit 0.
        left: Box<Node>,
        /// Subtree reached on bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// The cumulative frequency of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Heap entry pairing a node with its insertion sequence number.
///
/// Ordering is (weight, seq), so equal weights extract in insertion order.
#[derive(Debug)]
struct HeapEntry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

/// An owned Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Build a tree straight from a text: count frequencies, then merge.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `text` has no symbols.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&count_frequencies(text))
    }

    /// Build a tree from a frequency table.
    ///
    /// Leaves are seeded in ascending symbol order so the result does not
    /// depend on the map's iteration order.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if the table is empty.
    pub fn from_frequencies(freq: &FreqTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut symbols: Vec<(char, u64)> = freq.iter().map(|(&s, &w)| (s, w)).collect();
        symbols.sort_by_key(|&(s, _)| s);

        let mut heap = MinHeap::with_capacity(symbols.len());
        let mut seq = 0u64;
        for (symbol, weight) in symbols {
            heap.insert(HeapEntry {
                weight,
                seq,
                node: Node::Leaf { symbol, weight },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            // Loop condition guarantees two entries.
            let a = heap.extract_min().ok_or(Error::EmptyInput)?;
            let b = heap.extract_min().ok_or(Error::EmptyInput)?;
            let weight = a.weight + b.weight;
            heap.insert(HeapEntry {
                weight,
                seq,
                node: Node::Internal {
                    weight,
                    left: Box::new(a.node),
                    right: Box::new(b.node),
                },
            });
            seq += 1;
        }

        let root = heap.extract_min().ok_or(Error::EmptyInput)?.node;
        Ok(Tree { root })
    }

    /// Borrow the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(Tree::from_text(""), Err(Error::EmptyInput));
        assert_eq!(Tree::from_frequencies(&FreqTable::new()), Err(Error::EmptyInput));
    }

    #[test]
    fn test_single_symbol_root_is_a_leaf() {
        let tree = Tree::from_text("aaaa").unwrap();
        assert_eq!(
            tree.root(),
            &Node::Leaf {
                symbol: 'a',
                weight: 4
            }
        );
    }

    #[test]
    fn test_root_weight_is_total_count() {
        let tree = Tree::from_text("aabbbcc").unwrap();
        assert_eq!(tree.root().weight(), 7);
        assert!(!tree.root().is_leaf());
    }

    #[test]
    fn test_internal_nodes_have_summed_weights() {
        fn check(node: &Node) {
            if let Node::Internal { weight, left, right } = node {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        let tree = Tree::from_text("the quick brown fox jumps over the lazy dog").unwrap();
        check(tree.root());
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "mississippi river";
        let a = Tree::from_text(text).unwrap();
        let b = Tree::from_text(text).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tie_break_favors_earlier_insertion() {
        // Four symbols of equal weight: leaves enter ascending by symbol,
        // so 'a' and 'b' merge first, then 'c' and 'd'.
        let tree = Tree::from_text("abcd").unwrap();
        match tree.root() {
            Node::Internal { left, right, .. } => {
                assert_eq!(
                    **left,
                    Node::Internal {
                        weight: 2,
                        left: Box::new(Node::Leaf { symbol: 'a', weight: 1 }),
                        right: Box::new(Node::Leaf { symbol: 'b', weight: 1 }),
                    }
                );
                assert_eq!(
                    **right,
                    Node::Internal {
                        weight: 2,
                        left: Box::new(Node::Leaf { symbol: 'c', weight: 1 }),
                        right: Box::new(Node::Leaf { symbol: 'd', weight: 1 }),
                    }
                );
            }
            Node::Leaf { .. } => panic!("root of a 4-symbol tree cannot be a leaf"),
        }
    }

    #[test]
    fn test_count_frequencies() {
        let freq = count_frequencies("aabbbcc");
        assert_eq!(freq.get(&'a'), Some(&2));
        assert_eq!(freq.get(&'b'), Some(&3));
        assert_eq!(freq.get(&'c'), Some(&2));
        assert_eq!(freq.len(), 3);
    }
}
