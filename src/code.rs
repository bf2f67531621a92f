//! Code table generation.
//!
//! Walks the finished tree depth-first with a growable bit buffer (push on
//! descent, pop on return) and records the root-to-leaf path of each symbol
//! as its code: left = 0, right = 1.

use std::collections::HashMap;

use crate::tree::{Node, Tree};

/// Mapping from symbol to its prefix-free code, as a sequence of 0/1 values.
pub type CodeTable = HashMap<char, Vec<u8>>;

/// Generate the code table for `tree`.
///
/// Exactly one entry per distinct input symbol. A degenerate single-leaf
/// tree assigns its lone symbol the one-bit code `[0]`, so the encoded
/// stream still carries one bit per occurrence.
pub fn build_code_table(tree: &Tree) -> CodeTable {
    let mut table = CodeTable::new();
    let mut path = Vec::new();
    assign(tree.root(), &mut path, &mut table);
    table
}

fn assign(node: &Node, path: &mut Vec<u8>, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if path.is_empty() { vec![0] } else { path.clone() };
            table.insert(*symbol, code);
        }
        Node::Internal { left, right, .. } => {
            path.push(0);
            assign(left, path, table);
            path.pop();

            path.push(1);
            assign(right, path, table);
            path.pop();
        }
    }
}

/// Render a bit sequence as a `String` of `'0'`/`'1'` characters.
pub fn code_to_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}
