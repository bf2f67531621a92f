//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code already had the idea: give frequent symbols short codes and
//! rare symbols long ones. The catch is ambiguity: if one code is a prefix
//! of another, the decoder cannot tell where a symbol ends.
//!
//! Huffman's construction solves both problems at once. Put every symbol in
//! a pile weighted by its frequency, then repeatedly glue the two lightest
//! piles together until one tree remains. Reading the path to each leaf as
//! left = 0 / right = 1 yields a code that is prefix-free *by shape*: no
//! leaf sits on the path to another leaf.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1949  Fano       Top-down splitting (Shannon-Fano, suboptimal)
//! 1952  Huffman    Bottom-up merging: provably optimal prefix codes
//! 1976  Rissanen   Arithmetic coding beats the one-bit-per-symbol floor
//! 2007  Duda       ANS: arithmetic-grade rates at Huffman-grade speed
//! ```
//!
//! David Huffman (1952) found the algorithm as a term paper at MIT, after
//! his professor (Fano) had failed to crack the problem top-down. Working
//! bottom-up from the *rarest* symbols was the key inversion.
//!
//! ## Mathematical Formulation
//!
//! Given symbols $s$ with frequencies $f_s$, a prefix code assigns each
//! symbol a codeword of length $\ell_s$ subject to the Kraft inequality
//! $\sum_s 2^{-\ell_s} \le 1$. Huffman's tree minimizes the total cost
//!
//! ```text
//! L = \sum_s f_s \cdot \ell_s
//! ```
//!
//! over all prefix codes, and $L$ is within one bit per symbol of the
//! Shannon entropy.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ construction for $n$ distinct symbols
//!   (heap-driven merging), $O(1)$ amortized per encoded or decoded bit.
//! - **Space**: $O(n)$ for the tree and the code table.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: no symbols means no tree; construction refuses it.
//! 2. **Wrong table**: encoding text the table was not built from hits an
//!    unknown symbol.
//! 3. **Damaged streams**: decoding detects both invalid bits and streams
//!    cut off mid-code.
//!
//! ## Implementation Notes
//!
//! This crate keeps the classic structure visible: an array-based
//! [`heap::MinHeap`], a [`tree::Tree`] built by repeated merging, a
//! [`code::CodeTable`] generated by traversal, and [`Encoder`]/[`Decoder`]
//! state machines. The tree built for encoding is borrowed by the decoder;
//! it is never serialized or rebuilt. Equal-weight ties break toward the
//! earlier-inserted heap entry, so identical input always yields identical
//! codes.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Cormen, Leiserson, Rivest, Stein. *Introduction to Algorithms*,
//!   section 16.3 "Huffman codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod codec;
pub mod error;
pub mod heap;
pub mod tree;

pub use code::{build_code_table, code_to_string, CodeTable};
pub use codec::{decode, encode, Decoder, Encoder};
pub use error::Error;
pub use tree::{count_frequencies, FreqTable, Node, Tree};
