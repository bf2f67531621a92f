//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman tree construction, encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tree construction was attempted over zero symbols.
    #[error("empty input: cannot build a tree from zero symbols")]
    EmptyInput,

    /// A symbol being encoded has no entry in the code table.
    ///
    /// This signals that the table was built from different data than the
    /// text being encoded.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),

    /// Decoding hit a bit that cannot be followed in the tree.
    ///
    /// Carries the index of the offending bit.
    #[error("corrupt bit stream at bit {0}")]
    CorruptStream(usize),

    /// The bit stream ended in the middle of a code.
    ///
    /// Carries the number of bits consumed before the stream ran out.
    #[error("truncated bit stream: ended mid-code after {0} bits")]
    TruncatedStream(usize),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
