//! Encoding and decoding.
//!
//! The encoder is a fold over the input: each symbol's code is looked up in
//! the table and appended to the output bit sequence. The decoder is a
//! cursor walking the tree bit by bit, emitting a symbol and resetting to
//! the root each time it lands on a leaf.
//!
//! One tree serves both directions: the decoder borrows the tree that was
//! built for encoding instead of reconstructing it.

use crate::code::{build_code_table, CodeTable};
use crate::error::{Error, Result};
use crate::tree::{Node, Tree};

/// Huffman encoder: maps symbols through a code table.
#[derive(Debug, Clone)]
pub struct Encoder {
    codes: CodeTable,
}

impl Encoder {
    /// Create an encoder from a built tree.
    pub fn from_tree(tree: &Tree) -> Self {
        Self {
            codes: build_code_table(tree),
        }
    }

    /// Create an encoder from an existing code table.
    ///
    /// The caller guarantees the table covers every symbol that will be
    /// encoded.
    pub fn with_table(codes: CodeTable) -> Self {
        Self { codes }
    }

    /// Borrow the code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// Encode `text` into a sequence of 0/1 values, codes concatenated in
    /// input order.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if a symbol has no code, which can
    /// only happen when the table was built from different data.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for ch in text.chars() {
            let code = self.codes.get(&ch).ok_or(Error::UnknownSymbol(ch))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

/// Huffman decoder: walks a borrowed tree bit by bit.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    root: &'a Node,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over the tree the stream was encoded with.
    ///
    /// Decoding requires the same tree structure used for encoding; the
    /// tree is borrowed read-only, never rebuilt.
    pub fn new(tree: &'a Tree) -> Self {
        Self { root: tree.root() }
    }

    /// Decode a sequence of 0/1 values back into text.
    ///
    /// # Errors
    /// - [`Error::CorruptStream`] if a bit value is neither 0 nor 1, or a
    ///   non-zero bit appears in a single-leaf-tree stream.
    /// - [`Error::TruncatedStream`] if the bits run out mid-code.
    pub fn decode(&self, bits: &[u8]) -> Result<String> {
        let mut out = String::new();

        // Degenerate tree: the lone symbol is coded as a single 0 bit, so
        // every bit emits one occurrence.
        if let Node::Leaf { symbol, .. } = self.root {
            for (i, &bit) in bits.iter().enumerate() {
                if bit != 0 {
                    return Err(Error::CorruptStream(i));
                }
                out.push(*symbol);
            }
            return Ok(out);
        }

        let mut cursor = self.root;
        for (i, &bit) in bits.iter().enumerate() {
            cursor = match cursor {
                Node::Internal { left, right, .. } => match bit {
                    0 => left,
                    1 => right,
                    _ => return Err(Error::CorruptStream(i)),
                },
                // The cursor resets to the root after every emitted symbol
                // and the root is internal here, so it never rests on a leaf.
                Node::Leaf { .. } => unreachable!("decode cursor rests on internal nodes"),
            };
            if let Node::Leaf { symbol, .. } = cursor {
                out.push(*symbol);
                cursor = self.root;
            }
        }

        if !std::ptr::eq(cursor, self.root) {
            return Err(Error::TruncatedStream(bits.len()));
        }
        Ok(out)
    }
}

/// One-shot encode: build the tree and table from `text`, then encode it.
///
/// Returns the code table and the encoded bit sequence. Callers that also
/// need to decode should hold the tree themselves via [`Tree::from_text`]
/// and use [`Encoder`]/[`Decoder`] directly.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty `text`.
pub fn encode(text: &str) -> Result<(CodeTable, Vec<u8>)> {
    let tree = Tree::from_text(text)?;
    let encoder = Encoder::from_tree(&tree);
    let bits = encoder.encode(text)?;
    Ok((encoder.codes, bits))
}

/// One-shot decode of `bits` against `tree`.
///
/// # Errors
/// Propagates [`Decoder::decode`] failures.
pub fn decode(bits: &[u8], tree: &Tree) -> Result<String> {
    Decoder::new(tree).decode(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let text = "abracadabra";
        let tree = Tree::from_text(text).unwrap();
        let encoder = Encoder::from_tree(&tree);
        let bits = encoder.encode(text).unwrap();
        let decoded = Decoder::new(&tree).decode(&bits).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_one_shot_interface_roundtrip() {
        let text = "so much depends upon a red wheel barrow";
        let tree = Tree::from_text(text).unwrap();
        let (codes, bits) = encode(text).unwrap();
        assert_eq!(codes, build_code_table(&tree));
        assert_eq!(decode(&bits, &tree).unwrap(), text);
    }

    #[test]
    fn test_encoded_length_is_weighted_code_length() {
        let text = "aabbbcc";
        let tree = Tree::from_text(text).unwrap();
        let encoder = Encoder::from_tree(&tree);
        let bits = encoder.encode(text).unwrap();

        let freq = crate::tree::count_frequencies(text);
        let expected: usize = freq
            .iter()
            .map(|(s, &n)| n as usize * encoder.code_table()[s].len())
            .sum();
        assert_eq!(bits.len(), expected);
        assert_eq!(bits.len(), 11);
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let tree = Tree::from_text("aabbbcc").unwrap();
        let encoder = Encoder::from_tree(&tree);
        assert_eq!(encoder.encode("abcz"), Err(Error::UnknownSymbol('z')));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let text = "aaaa";
        let tree = Tree::from_text(text).unwrap();
        let encoder = Encoder::from_tree(&tree);
        let bits = encoder.encode(text).unwrap();
        assert_eq!(bits, vec![0, 0, 0, 0]);
        assert_eq!(Decoder::new(&tree).decode(&bits).unwrap(), text);
    }

    #[test]
    fn test_single_leaf_stream_with_one_bit_is_corrupt() {
        let tree = Tree::from_text("aaaa").unwrap();
        let err = Decoder::new(&tree).decode(&[0, 1, 0]).unwrap_err();
        assert_eq!(err, Error::CorruptStream(1));
    }

    #[test]
    fn test_truncated_stream_is_detected() {
        let text = "aabbbcc";
        let tree = Tree::from_text(text).unwrap();
        let encoder = Encoder::from_tree(&tree);
        let mut bits = encoder.encode(text).unwrap();
        // Chop the last bit of the final two-bit code: the cursor is left
        // mid-tree when the stream runs out.
        bits.pop();
        let err = Decoder::new(&tree).decode(&bits).unwrap_err();
        assert_eq!(err, Error::TruncatedStream(bits.len()));
    }

    #[test]
    fn test_invalid_bit_value_is_corrupt() {
        let tree = Tree::from_text("aabbbcc").unwrap();
        let err = Decoder::new(&tree).decode(&[0, 2]).unwrap_err();
        assert_eq!(err, Error::CorruptStream(1));
    }

    #[test]
    fn test_empty_stream_decodes_to_empty_text() {
        let tree = Tree::from_text("aabbbcc").unwrap();
        assert_eq!(Decoder::new(&tree).decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_determinism_across_runs() {
        let text = "determinism is a feature";
        let (codes_a, bits_a) = encode(text).unwrap();
        let (codes_b, bits_b) = encode(text).unwrap();
        assert_eq!(codes_a, codes_b);
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_unicode_symbols_roundtrip() {
        let text = "héllo wörld — ❄❄❄";
        let tree = Tree::from_text(text).unwrap();
        let (_, bits) = encode(text).unwrap();
        assert_eq!(decode(&bits, &tree).unwrap(), text);
    }
}
