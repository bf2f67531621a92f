#![no_main]
use huffman::{decode, encode, Tree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    if text.is_empty() {
        return;
    }

    let tree = Tree::from_text(&text).unwrap();
    let (table, bits) = encode(&text).unwrap();

    // Every distinct symbol has a non-empty code.
    assert_eq!(table.len(), huffman::count_frequencies(&text).len());
    assert!(table.values().all(|code| !code.is_empty()));

    let decoded = decode(&bits, &tree).unwrap();
    assert_eq!(decoded, text);
});
