//! Line-oriented CLI wrapper: read a line of text, print the code table,
//! the encoded bit-string, and the decoded round trip.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use huffman::{code_to_string, decode, Encoder, Tree};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("Please enter the text to encode: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let text = line.trim_end_matches(&['\r', '\n'][..]);

    let tree = Tree::from_text(text)?;
    let encoder = Encoder::from_tree(&tree);
    debug!("code table has {} entries", encoder.code_table().len());

    let bits = encoder.encode(text)?;
    info!(
        "encoded {} symbols into {} bits",
        text.chars().count(),
        bits.len()
    );

    // Table order is implementation-defined; sort by symbol for display.
    let mut entries: Vec<_> = encoder.code_table().iter().collect();
    entries.sort_by_key(|&(s, _)| *s);

    println!("Huffman Codes:");
    for (symbol, code) in entries {
        println!("  {symbol:?}: {}", code_to_string(code));
    }
    println!("Encoded Text: {}", code_to_string(&bits));

    let decoded = decode(&bits, &tree)?;
    println!("Decoded Text: {decoded}");

    Ok(())
}
