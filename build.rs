//! Build script to generate the embedded word list
//!
//! Reads the curated word file and generates Rust source code with one const
//! array per playable board length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string("data/words.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/words.txt: {e}"));

    // Partition tokens by length; only 3- and 5-letter boards are playable
    let mut three_letter: Vec<&str> = Vec::new();
    let mut five_letter: Vec<&str> = Vec::new();

    for token in content.split_whitespace() {
        match token.len() {
            3 => three_letter.push(token),
            5 => five_letter.push(token),
            _ => {}
        }
    }

    // Membership lookup binary-searches these lists, so emit them sorted
    three_letter.sort_unstable();
    three_letter.dedup();
    five_letter.sort_unstable();
    five_letter.dedup();

    generate_word_list(
        &three_letter,
        &Path::new(&out_dir).join("three_letter.rs"),
        "THREE_LETTER",
        "Default three-letter words, sorted ascending",
    );

    generate_word_list(
        &five_letter,
        &Path::new(&out_dir).join("five_letter.rs"),
        "FIVE_LETTER",
        "Default five-letter words, sorted ascending",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(words: &[&str], output_path: &Path, const_name: &str, doc_comment: &str) {
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
