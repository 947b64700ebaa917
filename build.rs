//! Build script to generate embedded word lists
//!
//! Reads the bundled category word lists and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: &[(&str, &str, &str)] = &[
    ("easy", "EASY", "Common, everyday words (Easy difficulty)"),
    ("hard", "HARD", "Uncommon and challenging words (Hard difficulty)"),
    ("animals", "ANIMALS", "Custom category: animals"),
    ("countries", "COUNTRIES", "Custom category: countries"),
    ("movies", "MOVIES", "Custom category: movies"),
    ("mixed", "MIXED", "Custom category: mixed bag"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(stem, const_name, doc_comment) in LISTS {
        let input_path = format!("data/{stem}.txt");
        generate_word_list(&input_path, &mut output, const_name, doc_comment);

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output: &mut fs::File, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
