//! Builds a trie from a small word list and prints completions.
//!
//! Prefixes are taken from the command line:
//!
//! ```text
//! cargo run --example complete -- b be bell z
//! ```
use compact_trie::CompactTrie;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = ["bat", "bear", "bell", "bull", "stock", "stockade", "stop", "be"];
    let trie = CompactTrie::try_build(&words)?;

    println!("{}", trie.render(&words));

    let mut prefixes: Vec<String> = std::env::args().skip(1).collect();
    if prefixes.is_empty() {
        prefixes = vec!["b".to_string(), "be".to_string(), "sto".to_string(), "z".to_string()];
    }

    for prefix in &prefixes {
        match trie.completions(&words, prefix) {
            Some(list) => {
                let mut found: Vec<&str> = list.words(&words).collect();
                found.sort();
                println!("{:>8}: {}", prefix, found.join(", "));
            }
            None => println!("{:>8}: no match", prefix),
        }
    }

    let stats = trie.stats();
    println!(
        "{} words, {} nodes, {} markers, depth {}",
        trie.len(),
        stats.nodes,
        stats.markers,
        stats.max_depth
    );
    Ok(())
}
