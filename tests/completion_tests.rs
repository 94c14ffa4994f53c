use compact_trie::CompactTrie;
use std::collections::HashSet;

const WORDS: [&str; 5] = ["bat", "bear", "bell", "bull", "stock"];

fn completion_set<'w>(trie: &CompactTrie, words: &'w [&'w str], prefix: &str) -> Option<HashSet<&'w str>> {
    trie.completions(words, prefix)
        .map(|list| list.words(words).collect())
}

fn set<'a>(items: &[&'a str]) -> HashSet<&'a str> {
    items.iter().copied().collect()
}

#[test]
fn test_completion_examples() {
    let trie = CompactTrie::build(&WORDS);

    assert_eq!(
        completion_set(&trie, &WORDS, "b"),
        Some(set(&["bat", "bear", "bell", "bull"]))
    );
    assert_eq!(completion_set(&trie, &WORDS, "be"), Some(set(&["bear", "bell"])));

    // A whole word is a valid prefix and yields a single leaf
    let bell = trie.completions(&WORDS, "bell").unwrap();
    assert_eq!(bell.len(), 1);
    assert_eq!(bell.words(&WORDS).collect::<Vec<_>>(), vec!["bell"]);

    assert!(trie.completions(&WORDS, "z").is_none());
    assert!(trie.completions(&WORDS, "").is_none());
}

#[test]
fn test_completion_order_is_not_needed() {
    // Same words, different insertion order: same completion sets
    let shuffled = ["stock", "bull", "bell", "bat", "bear"];
    let trie1 = CompactTrie::build(&WORDS);
    let trie2 = CompactTrie::build(&shuffled);

    for prefix in &["b", "be", "bu", "s", "sto", "bear", "x"] {
        assert_eq!(
            completion_set(&trie1, &WORDS, prefix),
            completion_set(&trie2, &shuffled, prefix),
            "prefix {:?}",
            prefix
        );
    }
}

#[test]
fn test_empty_table() {
    let words: [&str; 0] = [];
    let trie = CompactTrie::build(&words);

    assert!(trie.is_empty());
    assert!(trie.completions(&words, "a").is_none());
    assert!(trie.completions(&words, "").is_none());
}

#[test]
fn test_prefix_word_inserted_after_longer_word() {
    let words = ["bells", "bell"];
    let trie = CompactTrie::build(&words);

    assert_eq!(trie.len(), 2);
    assert_eq!(completion_set(&trie, &words, "bell"), Some(set(&["bell", "bells"])));
    assert_eq!(completion_set(&trie, &words, "bells"), Some(set(&["bells"])));
}

#[test]
fn test_longer_word_inserted_after_prefix_word() {
    let words = ["bell", "bells"];
    let trie = CompactTrie::build(&words);

    assert_eq!(trie.len(), 2);
    assert_eq!(completion_set(&trie, &words, "bel"), Some(set(&["bell", "bells"])));
    assert_eq!(completion_set(&trie, &words, "bells"), Some(set(&["bells"])));
    assert!(trie.contains(&words, "bell"));
}

#[test]
fn test_word_ending_on_branch() {
    let words = ["bear", "bell", "be", "b"];
    let trie = CompactTrie::build(&words);

    assert_eq!(trie.len(), 4);
    assert_eq!(
        completion_set(&trie, &words, "b"),
        Some(set(&["b", "be", "bear", "bell"]))
    );
    assert_eq!(completion_set(&trie, &words, "be"), Some(set(&["be", "bear", "bell"])));
    assert_eq!(trie.stats().markers, 2);
}

#[test]
fn test_duplicates() {
    let words = ["bell", "bear", "bell", "bell", "be", "be"];
    let trie = CompactTrie::build(&words);

    assert_eq!(trie.word_count(), 6);
    assert_eq!(trie.duplicates(), 3);
    assert_eq!(trie.len(), 3);

    // Each distinct word is completed exactly once
    let list = trie.completions(&words, "be").unwrap();
    let mut found: Vec<_> = list.words(&words).collect();
    found.sort();
    assert_eq!(found, vec!["be", "bear", "bell"]);
}

#[test]
fn test_owned_word_table() {
    let words: Vec<String> = vec!["apple", "apricot", "banana", "blueberry", "blackberry"]
        .into_iter()
        .map(String::from)
        .collect();
    let trie = CompactTrie::try_build(&words).unwrap();

    let list = trie.completions(&words, "ap").unwrap();
    let mut found: Vec<_> = list.words(&words).collect();
    found.sort();
    assert_eq!(found, vec!["apple", "apricot"]);

    let list = trie.completions(&words, "bl").unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn test_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let words: Arc<Vec<String>> = Arc::new(WORDS.iter().map(|w| w.to_string()).collect());
    let trie = Arc::new(CompactTrie::build(words.as_slice()));

    let handles: Vec<_> = ["b", "be", "s"]
        .iter()
        .map(|prefix| {
            let words = Arc::clone(&words);
            let trie = Arc::clone(&trie);
            let prefix = prefix.to_string();
            thread::spawn(move || {
                let count = trie.completions(words.as_slice(), &prefix).map(|list| list.len());
                count
            })
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![Some(4), Some(2), Some(1)]);
}

#[test]
fn test_render_lists_every_node() {
    let trie = CompactTrie::build(&WORDS);
    let drawn = trie.render(&WORDS).to_string();

    assert_eq!(drawn.lines().count(), trie.stats().nodes + 1);
    assert!(drawn.starts_with("root\n"));
    assert!(drawn.contains("bear (1, 2..4)"));
    assert!(drawn.contains("stock (4, 0..5)"));
}
