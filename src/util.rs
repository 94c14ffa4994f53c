/// Finds the length of the common prefix between a word and a label's text.
///
/// Returns the number of bytes that match, comparing `word[start_idx..]`
/// against `fragment` from its first byte.
pub fn prefix_match(word: &[u8], start_idx: usize, fragment: &[u8]) -> usize {
    let mut i = 0;

    while i < fragment.len() && start_idx + i < word.len() && word[start_idx + i] == fragment[i] {
        i += 1;
    }

    i
}

/// Returns `true` if `word` may be stored in the trie.
///
/// Words are expected to be lowercase; anything with uppercase letters,
/// whitespace or control characters is rejected.
pub fn is_lowercase_word(word: &str) -> bool {
    word.chars()
        .all(|ch| !(ch.is_uppercase() || ch.is_whitespace() || ch.is_control()))
}
