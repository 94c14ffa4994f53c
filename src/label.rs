//! Edge labels that reference text in the word table instead of copying it.

use std::ops::Range;

/// The text carried by one edge of the trie.
///
/// A label names a *witness* word by its index in the word table together with
/// a half-open byte range into that word. Every word whose path runs through
/// the edge agrees with the witness over that range, so the witness is just one
/// convenient place to read the text from.
///
/// A label with `start == end` is a terminal marker. It spells nothing and is
/// only ever found on a leaf, where it marks that the path leading to it is a
/// complete word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeLabel {
    /// Index of the witness word in the word table
    pub word: usize,

    /// First byte offset covered by the edge
    pub start: usize,

    /// One past the last byte offset covered by the edge
    pub end: usize,
}

impl EdgeLabel {
    /// Creates a label over `word[start..end]`.
    pub fn new(word: usize, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "label range {}..{} is inverted", start, end);
        EdgeLabel { word, start, end }
    }

    /// Creates a terminal marker for `word` at byte offset `at`.
    pub fn marker(word: usize, at: usize) -> Self {
        EdgeLabel {
            word,
            start: at,
            end: at,
        }
    }

    /// Number of bytes the edge spells.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for terminal markers.
    pub fn is_marker(&self) -> bool {
        self.start == self.end
    }

    /// The byte range of the witness word covered by this edge.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The first byte of the edge text, or `None` for a terminal marker.
    pub fn first_byte<S: AsRef<str>>(&self, words: &[S]) -> Option<u8> {
        if self.is_marker() {
            return None;
        }
        self.witness(words).get(self.start).copied()
    }

    /// The edge text, read from the witness word.
    pub fn text<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w [u8] {
        &self.witness(words)[self.range()]
    }

    /// The whole witness word as bytes.
    pub fn witness<'w, S: AsRef<str>>(&self, words: &'w [S]) -> &'w [u8] {
        words[self.word].as_ref().as_bytes()
    }
}
