//! The mutable word the cascade works on.
//!
//! A `WordBuffer` holds the lowercased term plus `j`, the index of the last
//! character *before* the suffix most recently matched by [`WordBuffer::ends_in`].
//! `k` (the index of the last character) is always `len() - 1` and is derived
//! rather than stored, so it can never drift from the contents.
//!
//! ```text
//!   r u n n i n g
//!   0 1 2 3 4 5 6
//!         ^     ^
//!         j     k        after ends_in("ing")
//! ```
//!
//! Only ASCII lowercase letters ever reach a buffer, so byte indexing and
//! character indexing coincide.

use super::letters;
use crate::MAX_WORD_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordBuffer {
    text: String,
    j: usize,
}

impl WordBuffer {
    /// Validate and lowercase `term`.
    ///
    /// Returns `None` for terms that are passed through unstemmed: two
    /// characters or fewer, `MAX_WORD_LEN - 1` characters or more, or
    /// containing anything other than ASCII letters.
    pub fn from_term(term: &str) -> Option<Self> {
        let len = term.chars().count();
        if len <= 2 || len >= MAX_WORD_LEN - 1 {
            return None;
        }
        if !term.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self::new(term.to_ascii_lowercase()))
    }

    /// Wrap an already lowercased ASCII word.
    pub fn new(text: String) -> Self {
        debug_assert!(text.bytes().all(|b| b.is_ascii_lowercase()));
        let j = text.len().saturating_sub(1);
        WordBuffer { text, j }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Index of the last character.
    pub fn k(&self) -> usize {
        self.text.len().saturating_sub(1)
    }

    /// Index of the character before the last matched suffix.
    pub fn j(&self) -> usize {
        self.j
    }

    pub fn at(&self, i: usize) -> u8 {
        self.text.as_bytes()[i]
    }

    pub fn last(&self) -> Option<u8> {
        self.text.as_bytes().last().copied()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Test for `suffix` at the end of the word and move `j` accordingly.
    ///
    /// On a match `j` points at the character just before the suffix. On a
    /// miss `j` is reset to `k`. A suffix must leave at least one character
    /// of stem in front of it to count as a match.
    pub fn ends_in(&mut self, suffix: &str) -> bool {
        if suffix.len() > self.k() || !self.text.ends_with(suffix) {
            self.j = self.k();
            return false;
        }
        self.j = self.text.len() - suffix.len() - 1;
        true
    }

    pub fn truncate(&mut self, len: usize) {
        self.text.truncate(len);
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Overwrite the character at `i`.
    pub fn set(&mut self, i: usize, ch: char) {
        let mut utf8 = [0u8; 4];
        self.text.replace_range(i..=i, ch.encode_utf8(&mut utf8));
    }

    /// Replace everything after `j` with `suffix`.
    pub fn set_suffix(&mut self, suffix: &str) {
        self.text.truncate(self.j + 1);
        self.text.push_str(suffix);
    }

    pub fn is_consonant(&self, i: usize) -> bool {
        letters::consonant_at(self.text.as_bytes(), i)
    }

    pub fn has_doubled_consonant(&self, i: usize) -> bool {
        letters::doubled_consonant_at(self.text.as_bytes(), i)
    }

    /// Whether the stem in front of the last matched suffix (`0..=j`) holds a
    /// vowel. Keeps acronyms like `"ced"` away from the verb rules.
    pub fn has_vowel_in_stem(&self) -> bool {
        letters::vowel_within(self.text.as_bytes(), self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(word: &str) -> WordBuffer {
        WordBuffer::new(word.to_string())
    }

    #[test]
    fn from_term_lowercases_and_validates() {
        assert_eq!(WordBuffer::from_term("Running").map(WordBuffer::into_string).as_deref(), Some("running"));
        assert!(WordBuffer::from_term("ok").is_none());
        assert!(WordBuffer::from_term("a1b").is_none());
        assert!(WordBuffer::from_term("naïve").is_none());
        assert!(WordBuffer::from_term(&"a".repeat(MAX_WORD_LEN - 1)).is_none());
        assert!(WordBuffer::from_term(&"a".repeat(MAX_WORD_LEN - 2)).is_some());
    }

    #[test]
    fn ends_in_moves_j_before_the_suffix() {
        let mut w = buffer("running");
        assert!(w.ends_in("ing"));
        assert_eq!(w.j(), 3);
        assert_eq!(w.k(), 6);

        assert!(!w.ends_in("ed"));
        assert_eq!(w.j(), w.k());
    }

    #[test]
    fn ends_in_requires_a_stem() {
        let mut w = buffer("ing");
        assert!(!w.ends_in("ing"));
        let mut w = buffer("sing");
        assert!(w.ends_in("ing"));
        assert_eq!(w.j(), 0);
    }

    #[test]
    fn set_suffix_replaces_after_j() {
        let mut w = buffer("ponies");
        assert!(w.ends_in("ies"));
        w.set_suffix("y");
        assert_eq!(w.as_str(), "pony");
    }

    #[test]
    fn set_overwrites_single_character() {
        let mut w = buffer("happiness");
        assert!(w.ends_in("ness"));
        w.truncate(w.j() + 1);
        w.set(w.j(), 'y');
        assert_eq!(w.as_str(), "happy");
    }

    #[test]
    fn vowel_in_stem_uses_j() {
        let mut w = buffer("cdsed");
        assert!(w.ends_in("ed"));
        assert!(!w.has_vowel_in_stem());

        let mut w = buffer("sky");
        assert!(w.ends_in("y"));
        assert!(!w.has_vowel_in_stem());
        assert!(w.ends_in("ky"));
        assert!(!w.has_vowel_in_stem());

        let mut w = buffer("played");
        assert!(w.ends_in("ed"));
        assert!(w.has_vowel_in_stem());
    }
}
