//! Dictionary view handed to cascade rules.
//!
//! Rules only ever ask "is this candidate a known form?", so they get a thin
//! wrapper instead of the full [`Dictionary`]. The wrapper counts probes,
//! which verbose runs report per rule step.

use super::WordBuffer;
use crate::{Dictionary, DictionaryEntry};
use std::cell::Cell;

#[derive(Debug)]
pub(crate) struct Lexicon<'d> {
    dictionary: &'d Dictionary,
    probes: Cell<usize>,
}

impl<'d> Lexicon<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Lexicon { dictionary, probes: Cell::new(0) }
    }

    /// Look the candidate up, counting the probe.
    pub fn entry(&self, word: &WordBuffer) -> Option<&'d DictionaryEntry> {
        self.probes.set(self.probes.get() + 1);
        self.dictionary.lookup(word.as_str())
    }

    pub fn contains(&self, word: &WordBuffer) -> bool {
        self.entry(word).is_some()
    }

    /// A hit that is not exception-flagged.
    pub fn accepts(&self, word: &WordBuffer) -> bool {
        self.entry(word).is_some_and(|entry| !entry.is_exception())
    }

    /// Lookup that does not count as a rule probe (the cascade's own re-check).
    pub fn resolve(&self, word: &WordBuffer) -> Option<&'d DictionaryEntry> {
        self.dictionary.lookup(word.as_str())
    }

    pub fn probes(&self) -> usize {
        self.probes.get()
    }
}
