#[macro_use]
mod macros;
mod api;
mod data;
mod dictionary;
mod engine;
mod rules;

pub use api::{Options, StemDetails, StemResultVerbose, Stemmer, stem, stem_verbose_with, stem_with};
pub use dictionary::{BuildReport, Collision, Dictionary, DictionaryBuilder, DictionaryEntry, EntrySource};
pub use engine::letters::{has_doubled_consonant, is_consonant, is_vowel};
pub use engine::{Resolution, RuleSet, RuleStep, StepOutcome};

use crate::engine::{Lexicon, WordBuffer};

/// Hard upper bound on the length of a stemmable word.
///
/// Terms of `MAX_WORD_LEN - 1` characters or more are passed through
/// lowercased, as are terms of two characters or fewer.
pub const MAX_WORD_LEN: usize = 100;

// --- Internal types ---------------------------------------------------------

/// A rule proposes a rewrite of the buffer.
///
/// `None` means the buffer is left exactly as it was: either the rule's
/// suffix is absent, or every candidate missed the dictionary and the rule
/// rolled back. `Some` carries the buffer the cascade continues with; it may
/// or may not be a dictionary hit (productive suffixes and default branches
/// commit without one).
pub(crate) type Transform = fn(&WordBuffer, &Lexicon<'_>) -> Option<WordBuffer>;

/// One stage of the suffix cascade.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Bit used by [`Options::rules`] to switch the stage on or off.
    pub flag: RuleSet,
    /// Suffixes the stage reacts to, for reports only.
    pub suffixes: &'static [&'static str],
    pub transform: Transform,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("flag", &self.flag)
            .field("suffixes", &self.suffixes)
            .field("transform", &"<function>")
            .finish()
    }
}
