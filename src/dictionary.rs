//! The lexicon every cascade candidate is validated against.
//!
//! A [`Dictionary`] maps case-folded surface forms to a [`DictionaryEntry`].
//! It is assembled once from several disjoint source lists and never mutated
//! afterwards, so a shared reference can be used from any number of threads.
//!
//! ## Build order
//!
//! ```text
//! exceptions ─▶ conflations ─▶ nationalities ─▶ headwords (4 partitions)
//!            ─▶ supplement ─▶ proper nouns
//! ```
//!
//! The first list to insert a key wins. A later insert of the same key is
//! skipped and recorded as a [`Collision`] in the [`BuildReport`]; it never
//! aborts the build.

use crate::data;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static SHARED: Lazy<Dictionary> = Lazy::new(Dictionary::build);

/// What the dictionary knows about one surface form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryEntry {
    is_exception: bool,
    explicit_root: Option<Box<str>>,
}

impl DictionaryEntry {
    /// A plain headword: its own root, no special handling.
    pub fn headword() -> Self {
        DictionaryEntry::default()
    }

    /// Its own root, but the past-tense and aspect stages keep looking for a
    /// better candidate when they land on it ("aided" -> "aid", not "aide").
    pub fn exception() -> Self {
        DictionaryEntry { is_exception: true, explicit_root: None }
    }

    /// A surface form that resolves to a different root ("theses" -> "thesis").
    pub fn conflation(root: &str) -> Self {
        DictionaryEntry { is_exception: false, explicit_root: Some(root.to_lowercase().into_boxed_str()) }
    }

    pub fn is_exception(&self) -> bool {
        self.is_exception
    }

    pub fn explicit_root(&self) -> Option<&str> {
        self.explicit_root.as_deref()
    }

    /// The root for a match on `surface`.
    pub fn resolve<'a>(&'a self, surface: &'a str) -> &'a str {
        self.explicit_root().unwrap_or(surface)
    }
}

/// Which source list an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntrySource {
    Exceptions,
    Conflations,
    Nationalities,
    Headwords,
    Supplement,
    ProperNouns,
    /// Anything added by an embedder through [`DictionaryBuilder`].
    Custom,
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntrySource::Exceptions => "exceptions",
            EntrySource::Conflations => "conflations",
            EntrySource::Nationalities => "nationalities",
            EntrySource::Headwords => "headwords",
            EntrySource::Supplement => "supplement",
            EntrySource::ProperNouns => "proper nouns",
            EntrySource::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A key inserted twice during a build. The earlier entry is the one kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub word: String,
    pub kept: EntrySource,
    pub rejected: EntrySource,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' from {} already present from {}", self.word, self.rejected, self.kept)
    }
}

/// Diagnostics gathered while building a [`Dictionary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub collisions: Vec<Collision>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Immutable surface-form lookup table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<Box<str>, DictionaryEntry>,
}

impl Dictionary {
    /// The process-wide default dictionary, built on first use.
    ///
    /// Concurrent first calls block until the single build finishes; no caller
    /// ever sees a partially filled table.
    pub fn shared() -> &'static Dictionary {
        &SHARED
    }

    /// Build the default dictionary from the bundled source lists.
    ///
    /// Collisions are logged and otherwise dropped; use
    /// [`Dictionary::build_with_report`] to inspect them.
    pub fn build() -> Dictionary {
        let (dictionary, report) = Dictionary::build_with_report();
        for collision in &report.collisions {
            tracing::debug!(target: "kstem::dictionary", %collision, "duplicate dictionary key skipped");
        }
        if !report.is_clean() {
            tracing::warn!(
                target: "kstem::dictionary",
                collisions = report.collisions.len(),
                "dictionary sources overlap; first entries kept"
            );
        }
        tracing::debug!(target: "kstem::dictionary", entries = dictionary.len(), "dictionary built");
        dictionary
    }

    /// Build the default dictionary and return the collision report with it.
    pub fn build_with_report() -> (Dictionary, BuildReport) {
        let mut builder = DictionaryBuilder::with_capacity(data::estimated_entries());
        builder.add_exceptions(data::EXCEPTION_WORDS);
        builder.add_conflations(data::DIRECT_CONFLATIONS, EntrySource::Conflations);
        builder.add_conflations(data::COUNTRY_NATIONALITY, EntrySource::Nationalities);
        for partition in data::HEADWORD_PARTITIONS {
            builder.add_headwords(partition.split_ascii_whitespace(), EntrySource::Headwords);
        }
        builder.add_headwords(data::SUPPLEMENT_WORDS.iter().copied(), EntrySource::Supplement);
        builder.add_headwords(data::PROPER_NOUNS.iter().copied(), EntrySource::ProperNouns);
        builder.finish()
    }

    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Incremental, first-writer-wins construction of a [`Dictionary`].
///
/// ```
/// use kstem::{DictionaryBuilder, EntrySource};
///
/// let mut builder = DictionaryBuilder::new();
/// builder.add_conflations(&[("geese", "goose")], EntrySource::Custom);
/// builder.add_headwords(["goose", "geese"], EntrySource::Custom);
/// let (dictionary, report) = builder.finish();
///
/// assert_eq!(dictionary.lookup("geese").and_then(|e| e.explicit_root()), Some("goose"));
/// assert_eq!(report.collisions.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: HashMap<Box<str>, (DictionaryEntry, EntrySource)>,
    collisions: Vec<Collision>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        DictionaryBuilder::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DictionaryBuilder { entries: HashMap::with_capacity(capacity), collisions: Vec::new() }
    }

    /// Insert one entry. Returns `false` (and records a collision) when the
    /// key is already present.
    pub fn insert(&mut self, word: &str, entry: DictionaryEntry, source: EntrySource) -> bool {
        let key = word.to_lowercase();
        if let Some((_, kept)) = self.entries.get(key.as_str()) {
            self.collisions.push(Collision { word: key, kept: *kept, rejected: source });
            return false;
        }
        self.entries.insert(key.into_boxed_str(), (entry, source));
        true
    }

    /// Exception-flagged words, each its own root.
    pub fn add_exceptions(&mut self, words: &[&str]) -> &mut Self {
        for word in words {
            self.insert(word, DictionaryEntry::exception(), EntrySource::Exceptions);
        }
        self
    }

    /// `(surface, root)` pairs.
    pub fn add_conflations(&mut self, pairs: &[(&str, &str)], source: EntrySource) -> &mut Self {
        for (surface, root) in pairs {
            self.insert(surface, DictionaryEntry::conflation(root), source);
        }
        self
    }

    /// Plain headwords.
    pub fn add_headwords<'a>(&mut self, words: impl IntoIterator<Item = &'a str>, source: EntrySource) -> &mut Self {
        for word in words {
            self.insert(word, DictionaryEntry::headword(), source);
        }
        self
    }

    pub fn finish(self) -> (Dictionary, BuildReport) {
        let entries = self.entries.into_iter().map(|(word, (entry, _))| (word, entry)).collect();
        (Dictionary { entries }, BuildReport { collisions: self.collisions })
    }
}
