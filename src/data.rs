//! Bundled dictionary source data.
//!
//! Four kinds of list feed the default [`crate::Dictionary`]:
//!
//! - exception words (their own root, flagged),
//! - direct conflations and nationality pairs (surface -> explicit root),
//! - headwords in alphabetic partitions, a technical supplement and proper
//!   nouns (plain entries).
//!
//! The lists are plain static data; nothing here is parsed at runtime beyond
//! splitting headword blocks on whitespace.

#[path = "data/conflations.rs"]
mod conflations;
#[path = "data/exceptions.rs"]
mod exceptions;
#[path = "data/headwords.rs"]
mod headwords;
#[path = "data/nationalities.rs"]
mod nationalities;
#[path = "data/supplement.rs"]
mod supplement;

pub(crate) use conflations::DIRECT_CONFLATIONS;
pub(crate) use exceptions::EXCEPTION_WORDS;
pub(crate) use headwords::HEADWORD_PARTITIONS;
pub(crate) use nationalities::COUNTRY_NATIONALITY;
pub(crate) use supplement::{PROPER_NOUNS, SUPPLEMENT_WORDS};

/// Rough entry count, used to size the table up front.
pub(crate) fn estimated_entries() -> usize {
    let headwords: usize = HEADWORD_PARTITIONS.iter().map(|p| p.split_ascii_whitespace().count()).sum();
    EXCEPTION_WORDS.len()
        + DIRECT_CONFLATIONS.len()
        + COUNTRY_NATIONALITY.len()
        + headwords
        + SUPPLEMENT_WORDS.len()
        + PROPER_NOUNS.len()
}
