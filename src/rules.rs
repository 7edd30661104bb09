//! Suffix rules of the cascade.
//!
//! Every rule has the same shape, `fn(&WordBuffer, &Lexicon) -> Option<WordBuffer>`,
//! and works on its own clone of the buffer:
//!
//! - **dictionary-gated**: recognise the suffix, try candidate rewrites in a
//!   fixed order, return the first one the dictionary knows; otherwise `None`
//!   (the clone is dropped, which is the whole rollback).
//! - **productive**: once the suffix is recognised, return the rewrite without
//!   asking the dictionary (`-ness`, `-ism`, and the default branches of
//!   several gated rules).
//!
//! Candidate order inside a rule is significant. Changing it changes real
//! results ("capacity" vs "capac", "aided" vs "aide").
//!
//! Rules are grouped by what they strip:
//!
//! - `inflection.rs`: plural, past tense, aspect
//! - `nominal.rs`: -ity, -ness, -ion, -er/-or, -ment, -ism, -ncy, -nce
//! - `adjectival.rs`: -ly, -al, -ive, -ize, -able/-ible, -ic

#[path = "rules/adjectival.rs"]
pub(crate) mod adjectival;
#[path = "rules/inflection.rs"]
pub(crate) mod inflection;
#[path = "rules/nominal.rs"]
pub(crate) mod nominal;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;
