//! Stemming engine.
//!
//! The engine owns everything between a validated term and its final root:
//! the word buffer rules operate on, the letter classifier, the ordered
//! cascade of suffix rules, and the driver that ties them to a dictionary.
//!
//! ## How the parts work together
//!
//! ```text
//! term ── WordBuffer::from_term ──┬─ None ──────────────▶ lowercased term
//!         (buffer.rs)             │                      (PassThrough)
//!                                 v
//!                      Dictionary::lookup(word) ── hit ─▶ root (Direct)
//!                                 │ miss
//!                                 v
//!                      apply_cascade (cascade.rs)
//!                        for rule in CASCADE (17, fixed order):
//!                          rule.transform(&buffer, &lexicon)
//!                            None       -> buffer untouched
//!                            Some(next) -> buffer = next
//!                          dictionary re-check ── hit ─▶ root (Cascade)
//!                                 │ exhausted
//!                                 v
//!                       buffer contents (Exhausted)
//! ```
//!
//! Rules never restore state by hand: they work on a clone of the buffer and
//! either hand back the rewritten clone or drop it.
//!
//! ## Responsibilities by module
//!
//! - `buffer.rs`: `WordBuffer`, input validation, suffix matching (`ends_in`
//!   sets `j`) and the small set of rewrites rules are written in.
//! - `letters.rs`: vowel/consonant classification with the `y` rule,
//!   doubled-consonant detection, vowel-in-stem.
//! - `lexicon.rs`: dictionary view handed to rules; counts probes.
//! - `rule_set.rs`: `RuleSet` bitflags, one bit per cascade stage.
//! - `cascade.rs`: the rule table and the first-hit-wins driver.
//! - `driver.rs`: the top-level stem procedure.
//! - `metrics.rs`: per-call trace data for verbose runs.
//!
//! ## Debugging
//!
//! Every rule step is emitted as a `tracing` event at `TRACE` level under the
//! `kstem::engine` target; `RUST_LOG=kstem=trace` on the CLI shows them.

#[path = "engine/buffer.rs"]
mod buffer;
#[path = "engine/cascade.rs"]
mod cascade;
#[path = "engine/driver.rs"]
mod driver;
#[path = "engine/letters.rs"]
pub(crate) mod letters;
#[path = "engine/lexicon.rs"]
mod lexicon;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rule_set.rs"]
mod rule_set;

pub(crate) use buffer::WordBuffer;
pub(crate) use cascade::CASCADE;
pub(crate) use driver::run;
pub(crate) use lexicon::Lexicon;
pub use metrics::{Resolution, RuleStep, StepOutcome};
pub use rule_set::RuleSet;
