//! Stemming run metrics.
//!
//! Normal calls only produce a string. Verbose calls additionally record how
//! the result was reached:
//!
//! - [`Resolution`]: which path produced the root.
//! - [`RuleStep`]: one entry per cascade stage that ran, in order.
//! - timing and the number of dictionary probes made by rules.
//!
//! Steps allocate (they keep the buffer before and after each stage), so they
//! are only collected when asked for.

use std::time::Duration;

/// How the final root was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Input was too short, too long, or not purely alphabetic.
    PassThrough,
    /// The whole word was found in the dictionary.
    Direct,
    /// A cascade stage produced a dictionary hit.
    Cascade { rule: &'static str },
    /// No stage produced a hit; the buffer contents are the answer.
    Exhausted,
}

/// What a single cascade stage did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Suffix absent (or a length/vowel guard failed); nothing was probed.
    NotApplicable,
    /// Candidates were probed, none hit, and the buffer was left as it was.
    RolledBack,
    /// The stage committed a new buffer.
    Rewritten,
}

/// Trace of one cascade stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStep {
    pub rule: &'static str,
    pub outcome: StepOutcome,
    pub before: String,
    pub after: String,
    /// Dictionary lookups made by the stage itself.
    pub probes: usize,
    /// Whether the buffer after the stage is a dictionary key.
    pub hit: bool,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the call.
    pub total: Duration,
    /// Dictionary lookups made by rules, summed over all steps.
    pub probes: usize,
    /// Stages in the order they ran.
    pub steps: Vec<RuleStep>,
}

/// Driver output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub stem: String,
    pub resolution: Resolution,
    pub metrics: RunMetrics,
}
