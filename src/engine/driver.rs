//! Top-level stem procedure.
//!
//! ```text
//! term ─▶ validate ─▶ lowercase ─▶ direct lookup ─▶ cascade ─▶ resolve root
//! ```
//!
//! Resolution prefers an entry's explicit root ("aging" -> "age",
//! "italian" -> "italy") and otherwise returns the buffer contents.

use super::cascade::apply_cascade;
use super::metrics::{Resolution, RunMetrics, RunResult};
use super::{Lexicon, WordBuffer};
use crate::{Dictionary, Options};
use std::time::Instant;

/// Stem `term` against `dictionary`.
///
/// When `collect_steps` is false no per-stage trace is allocated; timing and
/// probe counts are always filled in.
pub(crate) fn run(term: &str, dictionary: &Dictionary, options: &Options, collect_steps: bool) -> RunResult {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();

    let Some(mut buffer) = WordBuffer::from_term(term) else {
        metrics.total = started.elapsed();
        return RunResult { stem: term.to_lowercase(), resolution: Resolution::PassThrough, metrics };
    };

    if let Some(entry) = dictionary.lookup(buffer.as_str()) {
        let stem = entry.resolve(buffer.as_str()).to_string();
        metrics.total = started.elapsed();
        return RunResult { stem, resolution: Resolution::Direct, metrics };
    }

    let lexicon = Lexicon::new(dictionary);
    let mut steps = Vec::new();
    let hit = apply_cascade(&mut buffer, &lexicon, options.rules, collect_steps.then_some(&mut steps));

    let (stem, resolution) = match hit {
        Some(hit) => (hit.entry.resolve(buffer.as_str()).to_string(), Resolution::Cascade { rule: hit.rule }),
        None => (buffer.into_string(), Resolution::Exhausted),
    };

    metrics.steps = steps;
    metrics.probes = lexicon.probes();
    metrics.total = started.elapsed();
    RunResult { stem, resolution, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DictionaryBuilder, EntrySource, RuleSet};

    fn dictionary() -> Dictionary {
        let mut builder = DictionaryBuilder::new();
        builder.add_exceptions(&["aide"]);
        builder.add_conflations(&[("aging", "age"), ("italian", "italy")], EntrySource::Conflations);
        builder.add_headwords(["aid", "age", "italy", "run", "pony"], EntrySource::Custom);
        builder.finish().0
    }

    #[test]
    fn pass_through_lowercases_only() {
        let dict = dictionary();
        let opts = Options::default();
        for (input, expected) in [("OK", "ok"), ("A1B", "a1b"), ("x", "x"), ("", ""), ("Über", "über")] {
            let res = run(input, &dict, &opts, true);
            assert_eq!(res.stem, expected);
            assert_eq!(res.resolution, Resolution::PassThrough);
            assert!(res.metrics.steps.is_empty());
        }
    }

    #[test]
    fn direct_lookup_resolves_explicit_roots() {
        let dict = dictionary();
        let res = run("Italian", &dict, &Options::default(), true);
        assert_eq!(res.stem, "italy");
        assert_eq!(res.resolution, Resolution::Direct);
        assert_eq!(res.metrics.probes, 0);
    }

    #[test]
    fn cascade_hit_resolves_buffer() {
        let dict = dictionary();
        let res = run("ponies", &dict, &Options::default(), true);
        assert_eq!(res.stem, "pony");
        assert_eq!(res.resolution, Resolution::Cascade { rule: "plural" });
        assert_eq!(res.metrics.steps.len(), 1);
    }

    #[test]
    fn exhausted_cascade_returns_buffer() {
        let dict = dictionary();
        let res = run("glorp", &dict, &Options::default(), false);
        assert_eq!(res.stem, "glorp");
        assert_eq!(res.resolution, Resolution::Exhausted);
        assert!(res.metrics.steps.is_empty());
    }

    #[test]
    fn options_restrict_stages() {
        let dict = dictionary();
        let opts = Options { rules: RuleSet::all() - RuleSet::PLURAL };
        let res = run("ponies", &dict, &opts, false);
        assert_eq!(res.resolution, Resolution::Exhausted);
        assert_eq!(res.stem, "ponies");
    }
}
