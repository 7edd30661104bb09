use crate::engine::{self, Resolution, RuleSet, RuleStep};
use crate::Dictionary;
use std::time::Duration;

/// Options that affect stemming behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Cascade stages to run. Disabled stages are skipped; the order of the
    /// rest never changes.
    pub rules: RuleSet,
}

impl Default for Options {
    fn default() -> Self {
        Options { rules: RuleSet::all() }
    }
}

/// Additional details returned by [`stem_verbose_with`].
#[derive(Debug, Clone)]
pub struct StemDetails {
    /// Which path produced the root.
    pub resolution: Resolution,
    /// Cascade stages in the order they ran. Empty unless the cascade ran.
    pub steps: Vec<RuleStep>,
    /// Dictionary lookups made by rules.
    pub probes: usize,
    /// Total elapsed time.
    pub total: Duration,
}

/// Result from [`stem_verbose_with`].
#[derive(Debug, Clone)]
pub struct StemResultVerbose {
    /// The term as given.
    pub term: String,
    pub stem: String,
    pub details: StemDetails,
}

/// Stem `term` with the shared default dictionary and default [`Options`].
///
/// # Example
/// ```
/// use kstem::stem;
///
/// assert_eq!(stem("ponies"), "pony");
/// assert_eq!(stem("Italian"), "italy");
/// assert_eq!(stem("ok"), "ok");
/// ```
pub fn stem(term: &str) -> String {
    stem_with(term, Dictionary::shared(), &Options::default())
}

/// Stem `term` against `dictionary` with the given `options`.
///
/// Never fails: terms that cannot be stemmed come back lowercased.
pub fn stem_with(term: &str, dictionary: &Dictionary, options: &Options) -> String {
    engine::run(term, dictionary, options, false).stem
}

/// Stem `term` and return how the result was reached.
///
/// The per-stage trace is only collected here; [`stem_with`] does not
/// allocate it.
pub fn stem_verbose_with(term: &str, dictionary: &Dictionary, options: &Options) -> StemResultVerbose {
    let run = engine::run(term, dictionary, options, true);
    StemResultVerbose {
        term: term.to_string(),
        stem: run.stem,
        details: StemDetails {
            resolution: run.resolution,
            steps: run.metrics.steps,
            probes: run.metrics.probes,
            total: run.metrics.total,
        },
    }
}

/// A dictionary and options bundled for repeated use.
///
/// Holds only shared references, so one `Stemmer` can be used from many
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Stemmer<'d> {
    dictionary: &'d Dictionary,
    options: Options,
}

impl<'d> Stemmer<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Stemmer { dictionary, options: Options::default() }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn stem(&self, term: &str) -> String {
        stem_with(term, self.dictionary, &self.options)
    }

    pub fn stem_verbose(&self, term: &str) -> StemResultVerbose {
        stem_verbose_with(term, self.dictionary, &self.options)
    }
}

impl Default for Stemmer<'static> {
    fn default() -> Self {
        Stemmer::new(Dictionary::shared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_WORD_LEN, StepOutcome};

    #[test]
    fn stem_examples() {
        // Array of (input, expected_stem)
        let cases: Vec<(&str, &str)> = vec![
            // pass-through
            ("ok", "ok"),
            ("OK", "ok"),
            ("a1b", "a1b"),
            // direct conflations
            ("aging", "age"),
            ("italian", "italy"),
            ("Italian", "italy"),
            ("theses", "thesis"),
            ("children", "child"),
            ("mice", "mouse"),
            ("went", "go"),
            ("ran", "run"),
            ("fled", "flee"),
            // inflection
            ("calories", "calorie"),
            ("Calories", "calorie"),
            ("ponies", "pony"),
            ("crosses", "cross"),
            ("boxes", "box"),
            ("aides", "aide"),
            ("aided", "aid"),
            ("aiding", "aid"),
            ("running", "run"),
            ("Running", "run"),
            // derivation
            ("happiness", "happy"),
            ("kindness", "kind"),
            ("abilities", "ability"),
            ("activities", "active"),
            ("capacity", "capacity"),
            ("organization", "organize"),
            ("creation", "create"),
            ("teacher", "teach"),
            ("runner", "run"),
            ("gently", "gentle"),
            ("happily", "happy"),
            ("possibly", "possible"),
            ("naturally", "nature"),
            ("digestive", "digest"),
            ("agreements", "agree"),
            ("controllable", "control"),
            ("idealism", "ideal"),
            ("historic", "history"),
            ("dependency", "depend"),
            ("appearance", "appear"),
        ];

        for (input, expected) in cases {
            assert_eq!(stem(input), expected, "input: {input}");
        }
    }

    #[test]
    fn roots_are_fixed_points() {
        for root in ["calorie", "aid", "cross", "pony", "run", "happy", "nature", "age", "italy", "thesis", "govern"] {
            assert_eq!(stem(root), root);
            assert_eq!(stem(&stem(root)), root);
        }
    }

    #[test]
    fn over_long_terms_pass_through() {
        let long = "Z".repeat(MAX_WORD_LEN - 1);
        assert_eq!(stem(&long), long.to_lowercase());

        let just_fits = format!("{}s", "z".repeat(MAX_WORD_LEN - 3));
        let res = stem_verbose_with(&just_fits, Dictionary::shared(), &Options::default());
        assert_ne!(res.details.resolution, Resolution::PassThrough);
    }

    #[test]
    fn verbose_reports_resolution_and_steps() {
        let res = stem_verbose_with("ponies", Dictionary::shared(), &Options::default());
        assert_eq!(res.term, "ponies");
        assert_eq!(res.stem, "pony");
        assert_eq!(res.details.resolution, Resolution::Cascade { rule: "plural" });
        assert_eq!(res.details.steps.len(), 1);
        assert_eq!(res.details.steps[0].outcome, StepOutcome::Rewritten);
        assert_eq!(res.details.probes, res.details.steps[0].probes);

        let res = stem_verbose_with("theses", Dictionary::shared(), &Options::default());
        assert_eq!(res.details.resolution, Resolution::Direct);
        assert!(res.details.steps.is_empty());
    }

    #[test]
    fn disabled_stages_change_results() {
        let opts = Options { rules: RuleSet::all() - RuleSet::NESS };
        assert_eq!(stem_with("happiness", Dictionary::shared(), &opts), "happiness");
        assert_eq!(stem_with("ponies", Dictionary::shared(), &opts), "pony");
    }

    #[test]
    fn stemmer_matches_free_functions() {
        let stemmer = Stemmer::default();
        for term in ["calories", "aided", "organization", "xyzzy", "ok"] {
            assert_eq!(stemmer.stem(term), stem(term));
        }

        let only_plural = Stemmer::new(Dictionary::shared()).with_options(Options { rules: RuleSet::PLURAL });
        assert_eq!(only_plural.stem("ponies"), "pony");
        assert_eq!(only_plural.stem("running"), "running");
        assert_eq!(only_plural.stem_verbose("running").details.resolution, Resolution::Exhausted);
    }

    #[test]
    fn concurrent_stemming_is_deterministic() {
        let words = ["calories", "aided", "happiness", "italian", "organization", "controllable", "running"];
        let expected: Vec<String> = words.iter().map(|w| stem(w)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> =
                (0..8).map(|_| scope.spawn(|| words.iter().map(|w| stem(w)).collect::<Vec<_>>())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
