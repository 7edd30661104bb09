//! The ordered suffix cascade.
//!
//! Seventeen stages run in a fixed order, inflectional endings first. After
//! each stage the driver looks the (possibly rewritten) buffer up; the first
//! hit ends the cascade. Stages that find nothing to do hand back `None` and
//! the buffer carries over untouched.
//!
//! ```text
//! plural → past_tense → aspect → ity → ness → ion → er_or → ly → al
//!        → ive → ize → ment → ble → ism → ic → ncy → nce
//! ```
//!
//! Reordering stages changes results for real words ("-ities" must lose its
//! plural before `ity` can see it), so the table is the single source of
//! truth for the order.

use super::metrics::{RuleStep, StepOutcome};
use super::{Lexicon, RuleSet, WordBuffer};
use crate::rules::{adjectival, inflection, nominal};
use crate::{DictionaryEntry, Rule};

pub(crate) static CASCADE: [Rule; 17] = [
    rule! { name: "plural", flag: RuleSet::PLURAL, suffixes: ["ies", "es", "s"], transform: inflection::plural },
    rule! { name: "past_tense", flag: RuleSet::PAST_TENSE, suffixes: ["ied", "ed"], transform: inflection::past_tense },
    rule! { name: "aspect", flag: RuleSet::ASPECT, suffixes: ["ing"], transform: inflection::aspect },
    rule! { name: "ity", flag: RuleSet::ITY, suffixes: ["ity"], transform: nominal::ity },
    rule! { name: "ness", flag: RuleSet::NESS, suffixes: ["ness"], transform: nominal::ness },
    rule! {
        name: "ion",
        flag: RuleSet::ION,
        suffixes: ["ization", "ition", "ation", "ication", "ion"],
        transform: nominal::ion,
    },
    rule! { name: "er_or", flag: RuleSet::ER_OR, suffixes: ["izer", "er", "or"], transform: nominal::er_or },
    rule! { name: "ly", flag: RuleSet::LY, suffixes: ["ly"], transform: adjectival::ly },
    rule! { name: "al", flag: RuleSet::AL, suffixes: ["al"], transform: adjectival::al },
    rule! { name: "ive", flag: RuleSet::IVE, suffixes: ["ive"], transform: adjectival::ive },
    rule! { name: "ize", flag: RuleSet::IZE, suffixes: ["ize"], transform: adjectival::ize },
    rule! { name: "ment", flag: RuleSet::MENT, suffixes: ["ment"], transform: nominal::ment },
    rule! { name: "ble", flag: RuleSet::BLE, suffixes: ["able", "ible"], transform: adjectival::ble },
    rule! { name: "ism", flag: RuleSet::ISM, suffixes: ["ism"], transform: nominal::ism },
    rule! { name: "ic", flag: RuleSet::IC, suffixes: ["ic"], transform: adjectival::ic },
    rule! { name: "ncy", flag: RuleSet::NCY, suffixes: ["ancy", "ency"], transform: nominal::ncy },
    rule! { name: "nce", flag: RuleSet::NCE, suffixes: ["ance", "ence"], transform: nominal::nce },
];

/// The stage that ended the cascade and the entry it landed on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CascadeHit<'d> {
    pub rule: &'static str,
    pub entry: &'d DictionaryEntry,
}

/// Run the enabled stages over `buffer` until one produces a dictionary hit.
///
/// `buffer` is left holding the last committed state, hit or not. When
/// `steps` is given, one [`RuleStep`] is appended per stage that ran.
pub(crate) fn apply_cascade<'d>(
    buffer: &mut WordBuffer,
    lexicon: &Lexicon<'d>,
    enabled: RuleSet,
    mut steps: Option<&mut Vec<RuleStep>>,
) -> Option<CascadeHit<'d>> {
    for rule in CASCADE.iter().filter(|rule| enabled.contains(rule.flag)) {
        let probes_before = lexicon.probes();
        let before = steps.is_some().then(|| buffer.as_str().to_string());

        let outcome = match (rule.transform)(buffer, lexicon) {
            Some(next) => {
                *buffer = next;
                StepOutcome::Rewritten
            }
            None if lexicon.probes() > probes_before => StepOutcome::RolledBack,
            None => StepOutcome::NotApplicable,
        };

        let entry = lexicon.resolve(buffer);
        let probes = lexicon.probes() - probes_before;

        tracing::trace!(
            target: "kstem::engine",
            rule = rule.name,
            ?outcome,
            word = buffer.as_str(),
            probes,
            hit = entry.is_some(),
            "cascade step"
        );

        if let (Some(steps), Some(before)) = (steps.as_deref_mut(), before) {
            steps.push(RuleStep {
                rule: rule.name,
                outcome,
                before,
                after: buffer.as_str().to_string(),
                probes,
                hit: entry.is_some(),
            });
        }

        if let Some(entry) = entry {
            tracing::debug!(target: "kstem::engine", rule = rule.name, word = buffer.as_str(), "cascade hit");
            return Some(CascadeHit { rule: rule.name, entry });
        }
    }
    None
}
