use super::{adjectival, inflection, nominal};
use crate::engine::{Lexicon, WordBuffer};
use crate::{Dictionary, DictionaryBuilder, EntrySource, Transform};

const HEADWORDS: &str = "
calorie aid cross pony die glass gas box fly spy bake hope hop plan stop fill backfill run
bake care tie dye trace create decide able ability immune nation activate operate gentle
happy busy angry ideal natural logic history economy poem medium industry critic nature
possible control depend appear adhere emerge differ negate digest organ organize teach run
edit govern agree visit elect employ argue solemn rational terror sense moral continue
sensitive intense fluent adjacent theory
";

fn dictionary() -> Dictionary {
    let mut builder = DictionaryBuilder::new();
    builder.add_exceptions(&["aide", "bathe"]);
    builder.add_headwords(HEADWORDS.split_ascii_whitespace(), EntrySource::Custom);
    builder.finish().0
}

fn apply(transform: Transform, word: &str, dictionary: &Dictionary) -> (Option<String>, usize) {
    let lexicon = Lexicon::new(dictionary);
    let out = transform(&WordBuffer::new(word.to_string()), &lexicon).map(WordBuffer::into_string);
    (out, lexicon.probes())
}

fn check(transform: Transform, cases: &[(&str, Option<&str>)]) {
    let dict = dictionary();
    for (input, expected) in cases {
        let (out, _) = apply(transform, input, &dict);
        assert_eq!(out.as_deref(), *expected, "input: {input}");
    }
}

#[test]
fn plural_rewrites() {
    check(
        inflection::plural,
        &[
            ("calories", Some("calorie")),
            ("ponies", Some("pony")),
            ("crosses", Some("cross")),
            ("glasses", Some("glass")),
            ("boxes", Some("box")),
            ("flies", Some("fly")),
            ("spies", Some("spy")),
            ("gases", Some("gas")),
            ("bakes", Some("bake")),
            ("dies", Some("die")),
            ("ous", None),
            ("glass", None),
            ("walrus", Some("walru")),
            ("cats", Some("cat")),
            ("bus", None),
        ],
    );
}

#[test]
fn past_tense_rewrites() {
    check(
        inflection::past_tense,
        &[
            ("aided", Some("aid")),
            ("bathed", Some("bathe")),
            ("baked", Some("bake")),
            ("hoped", Some("hope")),
            ("hopped", Some("hop")),
            ("backfilled", Some("backfill")),
            ("planned", Some("plan")),
            ("tied", None),
            ("spied", Some("spy")),
            ("dyed", None),
            ("microcoded", Some("microcode")),
            ("uncharted", None),
            ("ced", None),
            ("bcdfed", None),
            ("fled", None),
        ],
    );
}

#[test]
fn aspect_rewrites() {
    check(
        inflection::aspect,
        &[
            ("aiding", Some("aid")),
            ("bathing", Some("bath")),
            ("baking", Some("bake")),
            ("hoping", Some("hope")),
            ("hopping", Some("hop")),
            ("fingerspelling", Some("fingerspell")),
            ("tying", None),
            ("running", Some("run")),
            ("microcoding", Some("microcode")),
            ("footstamping", Some("footstamp")),
            ("thing", None),
            ("bcdfging", None),
            ("sing", None),
        ],
    );
}

#[test]
fn ity_rewrites() {
    check(
        nominal::ity,
        &[
            ("immunity", Some("immune")),
            ("ability", Some("able")),
            ("activity", Some("active")),
            ("nativity", Some("native")),
            ("capacity", Some("capac")),
            ("rationality", Some("rational")),
            ("morality", Some("moral")),
            ("humidity", Some("humid")),
            ("solemnity", Some("solemn")),
        ],
    );
}

#[test]
fn ness_rewrites() {
    check(
        nominal::ness,
        &[
            ("happiness", Some("happy")),
            ("business", Some("busy")),
            ("sadness", Some("sad")),
        ],
    );
}

#[test]
fn ion_rewrites() {
    check(
        nominal::ion,
        &[
            ("organization", Some("organize")),
            ("nation", None),
            ("creation", Some("create")),
            ("negation", Some("negate")),
            ("activation", Some("activate")),
            ("decision", None),
            ("edition", Some("edit")),
            ("amplification", None),
            ("election", Some("elect")),
            ("opinion", None),
            ("operation", Some("operate")),
        ],
    );
}

#[test]
fn er_or_rewrites() {
    check(
        nominal::er_or,
        &[
            ("digitizer", Some("digitize")),
            ("teacher", Some("teach")),
            ("runner", Some("run")),
            ("editor", Some("edit")),
            ("governor", Some("govern")),
            ("agreer", Some("agree")),
            ("happier", Some("happy")),
            ("busier", Some("busy")),
            ("visitor", Some("visit")),
            ("employer", Some("employ")),
            ("glimmer", None),
        ],
    );
}

#[test]
fn ly_rewrites() {
    check(
        adjectival::ly,
        &[
            ("gently", Some("gentle")),
            ("happily", Some("happy")),
            ("busily", Some("busy")),
            ("naturally", Some("natural")),
            ("possibly", Some("possible")),
            ("quickly", Some("quick")),
            ("ideally", Some("ideal")),
            ("angrily", Some("angry")),
        ],
    );
}

#[test]
fn al_rewrites() {
    check(
        adjectival::al,
        &[
            ("natural", Some("nature")),
            ("logical", Some("logic")),
            ("historical", Some("history")),
            ("medial", Some("medium")),
            ("critical", Some("critic")),
            ("moral", None),
            ("ideal", None),
            ("terminal", None),
            ("pal", None),
        ],
    );
}

#[test]
fn ive_rewrites() {
    check(
        adjectival::ive,
        &[
            ("digestive", Some("digest")),
            ("sensitive", None),
            ("creative", Some("create")),
            ("operative", Some("operate")),
            ("intensive", Some("intense")),
            ("decisive", None),
        ],
    );
}

#[test]
fn ize_rewrites() {
    check(
        adjectival::ize,
        &[
            ("organize", Some("organ")),
            ("idealize", Some("ideal")),
            ("theorize", None),
            ("realize", None),
        ],
    );
}

#[test]
fn ment_rewrites() {
    check(
        nominal::ment,
        &[
            ("argument", None),
            ("government", Some("govern")),
            ("employment", Some("employ")),
            ("fragment", None),
        ],
    );
}

#[test]
fn ble_rewrites() {
    check(
        adjectival::ble,
        &[
            ("controllable", Some("control")),
            ("dependable", Some("depend")),
            ("sensible", Some("sense")),
            ("agreeable", Some("agree")),
            ("operable", Some("operate")),
            ("table", None),
        ],
    );
}

#[test]
fn ism_rewrites() {
    check(
        nominal::ism,
        &[
            ("idealism", Some("ideal")),
            ("terrorism", Some("terror")),
        ],
    );
}

#[test]
fn ic_rewrites() {
    check(
        adjectival::ic,
        &[
            ("historic", Some("history")),
            ("economic", Some("economy")),
            ("poetic", None),
            ("logic", None),
            ("critic", None),
        ],
    );
}

#[test]
fn ncy_rewrites() {
    check(
        nominal::ncy,
        &[
            ("dependency", Some("dependence")),
            ("fluency", Some("fluent")),
            ("agency", Some("agence")),
        ],
    );
}

#[test]
fn nce_rewrites() {
    check(
        nominal::nce,
        &[
            ("appearance", Some("appear")),
            ("adherence", Some("adhere")),
            ("emergence", Some("emerge")),
            ("difference", Some("differ")),
            ("fence", None),
        ],
    );
}

#[test]
fn exception_entries_do_not_stop_verb_stages() {
    let dict = dictionary();
    // "aide" is known but flagged, so -ed and -ing keep looking.
    assert_eq!(apply(inflection::past_tense, "aided", &dict), (Some("aid".to_string()), 2));
    assert_eq!(apply(inflection::aspect, "aiding", &dict), (Some("aid".to_string()), 2));
    // plural has no such guard.
    assert_eq!(apply(inflection::plural, "aides", &dict), (Some("aide".to_string()), 1));
}

#[test]
fn ity_keeps_lexicalised_words() {
    let mut builder = DictionaryBuilder::new();
    builder.add_headwords(["capacity"], EntrySource::Custom);
    let (with_word, _) = builder.finish();
    let without_word = DictionaryBuilder::new().finish().0;

    assert_eq!(apply(nominal::ity, "capacity", &with_word).0, None);
    assert_eq!(apply(nominal::ity, "capacity", &without_word).0.as_deref(), Some("capac"));
}

#[test]
fn productive_rules_never_probe() {
    let dict = DictionaryBuilder::new().finish().0;
    assert_eq!(apply(nominal::ness, "kindness", &dict), (Some("kind".to_string()), 0));
    assert_eq!(apply(nominal::ism, "realism", &dict), (Some("real".to_string()), 0));
    assert_eq!(apply(nominal::ion, "finalization", &dict), (Some("finalize".to_string()), 0));
    assert_eq!(apply(nominal::er_or, "digitizer", &dict), (Some("digitize".to_string()), 0));
}

#[test]
fn missing_suffix_is_not_applicable() {
    let dict = dictionary();
    let rules: [Transform; 6] =
        [inflection::plural, nominal::ity, nominal::ment, adjectival::ly, adjectival::ble, adjectival::ic];
    for rule in rules {
        assert_eq!(apply(rule, "control", &dict), (None, 0));
    }
}

#[test]
fn gated_rules_roll_back_on_miss() {
    let dict = dictionary();
    assert_eq!(apply(nominal::ment, "fragment", &dict), (None, 1));
    assert_eq!(apply(adjectival::ic, "logic", &dict), (None, 4));
    assert_eq!(apply(nominal::nce, "fence", &dict), (None, 2));
}

#[test]
fn verb_stages_skip_stems_without_vowels() {
    let dict = dictionary();
    assert_eq!(apply(inflection::past_tense, "bcdfed", &dict), (None, 0));
    assert_eq!(apply(inflection::aspect, "bcdfging", &dict), (None, 0));
    // "y" after a consonant counts as a vowel.
    assert_eq!(apply(inflection::past_tense, "bydfed", &dict).0.as_deref(), Some("bydfe"));
}
