/// Words that are their own root but look like an inflected form of another
/// headword ("aide" / "aid", "sage" / "sag"). The past-tense and aspect stages
/// do not stop on these.
pub(crate) const EXCEPTION_WORDS: &[&str] = &[
    "aide", "bathe", "caste", "cute", "dame", "dime", "doge", "done", "dune", "envelope", "gage", "grille", "grippe",
    "lobe", "mane", "mare", "nape", "node", "pane", "pate", "plane", "pope", "programme", "quite", "ripe", "rote",
    "rune", "sage", "severe", "shoppe", "sine", "slime", "snipe", "steppe", "suite", "swinge", "tare", "tine", "tope",
    "tripe", "twine",
];
