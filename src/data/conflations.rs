//! Surface forms whose root cannot be reached by suffix rules.

/// Irregular inflections, derivational irregulars and irregular plurals.
pub(crate) const DIRECT_CONFLATIONS: &[(&str, &str)] = &[
    // short -ing / -ed forms the aspect and past-tense stages skip
    ("aging", "age"),
    ("going", "go"),
    ("goes", "go"),
    ("lying", "lie"),
    ("using", "use"),
    ("owing", "owe"),
    ("suing", "sue"),
    ("dying", "die"),
    ("tying", "tie"),
    ("vying", "vie"),
    ("aged", "age"),
    ("used", "use"),
    ("vied", "vie"),
    ("cued", "cue"),
    ("died", "die"),
    ("eyed", "eye"),
    ("hued", "hue"),
    ("iced", "ice"),
    ("lied", "lie"),
    ("owed", "owe"),
    ("sued", "sue"),
    ("toed", "toe"),
    ("tied", "tie"),
    ("does", "do"),
    ("doing", "do"),
    ("fled", "flee"),
    ("ran", "run"),
    ("went", "go"),
    ("gone", "go"),
    ("written", "write"),
    ("taken", "take"),
    ("spoken", "speak"),
    ("chosen", "choose"),
    // derivational
    ("aeronautical", "aeronautics"),
    ("mathematical", "mathematics"),
    ("political", "politics"),
    ("metaphysical", "metaphysics"),
    ("cylindrical", "cylinder"),
    ("nazism", "nazi"),
    ("ambiguity", "ambiguous"),
    ("barbarity", "barbarous"),
    ("credulity", "credulous"),
    ("generosity", "generous"),
    ("spontaneity", "spontaneous"),
    ("unanimity", "unanimous"),
    ("voracity", "voracious"),
    ("miscarriage", "miscarry"),
    // irregular plurals
    ("theses", "thesis"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("children", "child"),
    ("women", "woman"),
    ("men", "man"),
];
