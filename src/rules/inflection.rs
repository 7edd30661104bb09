use crate::engine::{Lexicon, WordBuffer};

/// `-ies`, `-es`, `-s`.
///
/// ```text
/// calories ─▶ calorie?  hit ─▶ calorie
///          └▶ calory (default)
/// crosses  ─▶ crosse (skipped: stem ends in "ss") ─▶ cross? ─▶ ...
/// ```
///
/// Never rolls back once a plural ending is seen, except for bare `-s`
/// after `ss`/`ous` or on words of three letters.
pub(crate) fn plural(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    if word.last() != Some(b's') {
        return None;
    }
    let mut w = word.clone();

    if w.ends_in("ies") {
        let j = w.j();
        // -ies -> -ie
        w.truncate(j + 3);
        if lexicon.contains(&w) {
            return Some(w);
        }
        w.set_suffix("y");
        return Some(w);
    }

    if w.ends_in("es") {
        let j = w.j();
        // -es -> -e. Not for stems ending in "ss": crosses is not crosse.
        w.truncate(j + 2);
        let double_s = j > 0 && w.at(j) == b's' && w.at(j - 1) == b's';
        if j > 0 && !double_s && lexicon.contains(&w) {
            return Some(w);
        }
        w.truncate(j + 1);
        if lexicon.contains(&w) {
            return Some(w);
        }
        // default keeps the e
        w.push('e');
        return Some(w);
    }

    if w.len() <= 3 || w.ends_in("ous") || w.ends_in("ss") {
        return None;
    }
    w.truncate(w.len() - 1);
    Some(w)
}

/// `-ied`, `-ed`. Words of four letters or fewer are left to direct
/// conflations ("fled" must not become "fl").
pub(crate) fn past_tense(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    if word.len() <= 4 {
        return None;
    }
    let mut w = word.clone();

    if w.ends_in("ied") {
        let j = w.j();
        // -ied -> -ie, then -y
        w.truncate(j + 3);
        if lexicon.contains(&w) {
            return Some(w);
        }
        w.set_suffix("y");
        return Some(w);
    }

    // vowel check keeps acronyms out
    if !(w.ends_in("ed") && w.has_vowel_in_stem()) {
        return None;
    }
    let j = w.j();

    // -ed -> -e, unless the hit is exception-flagged
    w.truncate(j + 2);
    if lexicon.accepts(&w) {
        return Some(w);
    }

    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }

    // backfilled -> backfill, whether or not "backfil" is known
    if w.has_doubled_consonant(j) {
        let mut undoubled = w.clone();
        undoubled.truncate(j);
        if lexicon.contains(&undoubled) {
            return Some(undoubled);
        }
        return Some(w);
    }

    // un- words keep their -ed
    if w.starts_with("un") {
        return None;
    }

    // microcoded -> microcode
    w.push('e');
    Some(w)
}

/// `-ing`. Words of five letters or fewer are left to direct conflations
/// ("thing" must not become "the").
pub(crate) fn aspect(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    if word.len() <= 5 {
        return None;
    }
    let mut w = word.clone();
    if !(w.ends_in("ing") && w.has_vowel_in_stem()) {
        return None;
    }
    let j = w.j();

    w.truncate(j + 1);
    w.push('e');
    if lexicon.accepts(&w) {
        return Some(w);
    }

    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }

    if w.has_doubled_consonant(j) {
        let mut undoubled = w.clone();
        undoubled.truncate(j);
        if lexicon.contains(&undoubled) {
            return Some(undoubled);
        }
        // fingerspelling -> fingerspell
    }

    // Default: add -e unless the stem ends in two consonants
    // (microcoding -> microcode, footstamping -> footstamp).
    if j > 0 && w.is_consonant(j) && w.is_consonant(j - 1) {
        return Some(w);
    }
    w.push('e');
    Some(w)
}
