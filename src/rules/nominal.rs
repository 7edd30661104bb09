use crate::engine::{Lexicon, WordBuffer};

/// `-ity`.
///
/// Gated strip and strip+e come first, so `immunity` finds "immune". Then
/// the productive endings are accepted outright:
///
/// ```text
/// -ability / -ibility ─▶ -able / -ible
/// -ivity              ─▶ -ive
/// -ality              ─▶ -al
/// ```
///
/// Anything else keeps the full word when it is a headword ("capacity"),
/// and otherwise loses the `-ity`.
pub(crate) fn ity(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ity") {
        return None;
    }
    let j = w.j();

    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j + 1);

    if j > 0 {
        match (w.at(j - 1), w.at(j)) {
            (b'i', b'l') => {
                w.truncate(j - 1);
                w.push_str("le");
                return Some(w);
            }
            (b'i', b'v') => {
                w.push('e');
                return Some(w);
            }
            (b'a', b'l') => return Some(w),
            _ => {}
        }
    }

    if lexicon.contains(word) {
        return None;
    }
    Some(w)
}

/// `-ness`, productive. A stem ending in `i` goes back to `y`
/// (happiness -> happy).
pub(crate) fn ness(word: &WordBuffer, _lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ness") {
        return None;
    }
    let j = w.j();
    w.truncate(j + 1);
    if w.at(j) == b'i' {
        w.set(j, 'y');
    }
    Some(w)
}

/// `-ion` and its longer forms, longest specific ending first.
///
/// | ending    | candidates                                  |
/// |-----------|---------------------------------------------|
/// | -ization  | -ize, unconditionally                       |
/// | -ition    | -e                                          |
/// | -ation    | -ate, -e, strip                             |
/// | -ication  | -y                                          |
/// | -ion      | -e, strip                                   |
pub(crate) fn ion(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ion") {
        return None;
    }

    if w.ends_in("ization") {
        let j = w.j();
        w.truncate(j + 3);
        w.push('e');
        return Some(w);
    }

    if w.ends_in("ition") {
        let j = w.j();
        w.truncate(j + 1);
        w.push('e');
        if lexicon.contains(&w) {
            return Some(w);
        }
        w = word.clone();
    } else if w.ends_in("ation") {
        let j = w.j();
        // -ation -> -ate
        w.truncate(j + 3);
        w.push('e');
        if lexicon.contains(&w) {
            return Some(w);
        }
        // -ation -> -e
        w.truncate(j + 1);
        w.push('e');
        if lexicon.contains(&w) {
            return Some(w);
        }
        w.truncate(j + 1);
        if lexicon.contains(&w) {
            return Some(w);
        }
        w = word.clone();
    }

    if w.ends_in("ication") {
        let j = w.j();
        // amplification -> amplify
        w.truncate(j + 1);
        w.push('y');
        if lexicon.contains(&w) {
            return Some(w);
        }
        w = word.clone();
    }

    let j = w.k() - 3;
    w.truncate(j + 1);
    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}

/// `-izer`, `-er`, `-or`.
///
/// `-izer` becomes `-ize` outright. Otherwise, in order: undo a doubled
/// consonant, `-ier` -> `-y`, drop `-eer`, drop the `r`, drop `-er`/`-or`,
/// replace it with `-e`.
pub(crate) fn er_or(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    if word.last() != Some(b'r') {
        return None;
    }
    let mut w = word.clone();

    if w.ends_in("izer") {
        let j = w.j();
        w.truncate(j + 4);
        return Some(w);
    }

    if !(w.ends_in("er") || w.ends_in("or")) {
        return None;
    }
    let j = w.j();

    if w.has_doubled_consonant(j) {
        let mut c = w.clone();
        c.truncate(j);
        if lexicon.contains(&c) {
            return Some(c);
        }
    }

    if w.at(j) == b'i' {
        let mut c = w.clone();
        c.truncate(j);
        c.push('y');
        if lexicon.contains(&c) {
            return Some(c);
        }
    }

    if w.at(j) == b'e' {
        let mut c = w.clone();
        c.truncate(j);
        if lexicon.contains(&c) {
            return Some(c);
        }
    }

    w.truncate(j + 2);
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}

/// `-ment`, gated.
pub(crate) fn ment(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ment") {
        return None;
    }
    w.truncate(w.j() + 1);
    lexicon.contains(&w).then_some(w)
}

/// `-ism`, productive.
pub(crate) fn ism(word: &WordBuffer, _lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ism") {
        return None;
    }
    w.truncate(w.j() + 1);
    Some(w)
}

/// `-ancy`, `-ency`: `-nt` when known, otherwise `-nce`.
pub(crate) fn ncy(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ncy") {
        return None;
    }
    let j = w.j();
    if !matches!(w.at(j), b'a' | b'e') {
        return None;
    }
    w.truncate(j + 2);
    w.push('t');
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j + 2);
    w.push_str("ce");
    Some(w)
}

/// `-ance`, `-ence`: `-e` (adherance -> adhere), then strip
/// (disappearance -> disappear).
pub(crate) fn nce(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("nce") {
        return None;
    }
    let j = w.j();
    if !matches!(w.at(j), b'a' | b'e') {
        return None;
    }
    w.truncate(j);
    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j);
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}
