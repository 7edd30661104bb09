use crate::engine::{Lexicon, WordBuffer};

/// `-ly`.
///
/// Tries `-le` (gently -> gentle) and the bare stem first. After that the
/// ending goes regardless: `-ally` keeps `-al`, `-ably` becomes `-able`, and
/// `-ily` becomes `-y` only when the dictionary knows it.
pub(crate) fn ly(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ly") {
        return None;
    }
    let j = w.j();

    w.set(j + 2, 'e');
    if lexicon.contains(&w) {
        return Some(w);
    }

    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }

    if j > 0 {
        match (w.at(j - 1), w.at(j)) {
            (b'a', b'l') => return Some(w),
            (b'a', b'b') => {
                w.push_str("le");
                return Some(w);
            }
            _ => {}
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

    Some(w)
}

/// `-al`, gated.
pub(crate) fn al(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    if word.len() < 4 {
        return None;
    }
    let mut w = word.clone();
    if !w.ends_in("al") {
        return None;
    }
    let j = w.j();

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
    }

    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }

    // -al -> -um (medial -> medium)
    w.truncate(j + 1);
    w.push_str("um");
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j + 1);

    if j > 0 && w.at(j - 1) == b'i' && w.at(j) == b'c' {
        w.truncate(j - 1);
        if lexicon.contains(&w) {
            return Some(w);
        }
        w.push('y');
        if lexicon.contains(&w) {
            return Some(w);
        }
        // -ical -> -ic, unconditionally
        w.truncate(j - 1);
        w.push_str("ic");
        return Some(w);
    }

    if w.at(j) == b'i' {
        w.truncate(j);
        if lexicon.contains(&w) {
            return Some(w);
        }
    }
    None
}

/// `-ive`, gated. Falls back to `-ion` (digestive -> digestion).
pub(crate) fn ive(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ive") {
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

    if j > 0 && w.at(j - 1) == b'a' && w.at(j) == b't' {
        let mut c = w.clone();
        // -ative -> -e
        c.truncate(j - 1);
        c.push('e');
        if lexicon.contains(&c) {
            return Some(c);
        }
        c.truncate(j - 1);
        if lexicon.contains(&c) {
            return Some(c);
        }
    }

    w.push_str("ion");
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}

/// `-ize`, gated.
pub(crate) fn ize(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ize") {
        return None;
    }
    let j = w.j();

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
    }

    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}

/// `-able`, `-ible`, gated.
///
/// ```text
/// stem  ─▶ undoubled stem ─▶ stem+e ─▶ stem+ate
/// ```
pub(crate) fn ble(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ble") {
        return None;
    }
    let j = w.j();
    if !matches!(w.at(j), b'a' | b'i') {
        return None;
    }

    w.truncate(j);
    if lexicon.contains(&w) {
        return Some(w);
    }

    if j >= 1 && w.has_doubled_consonant(j - 1) {
        let mut undoubled = w.clone();
        undoubled.truncate(j - 1);
        if lexicon.contains(&undoubled) {
            return Some(undoubled);
        }
    }

    w.push('e');
    if lexicon.contains(&w) {
        return Some(w);
    }
    w.truncate(j);
    w.push_str("ate");
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}

/// `-ic`, gated: `-ical`, `-y`, `-e`, then the bare stem.
pub(crate) fn ic(word: &WordBuffer, lexicon: &Lexicon<'_>) -> Option<WordBuffer> {
    let mut w = word.clone();
    if !w.ends_in("ic") {
        return None;
    }
    let j = w.j();

    w.push_str("al");
    if lexicon.contains(&w) {
        return Some(w);
    }

    for tail in ["y", "e"] {
        w.truncate(j + 1);
        w.push_str(tail);
        if lexicon.contains(&w) {
            return Some(w);
        }
    }

    w.truncate(j + 1);
    if lexicon.contains(&w) {
        return Some(w);
    }
    None
}
