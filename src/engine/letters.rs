//! Letter classification.
//!
//! `a e i o u` are always vowels. `y` is a consonant at the start of a word
//! and otherwise takes the opposite class of the letter before it, so it is a
//! vowel in "sky" and a consonant in "eye" and "yoyo". Everything else is a
//! consonant.
//!
//! The `y` rule recurses towards index 0; depth is bounded by the word
//! length, which is below `MAX_WORD_LEN`.

pub(crate) fn consonant_at(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !consonant_at(word, i - 1),
        _ => true,
    }
}

pub(crate) fn doubled_consonant_at(word: &[u8], i: usize) -> bool {
    i >= 1 && word[i] == word[i - 1] && consonant_at(word, i)
}

/// Any vowel in `word[0..=j]`.
pub(crate) fn vowel_within(word: &[u8], j: usize) -> bool {
    (0..word.len().min(j + 1)).any(|i| !consonant_at(word, i))
}

/// Whether the letter at byte index `i` of `word` is a consonant.
///
/// # Panics
///
/// Panics if `i` is out of bounds.
///
/// ```
/// use kstem::is_consonant;
///
/// assert!(is_consonant("sky", 1));
/// assert!(!is_consonant("sky", 2));
/// assert!(is_consonant("eye", 1));
/// ```
pub fn is_consonant(word: &str, i: usize) -> bool {
    consonant_at(word.as_bytes(), i)
}

/// Whether the letter at byte index `i` of `word` is a vowel.
///
/// # Panics
///
/// Panics if `i` is out of bounds.
pub fn is_vowel(word: &str, i: usize) -> bool {
    !is_consonant(word, i)
}

/// Whether `word[i]` repeats `word[i - 1]` and is a consonant ("running" at 3).
///
/// # Panics
///
/// Panics if `i` is out of bounds.
pub fn has_doubled_consonant(word: &str, i: usize) -> bool {
    doubled_consonant_at(word.as_bytes(), i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(word: &str) -> String {
        (0..word.len()).map(|i| if is_consonant(word, i) { 'c' } else { 'v' }).collect()
    }

    #[test]
    fn y_takes_the_opposite_class_of_its_predecessor() {
        assert_eq!(classes("yoyo"), "cvcv");
        assert_eq!(classes("eye"), "vcv");
        assert_eq!(classes("sky"), "ccv");
        assert_eq!(classes("yyy"), "cvc");
        assert_eq!(classes("rhythm"), "ccvccc");
    }

    #[test]
    fn leading_y_is_always_a_consonant() {
        for word in ["y", "yes", "yak", "yyz"] {
            assert!(is_consonant(word, 0), "{word}");
        }
    }

    #[test]
    fn plain_vowels_and_consonants() {
        assert_eq!(classes("aeiou"), "vvvvv");
        assert_eq!(classes("bcdfg"), "ccccc");
        assert!(is_vowel("table", 1));
    }

    #[test]
    fn doubled_consonants() {
        assert!(has_doubled_consonant("running", 3));
        assert!(!has_doubled_consonant("running", 2));
        assert!(!has_doubled_consonant("seen", 2));
        assert!(!has_doubled_consonant("s", 0));
        // second y of "ayy" is a vowel
        assert!(!has_doubled_consonant("ayy", 2));
    }

    #[test]
    fn vowel_within_stem() {
        assert!(vowel_within(b"played", 3));
        assert!(!vowel_within(b"cds", 2));
        assert!(vowel_within(b"sky", 2));
        assert!(!vowel_within(b"sky", 1));
        assert!(!vowel_within(b"", 0));
    }
}
