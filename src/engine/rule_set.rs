//! Per-stage switches for the cascade.
//!
//! Every cascade stage owns exactly one bit. Turning a bit off removes the
//! stage from the run; the relative order of the remaining stages is fixed by
//! the cascade table and cannot be changed through a `RuleSet`.

bitflags::bitflags! {
    /// Set of enabled cascade stages. [`RuleSet::all`] is the default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleSet: u32 {
        const PLURAL     = 1 << 0;
        const PAST_TENSE = 1 << 1;
        const ASPECT     = 1 << 2;
        const ITY        = 1 << 3;
        const NESS       = 1 << 4;
        const ION        = 1 << 5;
        const ER_OR      = 1 << 6;
        const LY         = 1 << 7;
        const AL         = 1 << 8;
        const IVE        = 1 << 9;
        const IZE        = 1 << 10;
        const MENT       = 1 << 11;
        const BLE        = 1 << 12;
        const ISM        = 1 << 13;
        const IC         = 1 << 14;
        const NCY        = 1 << 15;
        const NCE        = 1 << 16;

        /// Inflectional stages: plural, past tense, aspect.
        const INFLECTIONAL = Self::PLURAL.bits() | Self::PAST_TENSE.bits() | Self::ASPECT.bits();
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::all()
    }
}

impl RuleSet {
    /// Look a single stage up by the name used in reports (`"plural"`,
    /// `"past_tense"`, `"er_or"`, ...). Matching is case-insensitive and
    /// accepts `-` in place of `_`.
    pub fn from_stage_name(name: &str) -> Option<RuleSet> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        super::CASCADE.iter().find(|rule| rule.name == name).map(|rule| rule.flag)
    }

    /// Parse a comma-separated list of stage names.
    ///
    /// Returns the first unknown name as the error.
    pub fn from_names(list: &str) -> Result<RuleSet, String> {
        list.split(',').filter(|s| !s.trim().is_empty()).try_fold(RuleSet::empty(), |set, name| {
            RuleSet::from_stage_name(name).map(|flag| set | flag).ok_or_else(|| name.trim().to_string())
        })
    }

    /// Stage names in cascade order.
    pub fn names(self) -> Vec<&'static str> {
        super::CASCADE.iter().filter(|rule| self.contains(rule.flag)).map(|rule| rule.name).collect()
    }

    /// `(name, suffixes)` for every enabled stage, in cascade order.
    pub fn stages(self) -> Vec<(&'static str, &'static [&'static str])> {
        super::CASCADE.iter().filter(|rule| self.contains(rule.flag)).map(|rule| (rule.name, rule.suffixes)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_its_own_bit() {
        let mut seen = RuleSet::empty();
        for rule in super::super::CASCADE.iter() {
            assert_eq!(rule.flag.bits().count_ones(), 1, "{}", rule.name);
            assert!(!seen.intersects(rule.flag), "{} shares a bit", rule.name);
            seen |= rule.flag;
        }
        assert_eq!(seen, RuleSet::all());
    }

    #[test]
    fn stage_names_are_separate_from_constant_names() {
        // bitflags' own lookup goes by constant name and is case-sensitive.
        assert_eq!(RuleSet::from_name("ER_OR"), Some(RuleSet::ER_OR));
        assert_eq!(RuleSet::from_name("er_or"), None);
        assert_eq!(RuleSet::from_stage_name("er_or"), Some(RuleSet::ER_OR));
        assert_eq!(RuleSet::from_stage_name("ER-OR"), Some(RuleSet::ER_OR));
        assert_eq!(RuleSet::from_stage_name("inflectional"), None);
    }

    #[test]
    fn names_round_trip_in_cascade_order() {
        assert_eq!(RuleSet::from_stage_name("Past-Tense"), Some(RuleSet::PAST_TENSE));
        assert_eq!(RuleSet::from_stage_name("nope"), None);
        assert_eq!(RuleSet::from_names("nce, plural"), Ok(RuleSet::PLURAL | RuleSet::NCE));
        assert_eq!(RuleSet::from_names("plural,bogus"), Err("bogus".to_string()));
        assert_eq!((RuleSet::NCE | RuleSet::PLURAL).names(), vec!["plural", "nce"]);
        assert_eq!(RuleSet::INFLECTIONAL.names(), vec!["plural", "past_tense", "aspect"]);
        assert_eq!(RuleSet::all().names().len(), 17);
        assert_eq!(RuleSet::BLE.stages(), vec![("ble", &["able", "ible"][..])]);
    }
}
