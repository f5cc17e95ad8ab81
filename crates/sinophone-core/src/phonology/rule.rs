//! Phonological rewrite rules
//!
//! A rule names a target component and the IPA string it is realized as in
//! syllables matching the rule's pattern. Only realizations change: the
//! symbolic strings, and therefore structural identity, stay put.

use std::fmt;

use crate::phonetics::IpaString;

use super::component::{Component, Syllable, SyllableComponent};
use super::pattern::SyllablePattern;
use super::rendered::RenderedSyllable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhonologicalRule {
    target: SyllableComponent,
    replacement: IpaString,
    pattern: SyllablePattern,
}

impl PhonologicalRule {
    pub fn new(
        target: impl Into<SyllableComponent>,
        replacement: IpaString,
        pattern: impl Into<SyllablePattern>,
    ) -> Self {
        Self {
            target: target.into(),
            replacement,
            pattern: pattern.into(),
        }
    }

    pub fn target(&self) -> &SyllableComponent {
        &self.target
    }

    pub fn replacement(&self) -> &IpaString {
        &self.replacement
    }

    pub fn pattern(&self) -> &SyllablePattern {
        &self.pattern
    }

    /// Evaluated against the syllable as realized so far
    pub fn matches(&self, syllable: &Syllable) -> bool {
        self.pattern.matches(syllable)
    }

    /// Rewrite every sub-component structurally equal to the target
    ///
    /// Acceptability is carried through untouched.
    pub fn apply(&self, mut rendered: RenderedSyllable) -> RenderedSyllable {
        if self.matches(rendered.syllable()) {
            rendered
                .syllable_mut()
                .realize_matching(&self.target, &self.replacement);
        }
        rendered
    }

    pub fn apply_to(&self, syllable: &Syllable) -> RenderedSyllable {
        self.apply(RenderedSyllable::from_syllable(syllable))
    }
}

impl fmt::Display for PhonologicalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} / {}",
            self.target.kind(),
            self.target.ipa_str(),
            self.replacement,
            self.pattern
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::IpaFeatureGroup;
    use crate::phonology::component::Leaf;
    use crate::phonology::pattern::SyllableFeatures;

    fn nasal_final() -> SyllableFeatures {
        SyllableFeatures::new().with("Final", IpaFeatureGroup::parse("+nasal").unwrap())
    }

    #[test]
    fn test_rule_rewrites_realization_only() {
        let rule = PhonologicalRule::new(
            Leaf::nucleus("o").unwrap(),
            IpaString::parse("ʊ̃").unwrap(),
            nasal_final(),
        );
        let syllable = Syllable::parse("l", "", "o", "ŋ", "˨˧").unwrap();
        let rendered = rule.apply_to(&syllable);
        assert_eq!(rendered.phonetic_ipa_str().to_string(), "lʊ̃ŋ˨˧");
        assert_eq!(rendered.ipa_str().to_string(), "loŋ˨˧");
    }

    #[test]
    fn test_rule_skips_non_matching_syllable() {
        let rule = PhonologicalRule::new(
            Leaf::nucleus("o").unwrap(),
            IpaString::parse("ʊ̃").unwrap(),
            nasal_final(),
        );
        let syllable = Syllable::parse("l", "", "o", "", "˨˧").unwrap();
        assert_eq!(
            rule.apply_to(&syllable).phonetic_ipa_str().to_string(),
            "lo˨˧"
        );
    }

    #[test]
    fn test_rule_target_must_match_kind() {
        // an Initial "o" never equals the Nucleus "o"
        let rule = PhonologicalRule::new(
            Leaf::initial("o").unwrap(),
            IpaString::parse("u").unwrap(),
            SyllableFeatures::new(),
        );
        let syllable = Syllable::parse("l", "", "o", "ŋ", "˨˧").unwrap();
        assert_eq!(
            rule.apply_to(&syllable).phonetic_ipa_str().to_string(),
            "loŋ˨˧"
        );
    }
}
