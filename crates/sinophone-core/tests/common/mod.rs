use sinophone_core::phonetics::IpaFeatureGroup;
use sinophone_core::{
    Acceptability, Leaf, PhonologicalRule, Phonology, PhonotacticConstraint, Syllable,
    SyllableFeatures,
};

/// Build a syllable from its five leaf strings
#[allow(dead_code)]
pub fn syllable(initial: &str, medial: &str, nucleus: &str, coda: &str, tone: &str) -> Syllable {
    Syllable::parse(initial, medial, nucleus, coda, tone).expect("valid test syllable")
}

/// Build a pattern from `(tag, [group text, ...])` pairs
#[allow(dead_code)]
pub fn features(entries: &[(&str, &[&str])]) -> SyllableFeatures {
    let mut out = SyllableFeatures::new();
    for (tag, groups) in entries {
        for group in *groups {
            out.insert(
                *tag,
                IpaFeatureGroup::parse(group).expect("valid test feature group"),
            );
        }
    }
    out
}

/// /o/ surfaces as [ʊ̃] before a nasal coda
#[allow(dead_code)]
pub fn nasalization_rule() -> PhonologicalRule {
    PhonologicalRule::new(
        Leaf::nucleus("o").expect("nucleus"),
        "ʊ̃".parse().expect("replacement"),
        features(&[("Final", &["+nasal"])]),
    )
}

/// Voiced obstruents never carry the extra-high level tone
#[allow(dead_code)]
pub fn voiced_high_constraint() -> PhonotacticConstraint {
    PhonotacticConstraint::new(
        features(&[
            ("Initial", &["-nasal -lateral-approximant +voiced"]),
            ("Tone", &["+extra-high-level"]),
        ]),
        Acceptability::UNACCEPTABLE,
    )
}

/// A small refreshed Wu phonology: kɐʔ˥˥, loŋ˨˧ and bo˨˧
#[allow(dead_code)]
pub fn wu_phonology() -> Phonology {
    let mut phonology = Phonology::new();
    phonology.add_syllable(syllable("k", "", "ɐ", "ʔ", "˥˥"));
    phonology.add_syllable(syllable("l", "", "o", "ŋ", "˨˧"));
    phonology.add_syllable(syllable("b", "", "o", "", "˨˧"));
    phonology.add_constraint(voiced_high_constraint());
    phonology.add_rule(nasalization_rule());
    phonology.refresh();
    phonology
}
