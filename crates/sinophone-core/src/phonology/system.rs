//! The phonology aggregate
//!
//! Owns registered syllables, phoneme inventories, constraints and rules,
//! plus a cache of rendered syllables. Mutators never refresh on their own:
//! call [`Phonology::refresh`] after changing the collections.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;

use crate::errors::{Result, SinophoneError};
use crate::{log_op_end, log_op_start};

use super::component::{
    Component, ComponentKind, ComponentRef, Final, Leaf, Syllable, SyllableComponent,
};
use super::constraint::PhonotacticConstraint;
use super::rendered::RenderedSyllable;
use super::rule::PhonologicalRule;

#[derive(Debug, Clone, Default)]
pub struct Phonology {
    initials: BTreeSet<Leaf>,
    finals: BTreeSet<Final>,
    tones: BTreeSet<Leaf>,
    syllables: BTreeSet<Syllable>,
    constraints: Vec<PhonotacticConstraint>,
    rules: Vec<PhonologicalRule>,
    rendered: Vec<RenderedSyllable>,
}

fn expect_kind(leaf: &Leaf, expected: ComponentKind) -> Result<()> {
    if leaf.kind() == expected {
        Ok(())
    } else {
        Err(SinophoneError::ComponentKindMismatch {
            expected: expected.name().to_string(),
            found: leaf.kind().name().to_string(),
            ipa: leaf.ipa_str().to_string(),
        })
    }
}

impl Phonology {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Mutators =====

    /// Register a syllable; returns false if an equal one is already present
    pub fn add_syllable(&mut self, syllable: Syllable) -> bool {
        self.syllables.insert(syllable)
    }

    pub fn remove_syllable(&mut self, syllable: &Syllable) -> bool {
        self.syllables.remove(syllable)
    }

    /// # Errors
    ///
    /// Returns `ComponentKindMismatch` unless `initial` is an Initial.
    pub fn add_initial(&mut self, initial: Leaf) -> Result<bool> {
        expect_kind(&initial, ComponentKind::Initial)?;
        Ok(self.initials.insert(initial))
    }

    pub fn add_final(&mut self, final_: Final) -> bool {
        self.finals.insert(final_)
    }

    /// # Errors
    ///
    /// Returns `ComponentKindMismatch` unless `tone` is a Tone.
    pub fn add_tone(&mut self, tone: Leaf) -> Result<bool> {
        expect_kind(&tone, ComponentKind::Tone)?;
        Ok(self.tones.insert(tone))
    }

    /// Add a constraint unless an equal one is already registered
    pub fn add_constraint(&mut self, constraint: PhonotacticConstraint) -> bool {
        if self.constraints.contains(&constraint) {
            return false;
        }
        self.constraints.push(constraint);
        true
    }

    /// Append a rule; rules run in registration order
    pub fn add_rule(&mut self, rule: PhonologicalRule) {
        self.rules.push(rule);
    }

    // ===== Accessors =====

    pub fn syllables(&self) -> &BTreeSet<Syllable> {
        &self.syllables
    }

    pub fn initials(&self) -> &BTreeSet<Leaf> {
        &self.initials
    }

    pub fn finals(&self) -> &BTreeSet<Final> {
        &self.finals
    }

    pub fn tones(&self) -> &BTreeSet<Leaf> {
        &self.tones
    }

    pub fn constraints(&self) -> &[PhonotacticConstraint] {
        &self.constraints
    }

    pub fn rules(&self) -> &[PhonologicalRule] {
        &self.rules
    }

    /// Rendered syllables as of the last refresh, in syllable order
    pub fn rendered_syllables(&self) -> &[RenderedSyllable] {
        &self.rendered
    }

    // ===== Derived collections =====

    /// Initials, finals and tones, in component order
    pub fn phoneme_collection(&self) -> BTreeSet<SyllableComponent> {
        self.phoneme_refs()
            .map(ComponentRef::to_owned_component)
            .collect()
    }

    /// Every inventory phoneme together with all of its descendants
    pub fn recursive_phoneme_collection(&self) -> BTreeSet<SyllableComponent> {
        self.phoneme_refs()
            .flat_map(|phoneme| std::iter::once(phoneme).chain(phoneme.descendants()))
            .map(ComponentRef::to_owned_component)
            .collect()
    }

    /// The leaves of [`Phonology::recursive_phoneme_collection`]
    pub fn leaf_phoneme_collection(&self) -> BTreeSet<Leaf> {
        self.phoneme_refs()
            .flat_map(|phoneme| std::iter::once(phoneme).chain(phoneme.descendants()))
            .filter_map(|component| match component {
                ComponentRef::Leaf(leaf) => Some(leaf.clone()),
                _ => None,
            })
            .collect()
    }

    fn phoneme_refs(&self) -> impl Iterator<Item = ComponentRef<'_>> {
        self.initials
            .iter()
            .map(ComponentRef::Leaf)
            .chain(self.finals.iter().map(ComponentRef::Final))
            .chain(self.tones.iter().map(ComponentRef::Leaf))
    }

    // ===== Evaluation =====

    /// Recompute inventories from syllables and re-render every syllable
    ///
    /// Inventories only grow: phonemes added explicitly are kept.
    pub fn refresh(&mut self) {
        log_op_start!(
            "phonology_refresh",
            syllable_count = self.syllables.len() as u64
        );
        let start = Instant::now();

        self.update_phoneme_collections_from_syllables();
        self.rendered = self
            .syllables
            .iter()
            .map(|syllable| self.render_syllable(syllable))
            .collect();

        log_op_end!(
            "phonology_refresh",
            duration_ms = start.elapsed().as_millis() as u64,
            initial_count = self.initials.len() as u64,
            final_count = self.finals.len() as u64,
            tone_count = self.tones.len() as u64,
            constraint_count = self.constraints.len() as u64,
            rule_count = self.rules.len() as u64
        );
    }

    fn update_phoneme_collections_from_syllables(&mut self) {
        for syllable in &self.syllables {
            self.initials.insert(syllable.initial().clone());
            self.finals.insert(syllable.final_().clone());
            self.tones.insert(syllable.tone().clone());
        }
    }

    /// Apply every matching constraint, then every matching rule in order
    pub fn render_syllable(&self, syllable: &Syllable) -> RenderedSyllable {
        let mut rendered = RenderedSyllable::from_syllable(syllable);

        for constraint in &self.constraints {
            if constraint.matches(rendered.syllable()) {
                tracing::debug!(
                    syllable = %syllable,
                    constraint = %constraint,
                    "constraint matched"
                );
                rendered = constraint.apply(rendered);
            }
        }

        for rule in &self.rules {
            if rule.matches(rendered.syllable()) {
                rendered = rule.apply(rendered);
                tracing::debug!(
                    syllable = %syllable,
                    rule = %rule,
                    phonetic = %rendered.phonetic_ipa_str(),
                    "rule fired"
                );
            }
        }

        rendered
    }

    /// Every Initial × Final × Tone combination, rendered
    ///
    /// Not cached. Order follows the sorted inventories, so the result is
    /// deterministic and always holds exactly |I|·|F|·|T| entries.
    pub fn collocations(&self) -> Vec<RenderedSyllable> {
        log_op_start!("phonology_collocations");
        let start = Instant::now();

        let mut out =
            Vec::with_capacity(self.initials.len() * self.finals.len() * self.tones.len());
        for initial in &self.initials {
            for final_ in &self.finals {
                for tone in &self.tones {
                    let syllable =
                        Syllable::assemble(initial.clone(), final_.clone(), tone.clone());
                    out.push(self.render_syllable(&syllable));
                }
            }
        }

        log_op_end!(
            "phonology_collocations",
            duration_ms = start.elapsed().as_millis() as u64,
            collocation_count = out.len() as u64
        );
        out
    }
}

fn write_set<'a, I, T>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a T>,
    T: fmt::Display + 'a,
{
    f.write_str("{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("}")
}

impl fmt::Display for Phonology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("initials: ")?;
        write_set(f, &self.initials)?;
        f.write_str("\nfinals: ")?;
        write_set(f, &self.finals)?;
        f.write_str("\ntones: ")?;
        write_set(f, &self.tones)?;
        f.write_str("\nsyllables: ")?;
        write_set(f, &self.syllables)?;
        f.write_str("\nconstraints: ")?;
        write_set(f, &self.constraints)?;
        f.write_str("\nrules: ")?;
        write_set(f, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::{IpaFeatureGroup, IpaString};
    use crate::phonology::acceptability::Acceptability;
    use crate::phonology::pattern::{SyllableFeatures, SyllablePattern};

    fn wu_sample() -> Phonology {
        let mut phonology = Phonology::new();
        for (i, m, n, c, t) in [
            ("k", "", "ɐ", "ʔ", "˥˥"),
            ("l", "", "o", "ŋ", "˨˧"),
            ("b", "", "o", "", "˨˧"),
        ] {
            phonology.add_syllable(Syllable::parse(i, m, n, c, t).unwrap());
        }
        phonology
    }

    #[test]
    fn test_refresh_derives_inventories() {
        let mut phonology = wu_sample();
        assert!(phonology.initials().is_empty());
        phonology.refresh();
        assert_eq!(phonology.initials().len(), 3);
        assert_eq!(phonology.finals().len(), 3);
        assert_eq!(phonology.tones().len(), 2);
        assert_eq!(phonology.rendered_syllables().len(), 3);
    }

    #[test]
    fn test_collocations_is_full_product() {
        let mut phonology = wu_sample();
        phonology.refresh();
        assert_eq!(phonology.collocations().len(), 3 * 3 * 2);
    }

    #[test]
    fn test_add_initial_rejects_other_kinds() {
        let mut phonology = Phonology::new();
        assert!(phonology.add_initial(Leaf::initial("p").unwrap()).unwrap());
        assert!(matches!(
            phonology.add_initial(Leaf::tone("˥").unwrap()),
            Err(SinophoneError::ComponentKindMismatch { .. })
        ));
        assert!(phonology.add_tone(Leaf::coda("ŋ").unwrap()).is_err());
    }

    #[test]
    fn test_constraints_deduplicate_rules_do_not() {
        let mut phonology = Phonology::new();
        let pattern =
            SyllableFeatures::new().with("Initial", IpaFeatureGroup::parse("+voiced").unwrap());
        let constraint = PhonotacticConstraint::new(pattern.clone(), Acceptability::UNACCEPTABLE);
        assert!(phonology.add_constraint(constraint.clone()));
        assert!(!phonology.add_constraint(constraint));

        let rule = PhonologicalRule::new(
            Leaf::nucleus("o").unwrap(),
            IpaString::parse("u").unwrap(),
            pattern,
        );
        phonology.add_rule(rule.clone());
        phonology.add_rule(rule);
        assert_eq!(phonology.rules().len(), 2);
    }

    #[test]
    fn test_same_name_custom_constraints_are_both_kept() {
        fn is_open(s: &Syllable) -> bool {
            s.final_().coda().ipa_str().is_empty()
        }
        let mut phonology = Phonology::new();
        let open = PhonotacticConstraint::new(
            SyllablePattern::custom("shape", is_open),
            Acceptability::UNACCEPTABLE,
        );
        let closed = PhonotacticConstraint::new(
            SyllablePattern::custom("shape", |s: &Syllable| !is_open(s)),
            Acceptability::UNACCEPTABLE,
        );
        assert!(phonology.add_constraint(open.clone()));
        assert!(phonology.add_constraint(closed));
        assert!(!phonology.add_constraint(open));
        assert_eq!(phonology.constraints().len(), 2);
    }

    #[test]
    fn test_leaf_phoneme_collection() {
        let mut phonology = wu_sample();
        phonology.refresh();
        let leaves = phonology.leaf_phoneme_collection();
        assert!(leaves.contains(&Leaf::initial("k").unwrap()));
        assert!(leaves.contains(&Leaf::nucleus("o").unwrap()));
        assert!(leaves.contains(&Leaf::coda("").unwrap()));
        assert!(leaves.contains(&Leaf::tone("˨˧").unwrap()));
        assert!(leaves.iter().all(|leaf| leaf.kind().is_leaf()));

        let recursive = phonology.recursive_phoneme_collection();
        assert!(recursive.len() > phonology.phoneme_collection().len());
    }
}
