//! Syllable component tree
//!
//! A syllable is a fixed three-level tree:
//!
//! ```text
//! Syllable
//! ├── Initial
//! ├── Final
//! │   ├── Medial
//! │   ├── Nucleus
//! │   └── Coda
//! └── Tone
//! ```
//!
//! Leaves hold an IPA string and an optional phonetic override written by
//! phonological rules. Branches derive their strings from their children
//! unless they carry an override themselves. Components compare, hash and
//! sort structurally by `(kind, ipa_str)`; overrides never take part.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SinophoneError};
use crate::phonetics::{IpaFeatureGroup, IpaString};

pub const TAG_COMPONENT: &str = "Component";
pub const TAG_LEAF: &str = "Leaf";
pub const TAG_BRANCH: &str = "Branch";
pub const TAG_ROOT: &str = "Root";

// Long spellings of the broad tags, accepted alongside the short ones
pub const TAG_SYLLABLE_COMPONENT: &str = "SyllableComponent";
pub const TAG_LEAF_COMPONENT: &str = "LeafSyllableComponent";
pub const TAG_BRANCH_COMPONENT: &str = "BranchSyllableComponent";
pub const TAG_ROOT_COMPONENT: &str = "RootSyllableComponent";

/// Component kinds in rank order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Syllable,
    Initial,
    Final,
    Medial,
    Nucleus,
    Coda,
    Tone,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Syllable,
        ComponentKind::Initial,
        ComponentKind::Final,
        ComponentKind::Medial,
        ComponentKind::Nucleus,
        ComponentKind::Coda,
        ComponentKind::Tone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Syllable => "Syllable",
            ComponentKind::Initial => "Initial",
            ComponentKind::Final => "Final",
            ComponentKind::Medial => "Medial",
            ComponentKind::Nucleus => "Nucleus",
            ComponentKind::Coda => "Coda",
            ComponentKind::Tone => "Tone",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_leaf(&self) -> bool {
        LeafKind::from_component_kind(*self).is_some()
    }

    /// Capability tags a pattern entry can address this kind by
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::Syllable => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_BRANCH,
                TAG_BRANCH_COMPONENT,
                TAG_ROOT,
                TAG_ROOT_COMPONENT,
                "Syllable",
            ],
            ComponentKind::Final => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_BRANCH,
                TAG_BRANCH_COMPONENT,
                "Final",
            ],
            ComponentKind::Initial => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_LEAF,
                TAG_LEAF_COMPONENT,
                "Initial",
            ],
            ComponentKind::Medial => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_LEAF,
                TAG_LEAF_COMPONENT,
                "Medial",
            ],
            ComponentKind::Nucleus => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_LEAF,
                TAG_LEAF_COMPONENT,
                "Nucleus",
            ],
            ComponentKind::Coda => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_LEAF,
                TAG_LEAF_COMPONENT,
                "Coda",
            ],
            ComponentKind::Tone => &[
                TAG_COMPONENT,
                TAG_SYLLABLE_COMPONENT,
                TAG_LEAF,
                TAG_LEAF_COMPONENT,
                "Tone",
            ],
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of kinds that are leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeafKind {
    Initial,
    Medial,
    Nucleus,
    Coda,
    Tone,
}

impl LeafKind {
    pub fn component_kind(&self) -> ComponentKind {
        match self {
            LeafKind::Initial => ComponentKind::Initial,
            LeafKind::Medial => ComponentKind::Medial,
            LeafKind::Nucleus => ComponentKind::Nucleus,
            LeafKind::Coda => ComponentKind::Coda,
            LeafKind::Tone => ComponentKind::Tone,
        }
    }

    pub fn from_component_kind(kind: ComponentKind) -> Option<Self> {
        match kind {
            ComponentKind::Initial => Some(LeafKind::Initial),
            ComponentKind::Medial => Some(LeafKind::Medial),
            ComponentKind::Nucleus => Some(LeafKind::Nucleus),
            ComponentKind::Coda => Some(LeafKind::Coda),
            ComponentKind::Tone => Some(LeafKind::Tone),
            ComponentKind::Syllable | ComponentKind::Final => None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.component_kind().name()
    }
}

impl From<LeafKind> for ComponentKind {
    fn from(kind: LeafKind) -> Self {
        kind.component_kind()
    }
}

/// Every symbol must be a tone letter, except that the last one may be `ʔ`
fn validate_tone(ipa: &IpaString) -> Result<()> {
    let last = ipa.len().saturating_sub(1);
    let valid = ipa
        .iter()
        .enumerate()
        .all(|(i, symbol)| symbol.is_tone() || (i == last && symbol.is_glottal_stop()));
    if valid {
        Ok(())
    } else {
        Err(SinophoneError::MalformedTone {
            ipa: ipa.to_string(),
        })
    }
}

fn expect_leaf(leaf: &Leaf, expected: LeafKind) -> Result<()> {
    if leaf.kind == expected {
        Ok(())
    } else {
        Err(SinophoneError::ComponentKindMismatch {
            expected: expected.name().to_string(),
            found: leaf.kind.name().to_string(),
            ipa: leaf.ipa_str.to_string(),
        })
    }
}

// ===== Leaf =====

/// Initial, Medial, Nucleus, Coda or Tone
#[derive(Debug, Clone)]
pub struct Leaf {
    kind: LeafKind,
    ipa_str: IpaString,
    phonetic: Option<IpaString>,
}

impl Leaf {
    /// # Errors
    ///
    /// Returns `MalformedTone` if `kind` is `Tone` and the string is not a tone.
    pub fn new(kind: LeafKind, ipa_str: IpaString) -> Result<Self> {
        if kind == LeafKind::Tone {
            validate_tone(&ipa_str)?;
        }
        Ok(Self {
            kind,
            ipa_str,
            phonetic: None,
        })
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text, or `MalformedTone`.
    pub fn parse(kind: LeafKind, text: &str) -> Result<Self> {
        Self::new(kind, IpaString::parse(text)?)
    }

    /// An empty leaf; always valid, including for tones
    pub fn blank(kind: LeafKind) -> Self {
        Self {
            kind,
            ipa_str: IpaString::new(),
            phonetic: None,
        }
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text.
    pub fn initial(text: &str) -> Result<Self> {
        Self::parse(LeafKind::Initial, text)
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text.
    pub fn medial(text: &str) -> Result<Self> {
        Self::parse(LeafKind::Medial, text)
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text.
    pub fn nucleus(text: &str) -> Result<Self> {
        Self::parse(LeafKind::Nucleus, text)
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text.
    pub fn coda(text: &str) -> Result<Self> {
        Self::parse(LeafKind::Coda, text)
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text and `MalformedTone`
    /// unless every symbol is a tone letter, bar a trailing glottal stop.
    pub fn tone(text: &str) -> Result<Self> {
        Self::parse(LeafKind::Tone, text)
    }

    pub fn leaf_kind(&self) -> LeafKind {
        self.kind
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind.component_kind()
    }

    pub fn ipa_str(&self) -> &IpaString {
        &self.ipa_str
    }

    /// The realization override if set, the symbolic string otherwise
    pub fn phonetic_ipa_str(&self) -> &IpaString {
        self.phonetic.as_ref().unwrap_or(&self.ipa_str)
    }

    pub fn has_phonetic_override(&self) -> bool {
        self.phonetic.is_some()
    }

    pub fn set_phonetic_ipa_str(&mut self, ipa: IpaString) {
        self.phonetic = Some(ipa);
    }

    pub fn clear_phonetic_ipa_str(&mut self) {
        self.phonetic = None;
    }

    fn realize_if_matches(&mut self, target: &SyllableComponent, replacement: &IpaString) -> bool {
        let hit = target.kind() == self.kind() && *target.ipa_str() == self.ipa_str;
        if hit {
            self.set_phonetic_ipa_str(replacement.clone());
        }
        hit
    }
}

// ===== Final =====

/// Branch holding Medial, Nucleus and Coda
#[derive(Debug, Clone)]
pub struct Final {
    medial: Leaf,
    nucleus: Leaf,
    coda: Leaf,
    phonetic: Option<IpaString>,
}

impl Final {
    /// # Errors
    ///
    /// Returns `ComponentKindMismatch` if a part has the wrong leaf kind.
    pub fn new(medial: Leaf, nucleus: Leaf, coda: Leaf) -> Result<Self> {
        expect_leaf(&medial, LeafKind::Medial)?;
        expect_leaf(&nucleus, LeafKind::Nucleus)?;
        expect_leaf(&coda, LeafKind::Coda)?;
        Ok(Self {
            medial,
            nucleus,
            coda,
            phonetic: None,
        })
    }

    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text.
    pub fn parse(medial: &str, nucleus: &str, coda: &str) -> Result<Self> {
        Self::new(
            Leaf::medial(medial)?,
            Leaf::nucleus(nucleus)?,
            Leaf::coda(coda)?,
        )
    }

    pub fn medial(&self) -> &Leaf {
        &self.medial
    }

    pub fn nucleus(&self) -> &Leaf {
        &self.nucleus
    }

    pub fn coda(&self) -> &Leaf {
        &self.coda
    }

    pub fn has_phonetic_override(&self) -> bool {
        self.phonetic.is_some()
    }

    pub fn set_phonetic_ipa_str(&mut self, ipa: IpaString) {
        self.phonetic = Some(ipa);
    }

    pub fn clear_phonetic_ipa_str(&mut self) {
        self.phonetic = None;
    }

    fn symbolic(&self) -> IpaString {
        let mut out = self.medial.ipa_str.clone();
        out += &self.nucleus.ipa_str;
        out += &self.coda.ipa_str;
        out
    }

    fn phonetic(&self) -> IpaString {
        if let Some(ipa) = &self.phonetic {
            return ipa.clone();
        }
        let mut out = self.medial.phonetic_ipa_str().clone();
        out += self.nucleus.phonetic_ipa_str();
        out += self.coda.phonetic_ipa_str();
        out
    }
}

impl Default for Final {
    fn default() -> Self {
        Self {
            medial: Leaf::blank(LeafKind::Medial),
            nucleus: Leaf::blank(LeafKind::Nucleus),
            coda: Leaf::blank(LeafKind::Coda),
            phonetic: None,
        }
    }
}

// ===== Syllable =====

/// Root branch holding Initial, Final and Tone
#[derive(Debug, Clone)]
pub struct Syllable {
    initial: Leaf,
    final_: Final,
    tone: Leaf,
    phonetic: Option<IpaString>,
}

impl Default for Syllable {
    fn default() -> Self {
        Self {
            initial: Leaf::blank(LeafKind::Initial),
            final_: Final::default(),
            tone: Leaf::blank(LeafKind::Tone),
            phonetic: None,
        }
    }
}

impl Syllable {
    /// # Errors
    ///
    /// Returns `ComponentKindMismatch` if `initial` or `tone` has the wrong kind.
    pub fn new(initial: Leaf, final_: Final, tone: Leaf) -> Result<Self> {
        expect_leaf(&initial, LeafKind::Initial)?;
        expect_leaf(&tone, LeafKind::Tone)?;
        Ok(Self {
            initial,
            final_,
            tone,
            phonetic: None,
        })
    }

    /// Inventories guarantee the leaf kinds, so no check is needed here
    pub(crate) fn assemble(initial: Leaf, final_: Final, tone: Leaf) -> Self {
        debug_assert_eq!(initial.kind, LeafKind::Initial);
        debug_assert_eq!(tone.kind, LeafKind::Tone);
        Self {
            initial,
            final_,
            tone,
            phonetic: None,
        }
    }

    /// Build a syllable from the text of its five leaves
    ///
    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for unparsable text or `MalformedTone`.
    pub fn parse(
        initial: &str,
        medial: &str,
        nucleus: &str,
        coda: &str,
        tone: &str,
    ) -> Result<Self> {
        Self::new(
            Leaf::initial(initial)?,
            Final::parse(medial, nucleus, coda)?,
            Leaf::tone(tone)?,
        )
    }

    pub fn initial(&self) -> &Leaf {
        &self.initial
    }

    pub fn final_(&self) -> &Final {
        &self.final_
    }

    pub fn tone(&self) -> &Leaf {
        &self.tone
    }

    pub fn has_phonetic_override(&self) -> bool {
        self.phonetic.is_some()
    }

    pub fn set_phonetic_ipa_str(&mut self, ipa: IpaString) {
        self.phonetic = Some(ipa);
    }

    pub fn clear_phonetic_ipa_str(&mut self) {
        self.phonetic = None;
    }

    fn symbolic(&self) -> IpaString {
        let mut out = self.initial.ipa_str.clone();
        out += &self.final_.symbolic();
        out += &self.tone.ipa_str;
        out
    }

    fn phonetic(&self) -> IpaString {
        if let Some(ipa) = &self.phonetic {
            return ipa.clone();
        }
        let mut out = self.initial.phonetic_ipa_str().clone();
        out += &self.final_.phonetic();
        out += self.tone.phonetic_ipa_str();
        out
    }

    /// Set the realization of every descendant structurally equal to `target`,
    /// walking in pre-order. Returns the number of components rewritten.
    pub(crate) fn realize_matching(
        &mut self,
        target: &SyllableComponent,
        replacement: &IpaString,
    ) -> usize {
        let mut count = 0;
        if self.initial.realize_if_matches(target, replacement) {
            count += 1;
        }
        if target.kind() == ComponentKind::Final && target.ipa_str() == self.final_.ipa_str() {
            self.final_.set_phonetic_ipa_str(replacement.clone());
            count += 1;
        }
        for leaf in [
            &mut self.final_.medial,
            &mut self.final_.nucleus,
            &mut self.final_.coda,
        ] {
            if leaf.realize_if_matches(target, replacement) {
                count += 1;
            }
        }
        if self.tone.realize_if_matches(target, replacement) {
            count += 1;
        }
        count
    }
}

// ===== Shared capability interface =====

/// Borrowed view of any component
#[derive(Debug, Clone, Copy)]
pub enum ComponentRef<'a> {
    Leaf(&'a Leaf),
    Final(&'a Final),
    Syllable(&'a Syllable),
}

impl<'a> ComponentRef<'a> {
    pub fn kind(self) -> ComponentKind {
        match self {
            ComponentRef::Leaf(leaf) => leaf.kind(),
            ComponentRef::Final(_) => ComponentKind::Final,
            ComponentRef::Syllable(_) => ComponentKind::Syllable,
        }
    }

    pub fn ipa_str(self) -> Cow<'a, IpaString> {
        match self {
            ComponentRef::Leaf(leaf) => Cow::Borrowed(&leaf.ipa_str),
            ComponentRef::Final(f) => Cow::Owned(f.symbolic()),
            ComponentRef::Syllable(s) => Cow::Owned(s.symbolic()),
        }
    }

    pub fn phonetic_ipa_str(self) -> Cow<'a, IpaString> {
        match self {
            ComponentRef::Leaf(leaf) => Cow::Borrowed(leaf.phonetic_ipa_str()),
            ComponentRef::Final(f) => Cow::Owned(f.phonetic()),
            ComponentRef::Syllable(s) => Cow::Owned(s.phonetic()),
        }
    }

    /// Direct children in canonical order
    pub fn children(self) -> Vec<ComponentRef<'a>> {
        match self {
            ComponentRef::Leaf(_) => Vec::new(),
            ComponentRef::Final(f) => vec![
                ComponentRef::Leaf(&f.medial),
                ComponentRef::Leaf(&f.nucleus),
                ComponentRef::Leaf(&f.coda),
            ],
            ComponentRef::Syllable(s) => vec![
                ComponentRef::Leaf(&s.initial),
                ComponentRef::Final(&s.final_),
                ComponentRef::Leaf(&s.tone),
            ],
        }
    }

    /// Children and grandchildren in pre-order; the tree is never deeper
    pub fn descendants(self) -> Vec<ComponentRef<'a>> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child);
            out.extend(child.children());
        }
        out
    }

    pub fn to_owned_component(self) -> SyllableComponent {
        match self {
            ComponentRef::Leaf(leaf) => SyllableComponent::Leaf(leaf.clone()),
            ComponentRef::Final(f) => SyllableComponent::Final(f.clone()),
            ComponentRef::Syllable(s) => SyllableComponent::Syllable(s.clone()),
        }
    }
}

/// Capabilities shared by every component
pub trait Component {
    fn as_component(&self) -> ComponentRef<'_>;

    fn kind(&self) -> ComponentKind {
        self.as_component().kind()
    }

    fn tags(&self) -> &'static [&'static str] {
        self.kind().tags()
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.kind().has_tag(tag)
    }

    /// Symbolic string: a leaf's own, or the concatenation of a branch's children
    fn ipa_str(&self) -> Cow<'_, IpaString> {
        self.as_component().ipa_str()
    }

    /// Realized string; an override at any level takes precedence over children
    fn phonetic_ipa_str(&self) -> Cow<'_, IpaString> {
        self.as_component().phonetic_ipa_str()
    }

    fn sub_components(&self) -> Vec<ComponentRef<'_>> {
        self.as_component().children()
    }

    /// Every descendant in pre-order, excluding `self`
    fn recursive_sub_components(&self) -> Vec<ComponentRef<'_>> {
        self.as_component().descendants()
    }

    /// True iff some symbol of the symbolic string satisfies the whole group
    fn has_features(&self, features: &IpaFeatureGroup) -> bool {
        self.ipa_str()
            .iter()
            .any(|symbol| features.matches_symbol(symbol))
    }

    /// Structural equality across component representations
    fn same_component<C: Component + ?Sized>(&self, other: &C) -> bool {
        self.kind() == other.kind() && self.ipa_str() == other.ipa_str()
    }
}

impl Component for Leaf {
    fn as_component(&self) -> ComponentRef<'_> {
        ComponentRef::Leaf(self)
    }
}

impl Component for Final {
    fn as_component(&self) -> ComponentRef<'_> {
        ComponentRef::Final(self)
    }
}

impl Component for Syllable {
    fn as_component(&self) -> ComponentRef<'_> {
        ComponentRef::Syllable(self)
    }
}

impl Component for ComponentRef<'_> {
    fn as_component(&self) -> ComponentRef<'_> {
        *self
    }
}

/// Owned component of any kind
#[derive(Debug, Clone)]
pub enum SyllableComponent {
    Leaf(Leaf),
    Final(Final),
    Syllable(Syllable),
}

impl SyllableComponent {
    pub fn set_phonetic_ipa_str(&mut self, ipa: IpaString) {
        match self {
            SyllableComponent::Leaf(leaf) => leaf.set_phonetic_ipa_str(ipa),
            SyllableComponent::Final(f) => f.set_phonetic_ipa_str(ipa),
            SyllableComponent::Syllable(s) => s.set_phonetic_ipa_str(ipa),
        }
    }
}

impl Component for SyllableComponent {
    fn as_component(&self) -> ComponentRef<'_> {
        match self {
            SyllableComponent::Leaf(leaf) => ComponentRef::Leaf(leaf),
            SyllableComponent::Final(f) => ComponentRef::Final(f),
            SyllableComponent::Syllable(s) => ComponentRef::Syllable(s),
        }
    }
}

impl From<Leaf> for SyllableComponent {
    fn from(leaf: Leaf) -> Self {
        SyllableComponent::Leaf(leaf)
    }
}

impl From<Final> for SyllableComponent {
    fn from(f: Final) -> Self {
        SyllableComponent::Final(f)
    }
}

impl From<Syllable> for SyllableComponent {
    fn from(s: Syllable) -> Self {
        SyllableComponent::Syllable(s)
    }
}

/// Structural identity: `(kind, ipa_str)`
macro_rules! structural_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.same_component(other)
                }
            }

            impl Eq for $ty {}

            impl Hash for $ty {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    Component::kind(self).hash(state);
                    Component::ipa_str(self).hash(state);
                }
            }

            impl Ord for $ty {
                fn cmp(&self, other: &Self) -> Ordering {
                    Component::kind(self)
                        .cmp(&Component::kind(other))
                        .then_with(|| Component::ipa_str(self).cmp(&Component::ipa_str(other)))
                }
            }

            impl PartialOrd for $ty {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", Component::ipa_str(self))
                }
            }
        )*
    };
}

structural_identity!(Leaf, Final, Syllable, SyllableComponent);

#[cfg(test)]
mod tests {
    use super::*;

    fn syllable(initial: &str, medial: &str, nucleus: &str, coda: &str, tone: &str) -> Syllable {
        Syllable::parse(initial, medial, nucleus, coda, tone).unwrap()
    }

    #[test]
    fn test_tone_validation() {
        assert!(Leaf::tone("˥ʔ").is_ok());
        assert!(Leaf::tone("").is_ok());
        assert!(Leaf::tone("˨˧").is_ok());
        assert!(matches!(
            Leaf::tone("lol"),
            Err(SinophoneError::MalformedTone { .. })
        ));
        assert!(matches!(
            Leaf::tone("ʔ˥"),
            Err(SinophoneError::MalformedTone { .. })
        ));
    }

    #[test]
    fn test_constructor_rejects_wrong_kind() {
        let err = Final::new(
            Leaf::initial("k").unwrap(),
            Leaf::nucleus("a").unwrap(),
            Leaf::blank(LeafKind::Coda),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SinophoneError::ComponentKindMismatch {
                expected: "Medial".to_string(),
                found: "Initial".to_string(),
                ipa: "k".to_string(),
            }
        );
    }

    #[test]
    fn test_branch_strings_concatenate_children() {
        let s = syllable("k", "", "ɐ", "ʔ", "˥˥");
        assert_eq!(s.ipa_str().to_string(), "kɐʔ˥˥");
        assert_eq!(s.final_().ipa_str().to_string(), "ɐʔ");
        assert_eq!(s.phonetic_ipa_str(), s.ipa_str());
    }

    #[test]
    fn test_recursive_sub_components_order() {
        let s = syllable("k", "u", "a", "ŋ", "˥");
        let kinds: Vec<_> = s
            .recursive_sub_components()
            .iter()
            .map(|c| c.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::Initial,
                ComponentKind::Final,
                ComponentKind::Medial,
                ComponentKind::Nucleus,
                ComponentKind::Coda,
                ComponentKind::Tone,
            ]
        );
        assert!(Leaf::initial("k")
            .unwrap()
            .recursive_sub_components()
            .is_empty());
    }

    #[test]
    fn test_override_precedence() {
        let mut s = syllable("l", "", "o", "ŋ", "˨˧");
        let target = SyllableComponent::from(Leaf::nucleus("o").unwrap());
        let replacement = IpaString::parse("ʊ̃").unwrap();
        assert_eq!(s.realize_matching(&target, &replacement), 1);
        assert_eq!(s.phonetic_ipa_str().to_string(), "lʊ̃ŋ˨˧");
        assert_eq!(s.ipa_str().to_string(), "loŋ˨˧");

        s.set_phonetic_ipa_str(IpaString::parse("lo").unwrap());
        assert_eq!(s.phonetic_ipa_str().to_string(), "lo");
    }

    #[test]
    fn test_structural_equality_ignores_overrides() {
        let mut a = Leaf::nucleus("o").unwrap();
        let b = Leaf::nucleus("o").unwrap();
        a.set_phonetic_ipa_str(IpaString::parse("ʊ").unwrap());
        assert_eq!(a, b);
        assert_ne!(Leaf::nucleus("o").unwrap(), Leaf::coda("o").unwrap());
    }

    #[test]
    fn test_rank_order() {
        let initial = SyllableComponent::from(Leaf::initial("k").unwrap());
        let tone = SyllableComponent::from(Leaf::tone("˥").unwrap());
        let fin = SyllableComponent::from(Final::parse("", "a", "").unwrap());
        let syl = SyllableComponent::from(syllable("k", "", "a", "", "˥"));
        assert!(syl < initial);
        assert!(initial < fin);
        assert!(fin < tone);
    }

    #[test]
    fn test_has_features_is_disjunction_over_symbols() {
        let group = IpaFeatureGroup::parse("+nasal").unwrap();
        let f = Final::parse("", "o", "ŋ").unwrap();
        assert!(f.has_features(&group));
        assert!(!Final::parse("", "o", "").unwrap().has_features(&group));
        assert!(!Leaf::blank(LeafKind::Medial).has_features(&IpaFeatureGroup::new()));
    }

    #[test]
    fn test_tags() {
        assert!(ComponentKind::Syllable.has_tag(TAG_ROOT));
        assert!(ComponentKind::Final.has_tag(TAG_BRANCH));
        assert!(!ComponentKind::Final.has_tag(TAG_ROOT));
        assert!(ComponentKind::Coda.has_tag(TAG_LEAF));
        assert!(ComponentKind::Coda.has_tag("Coda"));
        assert!(!ComponentKind::Coda.has_tag("Nucleus"));
    }

    #[test]
    fn test_long_tag_spellings() {
        assert!(ComponentKind::Syllable.has_tag("RootSyllableComponent"));
        assert!(ComponentKind::Syllable.has_tag("BranchSyllableComponent"));
        assert!(ComponentKind::Final.has_tag("BranchSyllableComponent"));
        assert!(!ComponentKind::Final.has_tag("RootSyllableComponent"));
        assert!(ComponentKind::Tone.has_tag("LeafSyllableComponent"));
        assert!(!ComponentKind::Tone.has_tag("BranchSyllableComponent"));
        for kind in ComponentKind::ALL {
            assert!(kind.has_tag(TAG_SYLLABLE_COMPONENT), "{kind}");
        }
    }
}
