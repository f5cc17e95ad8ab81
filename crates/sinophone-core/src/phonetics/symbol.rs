use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{Result, SinophoneError};

use super::descriptor::Descriptor;
use super::feature::{IpaFeature, IpaFeatureGroup};
use super::table::ipa_table;

/// Kind of an IPA symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Consonant,
    Vowel,
    Diacritic,
    Tone,
}

impl SymbolKind {
    /// Label of the kind descriptor every symbol of this kind carries
    pub fn label(&self) -> &'static str {
        match self {
            SymbolKind::Consonant => "consonant",
            SymbolKind::Vowel => "vowel",
            SymbolKind::Diacritic => "diacritic",
            SymbolKind::Tone => "tone",
        }
    }

    fn from_descriptor(descriptor: Descriptor) -> Option<Self> {
        match descriptor.canonical_label() {
            "consonant" => Some(SymbolKind::Consonant),
            "vowel" => Some(SymbolKind::Vowel),
            "diacritic" => Some(SymbolKind::Diacritic),
            "tone" => Some(SymbolKind::Tone),
            _ => None,
        }
    }

    fn descriptor(&self) -> Descriptor {
        ipa_table()
            .descriptor(self.label())
            .expect("kind labels are part of the descriptor table")
    }
}

/// An immutable IPA phonetic unit
///
/// Symbols are handles into the embedded table: equality, hashing and order
/// all follow table position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpaSymbol(u16);

impl IpaSymbol {
    pub(crate) fn from_index(index: usize) -> Self {
        IpaSymbol(index as u16)
    }

    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }

    /// Look up a symbol from a descriptor string such as `voiceless velar stop`
    ///
    /// Labels may appear in any order and may be synonyms. A kind label
    /// (`consonant`, `vowel`, ...) restricts the search to that kind.
    ///
    /// # Errors
    ///
    /// `UnknownDescriptor` for an unknown label, `UnknownSymbol` if no symbol
    /// carries exactly these descriptors.
    pub fn from_descriptors(descriptors: &str) -> Result<Self> {
        Self::lookup(descriptors, None)
    }

    /// # Errors
    ///
    /// As [`IpaSymbol::from_descriptors`], restricted to consonants.
    pub fn consonant(descriptors: &str) -> Result<Self> {
        Self::lookup(descriptors, Some(SymbolKind::Consonant))
    }

    /// # Errors
    ///
    /// As [`IpaSymbol::from_descriptors`], restricted to vowels.
    pub fn vowel(descriptors: &str) -> Result<Self> {
        Self::lookup(descriptors, Some(SymbolKind::Vowel))
    }

    /// # Errors
    ///
    /// As [`IpaSymbol::from_descriptors`], restricted to diacritics.
    pub fn diacritic(descriptors: &str) -> Result<Self> {
        Self::lookup(descriptors, Some(SymbolKind::Diacritic))
    }

    /// # Errors
    ///
    /// As [`IpaSymbol::from_descriptors`], restricted to tones.
    pub fn tone(descriptors: &str) -> Result<Self> {
        Self::lookup(descriptors, Some(SymbolKind::Tone))
    }

    fn lookup(descriptors: &str, expected: Option<SymbolKind>) -> Result<Self> {
        let mut kinds = BTreeSet::new();
        let mut wanted = BTreeSet::new();
        for label in descriptors.split_whitespace() {
            let descriptor = Descriptor::from_label(label)?;
            match SymbolKind::from_descriptor(descriptor) {
                Some(kind) => {
                    kinds.insert(kind);
                }
                None => {
                    wanted.insert(descriptor);
                }
            }
        }
        if let Some(kind) = expected {
            kinds.insert(kind);
        }

        let not_found = || SinophoneError::UnknownSymbol {
            descriptors: descriptors.to_string(),
            expected: match expected {
                Some(kind) => kind.label().to_string(),
                None => "symbol".to_string(),
            },
        };
        if kinds.len() > 1 || wanted.is_empty() {
            return Err(not_found());
        }

        ipa_table()
            .symbols()
            .iter()
            .position(|entry| {
                entry.descriptors == wanted && kinds.iter().all(|kind| *kind == entry.kind)
            })
            .map(IpaSymbol::from_index)
            .ok_or_else(not_found)
    }

    /// Look up a symbol by its Unicode form or an accepted alias
    pub fn from_unicode(unicode: &str) -> Option<Self> {
        ipa_table().form(unicode)
    }

    /// Canonical Unicode form
    pub fn unicode(&self) -> &'static str {
        ipa_table().entry(*self).unicode
    }

    pub fn kind(&self) -> SymbolKind {
        ipa_table().entry(*self).kind
    }

    pub fn is_consonant(&self) -> bool {
        self.kind() == SymbolKind::Consonant
    }

    pub fn is_vowel(&self) -> bool {
        self.kind() == SymbolKind::Vowel
    }

    pub fn is_diacritic(&self) -> bool {
        self.kind() == SymbolKind::Diacritic
    }

    pub fn is_tone(&self) -> bool {
        self.kind() == SymbolKind::Tone
    }

    /// The voiceless glottal stop `ʔ`
    pub fn is_glottal_stop(&self) -> bool {
        self.unicode() == "ʔ"
    }

    /// All descriptors of this symbol, kind descriptor first
    pub fn descriptors(&self) -> Vec<Descriptor> {
        let entry = ipa_table().entry(*self);
        std::iter::once(entry.kind.descriptor())
            .chain(entry.descriptors.iter().copied())
            .collect()
    }

    pub fn has_descriptor(&self, descriptor: Descriptor) -> bool {
        let entry = ipa_table().entry(*self);
        entry.descriptors.contains(&descriptor) || entry.kind.descriptor() == descriptor
    }

    /// True iff the symbol's possession of the descriptor equals the feature's presence
    pub fn has_feature(&self, feature: &IpaFeature) -> bool {
        self.has_descriptor(feature.descriptor()) == feature.presence()
    }

    /// True iff every feature of the group holds
    pub fn has_features(&self, features: &IpaFeatureGroup) -> bool {
        features.matches_symbol(self)
    }

    /// Descriptor labels in conventional order followed by the kind for vowels,
    /// e.g. `voiceless velar plosive` or `open back unrounded vowel`
    pub fn canonical_representation(&self) -> String {
        let entry = ipa_table().entry(*self);
        let mut labels: Vec<&str> = entry
            .descriptors
            .iter()
            .map(|d| d.canonical_label())
            .collect();
        if entry.kind == SymbolKind::Vowel {
            labels.push(entry.kind.label());
        }
        labels.join(" ")
    }
}

impl fmt::Display for IpaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unicode())
    }
}

impl fmt::Debug for IpaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IpaSymbol({:?})", self.unicode())
    }
}
