use std::fmt;

use crate::errors::{Result, SinophoneError};

use super::table::{ipa_table, DESCRIPTORS};

/// Category a descriptor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DescriptorCategory {
    Kind,
    Voicing,
    Place,
    Manner,
    Height,
    Backness,
    Roundness,
    Diacritic,
    Tone,
}

/// A canonical entry of the IPA descriptor table
///
/// Each descriptor has one canonical label and any number of synonyms; all of
/// them resolve to the same value, so `stop` and `plosive` compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Descriptor(u16);

impl Descriptor {
    pub(crate) fn from_index(index: usize) -> Self {
        Descriptor(index as u16)
    }

    /// Resolve a label or synonym to its descriptor
    ///
    /// # Errors
    ///
    /// Returns `UnknownDescriptor` if no table entry carries this label.
    pub fn from_label(label: &str) -> Result<Self> {
        ipa_table()
            .descriptor(label)
            .ok_or_else(|| SinophoneError::UnknownDescriptor {
                label: label.to_string(),
            })
    }

    pub fn canonical_label(&self) -> &'static str {
        DESCRIPTORS[self.0 as usize].labels[0]
    }

    /// Every label, canonical first
    pub fn labels(&self) -> &'static [&'static str] {
        DESCRIPTORS[self.0 as usize].labels
    }

    pub fn category(&self) -> DescriptorCategory {
        DESCRIPTORS[self.0 as usize].category
    }

    pub fn is_kind(&self) -> bool {
        self.category() == DescriptorCategory::Kind
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_label())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Descriptor({})", self.canonical_label())
    }
}

/// Map any label or synonym to its canonical label
pub fn canonical_value(label: &str) -> Option<&'static str> {
    ipa_table().descriptor(label).map(|d| d.canonical_label())
}

/// Iterate over every descriptor in table order
pub fn all_descriptors() -> impl Iterator<Item = Descriptor> {
    (0..DESCRIPTORS.len()).map(Descriptor::from_index)
}
