use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::acceptability::Acceptability;
use super::component::{Component, ComponentRef, Syllable};

/// A syllable after constraints and rules have run
///
/// Carries both the symbolic and the realized string (through the syllable's
/// overrides) together with the accumulated acceptability verdict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderedSyllable {
    syllable: Syllable,
    acceptability: Acceptability,
}

impl RenderedSyllable {
    pub(crate) fn new(syllable: Syllable, acceptability: Acceptability) -> Self {
        Self {
            syllable,
            acceptability,
        }
    }

    /// Start a render from `(true, true)`, keeping any existing overrides
    pub fn from_syllable(syllable: &Syllable) -> Self {
        Self::new(syllable.clone(), Acceptability::ACCEPTABLE)
    }

    pub fn syllable(&self) -> &Syllable {
        &self.syllable
    }

    pub fn into_syllable(self) -> Syllable {
        self.syllable
    }

    pub fn acceptability(&self) -> Acceptability {
        self.acceptability
    }

    pub(crate) fn restrict(&mut self, acceptability: Acceptability) {
        self.acceptability &= acceptability;
    }

    pub(crate) fn syllable_mut(&mut self) -> &mut Syllable {
        &mut self.syllable
    }
}

impl Component for RenderedSyllable {
    fn as_component(&self) -> ComponentRef<'_> {
        ComponentRef::Syllable(&self.syllable)
    }
}

impl fmt::Display for RenderedSyllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.syllable)
    }
}

impl Serialize for RenderedSyllable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RenderedSyllable", 5)?;
        state.serialize_field("ipa", &*self.ipa_str())?;
        state.serialize_field("phonetic", &*self.phonetic_ipa_str())?;
        state.serialize_field("existent", &self.acceptability.existent)?;
        state.serialize_field("grammatical", &self.acceptability.grammatical)?;
        state.serialize_field("class", &self.acceptability.class())?;
        state.end()
    }
}
