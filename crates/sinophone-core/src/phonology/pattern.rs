//! Syllable predicates
//!
//! A [`SyllableFeatures`] pattern maps capability tags to sets of feature
//! groups. Every component of the syllable (the root excluded) is tested
//! against each entry whose tag it carries: groups in an entry are OR-ed,
//! entries are AND-ed. Tags no component carries never match anything and
//! are not an error.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::Result;
use crate::phonetics::IpaFeatureGroup;

use super::component::{Component, Syllable};

/// Declarative tag → feature-group predicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyllableFeatures {
    entries: BTreeMap<String, BTreeSet<IpaFeatureGroup>>,
}

impl SyllableFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SyllableFeatures::insert`]
    pub fn with(mut self, tag: impl Into<String>, group: IpaFeatureGroup) -> Self {
        self.insert(tag, group);
        self
    }

    /// Add an alternative group under `tag`
    pub fn insert(&mut self, tag: impl Into<String>, group: IpaFeatureGroup) -> bool {
        self.entries.entry(tag.into()).or_default().insert(group)
    }

    /// Parse `tag → [group text, ...]` pairs
    ///
    /// # Errors
    ///
    /// Returns `UnknownDescriptor` for the first unknown feature label.
    pub fn parse<'a, T, G>(entries: T) -> Result<Self>
    where
        T: IntoIterator<Item = (&'a str, G)>,
        G: IntoIterator<Item = &'a str>,
    {
        let mut features = Self::new();
        for (tag, groups) in entries {
            for text in groups {
                features.insert(tag, IpaFeatureGroup::parse(text)?);
            }
        }
        Ok(features)
    }

    pub fn entries(&self) -> &BTreeMap<String, BTreeSet<IpaFeatureGroup>> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, syllable: &Syllable) -> bool {
        syllable
            .recursive_sub_components()
            .into_iter()
            .all(|component| {
                self.entries
                    .iter()
                    .filter(|(tag, _)| component.has_tag(tag))
                    .all(|(_, groups)| groups.iter().any(|group| component.has_features(group)))
            })
    }
}

impl fmt::Display for SyllableFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (tag, groups)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {{", tag)?;
            for (j, group) in groups.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "'{}'", group)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

type Predicate = dyn Fn(&Syllable) -> bool + Send + Sync;

/// A named arbitrary predicate over a syllable
///
/// Two custom patterns are equal when they share a name and the same
/// predicate instance, so clones compare equal but a second closure under
/// an existing name does not.
#[derive(Clone)]
pub struct CustomPattern {
    name: String,
    predicate: Arc<Predicate>,
}

impl CustomPattern {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Syllable) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, syllable: &Syllable) -> bool {
        (self.predicate)(syllable)
    }
}

impl PartialEq for CustomPattern {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl Eq for CustomPattern {}

impl Hash for CustomPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPattern")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Any predicate usable by a constraint or rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyllablePattern {
    Features(SyllableFeatures),
    Custom(CustomPattern),
}

impl SyllablePattern {
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Syllable) -> bool + Send + Sync + 'static,
    {
        SyllablePattern::Custom(CustomPattern::new(name, predicate))
    }

    pub fn matches(&self, syllable: &Syllable) -> bool {
        match self {
            SyllablePattern::Features(features) => features.matches(syllable),
            SyllablePattern::Custom(custom) => custom.matches(syllable),
        }
    }
}

impl From<SyllableFeatures> for SyllablePattern {
    fn from(features: SyllableFeatures) -> Self {
        SyllablePattern::Features(features)
    }
}

impl From<CustomPattern> for SyllablePattern {
    fn from(custom: CustomPattern) -> Self {
        SyllablePattern::Custom(custom)
    }
}

impl fmt::Display for SyllablePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyllablePattern::Features(features) => write!(f, "{}", features),
            SyllablePattern::Custom(custom) => write!(f, "<{}>", custom.name()),
        }
    }
}
