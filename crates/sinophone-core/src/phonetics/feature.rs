use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitOr, Neg};
use std::str::FromStr;

use crate::errors::{Result, SinophoneError};

use super::descriptor::Descriptor;
use super::symbol::IpaSymbol;

/// A signed descriptor: `+velar` holds for velar symbols, `-velar` for all others
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpaFeature {
    descriptor: Descriptor,
    presence: bool,
}

impl IpaFeature {
    /// Build a feature from a label, optionally prefixed with `+` or `-`
    ///
    /// A `-` prefix flips `presence`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDescriptor` if the label is not in the table.
    pub fn new(label: &str, presence: bool) -> Result<Self> {
        let (label, presence) = if let Some(rest) = label.strip_prefix('-') {
            (rest, !presence)
        } else if let Some(rest) = label.strip_prefix('+') {
            (rest, presence)
        } else {
            (label, presence)
        };
        Ok(Self {
            descriptor: Descriptor::from_label(label)?,
            presence,
        })
    }

    /// Parse a single `[+-]?label` token
    ///
    /// # Errors
    ///
    /// Returns `UnknownDescriptor` if the label is not in the table.
    pub fn parse(token: &str) -> Result<Self> {
        Self::new(token, true)
    }

    pub fn from_descriptor(descriptor: Descriptor, presence: bool) -> Self {
        Self {
            descriptor,
            presence,
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    pub fn presence(&self) -> bool {
        self.presence
    }

    pub fn label(&self) -> &'static str {
        self.descriptor.canonical_label()
    }

    pub fn negate(&self) -> Self {
        Self {
            descriptor: self.descriptor,
            presence: !self.presence,
        }
    }

    pub fn matches_symbol(&self, symbol: &IpaSymbol) -> bool {
        symbol.has_feature(self)
    }
}

impl Ord for IpaFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.presence
            .cmp(&other.presence)
            .then_with(|| self.label().cmp(other.label()))
    }
}

impl PartialOrd for IpaFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for IpaFeature {
    type Output = IpaFeature;

    fn neg(self) -> IpaFeature {
        self.negate()
    }
}

impl FromStr for IpaFeature {
    type Err = SinophoneError;

    fn from_str(s: &str) -> Result<Self> {
        IpaFeature::parse(s)
    }
}

impl fmt::Display for IpaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.presence { '+' } else { '-' };
        write!(f, "{}{}", sign, self.label())
    }
}

impl fmt::Debug for IpaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IpaFeature({})", self)
    }
}

/// A conjunction of features, kept as a sorted set
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpaFeatureGroup(BTreeSet<IpaFeature>);

impl IpaFeatureGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated `[+-]?label` tokens
    ///
    /// # Errors
    ///
    /// Returns `UnknownDescriptor` for the first unknown label.
    pub fn parse(text: &str) -> Result<Self> {
        text.split_whitespace()
            .map(IpaFeature::parse)
            .collect::<Result<BTreeSet<_>>>()
            .map(IpaFeatureGroup)
    }

    pub fn insert(&mut self, feature: IpaFeature) -> bool {
        self.0.insert(feature)
    }

    pub fn remove(&mut self, feature: &IpaFeature) -> bool {
        self.0.remove(feature)
    }

    pub fn contains(&self, feature: &IpaFeature) -> bool {
        self.0.contains(feature)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, IpaFeature> {
        self.0.iter()
    }

    pub fn union(&self, other: &IpaFeatureGroup) -> IpaFeatureGroup {
        IpaFeatureGroup(self.0.union(&other.0).copied().collect())
    }

    /// Negate every member
    pub fn negate(&self) -> IpaFeatureGroup {
        IpaFeatureGroup(self.0.iter().map(IpaFeature::negate).collect())
    }

    /// True iff every member holds for the symbol; the empty group matches anything
    pub fn matches_symbol(&self, symbol: &IpaSymbol) -> bool {
        self.0.iter().all(|feature| symbol.has_feature(feature))
    }
}

impl FromIterator<IpaFeature> for IpaFeatureGroup {
    fn from_iter<I: IntoIterator<Item = IpaFeature>>(iter: I) -> Self {
        IpaFeatureGroup(iter.into_iter().collect())
    }
}

impl From<IpaFeature> for IpaFeatureGroup {
    fn from(feature: IpaFeature) -> Self {
        std::iter::once(feature).collect()
    }
}

impl FromStr for IpaFeatureGroup {
    type Err = SinophoneError;

    fn from_str(s: &str) -> Result<Self> {
        IpaFeatureGroup::parse(s)
    }
}

impl BitOr for &IpaFeatureGroup {
    type Output = IpaFeatureGroup;

    fn bitor(self, rhs: &IpaFeatureGroup) -> IpaFeatureGroup {
        self.union(rhs)
    }
}

impl BitOr for IpaFeatureGroup {
    type Output = IpaFeatureGroup;

    fn bitor(self, rhs: IpaFeatureGroup) -> IpaFeatureGroup {
        self.union(&rhs)
    }
}

impl Neg for &IpaFeatureGroup {
    type Output = IpaFeatureGroup;

    fn neg(self) -> IpaFeatureGroup {
        self.negate()
    }
}

impl Neg for IpaFeatureGroup {
    type Output = IpaFeatureGroup;

    fn neg(self) -> IpaFeatureGroup {
        self.negate()
    }
}

impl<'a> IntoIterator for &'a IpaFeatureGroup {
    type Item = &'a IpaFeature;
    type IntoIter = std::collections::btree_set::Iter<'a, IpaFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for IpaFeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for feature in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", feature)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for IpaFeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IpaFeatureGroup({:?})", self.to_string())
    }
}
