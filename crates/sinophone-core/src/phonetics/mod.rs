//! Feature layer over the embedded IPA table
//!
//! Symbols, strings and signed features used by the syllable component tree
//! and by pattern predicates. The table itself is static data loaded once per
//! process and shared read-only.

pub mod descriptor;
pub mod feature;
pub mod string;
pub mod symbol;
mod table;

pub use descriptor::{all_descriptors, canonical_value, Descriptor, DescriptorCategory};
pub use feature::{IpaFeature, IpaFeatureGroup};
pub use string::IpaString;
pub use symbol::{IpaSymbol, SymbolKind};
