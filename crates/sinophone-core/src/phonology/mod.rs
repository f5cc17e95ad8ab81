//! Syllable phonology engine
//!
//! Components form the syllable tree, patterns test it, constraints and
//! rules render it, and [`Phonology`] ties the pieces together.

pub mod acceptability;
pub mod component;
pub mod constraint;
pub mod pattern;
pub mod rendered;
pub mod rule;
pub mod system;

pub use acceptability::{Acceptability, AcceptabilityClass};
pub use component::{
    Component, ComponentKind, ComponentRef, Final, Leaf, LeafKind, Syllable, SyllableComponent,
    TAG_BRANCH, TAG_BRANCH_COMPONENT, TAG_COMPONENT, TAG_LEAF, TAG_LEAF_COMPONENT, TAG_ROOT,
    TAG_ROOT_COMPONENT, TAG_SYLLABLE_COMPONENT,
};
pub use constraint::PhonotacticConstraint;
pub use pattern::{CustomPattern, SyllableFeatures, SyllablePattern};
pub use rendered::RenderedSyllable;
pub use rule::PhonologicalRule;
pub use system::Phonology;
