//! Sinophone Core - Chinese syllable phonology engine
//!
//! This crate models Sinitic syllables as structured phonetic objects and
//! evaluates phonologies over them, including:
//! - An embedded IPA descriptor and symbol table with signed features
//! - The syllable component tree (Initial, Final, Medial, Nucleus, Coda, Tone)
//! - Feature patterns over capability tags
//! - Phonotactic constraints and ordered phonological rules
//! - The phonology aggregate: inventories, rendering and collocations
//! - TOML definition files and a localized, colorized presentation layer
//!
//! Everything is symbolic: the engine never touches audio or running text.

pub mod definition;
pub mod errors;
pub mod logging_facility;
pub mod phonetics;
pub mod phonology;
pub mod render;

// Re-export commonly used types
pub use definition::{load_definition, PhonologyDefinition};
pub use errors::{ExError, ExErrorKind, Result, SinophoneError};
pub use phonetics::{IpaFeature, IpaFeatureGroup, IpaString, IpaSymbol};
pub use phonology::{
    Acceptability, Component, ComponentKind, Final, Leaf, LeafKind, PhonologicalRule, Phonology,
    PhonotacticConstraint, RenderedSyllable, Syllable, SyllableComponent, SyllableFeatures,
    SyllablePattern,
};
pub use render::DisplayOptions;
