//! Presentation layer
//!
//! Localized names, colorized reprs and the syllable pretty-printer. All
//! settings come from an explicit [`DisplayOptions`]; nothing in the engine
//! depends on this module.

pub mod component_render;
pub mod names;
pub mod options;
pub mod syllable_render;

pub use component_render::{
    acceptability_repr, component_repr, constraint_repr, features_repr, rendered_repr, rule_repr,
};
pub use names::{component_name, TypeName};
pub use options::{ColorScheme, DisplayOptions, Language};
pub use syllable_render::{
    inventory_report, pretty_print_syllable, pretty_syllable_str, rendered_syllable_str,
};
