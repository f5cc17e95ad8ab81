//! Phonology definition files
//!
//! A definition is a TOML document describing syllables, optional explicit
//! inventories, constraints, rules and display settings:
//!
//! ```toml
//! [display]
//! language = "wuu-Hant"
//!
//! [[syllables]]
//! initial = "l"
//! nucleus = "o"
//! coda = "ŋ"
//! tone = "˨˧"
//!
//! [[constraints]]
//! acceptability = { existent = false, grammatical = false }
//! pattern = { Initial = ["+voiced -nasal"], Tone = ["+extra-high-level"] }
//!
//! [[rules]]
//! target = { kind = "Nucleus", ipa = "o" }
//! replacement = "ʊ̃"
//! pattern = { Final = ["+nasal"] }
//! ```
//!
//! Invalid labels, strings or tones fail with the core construction error
//! wrapped in `InvalidDefinition`, whose location points into the document
//! (e.g. `rules[0].pattern.Final[0]`).

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use crate::errors::{Result, SinophoneError};
use crate::phonetics::{IpaFeatureGroup, IpaString};
use crate::phonology::{
    Acceptability, ComponentKind, Final, Leaf, LeafKind, PhonologicalRule, Phonology,
    PhonotacticConstraint, Syllable, SyllableComponent, SyllableFeatures,
};
use crate::render::DisplayOptions;
use crate::{log_op_end, log_op_error, log_op_start};

/// Tag → list of feature-group texts
pub type PatternDefinition = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhonologyDefinition {
    #[serde(default)]
    pub display: DisplayDefinition,
    #[serde(default)]
    pub inventory: InventoryDefinition,
    #[serde(default)]
    pub syllables: Vec<SyllableDefinition>,
    #[serde(default)]
    pub constraints: Vec<ConstraintDefinition>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// Overrides for [`DisplayOptions`]; absent keys keep the defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayDefinition {
    pub color: Option<bool>,
    pub language: Option<String>,
    pub phonetic: Option<bool>,
    pub color_syllables: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryDefinition {
    pub initials: Vec<String>,
    pub finals: Vec<FinalDefinition>,
    pub tones: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinalDefinition {
    pub medial: String,
    pub nucleus: String,
    pub coda: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyllableDefinition {
    pub initial: String,
    pub medial: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintDefinition {
    pub acceptability: Acceptability,
    #[serde(default)]
    pub pattern: PatternDefinition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub target: TargetDefinition,
    pub replacement: String,
    #[serde(default)]
    pub pattern: PatternDefinition,
}

/// Rule target: a leaf kind with `ipa`, or `Final` with its three parts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetDefinition {
    pub kind: String,
    #[serde(default)]
    pub ipa: String,
    #[serde(default)]
    pub medial: String,
    #[serde(default)]
    pub nucleus: String,
    #[serde(default)]
    pub coda: String,
}

impl FinalDefinition {
    fn to_final(&self) -> Result<Final> {
        Final::parse(&self.medial, &self.nucleus, &self.coda)
    }
}

impl SyllableDefinition {
    fn to_syllable(&self) -> Result<Syllable> {
        Syllable::parse(
            &self.initial,
            &self.medial,
            &self.nucleus,
            &self.coda,
            &self.tone,
        )
    }
}

impl TargetDefinition {
    fn to_component(&self) -> Result<SyllableComponent> {
        let kind = ComponentKind::from_name(&self.kind);
        match kind {
            Some(ComponentKind::Final) => {
                Ok(Final::parse(&self.medial, &self.nucleus, &self.coda)?.into())
            }
            Some(kind) => match LeafKind::from_component_kind(kind) {
                Some(leaf_kind) => Ok(Leaf::parse(leaf_kind, &self.ipa)?.into()),
                None => Err(self.unsupported_kind()),
            },
            None => Err(self.unsupported_kind()),
        }
    }

    fn unsupported_kind(&self) -> SinophoneError {
        SinophoneError::ComponentKindMismatch {
            expected: "Initial, Final, Medial, Nucleus, Coda or Tone".to_string(),
            found: self.kind.clone(),
            ipa: self.ipa.clone(),
        }
    }
}

fn pattern_from(pattern: &PatternDefinition, location: &str) -> Result<SyllableFeatures> {
    let mut features = SyllableFeatures::new();
    for (tag, groups) in pattern {
        for (j, text) in groups.iter().enumerate() {
            let group = IpaFeatureGroup::parse(text)
                .map_err(|e| e.in_definition(format!("{}.pattern.{}[{}]", location, tag, j)))?;
            features.insert(tag.as_str(), group);
        }
    }
    Ok(features)
}

impl PhonologyDefinition {
    /// # Errors
    ///
    /// Returns `DefinitionParse` for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SinophoneError::DefinitionParse {
            message: e.to_string(),
        })
    }

    /// Build a refreshed phonology together with the display settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidDefinition` wrapping the first construction error.
    pub fn build(&self) -> Result<(Phonology, DisplayOptions)> {
        log_op_start!(
            "definition_build",
            syllable_count = self.syllables.len() as u64
        );
        let start = Instant::now();

        let result = self
            .display_options()
            .and_then(|options| self.to_phonology().map(|phonology| (phonology, options)))
            .map_err(|e| {
                log_op_error!(
                    "definition_build",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

        log_op_end!(
            "definition_build",
            duration_ms = start.elapsed().as_millis() as u64,
            constraint_count = result.0.constraints().len() as u64,
            rule_count = result.0.rules().len() as u64
        );
        Ok(result)
    }

    /// # Errors
    ///
    /// Returns `InvalidDefinition` for an unknown language code.
    pub fn display_options(&self) -> Result<DisplayOptions> {
        let mut options = DisplayOptions::default();
        let display = &self.display;
        if let Some(color) = display.color {
            options.color = color;
        }
        if let Some(code) = &display.language {
            options
                .set_language(code)
                .map_err(|e| e.in_definition("display.language"))?;
        }
        if let Some(phonetic) = display.phonetic {
            options.phonetic = phonetic;
        }
        if let Some(color_syllables) = display.color_syllables {
            options.color_syllables = color_syllables;
        }
        Ok(options)
    }

    /// # Errors
    ///
    /// Returns `InvalidDefinition` wrapping the first construction error.
    pub fn to_phonology(&self) -> Result<Phonology> {
        let mut phonology = Phonology::new();

        for (i, text) in self.inventory.initials.iter().enumerate() {
            let initial = Leaf::initial(text)
                .map_err(|e| e.in_definition(format!("inventory.initials[{}]", i)))?;
            phonology.add_initial(initial)?;
        }
        for (i, def) in self.inventory.finals.iter().enumerate() {
            let final_ = def
                .to_final()
                .map_err(|e| e.in_definition(format!("inventory.finals[{}]", i)))?;
            phonology.add_final(final_);
        }
        for (i, text) in self.inventory.tones.iter().enumerate() {
            let tone =
                Leaf::tone(text).map_err(|e| e.in_definition(format!("inventory.tones[{}]", i)))?;
            phonology.add_tone(tone)?;
        }

        for (i, def) in self.syllables.iter().enumerate() {
            let syllable = def
                .to_syllable()
                .map_err(|e| e.in_definition(format!("syllables[{}]", i)))?;
            phonology.add_syllable(syllable);
        }

        for (i, def) in self.constraints.iter().enumerate() {
            let pattern = pattern_from(&def.pattern, &format!("constraints[{}]", i))?;
            phonology.add_constraint(PhonotacticConstraint::new(pattern, def.acceptability));
        }

        for (i, def) in self.rules.iter().enumerate() {
            let location = format!("rules[{}]", i);
            let target = def
                .target
                .to_component()
                .map_err(|e| e.in_definition(format!("{}.target", location)))?;
            let replacement = IpaString::parse(&def.replacement)
                .map_err(|e| e.in_definition(format!("{}.replacement", location)))?;
            let pattern = pattern_from(&def.pattern, &location)?;
            phonology.add_rule(PhonologicalRule::new(target, replacement, pattern));
        }

        phonology.refresh();
        Ok(phonology)
    }
}

/// Read and parse a definition file
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `DefinitionParse` for
/// malformed TOML.
pub fn load_definition(path: &Path) -> Result<PhonologyDefinition> {
    log_op_start!("load_definition", definition_path = %path.display());
    let start = Instant::now();

    let result = std::fs::read_to_string(path)
        .map_err(|e| SinophoneError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
        .and_then(|text| PhonologyDefinition::from_toml_str(&text))
        .map_err(|e| {
            log_op_error!(
                "load_definition",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "load_definition",
        duration_ms = start.elapsed().as_millis() as u64,
        syllable_count = result.syllables.len() as u64
    );
    Ok(result)
}
