use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::errors::{Result, SinophoneError};
use crate::phonology::{AcceptabilityClass, ComponentKind};

/// Language used for type names in reprs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    EnLatn,
    WuuHant,
}

impl Language {
    pub const EN_LATN: &'static str = "en-Latn";
    pub const WUU_HANT: &'static str = "wuu-Hant";

    pub fn code(&self) -> &'static str {
        match self {
            Language::EnLatn => Self::EN_LATN,
            Language::WuuHant => Self::WUU_HANT,
        }
    }
}

impl FromStr for Language {
    type Err = SinophoneError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            Self::EN_LATN => Ok(Language::EnLatn),
            Self::WUU_HANT => Ok(Language::WuuHant),
            _ => Err(SinophoneError::UnknownLanguageCode {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Colors for component kinds and acceptability classes
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    components: HashMap<ComponentKind, Color>,
    acceptability: HashMap<AcceptabilityClass, Color>,
}

impl ColorScheme {
    /// No colors at all
    pub fn plain() -> Self {
        Self {
            components: HashMap::new(),
            acceptability: HashMap::new(),
        }
    }

    /// Initial through Tone in rainbow order; syllables stay uncolored
    pub fn rainbow() -> Self {
        let components = HashMap::from([
            (ComponentKind::Initial, Color::Red),
            (ComponentKind::Final, Color::Yellow),
            (ComponentKind::Medial, Color::Green),
            (ComponentKind::Nucleus, Color::Cyan),
            (ComponentKind::Coda, Color::Blue),
            (ComponentKind::Tone, Color::Magenta),
        ]);
        let acceptability = HashMap::from([
            (AcceptabilityClass::ExistentGrammatical, Color::Green),
            (AcceptabilityClass::NonexistentGrammatical, Color::Cyan),
            (AcceptabilityClass::ExistentUngrammatical, Color::Yellow),
            (AcceptabilityClass::NonexistentUngrammatical, Color::Red),
        ]);
        Self {
            components,
            acceptability,
        }
    }

    pub fn component_color(&self, kind: ComponentKind) -> Option<Color> {
        self.components.get(&kind).copied()
    }

    pub fn acceptability_color(&self, class: AcceptabilityClass) -> Option<Color> {
        self.acceptability.get(&class).copied()
    }

    pub fn set_component_color(&mut self, kind: ComponentKind, color: Option<Color>) {
        match color {
            Some(color) => self.components.insert(kind, color),
            None => self.components.remove(&kind),
        };
    }

    pub fn set_acceptability_color(&mut self, class: AcceptabilityClass, color: Option<Color>) {
        match color {
            Some(color) => self.acceptability.insert(class, color),
            None => self.acceptability.remove(&class),
        };
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::rainbow()
    }
}

/// Presentation settings; the engine never reads these
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Use ANSI colors in reprs
    pub color: bool,
    pub language: Language,
    /// Show realized rather than symbolic strings
    pub phonetic: bool,
    /// Color pretty-printed syllables by acceptability; needs `color` too
    pub color_syllables: bool,
    pub scheme: ColorScheme,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: true,
            language: Language::default(),
            phonetic: true,
            color_syllables: true,
            scheme: ColorScheme::default(),
        }
    }
}

impl DisplayOptions {
    /// Defaults with every color switched off
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Change the language from a code such as `wuu-Hant`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLanguageCode` for anything but `en-Latn` and `wuu-Hant`;
    /// the current language is left unchanged.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        self.language = code.parse()?;
        Ok(())
    }
}
