//! Phonotactic constraints
//!
//! A constraint pairs a syllable predicate with the acceptability it imposes.
//! Matching constraints are AND-ed into a syllable's verdict, so adding a
//! constraint can only lower acceptability.

use std::fmt;

use super::acceptability::Acceptability;
use super::component::Syllable;
use super::pattern::SyllablePattern;
use super::rendered::RenderedSyllable;

/// Acceptability restriction applied to every syllable matching `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhonotacticConstraint {
    pattern: SyllablePattern,
    acceptability: Acceptability,
}

impl PhonotacticConstraint {
    pub fn new(pattern: impl Into<SyllablePattern>, acceptability: Acceptability) -> Self {
        Self {
            pattern: pattern.into(),
            acceptability,
        }
    }

    pub fn pattern(&self) -> &SyllablePattern {
        &self.pattern
    }

    pub fn acceptability(&self) -> Acceptability {
        self.acceptability
    }

    pub fn matches(&self, syllable: &Syllable) -> bool {
        self.pattern.matches(syllable)
    }

    /// AND the constraint's acceptability in if the pattern matches
    ///
    /// Realizations already written to the syllable are preserved.
    pub fn apply(&self, mut rendered: RenderedSyllable) -> RenderedSyllable {
        if self.matches(rendered.syllable()) {
            rendered.restrict(self.acceptability);
        }
        rendered
    }

    /// Apply to a bare syllable, starting from `(true, true)`
    pub fn apply_to(&self, syllable: &Syllable) -> RenderedSyllable {
        self.apply(RenderedSyllable::from_syllable(syllable))
    }
}

impl fmt::Display for PhonotacticConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.pattern, self.acceptability)
    }
}
