use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr};

use serde::{Deserialize, Serialize};

/// Phonotactic verdict on a syllable
///
/// `existent` says whether the syllable is attested, `grammatical` whether the
/// phonotactics allow it. Combination is component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Acceptability {
    pub existent: bool,
    pub grammatical: bool,
}

/// The four-way classification used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AcceptabilityClass {
    ExistentGrammatical,
    ExistentUngrammatical,
    NonexistentGrammatical,
    NonexistentUngrammatical,
}

impl AcceptabilityClass {
    pub fn name(&self) -> &'static str {
        match self {
            AcceptabilityClass::ExistentGrammatical => "ExistentGrammatical",
            AcceptabilityClass::ExistentUngrammatical => "ExistentUngrammatical",
            AcceptabilityClass::NonexistentGrammatical => "NonexistentGrammatical",
            AcceptabilityClass::NonexistentUngrammatical => "NonexistentUngrammatical",
        }
    }
}

impl fmt::Display for AcceptabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Acceptability {
    /// Neutral element of `combine_and`
    pub const ACCEPTABLE: Acceptability = Acceptability::new(true, true);
    pub const UNACCEPTABLE: Acceptability = Acceptability::new(false, false);

    pub const fn new(existent: bool, grammatical: bool) -> Self {
        Self {
            existent,
            grammatical,
        }
    }

    pub fn combine_and(self, other: Acceptability) -> Acceptability {
        Acceptability::new(
            self.existent && other.existent,
            self.grammatical && other.grammatical,
        )
    }

    pub fn combine_or(self, other: Acceptability) -> Acceptability {
        Acceptability::new(
            self.existent || other.existent,
            self.grammatical || other.grammatical,
        )
    }

    pub fn is_acceptable(&self) -> bool {
        self.existent && self.grammatical
    }

    pub fn class(&self) -> AcceptabilityClass {
        match (self.existent, self.grammatical) {
            (true, true) => AcceptabilityClass::ExistentGrammatical,
            (true, false) => AcceptabilityClass::ExistentUngrammatical,
            (false, true) => AcceptabilityClass::NonexistentGrammatical,
            (false, false) => AcceptabilityClass::NonexistentUngrammatical,
        }
    }
}

impl Default for Acceptability {
    fn default() -> Self {
        Acceptability::ACCEPTABLE
    }
}

impl BitAnd for Acceptability {
    type Output = Acceptability;

    fn bitand(self, rhs: Acceptability) -> Acceptability {
        self.combine_and(rhs)
    }
}

impl BitAndAssign for Acceptability {
    fn bitand_assign(&mut self, rhs: Acceptability) {
        *self = self.combine_and(rhs);
    }
}

impl BitOr for Acceptability {
    type Output = Acceptability;

    fn bitor(self, rhs: Acceptability) -> Acceptability {
        self.combine_or(rhs)
    }
}

impl fmt::Display for Acceptability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(existent: {}, grammatical: {})",
            self.existent, self.grammatical
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_is_componentwise() {
        let a = Acceptability::new(true, false);
        let b = Acceptability::new(false, true);
        assert_eq!(a & b, Acceptability::UNACCEPTABLE);
        assert_eq!(a | b, Acceptability::ACCEPTABLE);
        assert_eq!(a & Acceptability::ACCEPTABLE, a);
    }

    #[test]
    fn test_class() {
        assert_eq!(
            Acceptability::new(false, true).class(),
            AcceptabilityClass::NonexistentGrammatical
        );
        assert_eq!(
            Acceptability::default().class(),
            AcceptabilityClass::ExistentGrammatical
        );
    }
}
