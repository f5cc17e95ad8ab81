use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::{Result, SinophoneError};

use super::symbol::IpaSymbol;
use super::table::ipa_table;

/// An ordered sequence of IPA symbols
///
/// Strings compare lexicographically by symbol order, so a proper prefix sorts
/// before its extensions.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpaString(Vec<IpaSymbol>);

impl IpaString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse Unicode text using greedy longest match over the table's forms
    ///
    /// Precomposed letters such as `ã` are split into base letter and
    /// combining diacritic first.
    ///
    /// # Errors
    ///
    /// Returns `UnknownIpaCharacter` for the first character that starts no
    /// known form.
    pub fn parse(input: &str) -> Result<Self> {
        let table = ipa_table();
        let normalized = table.decompose(input);
        let text: &str = &normalized;
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut symbols = Vec::with_capacity(chars.len());
        let mut pos = 0;

        while pos < chars.len() {
            let start = chars[pos].0;
            let longest = table.longest_form().min(chars.len() - pos);
            let matched = (1..=longest).rev().find_map(|width| {
                let end = chars.get(pos + width).map_or(text.len(), |(i, _)| *i);
                table.form(&text[start..end]).map(|symbol| (symbol, width))
            });
            match matched {
                Some((symbol, width)) => {
                    symbols.push(symbol);
                    pos += width;
                }
                None => {
                    return Err(SinophoneError::UnknownIpaCharacter {
                        input: input.to_string(),
                        character: chars[pos].1,
                    })
                }
            }
        }

        Ok(IpaString(symbols))
    }

    pub fn from_symbols(symbols: Vec<IpaSymbol>) -> Self {
        IpaString(symbols)
    }

    pub fn symbols(&self) -> &[IpaSymbol] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpaSymbol> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<IpaSymbol> {
        self.0.last().copied()
    }

    pub fn push(&mut self, symbol: IpaSymbol) {
        self.0.push(symbol);
    }

    /// New string holding `self` followed by `other`
    pub fn concat(&self, other: &IpaString) -> IpaString {
        let mut symbols = Vec::with_capacity(self.len() + other.len());
        symbols.extend_from_slice(&self.0);
        symbols.extend_from_slice(&other.0);
        IpaString(symbols)
    }

    /// Symbol descriptions joined with `, `
    pub fn canonical_representation(&self) -> String {
        self.0
            .iter()
            .map(|s| s.canonical_representation())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for IpaString {
    type Err = SinophoneError;

    fn from_str(s: &str) -> Result<Self> {
        IpaString::parse(s)
    }
}

impl fmt::Display for IpaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            f.write_str(symbol.unicode())?;
        }
        Ok(())
    }
}

impl fmt::Debug for IpaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IpaString({:?})", self.to_string())
    }
}

impl Serialize for IpaString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Add<&IpaString> for &IpaString {
    type Output = IpaString;

    fn add(self, rhs: &IpaString) -> IpaString {
        self.concat(rhs)
    }
}

impl AddAssign<&IpaString> for IpaString {
    fn add_assign(&mut self, rhs: &IpaString) {
        self.0.extend_from_slice(&rhs.0);
    }
}

impl FromIterator<IpaSymbol> for IpaString {
    fn from_iter<I: IntoIterator<Item = IpaSymbol>>(iter: I) -> Self {
        IpaString(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IpaString {
    type Item = &'a IpaSymbol;
    type IntoIter = std::slice::Iter<'a, IpaSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_canonical_text() {
        let s = IpaString::parse("lʊ̃ŋ˨˧").unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.to_string(), "lʊ̃ŋ˨˧");
    }

    #[test]
    fn test_greedy_match_prefers_ligature() {
        let tied = IpaString::parse("t\u{361}sɿ").unwrap_err();
        assert!(matches!(
            tied,
            SinophoneError::UnknownIpaCharacter { character: 'ɿ', .. }
        ));

        let tied = IpaString::parse("t\u{361}sa").unwrap();
        assert_eq!(tied.len(), 2);
        assert!(tied.symbols()[0]
            .canonical_representation()
            .contains("sibilant-affricate"));

        let split = IpaString::parse("tsa").unwrap();
        assert_eq!(split.len(), 3);
    }

    #[test]
    fn test_alias_is_displayed_canonically() {
        assert_eq!(IpaString::parse("ga").unwrap().to_string(), "ɡa");
        assert_eq!(
            IpaString::parse("ʦa").unwrap(),
            IpaString::parse("t\u{361}sa").unwrap()
        );
    }

    #[test]
    fn test_precomposed_vowels_parse_as_base_plus_diacritic() {
        let nfc = IpaString::parse("kã").unwrap();
        assert_eq!(nfc, IpaString::parse("ka\u{303}").unwrap());
        assert_eq!(nfc.len(), 3);
        assert!(nfc.symbols()[2].is_diacritic());

        let centralized = IpaString::parse("ë").unwrap();
        assert_eq!(centralized.to_string(), "e\u{308}");

        let palatal = IpaString::parse("ç").unwrap();
        assert_eq!(palatal.len(), 1);
        assert!(palatal.symbols()[0].is_consonant());
    }

    #[test]
    fn test_unknown_character_after_precomposed_letter() {
        let err = IpaString::parse("õ7").unwrap_err();
        assert_eq!(
            err,
            SinophoneError::UnknownIpaCharacter {
                input: "õ7".to_string(),
                character: '7'
            }
        );
    }

    #[test]
    fn test_unknown_character() {
        let err = IpaString::parse("k7").unwrap_err();
        assert_eq!(
            err,
            SinophoneError::UnknownIpaCharacter {
                input: "k7".to_string(),
                character: '7'
            }
        );
    }

    #[test]
    fn test_ordering_and_concat() {
        let k = IpaString::parse("k").unwrap();
        let ka = IpaString::parse("kɑ").unwrap();
        let ga = IpaString::parse("ɡɑ").unwrap();
        assert!(k < ka);
        assert!(ka < ga);
        assert_eq!(&k + &IpaString::parse("ɑ").unwrap(), ka);
        assert!(IpaString::new().is_empty());
    }
}
