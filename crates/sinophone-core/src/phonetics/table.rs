//! Embedded IPA descriptor and symbol table.
//!
//! The table is static data, indexed once on first use and shared read-only
//! afterwards. Symbol order in `SYMBOLS` is the global enumeration order used
//! for sorting: consonants grouped by manner then place (voiceless before
//! voiced), then vowels, diacritics and tones.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use super::descriptor::{Descriptor, DescriptorCategory};
use super::symbol::{IpaSymbol, SymbolKind};

pub(crate) struct DescriptorDef {
    pub category: DescriptorCategory,
    pub labels: &'static [&'static str],
}

const fn desc(category: DescriptorCategory, labels: &'static [&'static str]) -> DescriptorDef {
    DescriptorDef { category, labels }
}

use DescriptorCategory::{
    Backness, Diacritic as Dia, Height, Kind, Manner, Place, Roundness, Tone as Ton, Voicing,
};

/// Every descriptor; the first label of each entry is canonical. Labels are
/// unique across the whole table.
pub(crate) static DESCRIPTORS: &[DescriptorDef] = &[
    // kinds
    desc(Kind, &["consonant", "cns"]),
    desc(Kind, &["vowel", "vwl"]),
    desc(Kind, &["diacritic", "dia"]),
    desc(Kind, &["tone", "ton"]),
    // voicing
    desc(Voicing, &["voiced", "vcd"]),
    desc(Voicing, &["voiceless", "vls"]),
    // place
    desc(Place, &["bilabial", "blb"]),
    desc(Place, &["labio-dental", "labiodental", "lbd"]),
    desc(Place, &["dental", "dnt"]),
    desc(Place, &["alveolar", "alv"]),
    desc(
        Place,
        &["palato-alveolar", "palatoalveolar", "postalveolar", "pla"],
    ),
    desc(Place, &["retroflex", "rfx"]),
    desc(Place, &["alveolo-palatal", "alveolopalatal", "alp"]),
    desc(Place, &["palatal", "pal"]),
    desc(Place, &["velar", "vel"]),
    desc(Place, &["uvular", "uvl"]),
    desc(Place, &["pharyngeal", "phr"]),
    desc(Place, &["glottal", "glt"]),
    desc(Place, &["labio-velar", "labiovelar", "lbv"]),
    desc(Place, &["labio-palatal", "labiopalatal", "lbp"]),
    // manner
    desc(Manner, &["plosive", "stop", "stp"]),
    desc(Manner, &["nasal", "nas"]),
    desc(Manner, &["trill", "trl"]),
    desc(Manner, &["tap", "flap"]),
    desc(Manner, &["sibilant-fricative", "sfr"]),
    desc(Manner, &["non-sibilant-fricative", "fricative", "nsf"]),
    desc(Manner, &["sibilant-affricate", "affricate", "saf"]),
    desc(Manner, &["non-sibilant-affricate", "nsa"]),
    desc(Manner, &["approximant", "apr"]),
    desc(Manner, &["lateral-fricative", "lfr"]),
    desc(Manner, &["lateral-approximant", "lap"]),
    desc(Manner, &["implosive", "imp"]),
    // vowel height
    desc(Height, &["close", "high"]),
    desc(Height, &["near-close", "near-high"]),
    desc(Height, &["close-mid", "high-mid", "mid-close"]),
    desc(Height, &["mid"]),
    desc(Height, &["open-mid", "low-mid", "mid-open"]),
    desc(Height, &["near-open", "near-low"]),
    desc(Height, &["open", "low"]),
    // vowel backness
    desc(Backness, &["front", "fnt"]),
    desc(Backness, &["near-front"]),
    desc(Backness, &["central", "cnt"]),
    desc(Backness, &["near-back"]),
    desc(Backness, &["back", "bck"]),
    // vowel roundness
    desc(Roundness, &["rounded", "rnd"]),
    desc(Roundness, &["unrounded", "unr"]),
    // diacritics
    desc(Dia, &["aspirated", "asp"]),
    desc(Dia, &["labialized", "labialised", "lbz"]),
    desc(Dia, &["palatalized", "palatalised", "plz"]),
    desc(Dia, &["velarized", "velarised", "vlz"]),
    desc(Dia, &["pharyngealized", "pharyngealised", "phz"]),
    desc(Dia, &["nasalized", "nasalised", "nzd"]),
    desc(Dia, &["syllabic", "syl"]),
    desc(Dia, &["non-syllabic", "nsy"]),
    desc(Dia, &["creaky-voiced", "crv"]),
    desc(Dia, &["breathy-voiced", "brv"]),
    desc(Dia, &["rhotacized", "rhoticity", "rhz"]),
    desc(Dia, &["no-audible-release", "nar"]),
    desc(Dia, &["nasal-release", "nrs"]),
    desc(Dia, &["lateral-release", "lrs"]),
    desc(Dia, &["ejective", "ejc"]),
    desc(Dia, &["raised", "rsd"]),
    desc(Dia, &["lowered", "lwr"]),
    desc(Dia, &["advanced", "adv"]),
    desc(Dia, &["retracted", "rtr"]),
    desc(Dia, &["centralized", "centralised", "ctr"]),
    desc(Dia, &["mid-centralized", "mid-centralised", "mcn"]),
    desc(Dia, &["more-rounded", "mrd"]),
    desc(Dia, &["less-rounded", "lrd"]),
    desc(Dia, &["apical", "apc"]),
    desc(Dia, &["laminal", "lmn"]),
    desc(Dia, &["long", "lng"]),
    desc(Dia, &["half-long", "hlg"]),
    desc(Dia, &["extra-short", "xsh"]),
    // tones
    desc(Ton, &["extra-high-level", "t5"]),
    desc(Ton, &["high-level", "t4"]),
    desc(Ton, &["mid-level", "t3"]),
    desc(Ton, &["low-level", "t2"]),
    desc(Ton, &["extra-low-level", "t1"]),
    desc(Ton, &["downstep", "dst"]),
    desc(Ton, &["upstep", "ust"]),
    desc(Ton, &["global-rise", "grs"]),
    desc(Ton, &["global-fall", "gfl"]),
];

const C: SymbolKind = SymbolKind::Consonant;
const V: SymbolKind = SymbolKind::Vowel;
const D: SymbolKind = SymbolKind::Diacritic;
const T: SymbolKind = SymbolKind::Tone;

/// (kind, canonical unicode form, descriptor labels)
pub(crate) static SYMBOLS: &[(SymbolKind, &str, &str)] = &[
    // plosives
    (C, "p", "voiceless bilabial plosive"),
    (C, "b", "voiced bilabial plosive"),
    (C, "t", "voiceless alveolar plosive"),
    (C, "d", "voiced alveolar plosive"),
    (C, "ʈ", "voiceless retroflex plosive"),
    (C, "ɖ", "voiced retroflex plosive"),
    (C, "ȶ", "voiceless alveolo-palatal plosive"),
    (C, "ȡ", "voiced alveolo-palatal plosive"),
    (C, "c", "voiceless palatal plosive"),
    (C, "ɟ", "voiced palatal plosive"),
    (C, "k", "voiceless velar plosive"),
    (C, "ɡ", "voiced velar plosive"),
    (C, "q", "voiceless uvular plosive"),
    (C, "ɢ", "voiced uvular plosive"),
    (C, "ʔ", "voiceless glottal plosive"),
    // nasals
    (C, "m", "voiced bilabial nasal"),
    (C, "ɱ", "voiced labio-dental nasal"),
    (C, "n", "voiced alveolar nasal"),
    (C, "ɳ", "voiced retroflex nasal"),
    (C, "ȵ", "voiced alveolo-palatal nasal"),
    (C, "ɲ", "voiced palatal nasal"),
    (C, "ŋ", "voiced velar nasal"),
    (C, "ɴ", "voiced uvular nasal"),
    // trills
    (C, "ʙ", "voiced bilabial trill"),
    (C, "r", "voiced alveolar trill"),
    (C, "ʀ", "voiced uvular trill"),
    // taps
    (C, "ⱱ", "voiced labio-dental tap"),
    (C, "ɾ", "voiced alveolar tap"),
    (C, "ɽ", "voiced retroflex tap"),
    // sibilant fricatives
    (C, "s", "voiceless alveolar sibilant-fricative"),
    (C, "z", "voiced alveolar sibilant-fricative"),
    (C, "ʃ", "voiceless palato-alveolar sibilant-fricative"),
    (C, "ʒ", "voiced palato-alveolar sibilant-fricative"),
    (C, "ʂ", "voiceless retroflex sibilant-fricative"),
    (C, "ʐ", "voiced retroflex sibilant-fricative"),
    (C, "ɕ", "voiceless alveolo-palatal sibilant-fricative"),
    (C, "ʑ", "voiced alveolo-palatal sibilant-fricative"),
    // non-sibilant fricatives
    (C, "ɸ", "voiceless bilabial non-sibilant-fricative"),
    (C, "β", "voiced bilabial non-sibilant-fricative"),
    (C, "f", "voiceless labio-dental non-sibilant-fricative"),
    (C, "v", "voiced labio-dental non-sibilant-fricative"),
    (C, "θ", "voiceless dental non-sibilant-fricative"),
    (C, "ð", "voiced dental non-sibilant-fricative"),
    (C, "ç", "voiceless palatal non-sibilant-fricative"),
    (C, "ʝ", "voiced palatal non-sibilant-fricative"),
    (C, "x", "voiceless velar non-sibilant-fricative"),
    (C, "ɣ", "voiced velar non-sibilant-fricative"),
    (C, "χ", "voiceless uvular non-sibilant-fricative"),
    (C, "ʁ", "voiced uvular non-sibilant-fricative"),
    (C, "ħ", "voiceless pharyngeal non-sibilant-fricative"),
    (C, "ʕ", "voiced pharyngeal non-sibilant-fricative"),
    (C, "h", "voiceless glottal non-sibilant-fricative"),
    (C, "ɦ", "voiced glottal non-sibilant-fricative"),
    (C, "ʍ", "voiceless labio-velar non-sibilant-fricative"),
    // sibilant affricates
    (C, "t\u{361}s", "voiceless alveolar sibilant-affricate"),
    (C, "d\u{361}z", "voiced alveolar sibilant-affricate"),
    (
        C,
        "t\u{361}ʃ",
        "voiceless palato-alveolar sibilant-affricate",
    ),
    (C, "d\u{361}ʒ", "voiced palato-alveolar sibilant-affricate"),
    (C, "ʈ\u{361}ʂ", "voiceless retroflex sibilant-affricate"),
    (C, "ɖ\u{361}ʐ", "voiced retroflex sibilant-affricate"),
    (
        C,
        "t\u{361}ɕ",
        "voiceless alveolo-palatal sibilant-affricate",
    ),
    (C, "d\u{361}ʑ", "voiced alveolo-palatal sibilant-affricate"),
    // non-sibilant affricates
    (C, "p\u{361}ɸ", "voiceless bilabial non-sibilant-affricate"),
    (
        C,
        "p\u{361}f",
        "voiceless labio-dental non-sibilant-affricate",
    ),
    (C, "b\u{361}v", "voiced labio-dental non-sibilant-affricate"),
    (C, "k\u{361}x", "voiceless velar non-sibilant-affricate"),
    // approximants
    (C, "ʋ", "voiced labio-dental approximant"),
    (C, "ɹ", "voiced alveolar approximant"),
    (C, "ɻ", "voiced retroflex approximant"),
    (C, "j", "voiced palatal approximant"),
    (C, "ɰ", "voiced velar approximant"),
    (C, "w", "voiced labio-velar approximant"),
    (C, "ɥ", "voiced labio-palatal approximant"),
    // lateral fricatives
    (C, "ɬ", "voiceless alveolar lateral-fricative"),
    (C, "ɮ", "voiced alveolar lateral-fricative"),
    // lateral approximants
    (C, "l", "voiced alveolar lateral-approximant"),
    (C, "ɭ", "voiced retroflex lateral-approximant"),
    (C, "ʎ", "voiced palatal lateral-approximant"),
    (C, "ʟ", "voiced velar lateral-approximant"),
    // implosives
    (C, "ɓ", "voiced bilabial implosive"),
    (C, "ɗ", "voiced alveolar implosive"),
    (C, "ʄ", "voiced palatal implosive"),
    (C, "ɠ", "voiced velar implosive"),
    // close vowels
    (V, "i", "close front unrounded"),
    (V, "y", "close front rounded"),
    (V, "ɨ", "close central unrounded"),
    (V, "ʉ", "close central rounded"),
    (V, "ɯ", "close back unrounded"),
    (V, "u", "close back rounded"),
    // near-close vowels
    (V, "ɪ", "near-close near-front unrounded"),
    (V, "ʏ", "near-close near-front rounded"),
    (V, "ʊ", "near-close near-back rounded"),
    // close-mid vowels
    (V, "e", "close-mid front unrounded"),
    (V, "ø", "close-mid front rounded"),
    (V, "ɘ", "close-mid central unrounded"),
    (V, "ɵ", "close-mid central rounded"),
    (V, "ɤ", "close-mid back unrounded"),
    (V, "o", "close-mid back rounded"),
    // mid vowels
    (V, "ə", "mid central unrounded"),
    // open-mid vowels
    (V, "ɛ", "open-mid front unrounded"),
    (V, "œ", "open-mid front rounded"),
    (V, "ɜ", "open-mid central unrounded"),
    (V, "ɞ", "open-mid central rounded"),
    (V, "ʌ", "open-mid back unrounded"),
    (V, "ɔ", "open-mid back rounded"),
    // near-open vowels
    (V, "æ", "near-open front unrounded"),
    (V, "ɐ", "near-open central unrounded"),
    // open vowels
    (V, "a", "open front unrounded"),
    (V, "ɶ", "open front rounded"),
    (V, "ɑ", "open back unrounded"),
    (V, "ɒ", "open back rounded"),
    // diacritics
    (D, "\u{325}", "voiceless"),
    (D, "\u{32C}", "voiced"),
    (D, "ʰ", "aspirated"),
    (D, "ʷ", "labialized"),
    (D, "ʲ", "palatalized"),
    (D, "ˠ", "velarized"),
    (D, "ˤ", "pharyngealized"),
    (D, "\u{303}", "nasalized"),
    (D, "\u{329}", "syllabic"),
    (D, "\u{32F}", "non-syllabic"),
    (D, "\u{330}", "creaky-voiced"),
    (D, "\u{324}", "breathy-voiced"),
    (D, "\u{2DE}", "rhotacized"),
    (D, "\u{31A}", "no-audible-release"),
    (D, "ⁿ", "nasal-release"),
    (D, "ˡ", "lateral-release"),
    (D, "ʼ", "ejective"),
    (D, "\u{31D}", "raised"),
    (D, "\u{31E}", "lowered"),
    (D, "\u{31F}", "advanced"),
    (D, "\u{320}", "retracted"),
    (D, "\u{308}", "centralized"),
    (D, "\u{33D}", "mid-centralized"),
    (D, "\u{339}", "more-rounded"),
    (D, "\u{31C}", "less-rounded"),
    (D, "\u{32A}", "dental"),
    (D, "\u{33A}", "apical"),
    (D, "\u{33B}", "laminal"),
    (D, "ː", "long"),
    (D, "ˑ", "half-long"),
    (D, "\u{306}", "extra-short"),
    // tones
    (T, "˥", "extra-high-level"),
    (T, "˦", "high-level"),
    (T, "˧", "mid-level"),
    (T, "˨", "low-level"),
    (T, "˩", "extra-low-level"),
    (T, "ꜜ", "downstep"),
    (T, "ꜛ", "upstep"),
    (T, "↗", "global-rise"),
    (T, "↘", "global-fall"),
];

/// Alternative spellings accepted by the parser, mapped to canonical forms.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("g", "ɡ"),
    ("ʦ", "t\u{361}s"),
    ("ʣ", "d\u{361}z"),
    ("ʧ", "t\u{361}ʃ"),
    ("ʤ", "d\u{361}ʒ"),
    ("ʨ", "t\u{361}ɕ"),
    ("ʥ", "d\u{361}ʑ"),
    ("\u{30D}", "\u{329}"),
    ("\u{30A}", "\u{325}"),
    (":", "ː"),
];

/// Precomposed letters split into base letter and combining diacritic before
/// parsing, so NFC input reads the same as NFD input. `ç` stays whole since it
/// is a table symbol in its own right.
pub(crate) static PRECOMPOSED: &[(char, &str)] = &[
    // nasalized
    ('ã', "a\u{303}"),
    ('ẽ', "e\u{303}"),
    ('ĩ', "i\u{303}"),
    ('õ', "o\u{303}"),
    ('ũ', "u\u{303}"),
    ('ỹ', "y\u{303}"),
    // centralized
    ('ä', "a\u{308}"),
    ('ë', "e\u{308}"),
    ('ï', "i\u{308}"),
    ('ö', "o\u{308}"),
    ('ü', "u\u{308}"),
    ('ÿ', "y\u{308}"),
    // extra-short
    ('ă', "a\u{306}"),
    ('ĕ', "e\u{306}"),
    ('ĭ', "i\u{306}"),
    ('ŏ', "o\u{306}"),
    ('ŭ', "u\u{306}"),
    // voiceless, written with the ring above
    ('å', "a\u{30A}"),
    ('ẘ', "w\u{30A}"),
    ('ẙ', "y\u{30A}"),
    // voiceless, ring below
    ('ḁ', "a\u{325}"),
    // creaky and breathy voice
    ('ḛ', "e\u{330}"),
    ('ḭ', "i\u{330}"),
    ('ṵ', "u\u{330}"),
    ('ṳ', "u\u{324}"),
];

pub(crate) struct SymbolEntry {
    pub kind: SymbolKind,
    pub unicode: &'static str,
    /// Descriptors excluding the kind descriptor
    pub descriptors: BTreeSet<Descriptor>,
}

pub(crate) struct IpaTable {
    labels: HashMap<&'static str, Descriptor>,
    symbols: Vec<SymbolEntry>,
    forms: HashMap<&'static str, IpaSymbol>,
    decompositions: HashMap<char, &'static str>,
    longest_form: usize,
}

impl IpaTable {
    fn build() -> Self {
        let mut labels = HashMap::new();
        for (index, def) in DESCRIPTORS.iter().enumerate() {
            for label in def.labels {
                let previous = labels.insert(*label, Descriptor::from_index(index));
                assert!(previous.is_none(), "duplicate descriptor label {label}");
            }
        }

        let symbols: Vec<SymbolEntry> = SYMBOLS
            .iter()
            .map(|(kind, unicode, descriptors)| SymbolEntry {
                kind: *kind,
                unicode,
                descriptors: descriptors
                    .split_whitespace()
                    .map(|label| match labels.get(label) {
                        Some(descriptor) => *descriptor,
                        None => panic!("symbol {unicode} uses unknown label {label}"),
                    })
                    .collect(),
            })
            .collect();

        let mut forms = HashMap::new();
        for (index, entry) in symbols.iter().enumerate() {
            forms.insert(entry.unicode, IpaSymbol::from_index(index));
        }
        for (alias, canonical) in ALIASES {
            if let Some(symbol) = forms.get(canonical).copied() {
                forms.insert(*alias, symbol);
            }
        }
        let longest_form = forms.keys().map(|f| f.chars().count()).max().unwrap_or(1);
        let decompositions = PRECOMPOSED.iter().copied().collect();

        Self {
            labels,
            symbols,
            forms,
            decompositions,
            longest_form,
        }
    }

    pub fn descriptor(&self, label: &str) -> Option<Descriptor> {
        self.labels.get(label).copied()
    }

    pub fn symbols(&self) -> &[SymbolEntry] {
        &self.symbols
    }

    pub fn entry(&self, symbol: IpaSymbol) -> &SymbolEntry {
        &self.symbols[symbol.index()]
    }

    pub fn form(&self, unicode: &str) -> Option<IpaSymbol> {
        self.forms.get(unicode).copied()
    }

    pub fn longest_form(&self) -> usize {
        self.longest_form
    }

    /// `text` with every precomposed letter expanded
    pub fn decompose<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.chars().any(|c| self.decompositions.contains_key(&c)) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            match self.decompositions.get(&c) {
                Some(parts) => out.push_str(parts),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

static TABLE: OnceLock<IpaTable> = OnceLock::new();

/// The process-wide table, indexed on first use.
pub(crate) fn ipa_table() -> &'static IpaTable {
    TABLE.get_or_init(IpaTable::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builds_and_resolves_every_label() {
        let table = ipa_table();
        assert_eq!(table.symbols().len(), SYMBOLS.len());
        for entry in table.symbols() {
            assert!(
                !entry.descriptors.is_empty(),
                "{} has no descriptors",
                entry.unicode
            );
        }
    }

    #[test]
    fn test_symbol_descriptor_sets_are_unique() {
        let table = ipa_table();
        let mut seen = BTreeSet::new();
        for entry in table.symbols() {
            let key: Vec<_> = entry.descriptors.iter().copied().collect();
            assert!(
                seen.insert((entry.kind, key)),
                "{} duplicates another symbol",
                entry.unicode
            );
        }
    }

    #[test]
    fn test_aliases_point_at_canonical_forms() {
        let table = ipa_table();
        for (alias, canonical) in ALIASES {
            assert_eq!(table.form(alias), table.form(canonical), "alias {alias}");
        }
        assert!(table.longest_form() >= 3);
    }

    #[test]
    fn test_precomposed_letters_decompose_into_known_forms() {
        let table = ipa_table();
        for (letter, parts) in PRECOMPOSED {
            let decomposed = table.decompose(parts);
            assert!(matches!(decomposed, Cow::Borrowed(_)), "{letter}");
            for part in parts.chars() {
                let mut buf = [0; 4];
                let form = part.encode_utf8(&mut buf);
                assert!(table.form(form).is_some(), "{letter} uses unknown {part:?}");
            }
        }
        assert_eq!(table.decompose("çã"), "ça\u{303}");
    }
}
