use std::io::Write;

use crate::phonology::{Component, ComponentKind, Phonology, RenderedSyllable, Syllable};

use super::component_render::{component_repr, paint};
use super::names::{component_name, TypeName};
use super::options::DisplayOptions;

/// The realized (or symbolic) string of an already rendered syllable,
/// colored by acceptability class when both color switches are on
pub fn rendered_syllable_str(rendered: &RenderedSyllable, options: &DisplayOptions) -> String {
    let text = if options.phonetic {
        rendered.phonetic_ipa_str().to_string()
    } else {
        rendered.ipa_str().to_string()
    };
    if options.color && options.color_syllables {
        let color = options
            .scheme
            .acceptability_color(rendered.acceptability().class());
        paint(&text, color, options)
    } else {
        text
    }
}

/// Render `syllable` through `phonology` and format it for display
pub fn pretty_syllable_str(
    phonology: &Phonology,
    syllable: &Syllable,
    options: &DisplayOptions,
) -> String {
    rendered_syllable_str(&phonology.render_syllable(syllable), options)
}

/// Best-effort print of [`pretty_syllable_str`]
///
/// A failing writer is reported as a warning and otherwise ignored.
pub fn pretty_print_syllable<W: Write>(
    phonology: &Phonology,
    syllable: &Syllable,
    options: &DisplayOptions,
    writer: &mut W,
) {
    let text = pretty_syllable_str(phonology, syllable, options);
    if let Err(err) = writeln!(writer, "{}", text) {
        tracing::warn!(
            syllable = %syllable,
            error = %err,
            "failed to print syllable, check the output encoding"
        );
    }
}

fn inventory_line<'a, I, C>(kind: ComponentKind, items: I, options: &DisplayOptions) -> String
where
    I: ExactSizeIterator<Item = &'a C>,
    C: Component + 'a,
{
    let count = items.len();
    let color = options.scheme.component_color(kind);
    let rendered: Vec<String> = items
        .map(|item| {
            let text = item.ipa_str().to_string();
            let text = if text.is_empty() { "∅".to_string() } else { text };
            paint(&text, color, options)
        })
        .collect();
    format!(
        "{} ({}): {}",
        component_name(kind, options.language),
        count,
        rendered.join(" ")
    )
}

/// Initials, finals, tones and every leaf phoneme, one section per line
pub fn inventory_report(phonology: &Phonology, options: &DisplayOptions) -> String {
    let mut lines = vec![
        inventory_line(ComponentKind::Initial, phonology.initials().iter(), options),
        inventory_line(ComponentKind::Final, phonology.finals().iter(), options),
        inventory_line(ComponentKind::Tone, phonology.tones().iter(), options),
    ];
    let leaves = phonology.leaf_phoneme_collection();
    lines.push(format!(
        "{} ({}):",
        TypeName::Leaves.translated(options.language),
        leaves.len()
    ));
    lines.extend(
        leaves
            .iter()
            .map(|leaf| format!("  {}", component_repr(leaf, options))),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::{IpaFeatureGroup, IpaString};
    use crate::phonology::{
        Acceptability, Leaf, PhonologicalRule, PhonotacticConstraint, SyllableFeatures,
    };
    use crate::render::options::Language;

    fn phonology() -> Phonology {
        let mut phonology = Phonology::new();
        phonology.add_syllable(Syllable::parse("l", "", "o", "ŋ", "˨˧").unwrap());
        phonology.add_rule(PhonologicalRule::new(
            Leaf::nucleus("o").unwrap(),
            IpaString::parse("ʊ̃").unwrap(),
            SyllableFeatures::new().with("Final", IpaFeatureGroup::parse("+nasal").unwrap()),
        ));
        let voiced_plosive = IpaFeatureGroup::parse("+voiced +plosive").unwrap();
        phonology.add_constraint(PhonotacticConstraint::new(
            SyllableFeatures::new().with("Initial", voiced_plosive),
            Acceptability::new(false, true),
        ));
        phonology.refresh();
        phonology
    }

    #[test]
    fn test_phonetic_and_symbolic_strings() {
        let phonology = phonology();
        let syllable = Syllable::parse("l", "", "o", "ŋ", "˨˧").unwrap();
        let mut options = DisplayOptions::plain();
        assert_eq!(
            pretty_syllable_str(&phonology, &syllable, &options),
            "lʊ̃ŋ˨˧"
        );
        options.phonetic = false;
        assert_eq!(
            pretty_syllable_str(&phonology, &syllable, &options),
            "loŋ˨˧"
        );
    }

    #[test]
    fn test_pretty_print_writes_line() {
        let phonology = phonology();
        let syllable = Syllable::parse("b", "", "o", "", "˨˧").unwrap();
        let mut out = Vec::new();
        pretty_print_syllable(&phonology, &syllable, &DisplayOptions::plain(), &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "bo˨˧\n");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::InvalidData, "bad encoding"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_pretty_print_swallows_write_errors() {
        let phonology = phonology();
        let syllable = Syllable::parse("l", "", "o", "ŋ", "˨˧").unwrap();
        let options = DisplayOptions::plain();
        pretty_print_syllable(&phonology, &syllable, &options, &mut BrokenWriter);
    }

    #[test]
    fn test_inventory_report_lists_sections() {
        let report = inventory_report(&phonology(), &DisplayOptions::plain());
        assert!(report.contains("Initial (1): l"));
        assert!(report.contains("Final (1): oŋ"));
        assert!(report.contains("Tone (1): ˨˧"));
        assert!(report.contains("<Medial ''>"));
        assert!(report.contains("Leaves ("));
    }

    #[test]
    fn test_inventory_report_in_wu_has_no_english_headings() {
        let mut options = DisplayOptions::plain();
        options.language = Language::WuuHant;
        let report = inventory_report(&phonology(), &options);
        assert!(report.contains("聲母 (1): l"));
        assert!(report.contains("音素 ("));
        assert!(!report.contains("Leaves"));
        assert!(!report.contains("Initial"));
    }
}
