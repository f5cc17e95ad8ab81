//! Localized, optionally colorized reprs of engine values

use colored::{Color, Colorize};

use crate::phonology::{
    Acceptability, Component, ComponentRef, PhonologicalRule, PhonotacticConstraint,
    RenderedSyllable, SyllableFeatures, SyllablePattern,
};

use super::names::{component_name, TypeName};
use super::options::DisplayOptions;

pub(crate) fn paint(text: &str, color: Option<Color>, options: &DisplayOptions) -> String {
    match color {
        Some(color) if options.color => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

/// `<Kind 'ipa'>` for leaves, `<Kind [children...]>` for branches
pub fn component_repr<C: Component + ?Sized>(component: &C, options: &DisplayOptions) -> String {
    repr_ref(component.as_component(), options)
}

fn repr_ref(component: ComponentRef<'_>, options: &DisplayOptions) -> String {
    let kind = component.kind();
    let body = match component {
        ComponentRef::Leaf(leaf) => format!("'{}'", leaf.ipa_str()),
        _ => {
            let children: Vec<String> = component
                .children()
                .into_iter()
                .map(|child| repr_ref(child, options))
                .collect();
            format!("[{}]", children.join(" "))
        }
    };
    let color = options.scheme.component_color(kind);
    format!(
        "{}{}{}",
        paint(
            &format!("<{} ", component_name(kind, options.language)),
            color,
            options
        ),
        body,
        paint(">", color, options)
    )
}

fn wrap(name: TypeName, body: &str, options: &DisplayOptions) -> String {
    format!("<{} {}>", name.translated(options.language), body)
}

pub fn features_repr(features: &SyllableFeatures, options: &DisplayOptions) -> String {
    wrap(TypeName::SyllableFeatures, &features.to_string(), options)
}

fn pattern_repr(pattern: &SyllablePattern, options: &DisplayOptions) -> String {
    match pattern {
        SyllablePattern::Features(features) => features_repr(features, options),
        SyllablePattern::Custom(custom) => format!("<{}>", custom.name()),
    }
}

/// Colored by acceptability class when colors are on
pub fn acceptability_repr(acceptability: Acceptability, options: &DisplayOptions) -> String {
    let color = options.scheme.acceptability_color(acceptability.class());
    paint(
        &wrap(TypeName::Acceptability, &acceptability.to_string(), options),
        color,
        options,
    )
}

pub fn constraint_repr(constraint: &PhonotacticConstraint, options: &DisplayOptions) -> String {
    let body = format!(
        "{} => {}",
        pattern_repr(constraint.pattern(), options),
        acceptability_repr(constraint.acceptability(), options)
    );
    wrap(TypeName::Constraint, &body, options)
}

pub fn rule_repr(rule: &PhonologicalRule, options: &DisplayOptions) -> String {
    let body = format!(
        "{} -> '{}' / {}",
        component_repr(rule.target(), options),
        rule.replacement(),
        pattern_repr(rule.pattern(), options)
    );
    wrap(TypeName::Rule, &body, options)
}

pub fn rendered_repr(rendered: &RenderedSyllable, options: &DisplayOptions) -> String {
    let body = format!(
        "'{}' [{}] {}",
        rendered.ipa_str(),
        rendered.phonetic_ipa_str(),
        acceptability_repr(rendered.acceptability(), options)
    );
    wrap(TypeName::RenderedSyllable, &body, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::{Leaf, Syllable};
    use crate::render::options::Language;

    #[test]
    fn test_syllable_repr() {
        let syllable = Syllable::parse("k", "", "ɐ", "ʔ", "˥˥").unwrap();
        assert_eq!(
            component_repr(&syllable, &DisplayOptions::plain()),
            "<Syllable [<Initial 'k'> <Final [<Medial ''> <Nucleus 'ɐ'> <Coda 'ʔ'>]> <Tone '˥˥'>]>"
        );
    }

    #[test]
    fn test_wu_repr() {
        let options = DisplayOptions {
            language: Language::WuuHant,
            ..DisplayOptions::plain()
        };
        let leaf = Leaf::coda("ŋ").unwrap();
        assert_eq!(component_repr(&leaf, &options), "<韻尾 'ŋ'>");
    }

    #[test]
    fn test_colored_repr_keeps_text() {
        colored::control::set_override(true);
        let leaf = Leaf::initial("k").unwrap();
        let repr = component_repr(&leaf, &DisplayOptions::default());
        colored::control::unset_override();
        assert!(repr.contains("\u{1b}["));
        assert!(repr.contains("<Initial "));
        assert!(repr.contains("'k'"));
    }

    #[test]
    fn test_acceptability_repr() {
        assert_eq!(
            acceptability_repr(Acceptability::new(true, false), &DisplayOptions::plain()),
            "<PhonotacticAcceptability (existent: true, grammatical: false)>"
        );
    }
}
