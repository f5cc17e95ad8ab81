use crate::phonology::ComponentKind;

use super::options::Language;

/// Types that carry a localized display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Component(ComponentKind),
    SyllableFeatures,
    Acceptability,
    RenderedSyllable,
    Constraint,
    Rule,
    Phonology,
    Leaves,
}

impl TypeName {
    pub fn en_latn(&self) -> &'static str {
        match self {
            TypeName::Component(kind) => kind.name(),
            TypeName::SyllableFeatures => "SyllableFeatures",
            TypeName::Acceptability => "PhonotacticAcceptability",
            TypeName::RenderedSyllable => "SyllableInPhonology",
            TypeName::Constraint => "PhonotacticConstraint",
            TypeName::Rule => "PhonologicalRule",
            TypeName::Phonology => "Phonology",
            TypeName::Leaves => "Leaves",
        }
    }

    pub fn wuu_hant(&self) -> &'static str {
        match self {
            TypeName::Component(ComponentKind::Syllable) => "音節",
            TypeName::Component(ComponentKind::Initial) => "聲母",
            TypeName::Component(ComponentKind::Final) => "韻母",
            TypeName::Component(ComponentKind::Medial) => "介音",
            TypeName::Component(ComponentKind::Nucleus) => "韻腹",
            TypeName::Component(ComponentKind::Coda) => "韻尾",
            TypeName::Component(ComponentKind::Tone) => "聲調",
            TypeName::SyllableFeatures => "音節特徵",
            TypeName::Acceptability => "音位排列受容性",
            TypeName::RenderedSyllable => "音節在音系中個實現",
            TypeName::Constraint => "音位排列制約",
            TypeName::Rule => "音韻規則",
            TypeName::Phonology => "音韻體系",
            TypeName::Leaves => "音素",
        }
    }

    pub fn translated(&self, language: Language) -> &'static str {
        match language {
            Language::EnLatn => self.en_latn(),
            Language::WuuHant => self.wuu_hant(),
        }
    }
}

/// Localized name of a component kind
pub fn component_name(kind: ComponentKind, language: Language) -> &'static str {
    TypeName::Component(kind).translated(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_names() {
        assert_eq!(
            component_name(ComponentKind::Coda, Language::EnLatn),
            "Coda"
        );
        assert_eq!(
            component_name(ComponentKind::Coda, Language::WuuHant),
            "韻尾"
        );
        assert_eq!(TypeName::Rule.translated(Language::WuuHant), "音韻規則");
    }

    #[test]
    fn test_leaves_heading_is_translated() {
        assert_eq!(TypeName::Leaves.translated(Language::EnLatn), "Leaves");
        assert_eq!(TypeName::Leaves.translated(Language::WuuHant), "音素");
    }
}
