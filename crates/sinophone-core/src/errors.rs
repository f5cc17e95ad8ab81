use thiserror::Error;

/// Result type alias using SinophoneError
pub type Result<T> = std::result::Result<T, SinophoneError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the core maps onto one of these kinds. Each kind
/// carries a stable error code usable in tests, logs and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Construction
    UnknownDescriptor,
    UnknownSymbol,
    UnknownIpaCharacter,
    MalformedTone,
    TypeMismatch,

    // Presentation
    UnknownLanguageCode,

    // Definition files
    InvalidDefinition,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownDescriptor => "ERR_UNKNOWN_DESCRIPTOR",
            ExErrorKind::UnknownSymbol => "ERR_UNKNOWN_SYMBOL",
            ExErrorKind::UnknownIpaCharacter => "ERR_UNKNOWN_IPA_CHARACTER",
            ExErrorKind::MalformedTone => "ERR_MALFORMED_TONE",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::UnknownLanguageCode => "ERR_UNKNOWN_LANGUAGE_CODE",
            ExErrorKind::InvalidDefinition => "ERR_INVALID_DEFINITION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    component: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            component: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending component or IPA string
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the component context, if any
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(component) = &self.component {
            write!(f, " (component: {})", component)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for Sinophone operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinophoneError {
    // ===== Construction Errors =====
    /// Descriptor label is not in the IPA descriptor table
    #[error("Unknown descriptor: {label}")]
    UnknownDescriptor { label: String },

    /// No IPA symbol carries exactly this set of descriptors
    #[error("No IPA {expected} matches descriptors '{descriptors}'")]
    UnknownSymbol {
        descriptors: String,
        expected: String,
    },

    /// A character in an IPA string has no table entry
    #[error("Unknown IPA character {character:?} in '{input}'")]
    UnknownIpaCharacter { input: String, character: char },

    /// Tone contains a non-tone symbol outside the trailing glottal stop exception
    #[error("'{ipa}' is not a tone")]
    MalformedTone { ipa: String },

    /// A constructor received a component of the wrong kind
    #[error("Expected {expected} component, found {found} '{ipa}'")]
    ComponentKindMismatch {
        expected: String,
        found: String,
        ipa: String,
    },

    // ===== Presentation Errors =====
    /// Language code is not supported by the presentation layer
    #[error("Unknown language code: {code}")]
    UnknownLanguageCode { code: String },

    // ===== Definition Errors =====
    /// Definition is syntactically valid but describes an invalid phonology
    #[error("Invalid definition at {location}: {source}")]
    InvalidDefinition {
        location: String,
        source: Box<SinophoneError>,
    },

    /// Definition could not be parsed
    #[error("Failed to parse definition: {message}")]
    DefinitionParse { message: String },

    /// Definition file could not be read
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl SinophoneError {
    /// Wrap a construction error with the location inside a definition file
    pub fn in_definition(self, location: impl Into<String>) -> Self {
        SinophoneError::InvalidDefinition {
            location: location.into(),
            source: Box::new(self),
        }
    }
}

/// Conversion from SinophoneError to ExError
impl From<SinophoneError> for ExError {
    fn from(err: SinophoneError) -> Self {
        match err {
            SinophoneError::UnknownDescriptor { label } => {
                ExError::new(ExErrorKind::UnknownDescriptor)
                    .with_component(label)
                    .with_message("Descriptor label not found in the IPA table")
            }

            SinophoneError::UnknownSymbol {
                descriptors,
                expected,
            } => ExError::new(ExErrorKind::UnknownSymbol)
                .with_component(descriptors)
                .with_message(format!("No IPA {} carries these descriptors", expected)),

            SinophoneError::UnknownIpaCharacter { input, character } => {
                ExError::new(ExErrorKind::UnknownIpaCharacter)
                    .with_component(input)
                    .with_message(format!("Unknown IPA character {:?}", character))
            }

            SinophoneError::MalformedTone { ipa } => ExError::new(ExErrorKind::MalformedTone)
                .with_component(ipa)
                .with_message("Tone may only contain tone letters and a final glottal stop"),

            SinophoneError::ComponentKindMismatch {
                expected,
                found,
                ipa,
            } => ExError::new(ExErrorKind::TypeMismatch)
                .with_component(ipa)
                .with_message(format!("Expected {} component, found {}", expected, found)),

            SinophoneError::UnknownLanguageCode { code } => {
                ExError::new(ExErrorKind::UnknownLanguageCode)
                    .with_component(code)
                    .with_message("Unknown language code")
            }

            SinophoneError::InvalidDefinition { location, source } => {
                let inner: ExError = (*source).into();
                ExError::new(ExErrorKind::InvalidDefinition)
                    .with_op("load_definition")
                    .with_message(format!("Invalid entry at {}", location))
                    .with_source(inner)
            }

            SinophoneError::DefinitionParse { message } => ExError::new(ExErrorKind::Serialization)
                .with_op("load_definition")
                .with_message(message),

            SinophoneError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("load_definition")
                .with_component(path)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let kinds = [
            ExErrorKind::UnknownDescriptor,
            ExErrorKind::UnknownSymbol,
            ExErrorKind::UnknownIpaCharacter,
            ExErrorKind::MalformedTone,
            ExErrorKind::TypeMismatch,
            ExErrorKind::UnknownLanguageCode,
            ExErrorKind::InvalidDefinition,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::MalformedTone)
            .with_op("new_tone")
            .with_component("lol")
            .with_message("not a tone");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_MALFORMED_TONE]"));
        assert!(rendered.contains("new_tone"));
        assert!(rendered.contains("lol"));
    }

    #[test]
    fn test_invalid_definition_keeps_source_kind() {
        let err = SinophoneError::MalformedTone {
            ipa: "lol".to_string(),
        }
        .in_definition("syllables[2].tone");
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidDefinition);
        assert_eq!(
            ex.source_error().map(|s| s.kind()),
            Some(ExErrorKind::MalformedTone)
        );
    }
}
