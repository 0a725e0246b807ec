//! Error types for URI parsing and component mutation.

use std::convert::Infallible;
use std::fmt;

use crate::component::ComponentKind;

/// Errors that can occur when constructing a [`ParsedUri`](crate::ParsedUri).
///
/// A parse error is terminal for the instance that recorded it: every read
/// and mutation on that instance returns it until the instance is
/// reinitialized with different input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse (lossy for non-UTF-8 input)
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is not text
    InputType {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
    /// Input does not satisfy the URI grammar
    GrammarMismatch {
        /// Reason for the mismatch
        reason: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InputType { valid_up_to } => write!(
                f,
                "input is not a string (invalid UTF-8 after byte {valid_up_to})"
            ),
            ParseErrorKind::GrammarMismatch { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub(crate) fn grammar(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            kind: ParseErrorKind::GrammarMismatch { reason },
        }
    }

    /// Returns true if the input was not valid text.
    #[must_use]
    pub const fn is_input_type(&self) -> bool {
        matches!(self.kind, ParseErrorKind::InputType { .. })
    }
}

/// Reasons a candidate component value is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Scheme name is not 1 to `max` lowercase letters
    InvalidSchemeName {
        /// The rejected value
        value: String,
        /// Maximum allowed length
        max: usize,
    },
    /// Scheme is not `name://`, `name:`, `//` or `:`
    InvalidScheme {
        /// The rejected value
        value: String,
    },
    /// Separator is not `://`, `:`, `//` or empty
    InvalidSchemeSymbols {
        /// The rejected value
        value: String,
    },
    /// A scheme name cannot stand without a separator
    SchemeSeparatorRequired {
        /// The current scheme name
        scheme_name: String,
    },
    /// Host is neither a multi-label host name nor a dotted IPv4 address
    InvalidHost {
        /// The rejected value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Host exceeds the maximum length
    HostTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Port is not 0 to `max_digits` ASCII digits
    InvalidPort {
        /// The rejected value
        value: String,
        /// Maximum number of digits
        max_digits: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSchemeName { value, max } => write!(
                f,
                "invalid scheme name '{value}': expected 1-{max} lowercase letters"
            ),
            Self::InvalidScheme { value } => write!(
                f,
                "invalid scheme '{value}': expected 'name://', 'name:', '//' or ':'"
            ),
            Self::InvalidSchemeSymbols { value } => write!(
                f,
                "invalid scheme separator '{value}': expected '://', ':', '//' or nothing"
            ),
            Self::SchemeSeparatorRequired { scheme_name } => write!(
                f,
                "scheme name '{scheme_name}' requires a separator; replace the scheme to remove it"
            ),
            Self::InvalidHost { value, reason } => write!(f, "invalid host '{value}': {reason}"),
            Self::HostTooLong { max, actual } => {
                write!(f, "host length {actual} exceeds maximum {max}")
            }
            Self::InvalidPort { value, max_digits } => write!(
                f,
                "invalid port '{value}': expected at most {max_digits} digits"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors returned by reads and mutations on a [`ParsedUri`](crate::ParsedUri).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The instance failed to parse at construction
    Parse(ParseError),
    /// The component name is not recognized
    UnknownComponent {
        /// The unrecognized name
        name: String,
    },
    /// The candidate value failed validation
    Validation {
        /// Component being mutated
        kind: ComponentKind,
        /// Why the value was rejected
        source: ValidationError,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::UnknownComponent { name } => {
                write!(f, "unknown URI component '{name}'; expected one of ")?;
                for (i, kind) in ComponentKind::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(kind.as_str())?;
                }
                Ok(())
            }
            Self::Validation { kind, source } => write!(f, "cannot set {kind}: {source}"),
        }
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Validation { source, .. } => Some(source),
            Self::UnknownComponent { .. } => None,
        }
    }
}

impl From<ParseError> for UriError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<Infallible> for UriError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

impl UriError {
    /// Returns true if the instance is in the parse-error state.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns true if the component name was not recognized.
    #[must_use]
    pub const fn is_unknown_component(&self) -> bool {
        matches!(self, Self::UnknownComponent { .. })
    }

    /// Returns true if a candidate value was rejected.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_mismatch_display() {
        let err = ParseError::grammar("", "no host found");
        assert_eq!(err.to_string(), "failed to parse URI '': no host found");
        assert!(!err.is_input_type());
    }

    #[test]
    fn input_type_display() {
        let err = ParseError {
            input: "ab\u{fffd}".to_string(),
            kind: ParseErrorKind::InputType { valid_up_to: 2 },
        };
        assert!(err.to_string().contains("not a string"));
        assert!(err.is_input_type());
    }

    #[test]
    fn validation_error_display() {
        let err = UriError::Validation {
            kind: ComponentKind::Port,
            source: ValidationError::InvalidPort {
                value: "80a".to_string(),
                max_digits: 5,
            },
        };
        assert_eq!(
            err.to_string(),
            "cannot set port: invalid port '80a': expected at most 5 digits"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn unknown_component_lists_kinds() {
        let err = UriError::UnknownComponent {
            name: "authority".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown URI component 'authority'; expected one of scheme, scheme_name, \
             scheme_symbols, user, pass, host, port, path, query, fragment"
        );
        assert!(err.is_unknown_component());
    }

    #[test]
    fn source_chains_to_inner_error() {
        use std::error::Error;

        let err = UriError::from(ParseError::grammar("x", "no host found"));
        assert!(err.is_parse());
        assert!(err.source().is_some());
    }
}
