//! Per-component validation and normalization of candidate values.
//!
//! Every mutation runs its candidate through [`Safety::validate`]. The
//! result is either the fully normalized value or a [`ValidationError`];
//! nothing is partially applied.
//!
//! | kind | normalization | rejection |
//! |------|---------------|-----------|
//! | `scheme_name` | trim | not 1-10 lowercase letters |
//! | `scheme` | `\` to `/`, lowercase, bare name gets `://` | not `name://`, `name:`, `//` or `:` |
//! | `scheme_symbols` | `\` to `/` | not `://`, `:`, `//` or empty |
//! | `user`, `pass` | percent-encode | never |
//! | `host` | lowercase | not a host name or IPv4, or over 255 chars |
//! | `port` | strip leading `:` | not 0-5 digits |
//! | `path` | collapse slashes, encode each segment | never |
//! | `query` | strip `?`, cut at `#`, encode | never |
//! | `fragment` | strip `#`, percent-encode | never |

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::authority::Host;
use crate::component::ComponentKind;
use crate::config::SafetyConfig;
use crate::error::ValidationError;
use crate::scheme::SchemeSymbols;

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Everything the query grammar does not accept.
const QUERY: &AsciiSet = &UNRESERVED
    .remove(b'$')
    .remove(b'+')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'/')
    .remove(b'?')
    .remove(b'%');

/// Validates candidate component values against a [`SafetyConfig`].
///
/// # Examples
///
/// ```
/// use parsed_uri::{ComponentKind, Safety, SafetyConfig};
///
/// let config = SafetyConfig::default();
/// let safety = Safety::new(&config);
///
/// assert_eq!(safety.validate(ComponentKind::Scheme, "HTTPS").unwrap(), "https://");
/// assert_eq!(safety.validate(ComponentKind::Port, ":8080").unwrap(), "8080");
/// assert!(safety.validate(ComponentKind::Port, "65536x").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Safety<'a> {
    config: &'a SafetyConfig,
}

impl<'a> Safety<'a> {
    /// Creates a validator using the given configuration.
    #[must_use]
    pub const fn new(config: &'a SafetyConfig) -> Self {
        Self { config }
    }

    /// Validates and normalizes `candidate` as a value for `kind`.
    ///
    /// Surrounding whitespace is trimmed for every kind except the query.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value cannot be made valid for the
    /// component. User, password, path, query and fragment values never fail.
    pub fn validate(
        &self,
        kind: ComponentKind,
        candidate: &str,
    ) -> Result<String, ValidationError> {
        let value = match kind {
            ComponentKind::Query => candidate,
            _ => candidate.trim(),
        };

        match kind {
            ComponentKind::SchemeName => self.scheme_name(value),
            ComponentKind::Scheme => self.scheme(value),
            ComponentKind::SchemeSymbols => Self::scheme_symbols(value),
            ComponentKind::User | ComponentKind::Pass => Ok(encode(value, UNRESERVED)),
            ComponentKind::Host => self.host(value),
            ComponentKind::Port => self.port(value),
            ComponentKind::Path => Ok(Self::path(value)),
            ComponentKind::Query => Ok(Self::query(value)),
            ComponentKind::Fragment => Ok(Self::fragment(value)),
        }
    }

    fn is_scheme_name(&self, name: &str) -> bool {
        (1..=self.config.max_scheme_name_length).contains(&name.len())
            && name.bytes().all(|b| b.is_ascii_lowercase())
    }

    fn scheme_name(&self, value: &str) -> Result<String, ValidationError> {
        if self.is_scheme_name(value) {
            Ok(value.to_string())
        } else {
            Err(ValidationError::InvalidSchemeName {
                value: value.to_string(),
                max: self.config.max_scheme_name_length,
            })
        }
    }

    fn scheme(&self, value: &str) -> Result<String, ValidationError> {
        let mut scheme = value.replace('\\', "/").to_ascii_lowercase();
        if scheme.is_empty() {
            return Ok(scheme);
        }

        // A bare name gets the default separator.
        if !scheme.contains(':') && !scheme.contains("//") {
            scheme.push_str(self.config.default_scheme_symbols.as_str());
        }
        if let Some(name) = scheme.strip_suffix(":///") {
            scheme = format!("{name}://");
        }

        let valid = match SchemeSymbols::split_scheme(&scheme) {
            Some((name, SchemeSymbols::Generic)) => self.is_scheme_name(name),
            Some((name, SchemeSymbols::Colon | SchemeSymbols::Inherit)) => {
                name.is_empty() || self.is_scheme_name(name)
            }
            Some((_, SchemeSymbols::None)) | None => false,
        };

        if valid {
            Ok(scheme)
        } else {
            Err(ValidationError::InvalidScheme {
                value: value.to_string(),
            })
        }
    }

    fn scheme_symbols(value: &str) -> Result<String, ValidationError> {
        let symbols = value.replace('\\', "/");
        SchemeSymbols::from_separator(&symbols)
            .map(|s| s.as_str().to_string())
            .ok_or_else(|| ValidationError::InvalidSchemeSymbols {
                value: value.to_string(),
            })
    }

    fn host(&self, value: &str) -> Result<String, ValidationError> {
        let host = value.to_ascii_lowercase();

        if host.len() > self.config.max_host_length {
            return Err(ValidationError::HostTooLong {
                max: self.config.max_host_length,
                actual: host.len(),
            });
        }

        if matches!(Host::classify(&host), Host::Ipv4(_)) {
            return Ok(host);
        }

        self.validate_hostname(&host)?;
        Ok(host)
    }

    fn validate_hostname(&self, host: &str) -> Result<(), ValidationError> {
        let invalid = |reason| ValidationError::InvalidHost {
            value: host.to_string(),
            reason,
        };

        if host.is_empty() {
            return Err(invalid("host cannot be empty"));
        }

        let labels: Vec<&str> = host.split('.').collect();
        if labels.len() < 2 && !self.config.allow_single_label_host {
            return Err(invalid("host must have at least two dot-separated labels"));
        }

        let (last, leading) = labels.split_last().ok_or_else(|| invalid("host cannot be empty"))?;

        for label in leading {
            let mut chars = label.chars();
            match chars.next() {
                None => {
                    return Err(invalid("empty label (consecutive dots or leading dot)"));
                }
                Some(c) if !(c.is_ascii_alphanumeric() || c == '_') => {
                    return Err(invalid("label must start with a letter, digit or underscore"));
                }
                Some(_) => {}
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                return Err(invalid(
                    "label may only contain letters, digits, hyphens and underscores",
                ));
            }
        }

        let mut chars = last.chars();
        match chars.next() {
            None => return Err(invalid("empty label (trailing dot)")),
            Some(c) if !c.is_ascii_alphanumeric() => {
                return Err(invalid("last label must start with a letter or digit"));
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid("last label may only contain letters, digits and hyphens"));
        }

        Ok(())
    }

    fn port(&self, value: &str) -> Result<String, ValidationError> {
        let digits = value.strip_prefix(':').unwrap_or(value);
        let max_digits = self.config.port_digit_limit();
        if digits.len() <= max_digits && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(digits.to_string())
        } else {
            Err(ValidationError::InvalidPort {
                value: value.to_string(),
                max_digits,
            })
        }
    }

    fn path(value: &str) -> String {
        let mut path = String::with_capacity(value.len() + 1);
        for segment in value.split(['/', '\\']).filter(|s| !s.is_empty()) {
            path.push('/');
            path.push_str(&encode(segment, UNRESERVED));
        }
        if value.ends_with(['/', '\\']) {
            path.push('/');
        }
        path
    }

    fn query(value: &str) -> String {
        let query = value.strip_prefix('?').unwrap_or(value);
        let query = query.split('#').next().unwrap_or_default();
        encode(query, QUERY)
    }

    fn fragment(value: &str) -> String {
        let fragment = value.strip_prefix('#').unwrap_or(value);
        encode(fragment, UNRESERVED)
    }
}

/// Validates `candidate` for `kind` with the default configuration.
///
/// # Errors
///
/// Returns `ValidationError` if the value cannot be made valid for the
/// component.
///
/// # Examples
///
/// ```
/// use parsed_uri::{validate, ComponentKind};
///
/// assert_eq!(validate(ComponentKind::Host, "Example.COM").unwrap(), "example.com");
/// assert_eq!(validate(ComponentKind::Path, "a//b\\c d").unwrap(), "/a/b/c%20d");
/// ```
pub fn validate(kind: ComponentKind, candidate: &str) -> Result<String, ValidationError> {
    Safety::new(&SafetyConfig::default()).validate(kind, candidate)
}

/// Percent-encodes `value`, leaving well-formed `%XX` escapes alone so that
/// encoding an already encoded value is a no-op.
fn encode(value: &str, set: &'static AsciiSet) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = rest.find('%') {
        let (head, tail) = rest.split_at(idx);
        out.extend(utf8_percent_encode(head, set));
        let bytes = tail.as_bytes();
        if bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit() {
            out.push_str(&tail[..3]);
            rest = &tail[3..];
        } else {
            out.push_str("%25");
            rest = &tail[1..];
        }
    }
    out.extend(utf8_percent_encode(rest, set));
    out
}
