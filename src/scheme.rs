//! Scheme separator type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The separator that follows a scheme name.
///
/// A URI may carry the generic `://` form (`https://`), the opaque `:` form
/// (`mailto:`), the scheme-relative `//` form that inherits the scheme of the
/// surrounding document, or no scheme at all.
///
/// # Examples
///
/// ```
/// use parsed_uri::SchemeSymbols;
///
/// assert_eq!(SchemeSymbols::Generic.as_str(), "://");
/// assert_eq!("//".parse::<SchemeSymbols>().unwrap(), SchemeSymbols::Inherit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeSymbols {
    /// No scheme separator.
    #[default]
    None,
    /// `://`
    Generic,
    /// `:`
    Colon,
    /// `//`
    Inherit,
}

impl SchemeSymbols {
    /// Returns the separator as it appears in a URI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Generic => "://",
            Self::Colon => ":",
            Self::Inherit => "//",
        }
    }

    /// Returns true if there is no separator.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::None)
    }

    /// Matches a separator exactly, returning `None` for anything else.
    #[must_use]
    pub fn from_separator(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::None),
            "://" => Some(Self::Generic),
            ":" => Some(Self::Colon),
            "//" => Some(Self::Inherit),
            _ => None,
        }
    }

    /// Splits a normalized scheme (`"https://"`) into its name and separator.
    ///
    /// The name is the leading run of ASCII letters; the remainder must be a
    /// known separator.
    #[must_use]
    pub fn split_scheme(scheme: &str) -> Option<(&str, Self)> {
        let name_len = scheme
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        let (name, symbols) = scheme.split_at(name_len);
        Self::from_separator(symbols).map(|symbols| (name, symbols))
    }
}

impl fmt::Display for SchemeSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeSymbols {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_separator(s).ok_or_else(|| ValidationError::InvalidSchemeSymbols {
            value: s.to_string(),
        })
    }
}

impl AsRef<str> for SchemeSymbols {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SchemeSymbols {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SchemeSymbols {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_separator_known_forms() {
        assert_eq!(SchemeSymbols::from_separator("://"), Some(SchemeSymbols::Generic));
        assert_eq!(SchemeSymbols::from_separator(":"), Some(SchemeSymbols::Colon));
        assert_eq!(SchemeSymbols::from_separator("//"), Some(SchemeSymbols::Inherit));
        assert_eq!(SchemeSymbols::from_separator(""), Some(SchemeSymbols::None));
    }

    #[test]
    fn from_separator_rejects_other_text() {
        assert_eq!(SchemeSymbols::from_separator(":///"), None);
        assert_eq!(SchemeSymbols::from_separator("/"), None);
        assert_eq!(SchemeSymbols::from_separator("http"), None);
    }

    #[test]
    fn split_generic_scheme() {
        assert_eq!(
            SchemeSymbols::split_scheme("https://"),
            Some(("https", SchemeSymbols::Generic))
        );
    }

    #[test]
    fn split_opaque_and_inherited() {
        assert_eq!(
            SchemeSymbols::split_scheme("mailto:"),
            Some(("mailto", SchemeSymbols::Colon))
        );
        assert_eq!(
            SchemeSymbols::split_scheme("//"),
            Some(("", SchemeSymbols::Inherit))
        );
        assert_eq!(SchemeSymbols::split_scheme(""), Some(("", SchemeSymbols::None)));
    }

    #[test]
    fn split_bare_name_and_digits() {
        assert_eq!(SchemeSymbols::split_scheme("https"), Some(("https", SchemeSymbols::None)));
        assert_eq!(SchemeSymbols::split_scheme("ht1p://"), None);
    }

    #[test]
    fn parse_invalid_symbols_fails() {
        let result = "::".parse::<SchemeSymbols>();
        assert!(matches!(result, Err(ValidationError::InvalidSchemeSymbols { .. })));
    }
}
