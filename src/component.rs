//! Component kinds addressable by the mutation operations.

use std::fmt;
use std::str::FromStr;

use crate::error::UriError;

/// One of the ten named parts of a URI.
///
/// Names are matched case-insensitively, so `"PATH"`, `"path"` and `"Path"`
/// all resolve to [`ComponentKind::Path`]. The aliases `protocol`,
/// `username`, `password` and `fqdn` resolve to the component they mirror.
///
/// # Examples
///
/// ```
/// use parsed_uri::ComponentKind;
///
/// assert_eq!("SCHEME_NAME".parse::<ComponentKind>().unwrap(), ComponentKind::SchemeName);
/// assert_eq!("fqdn".parse::<ComponentKind>().unwrap(), ComponentKind::Host);
/// assert!("authority".parse::<ComponentKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Scheme name plus separator (`https://`).
    Scheme,
    /// Bare scheme name (`https`).
    SchemeName,
    /// Scheme separator (`://`, `:`, `//`).
    SchemeSymbols,
    /// User name.
    User,
    /// Password.
    Pass,
    /// Host name or IPv4 literal.
    Host,
    /// Port digits.
    Port,
    /// Path, including its leading `/`.
    Path,
    /// Query string, without `?`.
    Query,
    /// Fragment, without `#`.
    Fragment,
}

impl ComponentKind {
    /// All kinds, in serialization order.
    pub const ALL: [Self; 10] = [
        Self::Scheme,
        Self::SchemeName,
        Self::SchemeSymbols,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::SchemeName => "scheme_name",
            Self::SchemeSymbols => "scheme_symbols",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "scheme" | "protocol" => Self::Scheme,
            "scheme_name" => Self::SchemeName,
            "scheme_symbols" => Self::SchemeSymbols,
            "user" | "username" => Self::User,
            "pass" | "password" => Self::Pass,
            "host" | "fqdn" => Self::Host,
            "port" => Self::Port,
            "path" => Self::Path,
            "query" => Self::Query,
            "fragment" => Self::Fragment,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| UriError::UnknownComponent {
            name: s.to_string(),
        })
    }
}

impl TryFrom<&str> for ComponentKind {
    type Error = UriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&String> for ComponentKind {
    type Error = UriError;

    fn try_from(s: &String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComponentKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ComponentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
