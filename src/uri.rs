//! Main URI type: construction, reset and component mutation.

use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::component::ComponentKind;
use crate::components::Components;
use crate::config::SafetyConfig;
use crate::error::{ParseError, ParseErrorKind, UriError, ValidationError};
use crate::grammar::match_components;
use crate::path_info::PathInfo;
use crate::query::{QueryParams, encode_query_pairs};
use crate::safety::Safety;

/// The input a [`ParsedUri`] was constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Text(String),
    Bytes(Vec<u8>),
}

/// How a mutation combines the new value with the current one.
#[derive(Debug, Clone, Copy)]
enum Edit {
    Replace,
    Append,
    Prepend,
}

/// A parsed URI that can be inspected, mutated and reserialized.
///
/// Construction never fails. If the input cannot be parsed the instance is
/// in the error state: [`is_error`](Self::is_error) returns true and every
/// read or mutation returns [`UriError::Parse`] until the instance is given
/// new input with [`reinitialize`](Self::reinitialize).
///
/// # Structure
///
/// ```text
/// [scheme_name][scheme_symbols][user[:pass]@]host[:port][path][?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use parsed_uri::ParsedUri;
///
/// let mut uri = ParsedUri::parse("http://google.com/foo");
/// assert_eq!(uri.append("PATH", "/bar").unwrap(), "http://google.com/foo/bar");
/// assert_eq!(uri.prepend("host", "www.").unwrap(), "http://www.google.com/foo/bar");
/// assert_eq!(uri.replace("scheme", "https").unwrap(), "https://www.google.com/foo/bar");
///
/// uri.reset();
/// assert_eq!(uri.to_string().unwrap(), "http://google.com/foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri {
    source: Source,
    config: SafetyConfig,
    state: Result<Components, ParseError>,
}

impl ParsedUri {
    /// Parses a URI with the default [`SafetyConfig`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::with_config(input, SafetyConfig::default())
    }

    /// Parses a URI using `config` for this and every later mutation.
    #[must_use]
    pub fn with_config(input: &str, config: SafetyConfig) -> Self {
        Self::construct(Source::Text(input.to_string()), config)
    }

    /// Parses raw bytes as a URI.
    ///
    /// Bytes that are not valid UTF-8 put the instance in the error state
    /// with [`ParseErrorKind::InputType`].
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::ParsedUri;
    ///
    /// assert!(!ParsedUri::from_bytes(b"example.com").is_error());
    ///
    /// let uri = ParsedUri::from_bytes([0xff, 0xfe]);
    /// assert!(uri.error().unwrap().is_input_type());
    /// ```
    #[must_use]
    pub fn from_bytes(input: impl AsRef<[u8]>) -> Self {
        Self::construct(Source::Bytes(input.as_ref().to_vec()), SafetyConfig::default())
    }

    fn construct(source: Source, config: SafetyConfig) -> Self {
        let state = Self::build(&source, &config);
        Self {
            source,
            config,
            state,
        }
    }

    fn build(source: &Source, config: &SafetyConfig) -> Result<Components, ParseError> {
        let input = match source {
            Source::Text(text) => text.as_str(),
            Source::Bytes(bytes) => std::str::from_utf8(bytes).map_err(|e| {
                debug!(valid_up_to = e.valid_up_to(), "URI input is not valid UTF-8");
                ParseError {
                    input: String::from_utf8_lossy(bytes).into_owned(),
                    kind: ParseErrorKind::InputType {
                        valid_up_to: e.valid_up_to(),
                    },
                }
            })?,
        };
        Self::build_components(input, config)
    }

    fn build_components(input: &str, config: &SafetyConfig) -> Result<Components, ParseError> {
        let fail = |reason: &'static str| {
            debug!(input, reason, "failed to parse URI");
            ParseError::grammar(input, reason)
        };

        if input.is_empty() {
            return Err(fail("input is empty"));
        }

        let raw = match_components(input)
            .ok_or_else(|| fail("could not parse the input as a URI: no host found"))?;

        if raw.port.len() > config.port_digit_limit() {
            return Err(fail("port has too many digits"));
        }

        if raw.matched_len < input.len() {
            debug!(ignored = &input[raw.matched_len..], "ignoring text after the URI");
        }

        Ok(Components::from_raw(&raw))
    }

    /// Discards every mutation by parsing the stored input again.
    pub fn reset(&mut self) {
        trace!("resetting URI");
        self.state = Self::build(&self.source, &self.config);
    }

    /// Replaces the stored input and parses it.
    ///
    /// The configuration is kept. This is the only way out of the error
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::ParsedUri;
    ///
    /// let mut uri = ParsedUri::parse("");
    /// assert!(uri.is_error());
    ///
    /// uri.reinitialize("example.com");
    /// assert_eq!(uri.to_string().unwrap(), "example.com");
    /// ```
    pub fn reinitialize(&mut self, input: impl Into<String>) {
        self.source = Source::Text(input.into());
        self.reset();
    }

    /// Returns true if construction failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.state.is_err()
    }

    /// Returns the construction error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.state.as_ref().err()
    }

    /// Returns the construction error message, if any.
    #[must_use]
    pub fn error_msg(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Returns the original input, or `None` if it was not valid UTF-8.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match &self.source {
            Source::Text(text) => Some(text),
            Source::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
        }
    }

    /// Returns the original input as bytes.
    #[must_use]
    pub fn input_bytes(&self) -> &[u8] {
        match &self.source {
            Source::Text(text) => text.as_bytes(),
            Source::Bytes(bytes) => bytes,
        }
    }

    /// Returns the configuration used for validation.
    #[must_use]
    pub const fn config(&self) -> &SafetyConfig {
        &self.config
    }

    /// Returns the parsed components.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    pub fn components(&self) -> Result<&Components, UriError> {
        self.state.as_ref().map_err(|e| UriError::Parse(e.clone()))
    }

    /// Returns every component, plus the derived authority, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    pub fn as_map(&self) -> Result<BTreeMap<&'static str, String>, UriError> {
        self.components().map(Components::as_map)
    }

    /// Serializes the current components.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    pub fn to_string(&self) -> Result<String, UriError> {
        self.components().map(Components::serialize)
    }

    /// Breaks the path into directory, file name and segments.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://example.com/path/to/script.php");
    /// let info = uri.path_segments().unwrap();
    /// assert_eq!(info.dirname(), "/path/to");
    /// assert_eq!(info.extension(), Some("php"));
    /// ```
    pub fn path_segments(&self) -> Result<PathInfo, UriError> {
        self.components().map(|c| PathInfo::from_path(c.path()))
    }

    /// Decodes the query into key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    pub fn query_map(&self) -> Result<QueryParams, UriError> {
        self.components().map(|c| QueryParams::parse(c.query()))
    }

    /// Replaces a component with `value`.
    ///
    /// `kind` is a [`ComponentKind`] or a component name such as `"host"`.
    /// Returns the serialized URI after the change.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if:
    /// - The instance failed to parse
    /// - The component name is not recognized
    /// - The value is rejected by validation
    ///
    /// The URI is unchanged on error.
    pub fn replace<K>(&mut self, kind: K, value: &str) -> Result<String, UriError>
    where
        K: TryInto<ComponentKind>,
        UriError: From<K::Error>,
    {
        self.mutate(kind, Edit::Replace, value)
    }

    /// Appends `value` to a component.
    ///
    /// The combined value is validated as a whole.
    ///
    /// # Errors
    ///
    /// Same as [`replace`](Self::replace).
    pub fn append<K>(&mut self, kind: K, value: &str) -> Result<String, UriError>
    where
        K: TryInto<ComponentKind>,
        UriError: From<K::Error>,
    {
        self.mutate(kind, Edit::Append, value)
    }

    /// Prepends `value` to a component.
    ///
    /// The combined value is validated as a whole.
    ///
    /// # Errors
    ///
    /// Same as [`replace`](Self::replace).
    pub fn prepend<K>(&mut self, kind: K, value: &str) -> Result<String, UriError>
    where
        K: TryInto<ComponentKind>,
        UriError: From<K::Error>,
    {
        self.mutate(kind, Edit::Prepend, value)
    }

    /// Replaces the query with form-encoded key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsed_uri::ParsedUri;
    ///
    /// let mut uri = ParsedUri::parse("example.com?old=1");
    /// let out = uri.replace_query_pairs([("q", "rust uri"), ("page", "2")]).unwrap();
    /// assert_eq!(out, "example.com?q=rust+uri&page=2");
    /// ```
    pub fn replace_query_pairs<I, K, V>(&mut self, pairs: I) -> Result<String, UriError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.mutate(ComponentKind::Query, Edit::Replace, &encode_query_pairs(pairs))
    }

    /// Adds form-encoded key/value pairs after the existing query.
    ///
    /// # Errors
    ///
    /// Returns `UriError::Parse` if construction failed.
    pub fn append_query_pairs<I, K, V>(&mut self, pairs: I) -> Result<String, UriError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = encode_query_pairs(pairs);
        let has_query = !self.components()?.query().is_empty();
        if has_query && !encoded.is_empty() {
            self.mutate(ComponentKind::Query, Edit::Append, &format!("&{encoded}"))
        } else {
            self.mutate(ComponentKind::Query, Edit::Append, &encoded)
        }
    }

    fn mutate<K>(&mut self, kind: K, edit: Edit, value: &str) -> Result<String, UriError>
    where
        K: TryInto<ComponentKind>,
        UriError: From<K::Error>,
    {
        let components = self.state.as_mut().map_err(|e| UriError::Parse(e.clone()))?;
        let kind = kind.try_into()?;

        let candidate = match edit {
            Edit::Replace => value.to_string(),
            Edit::Append => format!("{}{value}", components.get(kind)),
            Edit::Prepend => format!("{value}{}", components.get(kind)),
        };

        let reject = |source: ValidationError| {
            debug!(
                %kind,
                ?edit,
                candidate = candidate.as_str(),
                %source,
                "rejected URI component value"
            );
            UriError::Validation { kind, source }
        };

        let normalized = Safety::new(&self.config)
            .validate(kind, &candidate)
            .map_err(reject)?;
        components
            .set(kind, normalized, self.config.default_scheme_symbols)
            .map_err(reject)?;

        let uri = components.serialize();
        trace!(%kind, ?edit, %uri, "updated URI component");
        Ok(uri)
    }
}

impl FromStr for ParsedUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = Self::parse(s);
        if let Some(e) = uri.error().cloned() {
            return Err(e);
        }
        Ok(uri)
    }
}

impl TryFrom<&str> for ParsedUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.state {
            Ok(components) => serializer.collect_str(components),
            Err(e) => Err(serde::ser::Error::custom(e)),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
