//! Query string decoding and key/value encoding.

use std::collections::BTreeMap;
use std::fmt;

/// Query parameters decoded from a query string.
///
/// Pairs are decoded as `application/x-www-form-urlencoded` (`+` is a
/// space, `%XX` escapes are decoded). When a key repeats, the last value
/// wins. Keys are kept sorted for a stable iteration order.
///
/// # Examples
///
/// ```
/// use parsed_uri::QueryParams;
///
/// let params = QueryParams::parse("q=rust+uri&page=2&page=3");
/// assert_eq!(params.get("q"), Some("rust uri"));
/// assert_eq!(params.get("page"), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a query string (without leading '?').
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let params = form_urlencoded::parse(input.as_bytes())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { params }
    }

    /// Returns the value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the parameters, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.params
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_query_pairs(self.iter()))
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Encodes key/value pairs as an `application/x-www-form-urlencoded` string.
///
/// # Examples
///
/// ```
/// use parsed_uri::encode_query_pairs;
///
/// let query = encode_query_pairs([("q", "rust uri"), ("lang", "en")]);
/// assert_eq!(query, "q=rust+uri&lang=en");
/// ```
pub fn encode_query_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
