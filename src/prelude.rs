//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use parsed_uri::prelude::*;
//!
//! let mut uri = ParsedUri::parse("http://example.com/sample");
//! uri.replace(ComponentKind::Scheme, "https").unwrap();
//! ```
//!
//! The grammar matcher and the free-standing validator are left out; import
//! them from the crate root when needed.

pub use crate::{
    // Core types
    ComponentKind, Components, Host, ParsedUri, PathInfo, QueryParams, SchemeSymbols,
    // Configuration
    SafetyConfig,
    // Errors
    ParseError, ParseErrorKind, UriError, ValidationError,
    // Constants
    MAX_HOST_LENGTH, MAX_PORT_DIGITS, MAX_SCHEME_NAME_LENGTH,
};
