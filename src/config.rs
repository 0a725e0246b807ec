//! Configuration for component validation.

use crate::constants::{MAX_HOST_LENGTH, MAX_PORT_DIGITS, MAX_SCHEME_NAME_LENGTH};
use crate::scheme::SchemeSymbols;

/// Limits and defaults applied when a component is mutated.
///
/// Parsing itself is governed by the grammar; the configuration only affects
/// the validation of candidate values passed to `replace`, `append` and
/// `prepend`, plus the port length accepted at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyConfig {
    /// Maximum scheme name length.
    ///
    /// Default: 10
    pub max_scheme_name_length: usize,

    /// Maximum host length.
    ///
    /// Default: 255
    pub max_host_length: usize,

    /// Maximum number of port digits.
    ///
    /// Values above 5 are capped at 5 when applied.
    ///
    /// Default: 5
    pub max_port_digits: usize,

    /// Whether a host without any dot (`localhost`) may be set.
    ///
    /// Default: false
    pub allow_single_label_host: bool,

    /// Separator used when a scheme name is supplied on its own.
    ///
    /// Default: `://`
    pub default_scheme_symbols: SchemeSymbols,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_scheme_name_length: MAX_SCHEME_NAME_LENGTH,
            max_host_length: MAX_HOST_LENGTH,
            max_port_digits: MAX_PORT_DIGITS,
            allow_single_label_host: false,
            default_scheme_symbols: SchemeSymbols::Generic,
        }
    }
}

impl SafetyConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum scheme name length.
    #[must_use]
    pub const fn with_max_scheme_name_length(mut self, max: usize) -> Self {
        self.max_scheme_name_length = max;
        self
    }

    /// Sets the maximum host length.
    #[must_use]
    pub const fn with_max_host_length(mut self, max: usize) -> Self {
        self.max_host_length = max;
        self
    }

    /// Sets the maximum number of port digits, capped at [`MAX_PORT_DIGITS`].
    #[must_use]
    pub const fn with_max_port_digits(mut self, max: usize) -> Self {
        self.max_port_digits = max;
        self.max_port_digits = self.port_digit_limit();
        self
    }

    /// Allows or forbids single-label hosts.
    #[must_use]
    pub const fn with_allow_single_label_host(mut self, allow: bool) -> Self {
        self.allow_single_label_host = allow;
        self
    }

    /// Returns the port digit limit in effect.
    ///
    /// This is `max_port_digits`, or [`MAX_PORT_DIGITS`] if the field was
    /// set higher.
    #[must_use]
    pub const fn port_digit_limit(&self) -> usize {
        if self.max_port_digits < MAX_PORT_DIGITS {
            self.max_port_digits
        } else {
            MAX_PORT_DIGITS
        }
    }

    /// Sets the separator inferred for a bare scheme name.
    #[must_use]
    pub const fn with_default_scheme_symbols(mut self, symbols: SchemeSymbols) -> Self {
        self.default_scheme_symbols = symbols;
        self
    }
}
