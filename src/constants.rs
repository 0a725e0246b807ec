//! Constants for URI parsing and component validation.

/// Maximum length of a scheme name (`https`, `mailto`, ...).
pub const MAX_SCHEME_NAME_LENGTH: usize = 10;

/// Maximum host length in characters.
pub const MAX_HOST_LENGTH: usize = 255;

/// Maximum number of digits in a port.
pub const MAX_PORT_DIGITS: usize = 5;

/// Keys of the component map, in serialization order.
pub const COMPONENT_MAP_KEYS: [&str; 11] = [
    "scheme",
    "scheme_name",
    "scheme_symbols",
    "user",
    "pass",
    "host",
    "port",
    "authority",
    "path",
    "query",
    "fragment",
];
