//! Authority reconciliation and host classification.

use std::fmt;
use std::net::Ipv4Addr;

/// Builds the authority (`user[:pass]@host[:port]`) from its parts.
///
/// Empty parts are omitted along with their separators. A password is only
/// written after a user name; on its own it contributes nothing.
///
/// # Examples
///
/// ```
/// use parsed_uri::reconcile;
///
/// assert_eq!(reconcile("user", "pass", "example.com", "777"), "user:pass@example.com:777");
/// assert_eq!(reconcile("user", "", "example.com", ""), "user@example.com");
/// assert_eq!(reconcile("", "pass", "example.com", ""), "example.com");
/// ```
#[must_use]
pub fn reconcile(user: &str, pass: &str, host: &str, port: &str) -> String {
    let mut authority =
        String::with_capacity(user.len() + pass.len() + host.len() + port.len() + 3);
    write_authority(&mut authority, user, pass, host, port);
    authority
}

pub(crate) fn write_authority(out: &mut String, user: &str, pass: &str, host: &str, port: &str) {
    if !user.is_empty() {
        out.push_str(user);
        if pass.is_empty() {
            out.push('@');
        } else {
            out.push(':');
            out.push_str(pass);
            out.push('@');
        }
    }
    if !host.is_empty() {
        out.push_str(host);
    }
    if !port.is_empty() {
        out.push(':');
        out.push_str(port);
    }
}

/// Classification of a host value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A host name (e.g., "example.com")
    Domain(String),
    /// A dotted IPv4 address (e.g., "192.168.1.1")
    Ipv4(Ipv4Addr),
}

impl Host {
    /// Classifies a host string. IPv4 dotted quads are tried first.
    #[must_use]
    pub fn classify(host: &str) -> Self {
        host.parse::<Ipv4Addr>()
            .map_or_else(|_| Self::Domain(host.to_ascii_lowercase()), Self::Ipv4)
    }

    /// Returns true if this is a loopback address or `localhost`.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        match self {
            Self::Domain(d) => d == "localhost" || d.ends_with(".localhost"),
            Self::Ipv4(ip) => ip.is_loopback(),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(d) => f.write_str(d),
            Self::Ipv4(ip) => write!(f, "{ip}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
