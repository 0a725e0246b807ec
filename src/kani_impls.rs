//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! The harnesses stay away from the grammar, whose compiled regex is far
//! beyond what the model checker can unwind. They cover the authority
//! reconciler and the port rule instead.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{ComponentKind, SchemeSymbols, reconcile, validate};

/// Characters used for generated credential and host text, including the
/// delimiters the reconciler writes itself.
const TEXT_CHARS: &[u8] = b"ab1:@.";

/// Characters used for generated port candidates.
const PORT_CHARS: &[u8] = b"0123456789:a ";

fn arbitrary_text(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for SchemeSymbols {
    fn any() -> Self {
        match kani::any::<u8>() % 4 {
            0 => Self::None,
            1 => Self::Generic,
            2 => Self::Colon,
            _ => Self::Inherit,
        }
    }
}

impl kani::Arbitrary for ComponentKind {
    fn any() -> Self {
        let idx: usize = kani::any();
        Self::ALL[idx % Self::ALL.len()]
    }
}

/// Proof: a password never reaches the authority without a user
#[kani::proof]
#[kani::unwind(6)]
fn proof_reconcile_drops_orphan_password() {
    let pass = arbitrary_text(TEXT_CHARS, 3);
    let host = arbitrary_text(b"ab.", 3);
    let port = arbitrary_text(b"01", 2);

    let authority = reconcile("", &pass, &host, &port);
    let expected = if port.is_empty() {
        host.clone()
    } else {
        format!("{host}:{port}")
    };
    assert_eq!(authority, expected);
}

/// Proof: the authority starts with the user and an `@` follows the user info
#[kani::proof]
#[kani::unwind(6)]
fn proof_reconcile_user_info_prefix() {
    let user = arbitrary_text(b"ab", 3);
    let pass = arbitrary_text(b"ab", 2);
    kani::assume(!user.is_empty());

    let authority = reconcile(&user, &pass, "h", "");
    assert!(authority.starts_with(&user));
    assert!(authority.ends_with("@h"));
    assert_eq!(authority.contains(':'), !pass.is_empty());
}

/// Proof: an accepted port is at most five ASCII digits without a colon
#[kani::proof]
#[kani::unwind(8)]
fn proof_port_validation() {
    let candidate = arbitrary_text(PORT_CHARS, 6);

    if let Ok(port) = validate(ComponentKind::Port, &candidate) {
        assert!(port.len() <= 5);
        assert!(port.bytes().all(|b| b.is_ascii_digit()));
    }
}

/// Proof: every separator survives its text form
#[kani::proof]
fn proof_scheme_symbols_roundtrip() {
    let symbols: SchemeSymbols = kani::any();
    assert_eq!(SchemeSymbols::from_separator(symbols.as_str()), Some(symbols));
}

/// Proof: every kind resolves from its own name
#[kani::proof]
#[kani::unwind(16)]
fn proof_component_kind_names() {
    let kind: ComponentKind = kani::any();
    assert_eq!(kind.as_str().parse::<ComponentKind>().ok(), Some(kind));
}
