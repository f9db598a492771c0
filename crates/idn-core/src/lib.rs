//! IDN: conversion between Unicode domain names / URLs and their
//! ASCII-Compatible Encoding, per Punycode (RFC 3492) and UTS46 (IDNA).
//!
//! Layered bottom-up: [`bootstring`] is the pure codec, [`uts46`] maps and
//! validates one label against the [`tables`], [`domain`] orchestrates
//! labels and the ACE prefix, [`url`] isolates the host of a URL. The
//! convenience functions below cover the common paths with the process-wide
//! tables.

pub mod bootstring;
pub mod config;
pub mod domain;
pub mod logging;
pub mod tables;
pub mod url;
pub mod uts46;

pub use bootstring::BootstringError;
pub use config::IdnConfig;
pub use domain::{Diagnostic, DomainError};
pub use url::UrlError;

/// Punycode-encodes one scalar sequence (no ACE prefix, no splitting).
pub fn punycode_encode(scalars: &[char]) -> Result<String, BootstringError> {
    bootstring::encode(scalars)
}

/// Punycode-decodes one ASCII label (no ACE prefix, no splitting).
pub fn punycode_decode(ascii: &str) -> Result<Vec<char>, BootstringError> {
    bootstring::decode(ascii)
}

/// The ASCII (ACE) form of a domain, or the error naming the failing label
/// and rule.
pub fn domain_to_ascii(domain: &str, config: &IdnConfig) -> Result<String, DomainError> {
    domain::to_ascii(domain, config)
}

/// The best-effort Unicode form of a domain. Diagnostics are dropped; use
/// [`domain::to_unicode`] to inspect them.
pub fn domain_to_unicode(domain: &str, config: &IdnConfig) -> String {
    domain::to_unicode(domain, config).0
}

/// The ASCII form of a URL: host through the domain codec, the rest
/// percent-encoded.
pub fn url_to_ascii(url: &str, config: &IdnConfig) -> Result<String, UrlError> {
    url::encode_url(url, config)
}

/// The best-effort Unicode form of a URL. Diagnostics are dropped; use
/// [`url::decode_url`] to inspect them.
pub fn url_to_unicode(url: &str, config: &IdnConfig) -> String {
    url::decode_url(url, config).0
}
