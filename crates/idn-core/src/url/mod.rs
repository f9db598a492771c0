//! URL-level conversion: the host goes through the domain codec, every
//! other component through percent-encoding.

pub mod parts;
mod percent;

use crate::config::IdnConfig;
use crate::domain::{self, Diagnostic, DomainError};
use crate::tables::{self, MappingTables};
use thiserror::Error;

/// Hard failure of the strict URL encode path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The input has no authority section to take a host from.
    #[error("no host found in URL")]
    HostNotFound,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Converts a URL's host to ACE form and percent-encodes the remaining
/// components, using the process-wide tables.
pub fn encode_url(url: &str, config: &IdnConfig) -> Result<String, UrlError> {
    let tables = tables::shared().map_err(DomainError::from)?;
    encode_url_with(url, tables, config)
}

/// Strict URL encoding with explicit tables.
pub fn encode_url_with(
    url: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> Result<String, UrlError> {
    let mut split = parts::split(url);
    match split.authority.as_mut() {
        Some(authority) => {
            authority.host = domain::to_ascii_with(&authority.host, tables, config)?;
            authority.userinfo = authority
                .userinfo
                .take()
                .map(|userinfo| percent::encode_userinfo(&userinfo));
        }
        None => return Err(UrlError::HostNotFound),
    }
    split.path_and_query = percent::encode_component(&split.path_and_query);
    split.fragment = split
        .fragment
        .take()
        .map(|fragment| percent::encode_component(&fragment));
    let joined = split.join();
    tracing::debug!(url, ascii = %joined, "URL converted to ASCII form");
    Ok(joined)
}

/// Best-effort Unicode form of a URL, using the process-wide tables.
pub fn decode_url(url: &str, config: &IdnConfig) -> (String, Vec<Diagnostic>) {
    match tables::shared() {
        Ok(tables) => decode_url_with(url, tables, config),
        Err(error) => (
            url.to_string(),
            vec![Diagnostic::TablesUnavailable { error }],
        ),
    }
}

/// Best-effort URL decoding with explicit tables. Inputs without an
/// authority are treated as a single non-host component and only
/// percent-decoded; the permissive family never fails on shape.
pub fn decode_url_with(
    url: &str,
    tables: &MappingTables,
    config: &IdnConfig,
) -> (String, Vec<Diagnostic>) {
    let mut split = parts::split(url);
    let mut diagnostics = Vec::new();
    if let Some(authority) = split.authority.as_mut() {
        let (host, mut host_diagnostics) =
            domain::to_unicode_with(&authority.host, tables, config);
        authority.host = host;
        diagnostics.append(&mut host_diagnostics);
        authority.userinfo = authority
            .userinfo
            .take()
            .map(|userinfo| percent::decode_component(&userinfo));
    }
    split.path_and_query = percent::decode_component(&split.path_and_query);
    split.fragment = split
        .fragment
        .take()
        .map(|fragment| percent::decode_component(&fragment));
    (split.join(), diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> IdnConfig {
        IdnConfig::default()
    }

    #[test]
    fn host_is_idna_encoded_and_path_percent_encoded() {
        assert_eq!(
            encode_url("http://www.bücher.ch/", &cfg()).unwrap(),
            "http://www.xn--bcher-kva.ch/"
        );
        assert_eq!(
            encode_url("http://www.bücher.ch/bücher", &cfg()).unwrap(),
            "http://www.xn--bcher-kva.ch/b%C3%BCcher"
        );
    }

    #[test]
    fn fragment_is_percent_encoded() {
        assert_eq!(
            encode_url("https://www.google.co.jp/webhp?foo#q=渋谷", &cfg()).unwrap(),
            "https://www.google.co.jp/webhp?foo#q=%E6%B8%8B%E8%B0%B7"
        );
        assert_eq!(
            encode_url("https://www.google.co.jp/webhp?foo#q=%20渋谷", &cfg()).unwrap(),
            "https://www.google.co.jp/webhp?foo#q=%20%E6%B8%8B%E8%B0%B7"
        );
    }

    #[test]
    fn ascii_urls_pass_through() {
        assert_eq!(
            encode_url("http://localhost:3000", &cfg()).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            encode_url("https://foobar.com/", &cfg()).unwrap(),
            "https://foobar.com/"
        );
    }

    #[test]
    fn query_only_non_ascii_is_percent_encoded() {
        assert_eq!(
            encode_url("http://localhost?fü", &cfg()).unwrap(),
            "http://localhost?f%C3%BC"
        );
    }

    #[test]
    fn empty_query_and_fragment_are_preserved() {
        assert_eq!(
            encode_url("https://derailer.org/foo#", &cfg()).unwrap(),
            "https://derailer.org/foo#"
        );
        assert_eq!(
            encode_url("https://derailer.org/foo?", &cfg()).unwrap(),
            "https://derailer.org/foo?"
        );
        assert_eq!(encode_url("https://?", &cfg()).unwrap(), "https://?");
    }

    #[test]
    fn protocol_relative_urls_encode_their_host() {
        assert_eq!(encode_url("//bücher", &cfg()).unwrap(), "//xn--bcher-kva");
        assert_eq!(
            encode_url("//bücher/bücher", &cfg()).unwrap(),
            "//xn--bcher-kva/b%C3%BCcher"
        );
        // Triple slash: empty host, everything else is path.
        assert_eq!(
            encode_url("///bücher", &cfg()).unwrap(),
            "///b%C3%BCcher"
        );
    }

    #[test]
    fn no_authority_means_no_host() {
        assert!(matches!(
            encode_url("foo/bar", &cfg()),
            Err(UrlError::HostNotFound)
        ));
    }

    #[test]
    fn bad_host_fails_encoding() {
        assert!(matches!(
            encode_url("http://a\u{0001}b.com/x", &cfg()),
            Err(UrlError::Domain(DomainError::Label { .. }))
        ));
    }

    #[test]
    fn userinfo_is_percent_encoded() {
        assert_eq!(
            encode_url("https://usär@bücher.ch/", &cfg()).unwrap(),
            "https://us%C3%A4r@xn--bcher-kva.ch/"
        );
    }

    #[test]
    fn decode_url_inverts_encode_url() {
        for (encoded, unicode) in [
            ("http://www.xn--bcher-kva.ch/", "http://www.bücher.ch/"),
            (
                "http://www.xn--bcher-kva.ch/b%C3%BCcher",
                "http://www.bücher.ch/bücher",
            ),
            (
                "https://www.google.co.jp/webhp?foo#q=%E6%B8%8B%E8%B0%B7",
                "https://www.google.co.jp/webhp?foo#q=渋谷",
            ),
            ("http://localhost:3000", "http://localhost:3000"),
            ("http://localhost?f%C3%BC", "http://localhost?fü"),
        ] {
            let (decoded, diagnostics) = decode_url(encoded, &cfg());
            assert_eq!(decoded, unicode);
            assert!(diagnostics.is_empty(), "no diagnostics for {encoded:?}");
        }
    }

    #[test]
    fn decode_url_without_authority_percent_decodes_only() {
        let (decoded, diagnostics) = decode_url("foo/b%C3%A4r", &cfg());
        assert_eq!(decoded, "foo/bär");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn decode_url_records_host_diagnostics() {
        let (decoded, diagnostics) = decode_url("http://xn--0.pt/x", &cfg());
        assert_eq!(decoded, "http://xn--0.pt/x");
        assert_eq!(diagnostics.len(), 1);
    }
}
