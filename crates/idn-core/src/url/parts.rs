//! URL shape splitting.
//!
//! Minimal grammar, just enough to isolate the host:
//! `[scheme://][userinfo@]host[:port][/path][?query][#fragment]`, plus the
//! protocol-relative `//host…` form. Everything between the authority and
//! the fragment stays one path-and-query component.

/// Authority section of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Authority {
    /// Raw userinfo (`user` or `user:pass`), without the trailing `@`.
    pub userinfo: Option<String>,
    /// Host exactly as written, possibly empty.
    pub host: String,
    /// Port digits as written, without the leading `:`.
    pub port: Option<String>,
}

/// A URL split into codec-relevant parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Scheme without the `://`, when present.
    pub scheme: Option<String>,
    /// Authority, when the input has one.
    pub authority: Option<Authority>,
    /// Path and query, exactly as written, up to the fragment marker.
    pub path_and_query: String,
    /// Fragment without the leading `#`; `Some("")` when the input ends in
    /// a bare `#`.
    pub fragment: Option<String>,
}

/// Splits a URL string. Never fails: inputs without a recognizable
/// authority come back with `authority: None` and everything in
/// `path_and_query`.
pub fn split(url: &str) -> UrlParts {
    let (rest, fragment) = match url.find('#') {
        Some(pos) => (&url[..pos], Some(url[pos + 1..].to_string())),
        None => (url, None),
    };
    let (scheme, after_scheme) = match rest.find("://") {
        Some(pos) if is_scheme(&rest[..pos]) => {
            (Some(rest[..pos].to_string()), &rest[pos + 3..])
        }
        _ => (None, rest),
    };
    let (has_authority, after_slashes) = if scheme.is_some() {
        (true, after_scheme)
    } else if let Some(stripped) = after_scheme.strip_prefix("//") {
        (true, stripped)
    } else {
        (false, after_scheme)
    };
    if !has_authority {
        return UrlParts {
            scheme: None,
            authority: None,
            path_and_query: after_slashes.to_string(),
            fragment,
        };
    }
    let (authority, path_and_query) = match after_slashes.find(['/', '?']) {
        Some(pos) => (&after_slashes[..pos], &after_slashes[pos..]),
        None => (after_slashes, ""),
    };
    UrlParts {
        scheme,
        authority: Some(parse_authority(authority)),
        path_and_query: path_and_query.to_string(),
        fragment,
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn parse_authority(authority: &str) -> Authority {
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(pos) => (
            Some(authority[..pos].to_string()),
            &authority[pos + 1..],
        ),
        None => (None, authority),
    };
    // IPv6 literals keep their colons inside the brackets.
    let (host, port) = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(end) => (
                host_port[..=end].to_string(),
                host_port[end + 1..]
                    .strip_prefix(':')
                    .map(|p| p.to_string()),
            ),
            None => (host_port.to_string(), None),
        }
    } else {
        match host_port.rfind(':') {
            Some(pos) => (
                host_port[..pos].to_string(),
                Some(host_port[pos + 1..].to_string()),
            ),
            None => (host_port.to_string(), None),
        }
    };
    Authority {
        userinfo,
        host,
        port,
    }
}

impl UrlParts {
    /// Reassembles the parts into a URL string.
    pub fn join(&self) -> String {
        let mut out = String::new();
        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push_str("://");
        } else if self.authority.is_some() {
            out.push_str("//");
        }
        if let Some(authority) = &self.authority {
            if let Some(userinfo) = &authority.userinfo {
                out.push_str(userinfo);
                out.push('@');
            }
            out.push_str(&authority.host);
            if let Some(port) = &authority.port {
                out.push(':');
                out.push_str(port);
            }
        }
        out.push_str(&self.path_and_query);
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}
