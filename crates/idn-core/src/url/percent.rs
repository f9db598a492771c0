//! Percent-encoding policy for non-host URL components.
//!
//! Existing `%XX` escapes pass through untouched on encode (no double
//! encoding), and decode leaves malformed escapes in place; both directions
//! are therefore safe on already-encoded input.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped in path, query, and fragment components: controls, space,
/// and the characters unsafe in a URL. `%` and the reserved set (`/`, `?`,
/// `#`, `&`, `=`, …) pass through so component structure survives.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Userinfo additionally escapes the separators that would change the
/// authority shape. `:` stays, splitting user from password.
const USERINFO: &AsciiSet = &COMPONENT
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'@')
    .add(b'[')
    .add(b']');

/// Percent-encodes a path, query, or fragment component.
pub fn encode_component(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Percent-encodes a userinfo component.
pub fn encode_userinfo(component: &str) -> String {
    utf8_percent_encode(component, USERINFO).to_string()
}

/// Decodes `%XX` escapes. Malformed escapes and sequences that do not form
/// UTF-8 are left as given.
pub fn decode_component(component: &str) -> String {
    match percent_decode_str(component).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => component.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(encode_component("/bücher"), "/b%C3%BCcher");
        assert_eq!(encode_component("q=渋谷"), "q=%E6%B8%8B%E8%B0%B7");
    }

    #[test]
    fn space_is_escaped() {
        assert_eq!(encode_component("/foo bar/"), "/foo%20bar/");
    }

    #[test]
    fn existing_escapes_are_not_doubled() {
        assert_eq!(encode_component("q=%20渋谷"), "q=%20%E6%B8%8B%E8%B0%B7");
    }

    #[test]
    fn reserved_structure_survives() {
        assert_eq!(encode_component("/a/b?c=d&e=f"), "/a/b?c=d&e=f");
    }

    #[test]
    fn decode_inverts_encode() {
        for s in ["/bücher", "q=渋谷", "/foo bar/", "plain"] {
            assert_eq!(decode_component(&encode_component(s)), s);
        }
    }

    #[test]
    fn malformed_escape_is_left_alone() {
        assert_eq!(decode_component("abc%zz"), "abc%zz");
        assert_eq!(decode_component("abc%"), "abc%");
    }

    #[test]
    fn userinfo_escapes_authority_separators() {
        assert_eq!(encode_userinfo("user:pä@ss"), "user:p%C3%A4%40ss");
    }
}
