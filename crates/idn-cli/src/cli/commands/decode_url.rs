//! decode-url command: best-effort Unicode form of a URL.

use idn_core::config::IdnConfig;
use idn_core::url;

/// Convert and print the Unicode form of the given URL.
pub fn run_decode_url(url_input: &str, cfg: &IdnConfig) {
    let (unicode, _diagnostics) = url::decode_url(url_input, cfg);
    println!("{unicode}");
}
