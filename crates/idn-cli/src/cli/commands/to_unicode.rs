//! to-unicode command: best-effort Unicode form of a domain.

use idn_core::config::IdnConfig;
use idn_core::domain;

/// Convert and print the Unicode form of the given domain. Diagnostics go
/// to stderr when asked for; the conversion itself never fails.
pub fn run_to_unicode(domain_input: &str, cfg: &IdnConfig, verbose: bool) {
    let (unicode, diagnostics) = domain::to_unicode(domain_input, cfg);
    if verbose {
        for diagnostic in &diagnostics {
            eprintln!("diagnostic: {diagnostic:?}");
        }
    }
    println!("{unicode}");
}
