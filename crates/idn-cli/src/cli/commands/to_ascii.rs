//! to-ascii command: domain to its ACE form.

use anyhow::Result;
use idn_core::config::IdnConfig;
use idn_core::domain;

/// Convert and print the ASCII form of the given domain.
pub fn run_to_ascii(domain_input: &str, cfg: &IdnConfig) -> Result<()> {
    let ascii = domain::to_ascii(domain_input, cfg)?;
    println!("{ascii}");
    Ok(())
}
