//! encode-url command: URL host to ACE, other components percent-encoded.

use anyhow::Result;
use idn_core::config::IdnConfig;
use idn_core::url;

/// Convert and print the ASCII form of the given URL.
pub fn run_encode_url(url_input: &str, cfg: &IdnConfig) -> Result<()> {
    let ascii = url::encode_url(url_input, cfg)?;
    println!("{ascii}");
    Ok(())
}
