//! puny-encode / puny-decode commands: the raw bootstring codec.

use anyhow::Result;
use idn_core::bootstring;

/// Encode one label and print its bootstring ASCII form.
pub fn run_puny_encode(label: &str) -> Result<()> {
    let scalars: Vec<char> = label.chars().collect();
    let encoded = bootstring::encode(&scalars)?;
    println!("{encoded}");
    Ok(())
}

/// Decode one bootstring ASCII label and print its Unicode form.
pub fn run_puny_decode(label: &str) -> Result<()> {
    let decoded: String = bootstring::decode(label)?.into_iter().collect();
    println!("{decoded}");
    Ok(())
}
