//! CLI for the IDN converter.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use idn_core::config::{self, IdnConfig};

use commands::{
    run_decode_url, run_encode_url, run_puny_decode, run_puny_encode, run_to_ascii,
    run_to_unicode,
};

/// Top-level CLI for the IDN converter.
#[derive(Debug, Parser)]
#[command(name = "idn")]
#[command(
    about = "IDN: Punycode/UTS46 converter for internationalized domains and URLs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,

    #[command(flatten)]
    pub flags: FlagOverrides,
}

/// Processing-flag overrides layered over the loaded config.
#[derive(Debug, Default, Args)]
pub struct FlagOverrides {
    /// Use legacy IDNA2003-compatible deviation mappings (ß becomes ss).
    #[arg(long, global = true)]
    pub transitional: bool,

    /// Restrict ASCII to letters, digits, and hyphen (STD3).
    #[arg(long = "std3", global = true)]
    pub std3: bool,

    /// Enforce the Bidi Rule per label.
    #[arg(long, global = true)]
    pub bidi: bool,

    /// Enforce contextual-character rules (middle dot, digit mixing, ...).
    #[arg(long, global = true)]
    pub contexto: bool,

    /// Disable the joiner context rules.
    #[arg(long = "no-contextj", global = true)]
    pub no_contextj: bool,
}

impl FlagOverrides {
    /// Flags only ever tighten (or, for contextj, loosen) the loaded
    /// config; absent flags leave it alone.
    pub fn apply(&self, mut cfg: IdnConfig) -> IdnConfig {
        cfg.transitional |= self.transitional;
        cfg.use_std3_ascii_rules |= self.std3;
        cfg.check_bidi |= self.bidi;
        cfg.check_contexto |= self.contexto;
        if self.no_contextj {
            cfg.check_contextj = false;
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a Unicode domain to its ASCII (ACE) form.
    ToAscii {
        /// Domain to convert, e.g. "www.bücher.ch".
        domain: String,
    },

    /// Convert an ACE domain back to Unicode (best effort).
    ToUnicode {
        /// Domain to convert, e.g. "www.xn--bcher-kva.ch".
        domain: String,

        /// Print recorded diagnostics to stderr.
        #[arg(long)]
        verbose: bool,
    },

    /// Convert a URL with a Unicode host to its ASCII form.
    EncodeUrl {
        /// URL to convert, e.g. "http://www.bücher.ch/bücher".
        url: String,
    },

    /// Convert an encoded URL back to Unicode (best effort).
    DecodeUrl {
        /// URL to convert, e.g. "http://www.xn--bcher-kva.ch/b%C3%BCcher".
        url: String,
    },

    /// Punycode-encode one label (no ACE prefix, no domain splitting).
    PunyEncode {
        /// Label to encode, e.g. "bücher".
        label: String,
    },

    /// Punycode-decode one label (no ACE prefix, no domain splitting).
    PunyDecode {
        /// Label to decode, e.g. "bcher-kva".
        label: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.flags.apply(config::load_or_init()?);
        tracing::debug!("effective config: {:?}", cfg);

        match cli.command {
            CliCommand::ToAscii { domain } => run_to_ascii(&domain, &cfg)?,
            CliCommand::ToUnicode { domain, verbose } => run_to_unicode(&domain, &cfg, verbose),
            CliCommand::EncodeUrl { url } => run_encode_url(&url, &cfg)?,
            CliCommand::DecodeUrl { url } => run_decode_url(&url, &cfg),
            CliCommand::PunyEncode { label } => run_puny_encode(&label)?,
            CliCommand::PunyDecode { label } => run_puny_decode(&label)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
