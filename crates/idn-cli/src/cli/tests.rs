//! CLI parsing tests: argument shapes and flag layering, no I/O.

use super::*;
use clap::Parser;

#[test]
fn parses_to_ascii() {
    let cli = Cli::try_parse_from(["idn", "to-ascii", "www.bücher.ch"]).unwrap();
    match cli.command {
        CliCommand::ToAscii { domain } => assert_eq!(domain, "www.bücher.ch"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_to_unicode_with_verbose() {
    let cli = Cli::try_parse_from(["idn", "to-unicode", "xn--r8jz45g", "--verbose"]).unwrap();
    match cli.command {
        CliCommand::ToUnicode { domain, verbose } => {
            assert_eq!(domain, "xn--r8jz45g");
            assert!(verbose);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_url_commands() {
    let cli = Cli::try_parse_from(["idn", "encode-url", "http://bücher.ch/"]).unwrap();
    assert!(matches!(cli.command, CliCommand::EncodeUrl { .. }));
    let cli = Cli::try_parse_from(["idn", "decode-url", "http://xn--bcher-kva.ch/"]).unwrap();
    assert!(matches!(cli.command, CliCommand::DecodeUrl { .. }));
}

#[test]
fn parses_puny_commands() {
    let cli = Cli::try_parse_from(["idn", "puny-encode", "bücher"]).unwrap();
    assert!(matches!(cli.command, CliCommand::PunyEncode { .. }));
    let cli = Cli::try_parse_from(["idn", "puny-decode", "bcher-kva"]).unwrap();
    assert!(matches!(cli.command, CliCommand::PunyDecode { .. }));
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli =
        Cli::try_parse_from(["idn", "to-ascii", "faß.de", "--transitional", "--std3"]).unwrap();
    assert!(cli.flags.transitional);
    assert!(cli.flags.std3);
    assert!(!cli.flags.bidi);
}

#[test]
fn flag_overrides_layer_over_config() {
    let overrides = FlagOverrides {
        transitional: true,
        bidi: true,
        ..FlagOverrides::default()
    };
    let cfg = overrides.apply(IdnConfig::default());
    assert!(cfg.transitional);
    assert!(cfg.check_bidi);
    assert!(cfg.check_contextj, "untouched flags keep their defaults");
    assert!(!cfg.use_std3_ascii_rules);
}

#[test]
fn no_contextj_disables_the_default() {
    let overrides = FlagOverrides {
        no_contextj: true,
        ..FlagOverrides::default()
    };
    let cfg = overrides.apply(IdnConfig::default());
    assert!(!cfg.check_contextj);
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["idn"]).is_err());
}
