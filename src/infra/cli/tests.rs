use clap::Parser;

use super::{Args, DEFAULT_PORT};

#[test]
fn defaults_match_the_documented_flags() {
    let args = Args::try_parse_from(["webtray"]).expect("parse");
    assert_eq!(args.port, DEFAULT_PORT);
    assert!(!args.debug);
}

#[test]
fn short_flags_override_the_defaults() {
    let args = Args::try_parse_from(["webtray", "-p", "8080", "-d"]).expect("parse");
    assert_eq!(args.port, 8080);
    assert!(args.debug);
}

#[test]
fn long_flags_are_accepted() {
    let args = Args::try_parse_from(["webtray", "--port", "4100", "--debug"]).expect("parse");
    assert_eq!(args.port, 4100);
    assert!(args.debug);
}

#[test]
fn non_numeric_port_is_rejected() {
    assert!(Args::try_parse_from(["webtray", "-p", "not-a-port"]).is_err());
}
