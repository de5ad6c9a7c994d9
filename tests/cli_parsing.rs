//! Tests for command-line parsing.

use clap::Parser;
use findroot::Config;
use std::path::PathBuf;

#[test]
fn test_no_arguments_uses_default_output() {
    let config = Config::try_parse_from(["findroot"]).expect("Should parse without arguments");
    assert_eq!(config.output, PathBuf::from("root.txt"));
    assert_eq!(config.tld_file, PathBuf::from("tld.txt"));
}

#[test]
fn test_short_output_flag() {
    let config = Config::try_parse_from(["findroot", "-o", "out/roots.txt"]).unwrap();
    assert_eq!(config.output, PathBuf::from("out/roots.txt"));
}

#[test]
fn test_long_output_flag() {
    let config = Config::try_parse_from(["findroot", "--output", "roots.txt"]).unwrap();
    assert_eq!(config.output, PathBuf::from("roots.txt"));
}

#[test]
fn test_output_flag_requires_value() {
    assert!(Config::try_parse_from(["findroot", "-o"]).is_err());
}

#[test]
fn test_tld_file_is_not_a_flag() {
    assert!(Config::try_parse_from(["findroot", "--tld-file", "other.txt"]).is_err());
}

#[test]
fn test_unknown_flags_are_rejected() {
    assert!(Config::try_parse_from(["findroot", "--log-level", "debug"]).is_err());
    assert!(Config::try_parse_from(["findroot", "input.txt"]).is_err());
}
