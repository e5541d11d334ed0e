//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_fetch_default_origin() {
    match parse(&["mirrorlist", "fetch"]) {
        CliCommand::Fetch { origin } => assert!(origin.is_none()),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_origin() {
    match parse(&["mirrorlist", "fetch", "--origin", "https://example.com"]) {
        CliCommand::Fetch { origin } => assert_eq!(origin.as_deref(), Some("https://example.com")),
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_page_output() {
    match parse(&["mirrorlist", "page", "-o", "index.html"]) {
        CliCommand::Page { origin, output } => {
            assert!(origin.is_none());
            assert_eq!(output, Some(PathBuf::from("index.html")));
        }
        _ => panic!("expected Page"),
    }
}

#[test]
fn cli_parse_particles() {
    match parse(&["mirrorlist", "particles"]) {
        CliCommand::Particles => {}
        _ => panic!("expected Particles"),
    }
}

#[test]
fn cli_parse_serve_overrides() {
    match parse(&[
        "mirrorlist",
        "serve",
        "--bind",
        "127.0.0.1:9000",
        "--data",
        "/srv/mirrors.json",
        "--static-dir",
        "/srv/static",
    ]) {
        CliCommand::Serve {
            bind,
            data,
            static_dir,
        } => {
            assert_eq!(bind, Some("127.0.0.1:9000".parse().unwrap()));
            assert_eq!(data, Some(PathBuf::from("/srv/mirrors.json")));
            assert_eq!(static_dir, Some(PathBuf::from("/srv/static")));
        }
        _ => panic!("expected Serve"),
    }
}

#[test]
fn cli_parse_serve_rejects_bad_bind() {
    assert!(Cli::try_parse_from(["mirrorlist", "serve", "--bind", "not-an-addr"]).is_err());
}

#[test]
fn cli_parse_checksum() {
    match parse(&["mirrorlist", "checksum", "game.zip", "--origin", "http://localhost:8080"]) {
        CliCommand::Checksum { path, origin } => {
            assert_eq!(path, PathBuf::from("game.zip"));
            assert_eq!(origin.as_deref(), Some("http://localhost:8080"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["mirrorlist", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
