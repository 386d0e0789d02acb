//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, promote_command};

#[test]
fn check_extracts_positional_path() {
    let m = check_command()
        .try_get_matches_from(["check", "app.nom"])
        .expect("valid invocation");
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("app.nom")));
    assert_eq!(params.source_text, None);
    assert!(!params.json);
}

#[test]
fn check_extracts_inline_source_and_json() {
    let m = check_command()
        .try_get_matches_from(["check", "-s", "let a = {x: 1}", "--json"])
        .expect("valid invocation");
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text, Some("let a = {x: 1}".to_string()));
    assert!(params.json);
}

#[test]
fn check_parses_color_choices() {
    let m = check_command()
        .try_get_matches_from(["check", "app.nom", "--color", "always"])
        .expect("valid invocation");
    let params = CheckParams::from_matches(&m);
    assert!(matches!(params.color, ColorChoice::Always));

    let m = check_command()
        .try_get_matches_from(["check", "app.nom", "--color", "never"])
        .expect("valid invocation");
    let params = CheckParams::from_matches(&m);
    assert!(matches!(params.color, ColorChoice::Never));
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "app.nom", "--color", "maybe"]);
    assert!(result.is_err());
}

#[test]
fn promote_extracts_write_flag() {
    let m = promote_command()
        .try_get_matches_from(["promote", "app.nom", "--write"])
        .expect("valid invocation");
    let params = PromoteParams::from_matches(&m);
    assert_eq!(params.source_path, Some(PathBuf::from("app.nom")));
    assert!(params.write);
}

#[test]
fn promote_defaults_to_stdout() {
    let m = promote_command()
        .try_get_matches_from(["promote", "-s", "let a = {x: 1}"])
        .expect("valid invocation");
    let params = PromoteParams::from_matches(&m);
    assert!(!params.write);
    assert_eq!(params.source_text, Some("let a = {x: 1}".to_string()));
}

#[test]
fn color_choice_respects_explicit_modes() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}
