//! Tests for generate, export and share.

use super::parse;
use crate::cli::{CliCommand, OutputFormat};
use profcard_core::config::ProfcardConfig;

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["profcard", "generate"]) {
        CliCommand::Generate {
            form,
            format,
            allow_invalid,
        } => {
            assert!(form.form_file.is_none());
            assert!(form.name.is_none());
            assert_eq!(format, OutputFormat::Text);
            assert!(!allow_invalid);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_fields() {
    match parse(&[
        "profcard",
        "generate",
        "--name",
        "Jane Doe",
        "--github",
        "github.com/jane",
        "--format",
        "json",
        "--allow-invalid",
    ]) {
        CliCommand::Generate {
            form,
            format,
            allow_invalid,
        } => {
            assert_eq!(form.name.as_deref(), Some("Jane Doe"));
            assert_eq!(form.github.as_deref(), Some("github.com/jane"));
            assert!(form.linkedin.is_none());
            assert_eq!(format, OutputFormat::Json);
            assert!(allow_invalid);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_export_out_dir() {
    match parse(&[
        "profcard",
        "export",
        "--form",
        "/tmp/form.json",
        "--out-dir",
        "/tmp/cards",
    ]) {
        CliCommand::Export {
            form,
            out_dir,
            allow_invalid,
        } => {
            assert_eq!(
                form.form_file.as_deref(),
                Some(std::path::Path::new("/tmp/form.json"))
            );
            assert_eq!(out_dir.as_deref(), Some(std::path::Path::new("/tmp/cards")));
            assert!(!allow_invalid);
        }
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_share() {
    match parse(&["profcard", "share", "--name", "Jane", "--bio", "Hi"]) {
        CliCommand::Share {
            form,
            allow_invalid,
        } => {
            assert_eq!(form.name.as_deref(), Some("Jane"));
            assert_eq!(form.bio.as_deref(), Some("Hi"));
            assert!(!allow_invalid);
        }
        _ => panic!("expected Share"),
    }
}

#[test]
fn cli_parse_share_allow_invalid() {
    match parse(&["profcard", "share", "--name", "Jane", "--allow-invalid"]) {
        CliCommand::Share { allow_invalid, .. } => assert!(allow_invalid),
        _ => panic!("expected Share"),
    }
}

#[test]
fn share_run_loads_config_and_checks_form() {
    let cmd = parse(&[
        "profcard",
        "share",
        "--name",
        "Jane",
        "--github",
        "gitlab.com/x",
    ]);
    let err = cmd.run(|| Ok(ProfcardConfig::default())).unwrap_err();
    assert_eq!(err.to_string(), "Invalid github URL");

    let cmd = parse(&[
        "profcard",
        "share",
        "--name",
        "Jane",
        "--github",
        "gitlab.com/x",
        "--allow-invalid",
    ]);
    assert!(cmd.run(|| Ok(ProfcardConfig::default())).is_ok());
}

#[test]
fn config_load_failure_stops_card_commands() {
    let cmd = parse(&["profcard", "generate", "--name", "Jane"]);
    let err = cmd.run(|| Err(anyhow::anyhow!("bad config"))).unwrap_err();
    assert_eq!(err.to_string(), "bad config");
}

#[test]
fn flags_override_form_file() {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().unwrap();
    let json = br#"{"name":"From File","bio":"file bio","github":"github.com/file"}"#;
    f.write_all(json).unwrap();
    f.flush().unwrap();
    let path = f.path().to_str().unwrap().to_string();
    match parse(&[
        "profcard",
        "generate",
        "--form",
        &path,
        "--name",
        "Flag Name",
    ]) {
        CliCommand::Generate { form, .. } => {
            let data = form.to_form_data().unwrap();
            assert_eq!(data.name, "Flag Name");
            assert_eq!(data.bio, "file bio");
            assert_eq!(data.github, "github.com/file");
        }
        _ => panic!("expected Generate"),
    }
}
