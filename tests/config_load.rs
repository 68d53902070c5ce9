use std::{fs, path::PathBuf};

use tempfile::TempDir;

use agenda::config::{CancelMode, ConfigError, RegistryConfig};

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().expect("tmp");
    let cfg = RegistryConfig::load(tmp.path().join("agenda.toml")).expect("load");

    assert_eq!(cfg, RegistryConfig::default());
    assert_eq!(cfg.users_path(), PathBuf::from("./usuarios.data"));
    assert_eq!(cfg.events_path(), PathBuf::from("./events.data"));
    assert_eq!(cfg.participations_path(), PathBuf::from("./participacao.data"));
    assert_eq!(cfg.cancel_mode, CancelMode::AnyField);
}

#[test]
fn partial_file_overrides_only_given_keys() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("agenda.toml");
    fs::write(
        &path,
        "data_dir = \"/var/lib/agenda\"\ncancel_mode = \"exact_pair\"\nlog_level = \"debug\"\n",
    )
    .expect("write");

    let cfg = RegistryConfig::load(&path).expect("load");

    assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/agenda"));
    assert_eq!(cfg.cancel_mode, CancelMode::ExactPair);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.events_file, "events.data");
    assert_eq!(cfg.users_path(), PathBuf::from("/var/lib/agenda/usuarios.data"));
}

#[test]
fn serialized_config_loads_back() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("agenda.toml");
    let cfg = RegistryConfig {
        participations_file: "participants.data".to_string(),
        cancel_mode: CancelMode::ExactPair,
        ..RegistryConfig::in_dir(tmp.path())
    };
    fs::write(&path, toml::to_string(&cfg).expect("to toml")).expect("write");

    assert_eq!(RegistryConfig::load(&path).expect("load"), cfg);
}

#[test]
fn bad_values_are_parse_errors() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("agenda.toml");
    fs::write(&path, "cancel_mode = \"everything\"\n").expect("write");

    let err = RegistryConfig::load(&path).expect_err("unknown mode");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
