use std::io::Write;

use alphabeta::{Error, Player, cli::config::PlayConfig};

#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"human": "O", "compare_unpruned": true}}"#).unwrap();

    let config = PlayConfig::load(file.path()).unwrap();
    assert_eq!(config.human, Player::O);
    assert!(config.compare_unpruned);
    assert!(config.show_node_counts);
}

#[test]
fn malformed_config_is_a_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"human": "Z"}}"#).unwrap();

    assert!(matches!(
        PlayConfig::load(file.path()),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn missing_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("read config file"));
}
