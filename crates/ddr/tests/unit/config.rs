//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and file loading.

use std::io::Write;

use ls1046afrwy_ddr::DdrError;
use ls1046afrwy_ddr::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.init.mode, InitMode::FixedSdram);
    assert_eq!(config.board.ddr_freq_hz, 2_100_000_000);
    assert_eq!(config.board.tfa_dram_size, 0);
    assert_eq!(config.board.spd_dram_size, 1 << 32);
    assert_eq!(config.board.n_ranks, 1);
    assert!(!config.board.registered);
}

#[test]
fn test_empty_json_matches_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.init.mode, InitMode::FixedSdram);
    assert_eq!(config.board.ddr_freq_hz, 2_100_000_000);
    assert_eq!(config.board.spd_dram_size, 1 << 32);
    assert_eq!(config.board.n_ranks, 1);
}

#[test]
fn test_init_mode_names_and_aliases() {
    for (name, mode) in [
        ("TfaBoot", InitMode::TfaBoot),
        ("TFA", InitMode::TfaBoot),
        ("SecondaryStage", InitMode::SecondaryStage),
        ("SPL", InitMode::SecondaryStage),
        ("FixedSdram", InitMode::FixedSdram),
    ] {
        let json = format!(r#"{{ "init": {{ "mode": "{name}" }} }}"#);
        assert_eq!(Config::from_json(&json).unwrap().init.mode, mode, "{name}");
    }
}

#[test]
fn test_partial_board_section() {
    let json = r#"{ "board": { "registered": true, "n_ranks": 2 } }"#;
    let config = Config::from_json(json).unwrap();
    assert!(config.board.registered);
    assert_eq!(config.board.n_ranks, 2);
    assert_eq!(config.board.ddr_freq_hz, 2_100_000_000);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = Config::from_json(r#"{ "init": { "mode": "Dynamic" } }"#).unwrap_err();
    assert!(matches!(err, DdrError::Config(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "init": {{ "mode": "TfaBoot" }}, "board": {{ "tfa_dram_size": 8589934592 }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.init.mode, InitMode::TfaBoot);
    assert_eq!(config.board.tfa_dram_size, 8 << 30);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DdrError::Io(_)));
}

#[test]
fn test_set_ddr_freq_mhz_converts_to_hz() {
    let mut board = Config::default().board;
    board.set_ddr_freq_mhz(1600).unwrap();
    assert_eq!(board.ddr_freq_hz, 1_600_000_000);
}

#[test]
fn test_set_ddr_freq_mhz_rejects_overflow() {
    let mut board = Config::default().board;
    let err = board.set_ddr_freq_mhz(u64::MAX / 1_000_000 + 1).unwrap_err();
    assert!(matches!(err, DdrError::FrequencyOutOfRange { .. }));
    assert!(!err.is_fatal());
    assert_eq!(board.ddr_freq_hz, 2_100_000_000);
}
