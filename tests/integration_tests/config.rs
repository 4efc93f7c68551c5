use std::fs;

use crate::common::{MODULE_DIR, TestL10n, stderr};

fn setup_ktorrent(l10n: &TestL10n) {
    l10n.write_trunk(
        &format!("templates/{MODULE_DIR}/ktorrent.pot"),
        "msgid \"ktorrent template\"\n",
    );
    l10n.write_stable(&format!("templates/{MODULE_DIR}/ktorrent.pot"), "");
    l10n.write_trunk(&format!("de/{MODULE_DIR}/ktorrent.po"), "msgid \"de\"\n");
}

#[test]
fn test_config_file_from_env() {
    let l10n = TestL10n::new(&["de"]);
    setup_ktorrent(&l10n);
    let config = l10n.temp_path().join("config.toml");
    fs::write(&config, "package = \"ktorrent\"\n").unwrap();

    let output = l10n.run_with_env(&[], &[("L10N_SYNC_CONFIG_PATH", config.to_str().unwrap())]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(l10n.local(&format!("stable/de/{MODULE_DIR}/ktorrent.po")).is_file());
    assert!(!l10n.local(&format!("stable/de/{MODULE_DIR}/libktorrent.po")).exists());
}

#[test]
fn test_config_flag_and_cli_override() {
    let l10n = TestL10n::new(&["de", "fr"]);
    l10n.write_trunk(&format!("de/{MODULE_DIR}/libktorrent.po"), "msgid \"de\"\n");
    l10n.write_trunk(&format!("fr/{MODULE_DIR}/libktorrent.po"), "msgid \"fr\"\n");
    let config = l10n.temp_path().join("custom.toml");
    fs::write(&config, "excluded-languages = [\"de\", \"fr\"]\n").unwrap();

    let output = l10n.run(&["--config", config.to_str().unwrap(), "--exclude", "fr"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // the flag replaces the configured list
    assert!(l10n.local(&format!("stable/de/{MODULE_DIR}/libktorrent.po")).is_file());
    assert!(!l10n.local("stable/fr").exists());
}

#[test]
fn test_env_var_overrides_config_file() {
    let l10n = TestL10n::new(&["de"]);
    setup_ktorrent(&l10n);
    let config = l10n.temp_path().join("config.toml");
    fs::write(&config, "package = \"libktorrent\"\n").unwrap();

    let output = l10n.run_with_env(
        &[],
        &[
            ("L10N_SYNC_CONFIG_PATH", config.to_str().unwrap()),
            ("L10N_SYNC_PACKAGE", "ktorrent"),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(l10n.local(&format!("stable/de/{MODULE_DIR}/ktorrent.po")).is_file());
}

#[test]
fn test_invalid_config_is_fatal() {
    let l10n = TestL10n::new(&["de"]);
    let config = l10n.temp_path().join("broken.toml");
    fs::write(&config, "error-policy = \"sometimes\"\n").unwrap();

    let output = l10n.run(&["--config", config.to_str().unwrap()]);
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1), "stderr: {err}");
    assert!(err.contains("Failed to load config"), "stderr: {err}");
    assert!(l10n.svn_calls().is_empty());
}
