//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_trainsum_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("trainsum") && path_str.ends_with("config.toml"),
        "Path should contain 'trainsum' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("trainsum_test_config.toml");

    let toml_content = r#"
language = "ru"
fail_fast = false
log_file_path = "/tmp/trainsum-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.language, Some(Language::Russian));
    assert_eq!(config.fail_fast, Some(false));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/trainsum-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("trainsum_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_language() {
    let config_path = env::temp_dir().join("trainsum_test_bad_language.toml");

    fs::write(&config_path, "language = \"de\"\n").expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unsupported language should fail to parse, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("trainsum_test_partial.toml");

    fs::write(&config_path, "fail_fast = false\n").expect("Failed to write config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.fail_fast, Some(false));
    assert_eq!(config.language, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"\n");
    assert!(result.is_err(), "Unknown fields should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        language: Some(Language::Russian),
        fail_fast: Some(false),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.language, Language::Russian);
    assert!(!resolved.fail_fast);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.language, Language::English);
    assert!(config.fail_fast, "Default should stop at the first bad package");
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(trainsum_language)]
fn apply_env_overrides_respects_trainsum_language() {
    let _guard = EnvGuard::new(ENV_LANGUAGE);

    env::set_var(ENV_LANGUAGE, "ru");
    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.language, Language::Russian);
}

#[test]
#[serial(trainsum_language)]
fn apply_env_overrides_ignores_unknown_language() {
    let _guard = EnvGuard::new(ENV_LANGUAGE);

    env::set_var(ENV_LANGUAGE, "klingon");
    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(trainsum_language)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ENV_LANGUAGE);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(trainsum_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("trainsum_test_explicit.toml");
    let env_path = temp_dir.join("trainsum_test_env.toml");
    fs::write(&explicit_path, "language = \"ru\"\n").unwrap();
    fs::write(&env_path, "language = \"en\"\n").unwrap();

    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.language,
        Some(Language::Russian),
        "Explicit path should take precedence over TRAINSUM_CONFIG"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(trainsum_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let env_path = env::temp_dir().join("trainsum_test_env_only.toml");
    fs::write(&env_path, "fail_fast = false\n").unwrap();

    env::set_var(ENV_CONFIG, env_path.to_str().unwrap());

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.fail_fast, Some(false));

    fs::remove_file(env_path).ok();
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}

#[test]
fn apply_cli_overrides_all_fields() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(Language::Russian),
        Some(false),
        Some(PathBuf::from("/tmp/cli.log")),
    );

    assert_eq!(result.language, Language::Russian);
    assert!(!result.fail_fast);
    assert_eq!(result.log_file_path, PathBuf::from("/tmp/cli.log"));
}

#[test]
#[serial(trainsum_language)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ENV_LANGUAGE);

    // Config file says Russian and keep-going
    let config_file = ConfigFile {
        language: Some(Language::Russian),
        fail_fast: Some(false),
        log_file_path: None,
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.language, Language::Russian);

    // Env flips language back to English
    env::set_var(ENV_LANGUAGE, "en");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.language, Language::English);
    assert!(!with_env.fail_fast, "Env should not touch fail_fast");

    // CLI has the last word
    let with_cli = apply_cli_overrides(with_env, Some(Language::Russian), None, None);
    assert_eq!(with_cli.language, Language::Russian);
    assert!(!with_cli.fail_fast);
}
