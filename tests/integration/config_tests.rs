//! Layered configuration: defaults, TOML file, environment and CLI flags.

use clap::Parser;
use filesift::cli::Cli;
use filesift::config::Config;
use filesift::scanner::{ScanError, SortOrder};
use filesift::Options;
use std::fs;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all FILESIFT_* environment variables to avoid interference.
fn clear_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("FILESIFT_") {
            std::env::remove_var(key);
        }
    }
}

#[test]
fn test_config_load_missing_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();

    let config = Config::load_from_path(temp_dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_from_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
sort_order = "random"
confirm = true
seed = 1234
image_extensions = [".png", ".webp"]
"#;
    fs::write(&config_path, toml_content).unwrap();

    let config = Config::load(Some(&config_path));
    assert_eq!(config.sort_order().unwrap(), SortOrder::Random);
    assert!(config.confirm);
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.image_extensions, vec![".png", ".webp"]);
}

#[test]
fn test_config_partial_toml_keeps_other_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "sort_order = \"desc\"\n").unwrap();

    let config = Config::load_from_path(&config_path);
    assert_eq!(config.sort_order, "desc");
    assert!(!config.confirm);
    assert_eq!(config.image_extensions, Config::default().image_extensions);
}

#[test]
fn test_config_malformed_toml_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "sort_order = [unterminated").unwrap();

    let config = Config::load_from_path(&config_path);
    assert_eq!(config, Config::default());
}

#[test]
fn test_env_overrides_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "sort_order = \"asc\"\nseed = 1\n").unwrap();

    std::env::set_var("FILESIFT_SORT_ORDER", "desc");
    std::env::set_var("FILESIFT_SEED", "77");
    let config = Config::load_from_path(&config_path);
    clear_env();

    assert_eq!(config.sort_order().unwrap(), SortOrder::Desc);
    assert_eq!(config.seed, Some(77));
}

#[test]
fn test_cli_overrides_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();

    std::env::set_var("FILESIFT_SORT_ORDER", "random");
    let config = Config::load_from_path(temp_dir.path().join("none.toml"));
    clear_env();

    let cli = Cli::try_parse_from(["filesift", "/d", "txt", "--sort-order", "asc"]).unwrap();
    let options = Options::resolve(&cli, &config).unwrap();
    assert_eq!(options.sort_order, SortOrder::Asc);

    let cli = Cli::try_parse_from(["filesift", "/d", "txt"]).unwrap();
    let options = Options::resolve(&cli, &config).unwrap();
    assert_eq!(options.sort_order, SortOrder::Random);
}

#[test]
fn test_invalid_sort_order_in_file_is_rejected_on_resolve() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "sort_order = \"rnadom\"\n").unwrap();

    let config = Config::load_from_path(&config_path);
    let cli = Cli::try_parse_from(["filesift", "/d", "txt"]).unwrap();

    match Options::resolve(&cli, &config) {
        Err(ScanError::InvalidSortOrder { value, suggestion }) => {
            assert_eq!(value, "rnadom");
            assert_eq!(suggestion.as_deref(), Some("random"));
        }
        other => panic!("Expected InvalidSortOrder, got: {:?}", other),
    }
}

#[test]
fn test_config_seed_feeds_random_order() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "sort_order = \"random\"\nseed = 5\n").unwrap();
    for i in 0..8 {
        fs::write(temp_dir.path().join(format!("f{i}.txt")), "x").unwrap();
    }

    let config = Config::load_from_path(&config_path);
    let cli = Cli::try_parse_from(["filesift", temp_dir.path().to_str().unwrap(), "txt"]).unwrap();
    let options = Options::resolve(&cli, &config).unwrap();

    let run = || {
        let mut out = Vec::new();
        filesift::execute(
            &options,
            &filesift::actions::SystemTrash,
            &mut filesift::actions::FixedAnswer(false),
            &mut out,
        )
        .unwrap();
        out
    };
    assert_eq!(run(), run());
}
