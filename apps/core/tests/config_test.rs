use std::time::{SystemTime, UNIX_EPOCH};

use vmsearch_core::config::{self, Config};

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config::validate(&config).is_ok());
    assert_eq!(config.list_command[0], "VBoxManage");
}

#[test]
fn max_results_out_of_range_is_rejected() {
    let config = Config {
        max_results: 0,
        ..Config::default()
    };
    assert!(config::validate(&config).is_err());

    let config = Config {
        max_results: 101,
        ..Config::default()
    };
    assert!(config::validate(&config).is_err());
}

#[test]
fn empty_list_command_is_rejected() {
    let config = Config {
        list_command: Vec::new(),
        ..Config::default()
    };
    assert!(config::validate(&config).is_err());
}

#[test]
fn missing_file_loads_defaults() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("vmsearch-missing-{unique}.toml"));

    let config = config::load(Some(&path)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_overrides_from_toml_file() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("vmsearch-config-{unique}.toml"));
    std::fs::write(
        &path,
        "list_command = [\"vboxmanage\", \"list\", \"vms\"]\nmax_results = 7\n",
    )
    .unwrap();

    let config = config::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.list_command[0], "vboxmanage");
    assert_eq!(config.max_results, 7);
    // Unlisted fields keep their defaults.
    assert_eq!(config.icon_name, "virtualbox");
}

#[test]
fn load_rejects_invalid_values_from_file() {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("vmsearch-bad-config-{unique}.toml"));
    std::fs::write(&path, "max_results = 0\n").unwrap();

    let result = config::load(Some(&path));
    std::fs::remove_file(&path).unwrap();

    assert!(result.is_err());
}
