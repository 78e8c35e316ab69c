//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use taskii_config::TaskiiConfig;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50

[storage]
db_path = "./tasks.db"

[search]
debounce_ms = 250
empty_state_delay_ms = 500
"#,
        )?;

        let config: TaskiiConfig = Figment::from(Serialized::defaults(TaskiiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.storage.db_path, "./tasks.db");
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.empty_state_delay_ms, 500);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[search]\ndebounce_ms = 300\n")?;

        let config: TaskiiConfig = Figment::from(Serialized::defaults(TaskiiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.empty_state_delay_ms, 1000);
        assert_eq!(config.general.default_limit, 20);
        assert!(!config.storage.is_configured());
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taskii")?;
        jail.create_file(".taskii/config.toml", "[general]\ndefault_limit = 7\n")?;

        let config = TaskiiConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taskii")?;
        jail.create_file(".taskii/config.toml", "[general]\ndefault_limit = \"many\"\n")?;

        let err = TaskiiConfig::load().unwrap_err();
        assert!(matches!(err, taskii_config::ConfigError::Figment(_)));
        Ok(())
    });
}
