use figment::Jail;
use pretty_assertions::assert_eq;
use taskii_config::TaskiiConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKII_STORAGE__DB_PATH", "/var/lib/taskii.db");
        jail.set_env("TASKII_SEARCH__DEBOUNCE_MS", "400");

        let config = TaskiiConfig::load().expect("config loads");
        assert_eq!(config.storage.db_path, "/var/lib/taskii.db");
        assert_eq!(config.search.debounce_ms, 400);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".taskii")?;
        jail.create_file(".taskii/config.toml", "[general]\ndefault_limit = 7\n")?;
        jail.set_env("TASKII_GENERAL__DEFAULT_LIMIT", "99");

        let config = TaskiiConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 99);
        Ok(())
    });
}

#[test]
fn env_policy_flows_into_debounce() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKII_SEARCH__EMPTY_STATE_DELAY_MS", "10");

        let config = TaskiiConfig::load().expect("config loads");
        let policy = config.search.debounce_policy().expect("valid policy");
        assert_eq!(policy.empty_state_delay, std::time::Duration::from_millis(10));
        Ok(())
    });
}
