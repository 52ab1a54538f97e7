#[cfg(test)]
mod tests {
    use break_assistant::libs::config::{BreaksConfig, Config, NotifierConfig, CONFIG_FILE_NAME};
    use break_assistant::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.breaks.is_none());
        assert!(config.notifier.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_module_defaults(_ctx: &mut ConfigTestContext) {
        let breaks = BreaksConfig::default();
        assert_eq!(breaks.break_duration, 5);
        assert_eq!(breaks.break_message, "");

        let notifier = NotifierConfig::default();
        assert_eq!(notifier.poll_interval, 1000);
        assert!(notifier.sound_enabled);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.breaks.is_none());
        assert!(config.notifier.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            breaks: Some(BreaksConfig {
                break_duration: 10,
                break_message: "Step away".to_string(),
            }),
            notifier: Some(NotifierConfig {
                poll_interval: 250,
                sound_enabled: false,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.breaks, config.breaks);
        assert_eq!(loaded.notifier, config.notifier);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_absent_from_file(_ctx: &mut ConfigTestContext) {
        let config = Config {
            breaks: Some(BreaksConfig::default()),
            notifier: None,
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("breaks"));
        assert!(!raw.contains("notifier"));
    }
}
