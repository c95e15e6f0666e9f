#[cfg(test)]
mod tests {
    use dtrack::libs::config::{Config, CONFIG_FILE_NAME};
    use dtrack::libs::data_storage::{DataStorage, APP_NAME, VENDOR_NAME};
    use dtrack::libs::timer::TimerPrefs;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Temporary directory acting as the data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.storage.get_path(CONFIG_FILE_NAME).unwrap()
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("data"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_is_default(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timer, TimerPrefs::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.timer.set_focus_minutes(50);
        config.timer.set_cycle_every(2);
        config.save_to(&ctx.config_path()).unwrap();

        let raw = fs::read_to_string(ctx.config_path()).unwrap();
        assert!(raw.contains("\"focusMinutes\": 50"));

        assert_eq!(Config::read_from(&ctx.config_path()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_clamps_out_of_range_values(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{"timer": {"focusMinutes": 0, "longBreakMinutes": 999}}"#).unwrap();
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.timer.focus_minutes, 1);
        assert_eq!(config.timer.long_break_minutes, 120);
        assert_eq!(config.timer.short_break_minutes, 5);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_tolerates_loose_numbers(ctx: &mut ConfigTestContext) {
        fs::write(
            ctx.config_path(),
            r#"{"timer": {"focusMinutes": 50.9, "shortBreakMinutes": -3, "cycleEvery": "four", "customMinutes": null}}"#,
        )
        .unwrap();
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.timer.focus_minutes, 50);
        assert_eq!(config.timer.short_break_minutes, 1);
        assert_eq!(config.timer.cycle_every, 4);
        assert_eq!(config.timer.custom_minutes, 30);
        assert_eq!(config.timer.long_break_minutes, 15);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_timer_section(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{}").unwrap();
        assert_eq!(Config::read_from(&ctx.config_path()).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "timer = 5").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_storage_creates_directory(ctx: &mut ConfigTestContext) {
        assert!(!ctx.storage.base_path().exists());
        let path = ctx.config_path();
        assert!(ctx.storage.base_path().is_dir());
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
    }

    #[test]
    fn test_default_storage_location() {
        let storage = DataStorage::new();
        assert!(storage.base_path().ends_with(PathBuf::from(VENDOR_NAME).join(APP_NAME)));
        assert_eq!(APP_NAME, "dtrack");
    }
}
