#[cfg(test)]
mod tests {
    use porter_config::schema::*;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_translator_config_defaults() {
        let config = TranslatorConfig::default();
        assert!(config.cli_path.is_none());
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_environment_config_defaults() {
        let config = EnvironmentConfig::default();
        assert!(config.working_dir.is_none());
        assert_eq!(config.max_depth, 64);
    }

    #[test]
    fn test_queue_config_defaults() {
        let config = QueueConfig::default();
        assert_eq!(config.script_base, "gorilla_commands");
        assert_eq!(config.script_dir, std::path::PathBuf::from("."));
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, "127.0.0.1:5100");
        assert!(config.cors);
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    // ── TOML roundtrip tests ───────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = PorterConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: PorterConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.queue.script_base, config.queue.script_base);
        assert_eq!(restored.server.listen, config.server.listen);
        assert_eq!(restored.exec.command_timeout_secs, config.exec.command_timeout_secs);
    }

    #[test]
    fn test_partial_toml_applies_defaults() {
        let toml_str = r#"
[translator]
cli_path = "/usr/local/bin/gorilla"

[environment]
working_dir = "/srv/workspace"
"#;
        let config: PorterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.translator.cli_path.as_deref(),
            Some(std::path::Path::new("/usr/local/bin/gorilla"))
        );
        assert_eq!(
            config.environment.working_dir.as_deref(),
            Some(std::path::Path::new("/srv/workspace"))
        );
        // Untouched sections keep their defaults
        assert_eq!(config.translator.timeout_secs, 120);
        assert_eq!(config.queue.script_base, "gorilla_commands");
        assert_eq!(config.logging.level, "info");
    }

    // ── Loader tests ───────────────────────────────────────────

    #[test]
    fn test_loader_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porter.toml");
        std::fs::write(
            &path,
            "[queue]\nscript_base = \"custom_queue\"\n",
        )
        .unwrap();

        let loader = porter_config::ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().queue.script_base, "custom_queue");
        assert_eq!(loader.path(), path);
    }

    #[test]
    fn test_loader_falls_back_to_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");

        let loader = porter_config::ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().server.listen, "127.0.0.1:5100");
    }

    #[test]
    fn test_loader_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("porter.toml");
        std::fs::write(&path, "queue = not toml at all [").unwrap();

        assert!(porter_config::ConfigLoader::load(Some(&path)).is_err());
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_validate_warns_on_missing_cli_path() {
        let config = PorterConfig::default();
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.contains("cli_path")));
        assert!(warnings.iter().any(|w| w.contains("working_dir")));
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let mut config = PorterConfig::default();
        config.environment.max_depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_script_base() {
        let mut config = PorterConfig::default();
        config.queue.script_base = String::new();
        assert!(config.validate().is_err());
    }
}
