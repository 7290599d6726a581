use figment::Jail;
use qs_config::QsConfig;

#[test]
fn load_reads_prefixed_env() {
    Jail::expect_with(|jail| {
        jail.set_env("QUIZSAVER_DOCS__TITLE_PREFIX", "History Quiz");
        jail.set_env("QUIZSAVER_WATCH__NOTIFICATION_SECS", "5");

        let config = QsConfig::load().expect("config loads");
        assert_eq!(config.docs.title_prefix, "History Quiz");
        assert_eq!(config.watch.notification_secs, 5);
        Ok(())
    });
}

#[test]
fn load_reads_project_local_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".quiz-saver")).expect("mkdir");
        jail.create_file(
            ".quiz-saver/config.toml",
            r#"
[auth]
token = "project-token"
"#,
        )?;

        let config = QsConfig::load().expect("config loads");
        assert_eq!(config.auth.token, "project-token");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_values() {
    Jail::expect_with(|jail| {
        jail.set_env("QUIZSAVER_DOCS__API_BASE_URL", "docs.local");

        let err = QsConfig::load().unwrap_err();
        assert!(err.to_string().contains("docs.api_base_url"));
        Ok(())
    });
}
