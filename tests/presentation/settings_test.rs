use config::{Config, File, FileFormat};

use scribe::presentation::config::{AuditProviderSetting, Environment, Settings};

#[test]
fn given_no_overrides_when_using_defaults_then_documented_values_apply() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.storage.root, std::path::PathBuf::from("./data"));
    assert_eq!(settings.normalizer.program, "ffmpeg");
    assert_eq!(settings.inference.program, "whisper-cli");
    assert_eq!(settings.inference.max_concurrent, 1);
    assert_eq!(settings.inference.progress_interval().as_secs(), 2);
    assert_eq!(settings.audit.provider, AuditProviderSetting::Memory);
}

#[test]
fn given_partial_toml_when_deserializing_then_missing_keys_fall_back_to_defaults() {
    let raw = r#"
        [inference]
        max_concurrent = 3
        model_dir = "/srv/models"

        [audit]
        provider = "postgres"
        database_url = "postgres://localhost/scribe"

        [models]
        default = "small"
    "#;

    let settings: Settings = Config::builder()
        .add_source(File::from_str(raw, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.inference.max_concurrent, 3);
    assert_eq!(settings.inference.threads, 4);
    assert_eq!(settings.audit.provider, AuditProviderSetting::Postgres);
    assert_eq!(settings.audit.max_connections, 5);
    assert_eq!(settings.models.default.as_deref(), Some("small"));
    assert_eq!(settings.server.port, 3000);
}

#[test]
fn given_environment_names_when_parsing_then_aliases_are_accepted() {
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from("Local".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
    assert_eq!(Environment::Test.settings_file(), "appsettings.test");
}
