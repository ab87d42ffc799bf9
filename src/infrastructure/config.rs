use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config/layouts";
const ENV_PREFIX: &str = "LAYOUTS";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    #[serde(default)]
    pub widget_api: Option<WidgetApiSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetApiSettings {
    pub host: String,
    pub token: String,
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("storage.backend", "memory")?
        .set_default("storage.directory", "data/layouts")?)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// Load settings from `config/layouts.*` (optional) and `LAYOUTS__*` env vars.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
fn load_config_from(path: &std::path::Path) -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::from(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = builder().unwrap().build().unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.directory, PathBuf::from("data/layouts"));
        assert!(config.widget_api.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layouts.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[storage]
backend = "file"
directory = "/var/lib/layouts"

[widget_api]
host = "https://monitoring.example.com"
token = "secret"
"#
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.directory, PathBuf::from("/var/lib/layouts"));
        let api = config.widget_api.unwrap();
        assert_eq!(api.host, "https://monitoring.example.com");
        assert_eq!(api.token, "secret");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let mut vars = config::Map::new();
        vars.insert("LAYOUTS__SERVER__BIND".to_string(), "127.0.0.1:9090".to_string());
        vars.insert("LAYOUTS__STORAGE__BACKEND".to_string(), "file".to_string());
        vars.insert("LAYOUTS__WIDGET_API__HOST".to_string(), "http://api.local".to_string());
        vars.insert("LAYOUTS__WIDGET_API__TOKEN".to_string(), "abc".to_string());
        vars.insert("UNRELATED__SERVER__BIND".to_string(), "0.0.0.0:1".to_string());

        let settings = builder()
            .unwrap()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9090");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.directory, PathBuf::from("data/layouts"));
        let api = config.widget_api.unwrap();
        assert_eq!(api.host, "http://api.local");
        assert_eq!(api.token, "abc");
    }
}
