use crate::application::theme_service::DEFAULT_STORAGE_KEY;
use crate::domain::alert::{AlertSettings, DEFAULT_AQI_THRESHOLD};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub preferences: PreferenceSettings,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub mock: MockSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PreferenceSettings {
    /// JSON file holding preferences. Absent means preferences live in memory.
    pub path: Option<String>,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            path: None,
            storage_key: default_storage_key(),
            default_theme: default_theme(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_threshold")]
    pub aqi_threshold: i32,
    #[serde(default = "default_true")]
    pub emergency_alerts: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            aqi_threshold: DEFAULT_AQI_THRESHOLD,
            emergency_alerts: true,
        }
    }
}

impl From<&AlertConfig> for AlertSettings {
    fn from(config: &AlertConfig) -> Self {
        AlertSettings {
            enabled: config.enabled,
            aqi_threshold: config.aqi_threshold,
            emergency_alerts: config.emergency_alerts,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MockSettings {
    /// Fixed seed for reproducible mock data
    pub seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_true() -> bool {
    true
}

fn default_threshold() -> i32 {
    DEFAULT_AQI_THRESHOLD
}

/// `AQI__SECTION__KEY` variables, e.g. `AQI__SERVER__PORT=9100`.
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("AQI")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Settings from `file`, with `env` taking precedence.
fn layered<S>(file: S, env: config::Environment) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load `config/app.*` (optional) overlaid with `AQI__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    layered(
        config::File::with_name("config/app").required(false),
        env_overrides(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let config = parse("");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.preferences.storage_key, "app-theme");
        assert_eq!(config.preferences.default_theme, "system");
        assert!(config.preferences.path.is_none());
        assert!(config.alerts.enabled);
        assert_eq!(config.alerts.aqi_threshold, 150);
        assert!(config.alerts.emergency_alerts);
        assert!(config.mock.seed.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse(
            r#"
            [server]
            port = 9000

            [preferences]
            path = "data/preferences.json"

            [alerts]
            aqi_threshold = 200

            [mock]
            seed = 11
            "#,
        );

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.preferences.path.as_deref(), Some("data/preferences.json"));
        assert_eq!(config.preferences.storage_key, "app-theme");

        let settings = AlertSettings::from(&config.alerts);
        assert!(settings.enabled);
        assert_eq!(settings.aqi_threshold, 200);
        assert_eq!(config.mock.seed, Some(11));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = File::from_str(
            r#"
            [server]
            port = 9000

            [alerts]
            enabled = true
            aqi_threshold = 200
            "#,
            FileFormat::Toml,
        );

        let mut vars = config::Map::new();
        vars.insert("AQI__SERVER__PORT".to_string(), "9100".to_string());
        vars.insert("AQI__ALERTS__ENABLED".to_string(), "false".to_string());
        vars.insert("AQI__MOCK__SEED".to_string(), "42".to_string());
        vars.insert("AQI__ALERTS__EMERGENCY_ALERTS".to_string(), "false".to_string());
        vars.insert("OTHER__SERVER__PORT".to_string(), "1".to_string());

        let config = layered(file, env_overrides().source(Some(vars))).unwrap();

        assert_eq!(config.server.port, 9100);
        assert!(!config.alerts.enabled);
        assert_eq!(config.alerts.aqi_threshold, 200);
        assert_eq!(config.mock.seed, Some(42));
        assert!(!AlertSettings::from(&config.alerts).emergency_alerts);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
