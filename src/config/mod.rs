//! Configuration management for the Nirvana studio tools.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use inquiry_core::{HttpTransport, InquiryTransport, SimulatedTransport};
use serde::{Deserialize, Serialize};

/// Deployment environment of the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Diagnostics are logged.
    Development,
    #[default]
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Relay endpoint server.
    pub server: ServerConfig,

    /// Outbound email settings.
    pub relay: RelayConfig,

    /// Where the brochure sends inquiries.
    pub client: ClientConfig,

    /// TUI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Loads global config first, then merges project-local config if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let global_path = Self::config_path()?;
        let project_path = Self::project_config_path().ok();
        Self::load_from(&global_path, project_path.as_deref())
    }

    /// Load from explicit global and project-local paths. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be read or parsed.
    pub fn load_from(global_path: &Path, project_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = if global_path.exists() {
            let contents = std::fs::read_to_string(global_path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Some(project_path) = project_path.filter(|p| p.exists()) {
            let contents = std::fs::read_to_string(project_path)?;
            let project_config: Self = toml::from_str(&contents)?;
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Get the project-local configuration file path.
    ///
    /// Looks for `.nirvana/config.toml` in the current directory.
    pub fn project_config_path() -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(cwd.join(".nirvana").join("config.toml"))
    }

    /// Merge another config into this one (project overrides global).
    fn merge(&mut self, other: Self) {
        let server = ServerConfig::default();
        if other.server.host != server.host {
            self.server.host = other.server.host;
        }
        if other.server.port != server.port {
            self.server.port = other.server.port;
        }
        if other.server.environment != server.environment {
            self.server.environment = other.server.environment;
        }

        let relay = RelayConfig::default();
        if other.relay.from != relay.from {
            self.relay.from = other.relay.from;
        }
        if other.relay.to != relay.to {
            self.relay.to = other.relay.to;
        }
        if other.relay.api_url != relay.api_url {
            self.relay.api_url = other.relay.api_url;
        }
        if other.relay.api_key_env != relay.api_key_env {
            self.relay.api_key_env = other.relay.api_key_env;
        }
        if other.relay.api_key.is_some() {
            self.relay.api_key = other.relay.api_key;
        }

        let client = ClientConfig::default();
        if other.client.endpoint != client.endpoint {
            self.client.endpoint = other.client.endpoint;
        }
        if other.client.simulate != client.simulate {
            self.client.simulate = other.client.simulate;
        }
        if other.client.simulate_delay_ms != client.simulate_delay_ms {
            self.client.simulate_delay_ms = other.client.simulate_delay_ms;
        }

        let tui = TuiConfig::default();
        if other.tui.mouse != tui.mouse {
            self.tui.mouse = other.tui.mouse;
        }
        if other.tui.fade_ms != tui.fade_ms {
            self.tui.fade_ms = other.tui.fade_ms;
        }
    }

    /// Get the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the config directory path (`~/.config/nirvana/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home).join("nirvana"));
        }

        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(base.config_dir().join("nirvana"))
    }

    /// Get the data directory path (`~/.local/share/nirvana/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn data_dir() -> anyhow::Result<PathBuf> {
        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine data directory"))?;

        Ok(base.data_dir().join("nirvana"))
    }

    /// Log file used while the TUI owns the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined.
    pub fn log_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("nirvana.log"))
    }
}

/// Relay endpoint server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,

    /// Port to bind to.
    pub port: u16,

    /// Can also be set via the `NIRVANA_ENV` environment variable.
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: Environment::Production,
        }
    }
}

impl ServerConfig {
    /// Effective environment, preferring `NIRVANA_ENV` over the config file.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment_with(|name| std::env::var(name).ok())
    }

    fn environment_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Environment {
        lookup("NIRVANA_ENV")
            .as_deref()
            .and_then(Environment::parse)
            .unwrap_or(self.environment)
    }
}

/// Outbound email configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Sender address.
    pub from: String,

    /// Studio inbox receiving inquiries.
    pub to: String,

    /// Email provider API base URL.
    pub api_url: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// API key (the environment variable takes precedence).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            from: "Nirvana Interiors <inquiries@nirvanainteriors.studio>".to_string(),
            to: "gamerfreakin6@gmail.com".to_string(),
            api_url: "https://api.resend.com".to_string(),
            api_key_env: "RESEND_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl RelayConfig {
    /// Resolve the API key: environment variable first, then config file.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    fn api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        lookup(&self.api_key_env)
            .filter(present)
            .or_else(|| self.api_key.clone().filter(present))
    }
}

/// Brochure-side submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Full URL of the consultation endpoint.
    pub endpoint: String,

    /// Answer locally instead of calling the endpoint.
    pub simulate: bool,

    /// Delay before a simulated answer.
    pub simulate_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/api/send-consultation".to_string(),
            simulate: false,
            simulate_delay_ms: 1500,
        }
    }
}

impl ClientConfig {
    /// Build the transport the brochure submits through.
    #[must_use]
    pub fn transport(&self, force_simulate: bool) -> Arc<dyn InquiryTransport> {
        if self.simulate || force_simulate {
            Arc::new(SimulatedTransport::new(Duration::from_millis(
                self.simulate_delay_ms,
            )))
        } else {
            Arc::new(HttpTransport::new(self.endpoint.clone()))
        }
    }
}

/// TUI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Enable mouse wheel scrolling.
    pub mouse: bool,

    /// Page fade duration in milliseconds.
    pub fade_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            fade_ms: 500,
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_point_at_local_relay() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.client.endpoint,
            "http://127.0.0.1:3000/api/send-consultation"
        );
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.tui.fade(), Duration::from_millis(500));
    }

    #[test]
    fn missing_files_yield_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml"), None).unwrap();
        assert_eq!(config.relay.to, RelayConfig::default().to);
    }

    #[test]
    fn project_config_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let project = temp_dir.path().join("project.toml");

        std::fs::write(
            &global,
            "[server]\nport = 8080\n\n[relay]\nto = \"studio@example.com\"\n",
        )
        .unwrap();
        std::fs::write(
            &project,
            "[server]\nenvironment = \"development\"\n\n[client]\nsimulate = true\n",
        )
        .unwrap();

        let config = Config::load_from(&global, Some(&project)).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.relay.to, "studio@example.com");
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.client.simulate);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("config.toml");
        std::fs::write(&global, "[server\nport = ").unwrap();

        assert!(Config::load_from(&global, None).is_err());
    }

    #[test]
    fn env_var_takes_precedence_for_api_key() {
        let relay = RelayConfig {
            api_key: Some("from-file".to_string()),
            ..RelayConfig::default()
        };

        let key = relay.api_key_with(|name| {
            (name == "RESEND_API_KEY").then(|| "from-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("from-env"));

        let key = relay.api_key_with(|_| None);
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut relay = RelayConfig {
            api_key: Some("   ".to_string()),
            ..RelayConfig::default()
        };
        assert!(relay.api_key_with(|_| None).is_none());

        // A blank variable does not hide the configured key
        relay.api_key = Some("re_file".to_string());
        assert_eq!(
            relay.api_key_with(|_| Some(String::new())).as_deref(),
            Some("re_file")
        );
    }

    #[test]
    fn environment_variable_overrides_environment() {
        let server = ServerConfig::default();
        assert_eq!(
            server.environment_with(|_| Some("dev".to_string())),
            Environment::Development
        );
        assert_eq!(
            server.environment_with(|_| Some("staging".to_string())),
            Environment::Production
        );
        assert_eq!(server.environment_with(|_| None), Environment::Production);
    }

    #[test]
    fn unset_api_key_is_omitted() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(!rendered.contains("api_key ="));
        assert!(rendered.contains("api_key_env"));
    }

    #[test]
    fn simulate_flag_selects_simulated_transport() {
        let client = ClientConfig::default();
        assert_eq!(client.transport(true).name(), "simulated");
        assert_eq!(client.transport(false).name(), "http");
    }
}
