//! Configuration management for the Red Dot Studio content engine.
//!
//! Parses `reddot.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `database.url`
//! - `site.base_url`

mod expand;

use std::path::{Path, PathBuf};

use reddot_markdown::Theme;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override database URL.
    pub database_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "reddot.toml";

/// Default database location, relative to the config directory.
const DEFAULT_DATABASE_URL: &str = "sqlite://reddot.db";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration (URL as written in TOML).
    database: DatabaseConfigRaw,
    /// Site identity used in feeds and structured data.
    pub site: SiteConfig,
    /// Markdown rendering configuration.
    pub markdown: MarkdownConfig,

    /// Resolved database configuration (set after loading).
    #[serde(skip)]
    pub database_resolved: DatabaseConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3001,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DatabaseConfigRaw {
    url: Option<String>,
}

/// Resolved database configuration.
#[derive(Debug, Default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL with relative paths resolved.
    pub url: String,
}

/// Site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Studio name, used as default post author and JSON-LD publisher.
    pub name: String,
    /// Public base URL (e.g. `https://reddot.studio`). When unset the server
    /// derives it from request headers.
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Red Dot Studio".to_owned(),
            base_url: None,
        }
    }
}

/// Markdown rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Class overrides for generated elements. Missing keys keep the default.
    pub theme: Theme,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`database.url`").
        field: String,
        /// Error message (e.g., "${`DATABASE_URL`} environment variable not found").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Resolve a relative `SQLite` file path against `base`.
///
/// In-memory databases and absolute paths are returned unchanged, as are
/// URLs for other schemes.
fn resolve_database_url(url: &str, base: &Path) -> String {
    let Some(rest) = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
    else {
        return url.to_owned();
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    if path.is_empty() || path.starts_with(':') || Path::new(path).is_absolute() {
        return url.to_owned();
    }
    let resolved = base.join(path);
    match query {
        Some(query) => format!("sqlite://{}?{query}", resolved.display()),
        None => format!("sqlite://{}", resolved.display()),
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `reddot.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(url) = &settings.database_url {
            self.database_resolved.url.clone_from(url);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfigRaw::default(),
            site: SiteConfig::default(),
            markdown: MarkdownConfig::default(),
            database_resolved: DatabaseConfig {
                url: resolve_database_url(DEFAULT_DATABASE_URL, base),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_database()?;
        self.validate_site()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 would let the OS pick a random port, which the front end
        // cannot discover
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_database(&self) -> Result<(), ConfigError> {
        let url = &self.database_resolved.url;
        require_non_empty(url, "database.url")?;
        if !url.starts_with("sqlite:") {
            return Err(ConfigError::Validation(
                "database.url must be a sqlite: URL".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;
        if let Some(ref base_url) = self.site.base_url {
            require_http_url(base_url, "site.base_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref url) = self.database.url {
            self.database.url = Some(expand::expand_env(url, "database.url")?);
        }

        if let Some(ref base_url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(base_url, "site.base_url")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let url = self.database.url.as_deref().unwrap_or(DEFAULT_DATABASE_URL);
        self.database_resolved = DatabaseConfig {
            url: resolve_database_url(url, config_dir),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.database_resolved.url, "sqlite:///test/reddot.db");
        assert_eq!(config.site.name, "Red Dot Studio");
        assert!(config.site.base_url.is_none());
        assert_eq!(config.markdown.theme, Theme::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
name = "Blue Square"
base_url = "https://bluesquare.example"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.name, "Blue Square");
        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://bluesquare.example")
        );
    }

    #[test]
    fn test_parse_theme_overrides_keep_defaults() {
        let toml = r#"
[markdown.theme]
paragraph = "prose"
h1 = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let theme = &config.markdown.theme;
        assert_eq!(theme.paragraph, "prose");
        assert_eq!(theme.h1, "");
        assert_eq!(theme.h2, Theme::default().h2);
    }

    #[test]
    fn test_resolve_paths_relative_database() {
        let toml = r#"
[database]
url = "sqlite://data/site.db?mode=rwc"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.database_resolved.url,
            "sqlite:///project/data/site.db?mode=rwc"
        );
    }

    #[test]
    fn test_resolve_database_url_unchanged_cases() {
        let base = Path::new("/project");
        assert_eq!(resolve_database_url("sqlite::memory:", base), "sqlite::memory:");
        assert_eq!(
            resolve_database_url("sqlite:///var/lib/reddot.db", base),
            "sqlite:///var/lib/reddot.db"
        );
        assert_eq!(
            resolve_database_url("postgres://localhost/db", base),
            "postgres://localhost/db"
        );
    }

    #[test]
    fn test_resolve_database_url_short_form() {
        assert_eq!(
            resolve_database_url("sqlite:site.db", Path::new("/project")),
            "sqlite:///project/site.db"
        );
    }

    #[test]
    fn test_apply_cli_settings_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_port_and_database() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            port: Some(8080),
            database_url: Some("sqlite::memory:".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database_resolved.url, "sqlite::memory:");
        assert_eq!(config.server.host, "127.0.0.1"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, before.server.host);
        assert_eq!(config.server.port, before.server.port);
        assert_eq!(config.database_resolved.url, before.database_resolved.url);
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host cannot be empty"));
    }

    #[test]
    fn test_validate_database_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.database_resolved.url = "postgres://localhost/db".to_owned();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn test_validate_site_base_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = Some("reddot.studio".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.base_url"));

        config.site.base_url = Some("https://reddot.studio".to_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_site_name_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reddot.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 4000

[database]
url = "sqlite://content.db"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.database_resolved.url,
            format!("sqlite://{}", dir.path().join("content.db").display())
        );
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reddot.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();
        let overrides = CliSettings {
            port: Some(5000),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reddot.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            port: Some(0),
            ..Default::default()
        };

        assert!(Config::load(Some(&path), Some(&overrides)).is_err());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/reddot.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reddot.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_expand_env_vars_site_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("REDDOT_TEST_BASE_URL", "https://staging.reddot.studio");
        }

        let toml = r#"
[site]
base_url = "${REDDOT_TEST_BASE_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://staging.reddot.studio")
        );

        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("REDDOT_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_database_default() {
        let toml = r#"
[database]
url = "${REDDOT_TEST_DB_UNSET:-sqlite::memory:}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.database.url.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        let toml = r#"
[server]
host = "${REDDOT_TEST_HOST_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("server.host"));
    }
}
