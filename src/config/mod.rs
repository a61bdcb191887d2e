// Configuration file loading
//
// Config is read from `--config <path>` or ~/.seminar-kit/config.toml. Every
// key is optional; a missing file means all defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level seminar kit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitConfig {
    /// Directory generated artifacts are written to and served from
    #[serde(rename = "outputDir", alias = "output_dir", default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Text generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated_files")
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// OpenAI-compatible chat completions provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API root, without the `/chat/completions` suffix
    #[serde(rename = "baseUrl", alias = "base_url", default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key
    #[serde(rename = "apiKeyEnv", alias = "api_key_env", default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(rename = "outlineMaxTokens", alias = "outline_max_tokens", default = "default_outline_max_tokens")]
    pub outline_max_tokens: u32,
    #[serde(rename = "qnaMaxTokens", alias = "qna_max_tokens", default = "default_qna_max_tokens")]
    pub qna_max_tokens: u32,
    /// Whole-request timeout for one completion call
    #[serde(rename = "timeoutSecs", alias = "timeout_secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-3.5-turbo-0125".to_string() }
fn default_api_key_env() -> String { "OPENAI_API_KEY".to_string() }
fn default_temperature() -> f32 { 0.6 }
fn default_outline_max_tokens() -> u32 { 1500 }
fn default_qna_max_tokens() -> u32 { 1200 }
fn default_timeout_secs() -> u64 { 120 }

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            outline_max_tokens: default_outline_max_tokens(),
            qna_max_tokens: default_qna_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Prefix for download links; defaults to http://localhost:<port>
    #[serde(rename = "publicBaseUrl", alias = "public_base_url", default)]
    pub public_base_url: Option<String>,
    /// Allowed CORS origins; empty allows any origin
    #[serde(rename = "corsOrigins", alias = "cors_origins", default)]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 { 8000 }
fn default_bind() -> String { "0.0.0.0".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            public_base_url: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Base URL download links are built from
    pub fn public_base_url(&self) -> String {
        self.public_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

/// Default config path (~/.seminar-kit/config.toml)
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".seminar-kit").join("config.toml"))
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<KitConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

    toml::from_str(&content)
        .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))
}

/// Load the explicit config path if given, else the default path if it exists,
/// else defaults
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<KitConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match get_default_config_path() {
        Some(path) if path.exists() => {
            log::info!("Loading config from {}", path.display());
            load_config(&path)
        }
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(KitConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = KitConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("generated_files"));
        assert_eq!(config.provider.model, "gpt-3.5-turbo-0125");
        assert_eq!(config.provider.outline_max_tokens, 1500);
        assert_eq!(config.provider.qna_max_tokens, 1200);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.public_base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: KitConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
output_dir = "/srv/kits"

[provider]
model = "gpt-4o-mini"
temperature = 0.2

[server]
port = 9000
publicBaseUrl = "https://kits.example.edu/"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/kits"));
        assert_eq!(config.provider.model, "gpt-4o-mini");
        assert_eq!(config.provider.temperature, 0.2);
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.public_base_url(), "https://kits.example.edu");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config_or_default(Some(&temp_dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "port = [unclosed").unwrap();
        assert!(load_config(&path).is_err());
    }
}
