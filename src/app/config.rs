//! Operator configuration loaded from `siteup.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, ExternalCommand, FqdnPolicy};

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "siteup.toml";

/// Everything `siteup` reads from `siteup.toml`. A missing file means
/// all defaults; unknown keys are rejected so a typo cannot silently
/// fall back to a default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionConfig {
    /// Filesystem layout.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Reverse-proxy restart settings.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Certificate issuance settings.
    #[serde(default)]
    pub certbot: CertbotConfig,
    /// Which wizard steps run.
    #[serde(default)]
    pub workflow: WorkflowConfig,
    /// Domain validation policy.
    #[serde(default)]
    pub validation: FqdnPolicy,
}

impl ProvisionConfig {
    /// Load `siteup.toml` from `root`, or the defaults when absent.
    pub fn load(root: &Path) -> Result<Self, AppError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.proxy.compose_command.is_empty() {
            return Err(AppError::configuration("proxy.compose_command must not be empty"));
        }
        if self.proxy.service.trim().is_empty() {
            return Err(AppError::configuration("proxy.service must not be empty"));
        }
        if self.certbot.command.is_empty() {
            return Err(AppError::configuration("certbot.command must not be empty"));
        }
        Ok(())
    }

    /// Command restarting the proxy service so it reloads the vhosts.
    pub fn proxy_restart_command(&self) -> Result<ExternalCommand, AppError> {
        ExternalCommand::from_parts(
            &self.proxy.compose_command,
            ["restart".to_string(), self.proxy.service.clone()],
        )
    }

    /// Certbot invocation: the configured prefix with `args` appended.
    pub fn certbot_command(&self, args: Vec<String>) -> Result<ExternalCommand, AppError> {
        ExternalCommand::from_parts(&self.certbot.command, args)
    }
}

/// Filesystem layout: where templates come from and where vhosts land.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the operator-editable templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    /// Directory the proxy loads virtual hosts from.
    #[serde(default = "default_sites_dir")]
    pub sites_dir: PathBuf,
    /// ACME webroot path as the certbot container sees it.
    #[serde(default = "default_webroot")]
    pub webroot: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            sites_dir: default_sites_dir(),
            webroot: default_webroot(),
        }
    }
}

/// Reverse-proxy restart settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    /// Orchestration CLI prefix, e.g. `["docker", "compose"]`.
    #[serde(default = "default_compose_command")]
    pub compose_command: Vec<String>,
    /// Service restarted after each config write.
    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { compose_command: default_compose_command(), service: default_service() }
    }
}

/// Certificate issuance settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertbotConfig {
    /// Full certbot invocation prefix; the `certonly` args are appended to it.
    #[serde(default = "default_certbot_command")]
    pub command: Vec<String>,
}

impl Default for CertbotConfig {
    fn default() -> Self {
        Self { command: default_certbot_command() }
    }
}

/// Which wizard steps run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowConfig {
    /// Ask the www-alias question at all.
    #[serde(default = "default_true")]
    pub offer_www_alias: bool,
    /// Collect a backend and write the final vhost after issuance.
    #[serde(default = "default_true")]
    pub configure_backend: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self { offer_www_alias: default_true(), configure_backend: default_true() }
    }
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("template")
}

fn default_sites_dir() -> PathBuf {
    PathBuf::from("app/nginx/sites-enabled")
}

fn default_webroot() -> String {
    "/var/www/certbot".to_string()
}

fn default_compose_command() -> Vec<String> {
    vec!["docker".to_string(), "compose".to_string()]
}

fn default_service() -> String {
    "nginx".to_string()
}

fn default_certbot_command() -> Vec<String> {
    vec![
        "docker".to_string(),
        "compose".to_string(),
        "run".to_string(),
        "--rm".to_string(),
        "certbot".to_string(),
    ]
}

fn default_true() -> bool {
    true
}
