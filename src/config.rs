use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::{
    DEFAULT_MARKER, DEFAULT_SCRIPT_TYPE, DEFAULT_SOURCE_VARIABLE, DEFAULT_TARGET_VARIABLE,
    ScriptMatcher, Sentinels,
};

pub const CONFIG_FILE_NAME: &str = ".dictrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// `null` accepts any `<script>` element.
    #[serde(default = "default_script_type")]
    pub script_type: Option<String>,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_source_variable")]
    pub source_variable: String,
    #[serde(default = "default_target_variable")]
    pub target_variable: String,
    #[serde(default = "default_source_label")]
    pub source_label: String,
    #[serde(default = "default_target_label")]
    pub target_label: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.dict.cc/".to_string()
}

fn default_query_param() -> String {
    "s".to_string()
}

fn default_script_type() -> Option<String> {
    Some(DEFAULT_SCRIPT_TYPE.to_string())
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_source_variable() -> String {
    DEFAULT_SOURCE_VARIABLE.to_string()
}

fn default_target_variable() -> String {
    DEFAULT_TARGET_VARIABLE.to_string()
}

fn default_source_label() -> String {
    "en".to_string()
}

fn default_target_label() -> String {
    "de".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_param: default_query_param(),
            script_type: default_script_type(),
            marker: default_marker(),
            source_variable: default_source_variable(),
            target_variable: default_target_variable(),
            source_label: default_source_label(),
            target_label: default_target_label(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the base URL does not parse or a required value
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .with_context(|| format!("Invalid URL in 'baseUrl': \"{}\"", self.base_url))?;

        let required = [
            ("queryParam", &self.query_param),
            ("marker", &self.marker),
            ("sourceVariable", &self.source_variable),
            ("targetVariable", &self.target_variable),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", key);
            }
        }

        if self.timeout_secs == 0 {
            bail!("'timeoutSecs' must be greater than 0");
        }

        Ok(())
    }

    /// The document-format constants used by the extraction pipeline.
    pub fn sentinels(&self) -> Sentinels {
        Sentinels {
            matcher: ScriptMatcher::new(self.script_type.clone(), self.marker.clone()),
            source_variable: self.source_variable.clone(),
            target_variable: self.target_variable.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
