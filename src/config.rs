use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_src_path")]
    pub src_path: String,
    #[serde(default = "default_translations_path")]
    pub translations_path: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_function_name")]
    pub function_name: String,
    #[serde(default)]
    pub verbose: bool,
    /// Partition keys by their `context` option into subdirectories.
    #[serde(default)]
    pub contexts: bool,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_src_path() -> String {
    "src".to_string()
}

fn default_translations_path() -> String {
    "public/translations".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "it"].map(String::from).to_vec()
}

fn default_function_name() -> String {
    "t".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_path: default_src_path(),
            translations_path: default_translations_path(),
            languages: default_languages(),
            function_name: default_function_name(),
            verbose: false,
            contexts: false,
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must contain at least one language tag");
        }
        for (i, lang) in self.languages.iter().enumerate() {
            if lang.trim().is_empty() {
                bail!("'languages[{}]' is empty", i);
            }
        }

        if self.function_name.trim().is_empty() {
            bail!("'functionName' must not be empty");
        }

        self.ignore_patterns()?;
        Ok(())
    }

    /// Compiled `ignores` globs.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
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
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
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
