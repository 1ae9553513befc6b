use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::TranslationExtractor,
};

/// Resolved configuration for one command run.
pub struct Settings {
    pub root: PathBuf,
    pub config: Config,
}

impl Settings {
    /// Load the config file from the project root and apply CLI overrides
    /// (CLI > config file > defaults).
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let root = project_root(common.root.as_deref())?;
        let config_result = load_config(&root)?;

        if common.verbose {
            match &config_result.path {
                Some(path) => println!("Using config: {}", path.display()),
                None => println!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, common);
        config
            .validate()
            .context("Invalid configuration after applying command-line options")?;

        Ok(Self { root, config })
    }

    pub fn extractor(&self) -> Result<TranslationExtractor> {
        TranslationExtractor::new(&self.config, &self.root)
    }
}

pub fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = root.unwrap_or(Path::new("."));
    std::path::absolute(root).with_context(|| format!("Invalid project root: {}", root.display()))
}

fn apply_overrides(config: &mut Config, common: &CommonArgs) {
    if let Some(src_path) = &common.src_path {
        config.src_path = src_path.clone();
    }
    if let Some(translations_path) = &common.translations_path {
        config.translations_path = translations_path.clone();
    }
    if !common.languages.is_empty() {
        config.languages = common.languages.clone();
    }
    if let Some(function_name) = &common.function_name {
        config.function_name = function_name.clone();
    }
    config.contexts |= common.contexts;
    config.verbose |= common.verbose;
}
