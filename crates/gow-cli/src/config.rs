use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up from the working directory upward
pub const CONFIG_FILE: &str = "gow.toml";

/// Constraint printed when neither the command line nor gow.toml supplies one
pub const DEFAULT_CONSTRAINT: &str = "<= 1.2.3, >= 1.4";

/// The gow configuration file structure (gow.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GowConfig {
    /// Constraint used when a command is run without one
    pub constraint: Option<String>,

    /// Path the configuration was loaded from
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl GowConfig {
    /// Load configuration from gow.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let mut config: GowConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                config.path = Some(config_path);
                return Ok(Some(config));
            }

            // Reached filesystem root, no config found
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Constraint to use when none is given explicitly
    pub fn default_constraint(&self) -> &str {
        self.constraint.as_deref().unwrap_or(DEFAULT_CONSTRAINT)
    }
}
