use crate::category::Category;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured project root.
pub const ROOT_ENV: &str = "PORTFOLIO_ROOT";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Website project root holding `src/lib/data` and `static/`.
    pub project_root: Option<PathBuf>,
    /// Category key preselected in the form.
    pub default_category: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("portfolio-media").join("config.json"))
    }

    /// Project root by precedence: explicit flag, `PORTFOLIO_ROOT`, config
    /// file, current directory.
    pub fn resolve_root(&self, flag: Option<&Path>) -> PathBuf {
        let env = std::env::var_os(ROOT_ENV).map(PathBuf::from);
        self.resolve_root_with(flag, env)
    }

    fn resolve_root_with(&self, flag: Option<&Path>, env: Option<PathBuf>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or(env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| self.project_root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Configured default category, if it names a known one.
    pub fn default_category(&self) -> Option<Category> {
        let key = self.default_category.as_deref()?;
        match key.parse::<Category>() {
            Ok(category) => Some(category),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring configured default category");
                None
            }
        }
    }
}
