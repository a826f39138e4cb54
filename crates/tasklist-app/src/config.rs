//! Project configuration loaded from `.tasklist/config.toml`.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tasklist_core::{FilterMode, SortMode};

const CONFIG_DIR: &str = ".tasklist";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration loaded from `.tasklist/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// `[view]` table.
    #[serde(default)]
    pub view: ViewConfig,
    /// `[seed]` table.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl ProjectConfig {
    /// Load configuration from a working directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        Ok(config)
    }
}

/// Initial filter and sort selections.
///
/// Tokens are kept as written; unknown values fall back to the defaults
/// when resolved instead of failing the load.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ViewConfig {
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

impl ViewConfig {
    /// Build a view config from raw tokens.
    pub fn new(filter: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            filter: filter.map(str::to_owned),
            sort: sort.map(str::to_owned),
        }
    }

    /// Resolved filter mode.
    pub fn filter(&self) -> FilterMode {
        let Some(token) = self.filter.as_deref() else {
            return FilterMode::default();
        };
        token.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to filter '{}'", FilterMode::default());
            FilterMode::default()
        })
    }

    /// Resolved sort mode.
    pub fn sort(&self) -> SortMode {
        let Some(token) = self.sort.as_deref() else {
            return SortMode::default();
        };
        token.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to sort '{}'", SortMode::default());
            SortMode::default()
        })
    }
}

/// Controls which demo data is loaded at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Preload the three demo tasks.
    #[serde(default = "default_true")]
    pub sample_tasks: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { sample_tasks: true }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) -> Result<()> {
        let cfg_dir = dir.join(CONFIG_DIR);
        fs::create_dir_all(&cfg_dir)?;
        let mut file = fs::File::create(cfg_dir.join(CONFIG_FILE))?;
        writeln!(file, "{body}")?;
        Ok(())
    }

    #[test]
    fn missing_config_returns_defaults() -> Result<()> {
        let dir = tempdir()?;
        let cfg = ProjectConfig::from_workdir(dir.path())?;
        assert_eq!(cfg.view.filter(), FilterMode::All);
        assert_eq!(cfg.view.sort(), SortMode::Newest);
        assert!(cfg.seed.sample_tasks);
        Ok(())
    }

    #[test]
    fn load_config_with_view_and_seed() -> Result<()> {
        let dir = tempdir()?;
        write_config(
            dir.path(),
            "[view]\nfilter = \"pending\"\nsort = \"alphabetical\"\n\n[seed]\nsample_tasks = false",
        )?;

        let cfg = ProjectConfig::from_workdir(dir.path())?;
        assert_eq!(cfg.view.filter(), FilterMode::Pending);
        assert_eq!(cfg.view.sort(), SortMode::Alphabetical);
        assert!(!cfg.seed.sample_tasks);
        Ok(())
    }

    #[test]
    fn unknown_tokens_fall_back_without_failing() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[view]\nfilter = \"archived\"\nsort = \"priority\"")?;

        let cfg = ProjectConfig::from_workdir(dir.path())?;
        assert_eq!(cfg.view.filter(), FilterMode::All);
        assert_eq!(cfg.view.sort(), SortMode::Newest);
        Ok(())
    }

    #[test]
    fn malformed_toml_is_reported_with_path() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[view\nfilter = ")?;

        let Err(err) = ProjectConfig::from_workdir(dir.path()) else {
            panic!("malformed config should error");
        };
        assert!(err.to_string().contains("failed to parse"));
        assert!(err.to_string().contains(CONFIG_FILE));
        Ok(())
    }

    #[test]
    fn empty_seed_table_keeps_samples_enabled() -> Result<()> {
        let dir = tempdir()?;
        write_config(dir.path(), "[seed]")?;
        let cfg = ProjectConfig::from_workdir(dir.path())?;
        assert!(cfg.seed.sample_tasks);
        Ok(())
    }
}
