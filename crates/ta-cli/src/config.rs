//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use ta_core::DEFAULT_GROUP_PREFIXES;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the platform downloads exports into.
    pub export_dir: PathBuf,

    /// Directory reports are written to.
    pub report_dir: PathBuf,

    /// Roster of expected participants (`full_name,group` per line).
    pub roster_path: PathBuf,

    /// Group code prefixes recognized inside display names.
    pub group_prefixes: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("export_dir", &self.export_dir)
            .field("report_dir", &self.report_dir)
            .field("roster_path", &self.roster_path)
            .field("group_prefixes", &self.group_prefixes)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
            report_dir: dirs::desktop_dir().unwrap_or_else(|| PathBuf::from(".")),
            roster_path: PathBuf::from("GroupsBase.csv"),
            group_prefixes: DEFAULT_GROUP_PREFIXES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TA_*)
        figment = figment.merge(Env::prefixed("TA_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for ta.
///
/// On Linux: `~/.config/ta`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ta"))
}
