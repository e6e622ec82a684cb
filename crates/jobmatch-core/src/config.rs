//! Configuration loading and discovery.
//!
//! Configuration is merged from, in order of precedence (highest first):
//!
//! 1. `JOBMATCH_`-prefixed environment variables
//! 2. Explicit files (e.g., from a `--config` flag)
//! 3. `jobmatch.toml` / `.jobmatch.toml` in the current directory or any
//!    parent (stopping at a `.git` boundary)
//! 4. `~/.config/jobmatch/config.toml` (user config)
//! 5. Built-in defaults
//!
//! All values have defaults, so running without any config file works.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::taxonomy::DEFAULT_TAXONOMY_BASE_URL;

/// The configuration for jobmatch.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files (logs go to stderr if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Path to the job-ad dataset CSV.
    pub dataset_path: Utf8PathBuf,
    /// Base URL of the taxonomy service used for SSYK definitions.
    pub taxonomy_base_url: String,
    /// Timeout for taxonomy requests, in seconds.
    pub http_timeout_secs: u64,
    /// Number of results shown per page.
    pub page_size: usize,
    /// Memoize definition lookups within a run.
    pub cache_definitions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            dataset_path: Utf8PathBuf::from("finaldataset.csv"),
            taxonomy_base_url: DEFAULT_TAXONOMY_BASE_URL.to_string(),
            http_timeout_secs: 10,
            page_size: DEFAULT_PAGE_SIZE,
            cache_definitions: true,
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from a `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "jobmatch";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/jobmatch/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Disable the boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // User config is the lowest-precedence file source
        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = figment.merge(Toml::file_exact(user_config.as_str()));
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = figment.merge(Toml::file_exact(pc.as_str()));
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = figment.merge(Toml::file_exact(file.as_str()));
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables win over everything:
        // JOBMATCH_DATASET_PATH=/data/ads.csv, JOBMATCH_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed("JOBMATCH_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            dataset = %config.dataset_path,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, ordered low-to-high precedence: dotfile before regular.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for name in [format!(".{APP_NAME}.toml"), format!("{APP_NAME}.toml")] {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    found.push(candidate);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        return Utf8PathBuf::from_path_buf(config_path).ok();
    }
    None
}
