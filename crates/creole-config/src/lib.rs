use creole_engine::{EngineError, OptionKey, Options, PageCatalog};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PAGE_EXTENSION: &str = "creole";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid option in config: {0}")]
    InvalidOption(#[from] EngineError),

    #[error("Invalid pages pattern {pattern}: {source}")]
    PagesPatternError {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Link templates; unset entries keep the engine defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_link: Option<String>,
}

impl Templates {
    fn entries(&self) -> [(OptionKey, Option<&str>); 4] {
        [
            (OptionKey::ExternalLink, self.external_link.as_deref()),
            (OptionKey::InternalLink, self.internal_link.as_deref()),
            (OptionKey::MissingLink, self.missing_link.as_deref()),
            (OptionKey::UrlLink, self.url_link.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// Directory of page files used to tell existing pages from missing ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_dir: Option<PathBuf>,
    pub page_extension: String,
    pub templates: Templates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            image_base_url: None,
            pages_dir: None,
            page_extension: DEFAULT_PAGE_EXTENSION.to_string(),
            templates: Templates::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the pages directory
        config.pages_dir = config
            .pages_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/creole");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds engine options, scanning `pages_dir` when one is set.
    pub fn to_options(&self) -> Result<Options, ConfigError> {
        let mut options = Options::default();
        if let Some(url) = &self.base_url {
            options.set(OptionKey::BaseUrl, url.as_str())?;
        }
        if let Some(url) = &self.image_base_url {
            options.set(OptionKey::ImageBaseUrl, url.as_str())?;
        }
        for (key, template) in self.templates.entries() {
            if let Some(template) = template {
                options.set(key, template)?;
            }
        }
        if let Some(dir) = &self.pages_dir {
            options.set(OptionKey::Pages, scan_pages(dir, &self.page_extension)?)?;
        }
        Ok(options)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Collects the pages stored below `dir` as `*.{extension}` files.
///
/// Each file name without its extension is taken as a page title and
/// slugified the same way link targets are. Entries that cannot be read are
/// skipped.
pub fn scan_pages(dir: &Path, extension: &str) -> Result<PageCatalog, ConfigError> {
    let pattern = dir
        .join("**")
        .join(format!("*.{extension}"))
        .to_string_lossy()
        .into_owned();
    let entries = glob::glob(&pattern).map_err(|source| ConfigError::PagesPatternError {
        pattern: pattern.clone(),
        source,
    })?;

    let mut catalog = PageCatalog::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if let Some(title) = path.file_stem().and_then(|s| s.to_str()) {
                    catalog.insert(title);
                }
            }
            Err(e) => log::warn!("Skipping unreadable page entry: {e}"),
        }
    }
    log::debug!("Found {} pages below {}", catalog.len(), dir.display());
    Ok(catalog)
}
