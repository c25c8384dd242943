use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Browsers whose profile layout we know how to locate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chrome,
    Chromium,
    Brave,
    Edge,
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Explicit `Bookmarks` file (auto-detected from `browser`/`profile` if unset)
    #[serde(default)]
    pub bookmarks_path: Option<PathBuf>,
    #[serde(default)]
    pub browser: Browser,
    #[serde(default)]
    pub profile: Option<String>,
    /// Program (plus arguments) invoked with the url appended
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub indent_width: Option<u16>,
}

pub const DEFAULT_INDENT_WIDTH: u16 = 2;

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file is a valid (all-defaults) config
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).context("Failed to parse config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    pub fn indent_width(&self) -> u16 {
        self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH)
    }

    pub fn profile(&self) -> &str {
        self.profile.as_deref().unwrap_or("Default")
    }

    /// Resolve the bookmarks file: explicit path wins, then the browser profile location
    pub fn resolve_bookmarks_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.bookmarks_path {
            return Some(path.clone());
        }
        crate::logic::platform::browser_profile_dir(self.browser)
            .map(|dir| dir.join(self.profile()).join("Bookmarks"))
    }

    pub fn resolve_open_command(&self) -> String {
        self.open_command
            .clone()
            .unwrap_or_else(|| crate::logic::platform::default_open_command().to_string())
    }
}
