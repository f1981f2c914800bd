use crate::error::{ConfigError, Result};
use crate::notify::ToastPosition;
use crate::state::{DEFAULT_PAGE_COUNT, PageCount};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Kept signed so zero and negative values reach validation instead of
    /// failing to parse.
    #[serde(default = "default_number_of_pages")]
    pub number_of_pages: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
    #[serde(default)]
    pub position: ToastPosition,
}

// Default value functions
fn default_number_of_pages() -> i64 {
    i64::from(DEFAULT_PAGE_COUNT)
}

fn default_auto_dismiss_ms() -> u64 {
    3000
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            number_of_pages: default_number_of_pages(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
            position: ToastPosition::default(),
        }
    }
}

impl AppConfig {
    /// Validated page count.
    pub fn page_count(&self) -> Result<PageCount> {
        PageCount::new(self.panel.number_of_pages)
    }

    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.notifications.auto_dismiss_ms)
    }

    /// Apply a command-line page count, which wins over the file.
    pub fn apply_page_arg(&mut self, arg: &str) -> Result<()> {
        let count: PageCount = arg.parse()?;
        self.panel.number_of_pages = i64::from(count.get());
        Ok(())
    }
}

/// Get the path to the config file
pub fn config_path() -> std::result::Result<PathBuf, ConfigError> {
    let dirs = directories::ProjectDirs::from("", "", "page-selector")
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> std::result::Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> std::result::Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration from file, or return default if file doesn't exist
pub fn load_config() -> AppConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{e}. Using defaults.");
            return AppConfig::default();
        }
    };
    load_config_from(&path)
}

/// Like [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return AppConfig::default();
    }
    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}. Using defaults.");
            AppConfig::default()
        }
    }
}

/// Config from the file plus an optional command-line page count,
/// validated.
pub fn resolve(mut config: AppConfig, page_arg: Option<&str>) -> Result<(AppConfig, PageCount)> {
    if let Some(arg) = page_arg {
        config.apply_page_arg(arg)?;
    }
    let count = config.page_count()?;
    Ok((config, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse(text: &str) -> AppConfig {
        parse_config(text, Path::new("config.toml")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_count().unwrap().get(), 4);
        assert_eq!(config.auto_dismiss(), Duration::from_secs(3));
        assert_eq!(config.notifications.position, ToastPosition::TopRight);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("");
        assert_eq!(config.panel.number_of_pages, 4);
        assert_eq!(config.notifications.auto_dismiss_ms, 3000);
    }

    #[test]
    fn test_parse_sections() {
        let config = parse(concat!(
            "[panel]\n",
            "number_of_pages = 7\n",
            "\n",
            "[notifications]\n",
            "auto_dismiss_ms = 1500\n",
            "position = \"bottom-left\"\n",
        ));
        assert_eq!(config.page_count().unwrap().get(), 7);
        assert_eq!(config.auto_dismiss(), Duration::from_millis(1500));
        assert_eq!(config.notifications.position, ToastPosition::BottomLeft);
    }

    #[test]
    fn test_invalid_page_count_is_rejected() {
        let config = parse("[panel]\nnumber_of_pages = 0\n");
        assert!(matches!(config.page_count(), Err(Error::InvalidPageCount(_))));
        let config = parse("[panel]\nnumber_of_pages = -2\n");
        assert!(config.page_count().is_err());
        let config = parse("[panel]\nnumber_of_pages = 3000000000\n");
        assert!(config.page_count().is_err());
    }

    #[test]
    fn test_non_integer_page_count_fails_to_parse() {
        let err =
            parse_config("[panel]\nnumber_of_pages = 2.5\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_command_line_wins() {
        let file = parse("[panel]\nnumber_of_pages = 7\n");
        let (config, count) = resolve(file, Some("9")).unwrap();
        assert_eq!(count.get(), 9);
        assert_eq!(config.panel.number_of_pages, 9);

        let file = parse("[panel]\nnumber_of_pages = 7\n");
        assert!(resolve(file.clone(), Some("zero")).is_err());
        assert!(resolve(file.clone(), Some("60")).is_err());
        assert!(resolve(file.clone(), Some("3000000000")).is_err());
        assert_eq!(resolve(file, None).unwrap().1.get(), 7);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config_from(Path::new("/nonexistent/page-selector/config.toml"));
        assert_eq!(config.panel.number_of_pages, 4);
    }
}
