use crate::content::SectionList;
use crate::input::KeyConfig;
use crate::logging;
use crate::navigation::swipe::SwipeConfig;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub theme: String,
    pub scroll: ScrollConfig,
    pub swipe: SwipeConfig,
    pub keymap: KeyConfig,
    /// Optional TOML file with `[[sections]]` replacing the built-in content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            theme: String::from("default"),
            scroll: ScrollConfig::default(),
            swipe: SwipeConfig::default(),
            keymap: KeyConfig::default(),
            content_path: None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ScrollConfig {
    /// How long the scroll gate stays closed after a section change.
    pub gate_ms: u64,
    /// Wheel deltas inside `[-threshold, threshold]` are ignored.
    pub wheel_threshold: i32,
    /// How long the outgoing section keeps its direction tag.
    pub transition_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            gate_ms: 800,
            wheel_threshold: 50,
            transition_ms: 400,
        }
    }
}

impl ScrollConfig {
    pub fn gate_window(&self) -> Duration {
        Duration::from_millis(self.gate_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub theme: Theme,
    pub scroll: ScrollConfig,
    pub swipe: SwipeConfig,
    pub keymap: KeyConfig,
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default(), Theme::default())
    }
}

impl Config {
    fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("folio")
    }

    fn load_theme(config_dir: &Path, theme_name: &str) -> Result<Theme> {
        let theme_path = config_dir.join("themes").join(format!("{}.toml", theme_name));

        if theme_path.exists() {
            let content =
                std::fs::read_to_string(&theme_path).context("Failed to read theme file")?;
            toml::from_str(&content).context("Failed to parse theme file")
        } else {
            Ok(Theme::default())
        }
    }

    /// Reads `config.toml` from `config_dir`, writing a default one when it is missing.
    pub fn load_config(config_dir: &Path) -> Result<ConfigFile> {
        let config_path = config_dir.join("config.toml");

        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            std::fs::create_dir_all(config_dir).context("Failed to create config directory")?;

            let default_config = ConfigFile::default();
            let toml_string = toml::to_string_pretty(&default_config)
                .context("Failed to serialize default config")?;

            std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

            Ok(default_config)
        }
    }

    fn from_file(config_file: ConfigFile, theme: Theme) -> Self {
        Self {
            theme,
            theme_name: config_file.theme,
            scroll: config_file.scroll,
            swipe: config_file.swipe,
            keymap: config_file.keymap,
            content_path: config_file.content_path,
        }
    }

    pub fn load_from(config_dir: &Path) -> Self {
        let config_file = Self::load_config(config_dir).unwrap_or_else(|err| {
            logging::error(&format!("Error loading config: {:#}", err));
            ConfigFile::default()
        });

        let theme = Self::load_theme(config_dir, &config_file.theme).unwrap_or_else(|err| {
            logging::error(&format!("Error loading theme: {:#}", err));
            Theme::default()
        });

        Self::from_file(config_file, theme)
    }

    pub fn new() -> Self {
        Self::load_from(&Self::get_config_dir())
    }

    /// Sections from `content_path`, or the built-in content when unset or unreadable.
    pub fn load_sections(&self) -> SectionList {
        let Some(path) = &self.content_path else {
            return SectionList::default();
        };
        match SectionList::load(path) {
            Ok(sections) => {
                logging::info(&format!(
                    "Loaded {} sections from {}",
                    sections.len(),
                    path.display()
                ));
                sections
            }
            Err(err) => {
                logging::warn(&format!("{} ({}), using built-in content", err, path.display()));
                SectionList::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_written_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = Config::load_config(dir.path()).unwrap();

        assert_eq!(file, ConfigFile::default());
        assert!(dir.path().join("config.toml").exists());

        // second load reads back what was written
        assert_eq!(Config::load_config(dir.path()).unwrap(), ConfigFile::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[scroll]\ngate_ms = 300\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path());
        assert_eq!(config.scroll.gate_ms, 300);
        assert_eq!(config.scroll.wheel_threshold, 50);
        assert_eq!(config.theme_name, "default");
        assert_eq!(config.keymap, KeyConfig::default());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "scroll = [").unwrap();

        let config = Config::load_from(dir.path());
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn content_path_overrides_sections() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content.toml");
        std::fs::write(
            &content,
            "[[sections]]\ntitle = \"Only\"\n[sections.body]\nkind = \"skills\"\nitems = []\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.content_path = Some(content);
        assert_eq!(config.load_sections().titles(), vec!["Only"]);

        config.content_path = Some(dir.path().join("missing.toml"));
        assert_eq!(config.load_sections(), SectionList::default());
    }
}
