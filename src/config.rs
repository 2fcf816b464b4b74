use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::sampling::generator::{FrequencyDistribution, DEFAULT_MEAN, DEFAULT_STD_DEV};

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub ui: UiConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub mean: f64,
    pub std_dev: f64,
    /// Fixed seed for reproducible tables. Unset means fresh entropy per run.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn distribution(&self) -> Result<FrequencyDistribution> {
        FrequencyDistribution::new(self.mean, self.std_dev)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// TTF/OTF font with Hangul coverage.
    pub font_path: Option<PathBuf>,
}

pub fn parse_config(contents: &str, source: &Path) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| DashboardError::ConfigParse {
        path: source.to_path_buf(),
        source: e,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| DashboardError::ConfigRead {
        path: file_path.to_path_buf(),
        source: e,
    })?;
    parse_config(&contents, file_path)
}

/// A missing file means defaults; a present but broken file is an error.
pub fn load_config_or_default(file_path: &Path) -> Result<Config> {
    if !file_path.exists() {
        info!(path = %file_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let config = load_config_from_file(file_path)?;
    info!(path = %file_path.display(), "loaded config");
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.generator.distribution()?;
        if let Some(font) = &self.ui.font_path {
            if !font.is_file() {
                return Err(DashboardError::InvalidConfig(format!(
                    "ui.font_path ('{}') is not a file",
                    font.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("", Path::new("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.mean, 50.0);
        assert_eq!(config.generator.std_dev, 15.0);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn generator_section_overrides() {
        let config = parse_config(
            "[generator]\nmean = 30.0\nstd_dev = 5.0\nseed = 42\n",
            Path::new("config.toml"),
        )
        .unwrap();
        assert_eq!(config.generator.mean, 30.0);
        assert_eq!(config.generator.std_dev, 5.0);
        assert_eq!(config.generator.seed, Some(42));
    }

    #[test]
    fn negative_spread_is_rejected() {
        let err = parse_config("[generator]\nstd_dev = -2.0\n", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDistribution { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("[generator]\nmedian = 3\n", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
    }

    #[test]
    fn missing_font_is_rejected() {
        let err = parse_config(
            "[ui]\nfont_path = \"/definitely/not/here.ttf\"\n",
            Path::new("config.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\nseed = 7").unwrap();
        let config = load_config_or_default(file.path()).unwrap();
        assert_eq!(config.generator.seed, Some(7));
    }

    #[test]
    fn unreadable_path_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigRead { .. }));
    }
}
