use crate::config::{CliConfig, OutputFormat, PrimalityStrategy};
use crate::domain::ports::{ConfigProvider, DisplaySettings};
use crate::utils::error::{GoldbachError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_PANEL_SIZE: usize = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub primality: PrimalityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "DisplayConfig::default_max_bins")]
    pub max_bins: usize,
    #[serde(default = "DisplayConfig::default_bar_width")]
    pub bar_width: usize,
    #[serde(default = "DisplayConfig::default_show_chart")]
    pub show_chart: bool,
    #[serde(default = "DisplayConfig::default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "DisplayConfig::default_chart_height")]
    pub chart_height: usize,
    #[serde(default = "DisplayConfig::default_highlighted_pairs")]
    pub highlighted_pairs: usize,
}

impl DisplayConfig {
    fn default_max_bins() -> usize {
        30
    }
    fn default_bar_width() -> usize {
        40
    }
    fn default_show_chart() -> bool {
        true
    }
    fn default_chart_width() -> usize {
        60
    }
    fn default_chart_height() -> usize {
        20
    }
    fn default_highlighted_pairs() -> usize {
        5
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            max_bins: Self::default_max_bins(),
            bar_width: Self::default_bar_width(),
            show_chart: Self::default_show_chart(),
            chart_width: Self::default_chart_width(),
            chart_height: Self::default_chart_height(),
            highlighted_pairs: Self::default_highlighted_pairs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimalityConfig {
    #[serde(default)]
    pub strategy: PrimalityStrategy,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GoldbachError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GoldbachError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_BINS})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GoldbachError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 載入設定檔 (若有指定) 並套用命令列覆蓋
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_cli_overrides(cli);
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(format) = cli.format {
            self.display.format = format;
        }
        if let Some(strategy) = cli.strategy {
            self.primality.strategy = strategy;
        }
        if let Some(max_bins) = cli.max_bins {
            self.display.max_bins = max_bins;
        }
        if cli.no_chart {
            self.display.show_chart = false;
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_positive_number("display.max_bins", self.display.max_bins, 1)?;
        validate_range("display.bar_width", self.display.bar_width, 1, MAX_PANEL_SIZE)?;
        validate_range("display.chart_width", self.display.chart_width, 2, MAX_PANEL_SIZE)?;
        validate_range("display.chart_height", self.display.chart_height, 2, MAX_PANEL_SIZE)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn display(&self) -> DisplaySettings {
        DisplaySettings {
            max_bins: self.display.max_bins,
            bar_width: self.display.bar_width,
            show_chart: self.display.show_chart,
            chart_width: self.display.chart_width,
            chart_height: self.display.chart_height,
            highlighted_pairs: self.display.highlighted_pairs,
        }
    }

    fn strategy(&self) -> PrimalityStrategy {
        self.primality.strategy
    }

    fn output_format(&self) -> OutputFormat {
        self.display.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
