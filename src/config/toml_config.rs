use crate::core::rounding::MAX_ROUNDING_DIGITS;
use crate::utils::error::{AngleError, Result};
use crate::utils::validation::{validate_one_of, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SexagesimalConfig {
    pub output: OutputConfig,
    pub comparison: ComparisonConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimals printed for decimal-degree and radian readbacks.
    pub decimal_places: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { decimal_places: 6 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Decimals both sides are rounded to before comparing; exact when unset.
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl SexagesimalConfig {
    /// 載入配置: 無路徑時使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                validate_path("config", &path.to_string_lossy())?;
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AngleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| AngleError::ConfigError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate_config()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${SEXAGESIMAL_PRECISION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AngleError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "output.decimal_places",
            self.output.decimal_places,
            0,
            MAX_ROUNDING_DIGITS,
        )?;

        if let Some(precision) = self.comparison.precision {
            validate_range("comparison.precision", precision, 0, MAX_ROUNDING_DIGITS)?;
        }

        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;

        Ok(())
    }

    pub fn decimal_places(&self) -> usize {
        self.output.decimal_places as usize
    }

    pub fn comparison_precision(&self) -> Option<u32> {
        self.comparison.precision
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json
    }
}

impl Validate for SexagesimalConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
