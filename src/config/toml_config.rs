use crate::core::render::RenderOptions;
use crate::core::session::DEFAULT_ALTERNATE_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::{PlotError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub plot: PlotConfig,
    pub render: Option<RenderConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub limit: i64,
    pub alternate_limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub primes_separator: Option<String>,
    pub leaf_separator: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub bundle_filename: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_limit("plot.limit", self.plot.limit)?;
        if let Some(alternate) = self.plot.alternate_limit {
            validation::validate_limit("plot.alternate_limit", alternate)?;
        }

        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;
        if let Some(name) = &self.load.bundle_filename {
            validation::validate_path("load.bundle_filename", name)?;
        }

        if let Some(render) = &self.render {
            if let Some(sep) = &render.primes_separator {
                validation::validate_non_empty_string("render.primes_separator", sep)?;
            }
            if let Some(sep) = &render.leaf_separator {
                validation::validate_non_empty_string("render.leaf_separator", sep)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn limit(&self) -> i64 {
        self.plot.limit
    }

    fn alternate_limit(&self) -> i64 {
        self.plot.alternate_limit.unwrap_or(DEFAULT_ALTERNATE_LIMIT)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn bundle_filename(&self) -> &str {
        self.load
            .bundle_filename
            .as_deref()
            .unwrap_or("plot_output.zip")
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(render) = &self.render {
            if let Some(sep) = &render.primes_separator {
                options.primes_separator = sep.clone();
            }
            if let Some(sep) = &render.leaf_separator {
                options.leaf_separator = sep.clone();
            }
        }
        options
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
