pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::session::{DEFAULT_ALTERNATE_LIMIT, DEFAULT_LIMIT};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stem-leaf-plot")]
#[command(about = "Stem and leaf plot of the prime numbers up to a limit")]
pub struct CliConfig {
    /// Inclusive upper bound for the prime search
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Limit selected by the toggle
    #[arg(long, default_value_t = DEFAULT_ALTERNATE_LIMIT, allow_negative_numbers = true)]
    pub alternate_limit: i64,

    /// Also render the plot for the alternate limit
    #[arg(long)]
    pub toggle: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Formats to include in the bundle: text, csv, tsv, json
    #[arg(long, value_delimiter = ',', default_value = "text")]
    pub formats: Vec<String>,

    /// Print the plot without writing a bundle
    #[arg(long)]
    pub no_bundle: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The same settings pointed at the alternate limit.
    pub fn toggled(&self) -> Self {
        Self {
            limit: self.alternate_limit,
            alternate_limit: self.limit,
            ..self.clone()
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn limit(&self) -> i64 {
        self.limit
    }

    fn alternate_limit(&self) -> i64 {
        self.alternate_limit
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_limit("limit", self.limit)?;
        validation::validate_limit("alternate_limit", self.alternate_limit)?;
        validation::validate_output_formats("formats", &self.formats)?;
        if !self.no_bundle {
            validation::validate_path("output_path", &self.output_path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["stem-leaf-plot"]);
        assert_eq!(config.limit, 110);
        assert_eq!(config.alternate_limit, 150);
        assert_eq!(config.formats, vec!["text".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_list_and_toggle() {
        let config = CliConfig::parse_from([
            "stem-leaf-plot",
            "--limit",
            "50",
            "--formats",
            "csv,json",
            "--toggle",
        ]);
        assert_eq!(config.formats, vec!["csv".to_string(), "json".to_string()]);

        let toggled = config.toggled();
        assert_eq!(toggled.limit, 150);
        assert_eq!(toggled.alternate_limit, 50);
        assert_eq!(toggled.formats, config.formats);
    }

    #[test]
    fn test_negative_limit_parses_but_fails_validation() {
        let config = CliConfig::parse_from(["stem-leaf-plot", "--limit", "-7"]);
        assert_eq!(config.limit, -7);
        assert!(config.validate().is_err());
    }
}
