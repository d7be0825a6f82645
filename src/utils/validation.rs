use crate::core::render::OutputFormat;
use crate::utils::error::{PlotError, Result};

/// Largest limit accepted from configuration. The sieve allocates one byte per
/// candidate, so this caps a run at roughly 100 MB.
pub const MAX_LIMIT: i64 = 100_000_000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_limit(field_name: &str, limit: i64) -> Result<()> {
    validate_range(field_name, limit, 0, MAX_LIMIT)
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(PlotError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    // Same parser the pipeline uses, reported against the caller's field name.
    for format in formats {
        format.parse::<OutputFormat>().map_err(|e| match e {
            PlotError::InvalidConfigValueError { reason, .. } => {
                PlotError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: format.clone(),
                    reason,
                }
            }
            other => other,
        })?;
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PlotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}
