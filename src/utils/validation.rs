use crate::utils::error::ConfigError;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_database_url(field_name: &str, url: &str) -> Result<(), ConfigError> {
    validate_non_empty_string(field_name, url)?;

    if !url.starts_with("sqlite:") {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url.to_string(),
            reason: "Only sqlite: URLs are supported".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<(), ConfigError> {
    if !allowed.contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
