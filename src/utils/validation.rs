use crate::utils::error::{FolioError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 基礎路徑必須為空，或以 `/` 開頭且不以 `/` 結尾 (例如 `/p7`)
pub fn validate_base_path(field_name: &str, base_path: &str) -> Result<()> {
    if base_path.is_empty() {
        return Ok(());
    }

    let reason = if !base_path.starts_with('/') {
        Some("Base path must start with '/'")
    } else if base_path.ends_with('/') {
        Some("Base path must not end with '/'")
    } else if base_path.chars().any(char::is_whitespace) {
        Some("Base path must not contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: base_path.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(FolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.output_path", "./out").is_ok());
        assert!(validate_path("output.output_path", "").is_err());
        assert!(validate_path("output.output_path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_base_path() {
        assert!(validate_base_path("build.base_path", "").is_ok());
        assert!(validate_base_path("build.base_path", "/p7").is_ok());
        assert!(validate_base_path("build.base_path", "/docs/site").is_ok());
        assert!(validate_base_path("build.base_path", "p7").is_err());
        assert!(validate_base_path("build.base_path", "/p7/").is_err());
        assert!(validate_base_path("build.base_path", "/p 7").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("layout.max_orbiting", 36, 0, 36).is_ok());
        assert!(validate_range("layout.max_orbiting", 0, 0, 36).is_ok());
        assert!(validate_range("layout.max_orbiting", 37, 0, 36).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("site.lang", "en").is_ok());
        assert!(validate_non_empty_string("site.lang", "   ").is_err());
    }
}
