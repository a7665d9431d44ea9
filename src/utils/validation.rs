use crate::utils::error::{AssignerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AssignerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AssignerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AssignerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AssignerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AssignerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出檔名必須以 `.xlsx` 結尾 (大小寫敏感)
pub fn validate_output_extension(file_name: &str) -> Result<()> {
    if !file_name.ends_with(".xlsx") {
        return Err(AssignerError::OutputExtensionError {
            file_name: file_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssignerError::InvalidConfigValueError {
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
        return Err(AssignerError::InvalidConfigValueError {
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
    fn test_validate_url() {
        assert!(validate_url("image.endpoint", "https://example.com").is_ok());
        assert!(validate_url("image.endpoint", "http://example.com/random").is_ok());
        assert!(validate_url("image.endpoint", "").is_err());
        assert!(validate_url("image.endpoint", "invalid-url").is_err());
        assert!(validate_url("image.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_output_extension() {
        assert!(validate_output_extension("out.xlsx").is_ok());
        assert!(validate_output_extension("nested/out.xlsx").is_ok());

        let err = validate_output_extension("report.txt").unwrap_err();
        assert_eq!(err.to_string(), "Output file should end with .xlsx");
        assert!(validate_output_extension("report.XLSX").is_err());
        assert!(validate_output_extension("report.xlsx.bak").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("sessions.image_scale", 0.1, 0.01, 10.0).is_ok());
        assert!(validate_range("sessions.image_scale", 0.0, 0.01, 10.0).is_err());
        assert!(validate_range("sessions.count", 0_usize, 1, 100).is_err());
        assert!(validate_range("sessions.count", 7_usize, 1, 100).is_ok());
    }
}
