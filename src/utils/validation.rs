use crate::utils::error::{Result, UiError};
use std::fmt::Display;
use std::ops::RangeInclusive;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> UiError {
    UiError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Parses an absolute http(s) URL, e.g. the server root or the page origin.
pub fn validate_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("not a URL ({})", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            raw,
            format!("expected http or https, got {}", url.scheme()),
        ));
    }
    Ok(url)
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| UiError::MissingConfigError {
        field: field.to_string(),
    })
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    match value.trim() {
        "" => Err(invalid(field, value, "must not be blank")),
        _ => Ok(()),
    }
}

pub fn validate_range<T>(field: &str, value: T, allowed: RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + Display,
{
    if allowed.contains(&value) {
        Ok(())
    } else {
        let reason = format!("allowed range is {}..={}", allowed.start(), allowed.end());
        Err(invalid(field, value, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert_eq!(
            validate_url("base_url", "http://localhost:8080").unwrap().port(),
            Some(8080)
        );
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "localhost").is_err());

        let err = validate_url("base_url", "ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("expected http or https"));
    }

    #[test]
    fn test_validate_range_is_inclusive() {
        assert!(validate_range("spinner_delay_ms", 0u64, 0..=60_000).is_ok());
        assert!(validate_range("spinner_delay_ms", 60_000u64, 0..=60_000).is_ok());
        assert!(validate_range("spinner_delay_ms", 60_001u64, 0..=60_000).is_err());
    }

    #[test]
    fn test_blank_strings_rejected() {
        assert!(validate_non_empty_string("key", "abc").is_ok());
        assert!(validate_non_empty_string("key", " \t").is_err());
    }

    #[test]
    fn test_required_field() {
        let present = Some("k".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("key", &present).unwrap(), "k");
        assert!(matches!(
            validate_required_field("key", &missing),
            Err(UiError::MissingConfigError { .. })
        ));
    }
}
