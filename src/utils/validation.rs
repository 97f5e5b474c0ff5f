use crate::domain::model::SelectorQuery;
use crate::utils::error::{Result, ScrapeError};
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScrapeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScrapeError::InvalidConfigValueError {
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
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_header(field_name: &str, name: &str, value: &str) -> Result<()> {
    if let Err(e) = HeaderName::from_bytes(name.as_bytes()) {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Invalid HTTP header name: {}", e),
        });
    }
    validate_header_value(field_name, value)
}

pub fn validate_header_value(field_name: &str, value: &str) -> Result<()> {
    if let Err(e) = HeaderValue::from_str(value) {
        return Err(ScrapeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid HTTP header value: {}", e),
        });
    }
    Ok(())
}

/// Checks that the query has a name and that its css compiles.
pub fn validate_selector(field_name: &str, query: &SelectorQuery) -> Result<()> {
    validate_non_empty_string(&format!("{}.name", field_name), &query.name)?;
    validate_non_empty_string(&format!("{}.css", field_name), &query.css)?;
    crate::core::extract::compile(query)?;
    Ok(())
}

pub fn validate_selectors(field_name: &str, queries: &[SelectorQuery]) -> Result<()> {
    for (i, query) in queries.iter().enumerate() {
        validate_selector(&format!("{}[{}]", field_name, i), query)?;
    }
    Ok(())
}
