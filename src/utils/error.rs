use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid CSS selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("No links matched any selector on {url}")]
    NoMatchesError { url: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Parsing,
    Output,
    EmptyResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrapeError::ApiError(e) if e.is_builder() => ErrorCategory::Configuration,
            ScrapeError::ApiError(_) | ScrapeError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            ScrapeError::SelectorError { .. } => ErrorCategory::Parsing,
            ScrapeError::CsvError(_)
            | ScrapeError::IoError(_)
            | ScrapeError::SerializationError(_) => ErrorCategory::Output,
            ScrapeError::NoMatchesError { .. } => ErrorCategory::EmptyResult,
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::EmptyResult => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Parsing => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Parsing => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Output => 3,
            ErrorCategory::EmptyResult => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::ApiError(e) if e.is_builder() => {
                "Check the user agent and request headers in the configuration"
            }
            ScrapeError::ApiError(_) => {
                "Check your network connection and that the page URL is reachable"
            }
            ScrapeError::HttpStatusError { status, .. } if *status >= 500 => {
                "The server is having trouble, try again later"
            }
            ScrapeError::HttpStatusError { .. } => {
                "Check that the page URL is correct and publicly accessible"
            }
            ScrapeError::SelectorError { .. } => {
                "Fix the CSS selector syntax, e.g. --selector 'links=ul.product-list li a'"
            }
            ScrapeError::NoMatchesError { .. } => {
                "The page layout may have changed, inspect the HTML and update the selectors"
            }
            ScrapeError::CsvError(_) | ScrapeError::SerializationError(_) => {
                "Try a different output format"
            }
            ScrapeError::IoError(_) => "Check that the output path is writable",
            ScrapeError::ConfigError { .. }
            | ScrapeError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::ApiError(e) if e.is_timeout() => {
                "Timed out while fetching the page".to_string()
            }
            ScrapeError::ApiError(e) if e.is_builder() => {
                format!("Could not build the page request: {}", e)
            }
            ScrapeError::ApiError(_) => "Could not fetch the page".to_string(),
            ScrapeError::HttpStatusError { status, url } => {
                format!("The server answered {} for {}", status, url)
            }
            ScrapeError::NoMatchesError { url } => {
                format!("No product links were found on {}", url)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_error_is_retryable_network_error() {
        let err = ScrapeError::HttpStatusError {
            status: 503,
            url: "https://docs.vmware.com/allproducts.html".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.recovery_suggestion().contains("try again"));
        assert!(err.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_selector_error_maps_to_config_exit_code() {
        let err = ScrapeError::SelectorError {
            selector: "ul >".to_string(),
            message: "unexpected end of input".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Parsing);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("ul >"));
    }

    #[test]
    fn test_no_matches_has_dedicated_exit_code() {
        let err = ScrapeError::NoMatchesError {
            url: "http://localhost/".to_string(),
        };

        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_request_builder_error_is_configuration_error() {
        let builder_err = reqwest::Client::new()
            .get("http://localhost/")
            .header("Bad Name", "x")
            .build()
            .unwrap_err();
        let err: ScrapeError = builder_err.into();

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("headers"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ScrapeError = io.into();

        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
