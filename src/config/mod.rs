pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// User agent sent with every page request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("all-products/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Splits a `Name: value` header line.
pub fn parse_header(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

#[cfg(feature = "cli")]
mod cli {
    use super::{parse_header, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECONDS};
    use crate::core::render::OutputFormat;
    use crate::core::ConfigProvider;
    use crate::domain::model::{SelectorQuery, DEFAULT_PAGE_URL};
    use crate::utils::error::{Result, ScrapeError};
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "all-products")]
    #[command(about = "List every product linked from the VMware documentation portal")]
    pub struct CliConfig {
        /// Page to scrape
        #[arg(long, default_value = DEFAULT_PAGE_URL)]
        pub url: String,

        /// CSS selector as `name=css` or bare css; repeatable, runs in order
        #[arg(short, long = "selector")]
        pub selectors: Vec<SelectorQuery>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Output file; `-` or absent writes to stdout
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_secs: u64,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        /// Extra request header as `Name: value`; repeatable
        #[arg(short = 'H', long = "header")]
        pub headers: Vec<String>,

        /// Keep links whose href repeats an earlier one
        #[arg(long)]
        pub no_dedup: bool,

        /// Fail when no selector matches anything
        #[arg(long)]
        pub require_matches: bool,

        /// Load settings from a TOML file instead of the flags above
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        /// Emit logs as JSON lines
        #[arg(long)]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn page_url(&self) -> &str {
            &self.url
        }

        fn selectors(&self) -> Vec<SelectorQuery> {
            if self.selectors.is_empty() {
                SelectorQuery::defaults()
            } else {
                self.selectors.clone()
            }
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref().filter(|p| *p != "-")
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_secs)
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }

        fn headers(&self) -> Vec<(String, String)> {
            self.headers.iter().filter_map(|h| parse_header(h)).collect()
        }

        fn dedup(&self) -> bool {
            !self.no_dedup
        }

        fn require_matches(&self) -> bool {
            self.require_matches
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_url("url", &self.url)?;
            validation::validate_selectors("selector", &self.selectors())?;
            validation::validate_range("timeout_secs", self.timeout_secs, 1, MAX_TIMEOUT_SECONDS)?;
            validation::validate_non_empty_string("user_agent", &self.user_agent)?;
            validation::validate_header_value("user_agent", &self.user_agent)?;

            if let Some(path) = self.output_path() {
                validation::validate_path("output", path)?;
            }

            for header in &self.headers {
                let Some((name, value)) = parse_header(header) else {
                    return Err(ScrapeError::InvalidConfigValueError {
                        field: "header".to_string(),
                        value: header.clone(),
                        reason: "Expected `Name: value`".to_string(),
                    });
                };
                validation::validate_header("header", &name, &value)?;
            }

            Ok(())
        }
    }

}
