pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;

pub use self::config::storage::{LocalStorage, StdoutStorage};
pub use self::config::toml_config::TomlConfig;
pub use self::core::{
    etl::{RunReport, ScrapeEngine},
    pipeline::ProductPipeline,
    render::OutputFormat,
};
pub use self::domain::model::{Catalog, Link, SelectorQuery};
pub use self::utils::error::{Result, ScrapeError};
