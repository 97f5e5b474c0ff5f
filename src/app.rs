use crate::config::storage::{LocalStorage, StdoutStorage};
use crate::core::etl::{RunReport, ScrapeEngine};
use crate::core::pipeline::ProductPipeline;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[cfg(feature = "cli")]
use crate::config::{toml_config::TomlConfig, CliConfig};

/// Where the rendered catalog is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(String),
    Stdout,
}

pub fn output_target<C: ConfigProvider>(config: &C) -> OutputTarget {
    match config.output_path() {
        Some(path) => OutputTarget::File(path.to_string()),
        None => OutputTarget::Stdout,
    }
}

/// Validates `config` and runs the scrape against the storage its output target calls for.
pub async fn execute<C: ConfigProvider + Validate>(config: C) -> Result<RunReport> {
    config.validate()?;
    tracing::debug!(
        "Scraping {} with {} selectors",
        config.page_url(),
        config.selectors().len()
    );

    match output_target(&config) {
        OutputTarget::File(_) => run_with(LocalStorage::new("."), config).await,
        OutputTarget::Stdout => run_with(StdoutStorage, config).await,
    }
}

async fn run_with<S: Storage, C: ConfigProvider>(storage: S, config: C) -> Result<RunReport> {
    let pipeline = ProductPipeline::new(storage, config)?;
    ScrapeEngine::new(pipeline).run().await
}

/// The settings a run uses: the flags, or the TOML file named by `--config`.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub enum RunConfig {
    Flags(CliConfig),
    File(TomlConfig),
}

#[cfg(feature = "cli")]
impl RunConfig {
    /// A `--config` file replaces every scrape flag; only logging flags stay with the CLI.
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Ok(RunConfig::File(TomlConfig::from_file(path)?))
            }
            None => Ok(RunConfig::Flags(cli)),
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        match self {
            RunConfig::Flags(c) => output_target(c),
            RunConfig::File(c) => output_target(c),
        }
    }
}

#[cfg(feature = "cli")]
pub async fn run(cli: CliConfig) -> Result<RunReport> {
    match RunConfig::resolve(cli)? {
        RunConfig::Flags(config) => execute(config).await,
        RunConfig::File(config) => execute(config).await,
    }
}

/// Exit code for a failed argument parse: 0 for help and version output, 1 otherwise.
#[cfg(feature = "cli")]
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
