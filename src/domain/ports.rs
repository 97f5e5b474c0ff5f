use crate::core::render::OutputFormat;
use crate::domain::model::{Catalog, RawPage, SelectorQuery};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable destination for `path`, used in logs and the run report.
    fn describe(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn page_url(&self) -> &str;
    fn selectors(&self) -> Vec<SelectorQuery>;
    fn output_format(&self) -> OutputFormat;
    /// `None` means stdout.
    fn output_path(&self) -> Option<&str>;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
    fn headers(&self) -> Vec<(String, String)>;
    fn dedup(&self) -> bool;
    fn require_matches(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RawPage>;
    async fn transform(&self, page: RawPage) -> Result<Catalog>;
    async fn load(&self, catalog: Catalog) -> Result<String>;
}
