use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Where the rendered catalog went.
    pub output: String,
    pub link_count: usize,
    pub elapsed: Duration,
}

pub struct ScrapeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScrapeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let start = Instant::now();
        tracing::info!("Starting product scrape");

        let page = self.pipeline.extract().await?;
        tracing::info!("Fetched {} ({} bytes)", page.url, page.html.len());

        let catalog = self.pipeline.transform(page).await?;
        let link_count = catalog.links.len();
        tracing::info!("Extracted {} links", link_count);

        let output = self.pipeline.load(catalog).await?;
        let elapsed = start.elapsed();
        tracing::info!("Wrote catalog to {} in {:?}", output, elapsed);

        Ok(RunReport {
            output,
            link_count,
            elapsed,
        })
    }
}
