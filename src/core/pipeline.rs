use crate::core::extract::{self, dedup_by_href};
use crate::core::render::render;
use crate::core::{Catalog, ConfigProvider, Pipeline, RawPage, Storage};
use crate::utils::error::{Result, ScrapeError};
use chrono::Utc;
use reqwest::Client;

/// File name handed to storage when the destination is stdout.
pub const STDOUT_TARGET: &str = "-";

pub struct ProductPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ProductPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ProductPipeline<S, C> {
    async fn extract(&self) -> Result<RawPage> {
        let url = self.config.page_url();
        tracing::debug!("Fetching page: {}", url);

        let mut request = self.client.get(url);
        for (name, value) in self.config.headers() {
            request = request.header(name, value);
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Page response status: {}", status);

        if !status.is_success() {
            return Err(ScrapeError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().to_string();
        if final_url != url {
            tracing::debug!("Redirected to: {}", final_url);
        }

        let html = response.text().await?;
        tracing::debug!("Received {} bytes of HTML", html.len());

        Ok(RawPage {
            url: final_url,
            html,
            fetched_at: Utc::now(),
        })
    }

    async fn transform(&self, page: RawPage) -> Result<Catalog> {
        let queries = self.config.selectors();
        let mut links = extract::extract_links(&page.html, &page.url, &queries)?;

        if self.config.dedup() {
            let before = links.len();
            links = dedup_by_href(links);
            if links.len() < before {
                tracing::debug!("Dropped {} duplicate links", before - links.len());
            }
        }

        if links.is_empty() {
            if self.config.require_matches() {
                return Err(ScrapeError::NoMatchesError { url: page.url });
            }
            tracing::warn!(
                "No links matched any of {} selectors on {}",
                queries.len(),
                page.url
            );
        }

        Ok(Catalog {
            source: page.url,
            fetched_at: page.fetched_at,
            links,
        })
    }

    async fn load(&self, catalog: Catalog) -> Result<String> {
        let format = self.config.output_format();
        let rendered = render(&catalog, format)?;
        let target = self.config.output_path().unwrap_or(STDOUT_TARGET);

        tracing::debug!(
            "Writing {} links as {} ({} bytes)",
            catalog.links.len(),
            format,
            rendered.len()
        );
        self.storage.write_file(target, rendered.as_bytes()).await?;

        Ok(self.storage.describe(target))
    }
}
