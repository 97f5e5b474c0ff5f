use crate::domain::model::Catalog;
use crate::utils::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `text<TAB>href` line per link
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn render(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(catalog)),
        OutputFormat::Csv => render_csv(catalog),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
    }
}

fn render_text(catalog: &Catalog) -> String {
    catalog
        .links
        .iter()
        .map(|link| format!("{}\t{}\n", link.text, link.href))
        .collect()
}

fn render_csv(catalog: &Catalog) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if catalog.links.is_empty() {
        wtr.write_record(["selector", "text", "href"])?;
    }
    for link in &catalog.links {
        wtr.serialize(link)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ScrapeError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| ScrapeError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
