use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Product list on the VMware documentation portal.
pub const DEFAULT_PAGE_URL: &str = "https://docs.vmware.com/allproducts.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorQuery {
    pub name: String,
    pub css: String,
}

impl SelectorQuery {
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
        }
    }

    /// The two queries run against the product page when none are configured.
    pub fn defaults() -> Vec<SelectorQuery> {
        vec![
            SelectorQuery::new("product-list", "ul.product-list li a"),
            SelectorQuery::new(
                "vertical-list",
                "ul.productsVerticalList > li ~ ul.product-list ~ li ~ a",
            ),
        ]
    }
}

/// Accepts `name=css` or a bare css string, which then names itself.
impl FromStr for SelectorQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((name, css)) = s.split_once('=') {
            let is_name = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if is_name {
                return Ok(SelectorQuery::new(name, css.trim()));
            }
        }
        Ok(SelectorQuery::new(s, s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub selector: String,
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub html: String,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_query() {
        let q: SelectorQuery = "products=ul.product-list li a".parse().unwrap();
        assert_eq!(q.name, "products");
        assert_eq!(q.css, "ul.product-list li a");
    }

    #[test]
    fn test_parse_bare_query_names_itself() {
        let q: SelectorQuery = "ul.product-list li a".parse().unwrap();
        assert_eq!(q.name, "ul.product-list li a");
        assert_eq!(q.css, "ul.product-list li a");
    }

    #[test]
    fn test_attribute_selector_is_not_split() {
        let q: SelectorQuery = r#"a[href="/en/"]"#.parse().unwrap();
        assert_eq!(q.css, r#"a[href="/en/"]"#);
        assert_eq!(q.name, q.css);
    }

    #[test]
    fn test_defaults_cover_both_product_lists() {
        let names: Vec<String> = SelectorQuery::defaults()
            .into_iter()
            .map(|q| q.name)
            .collect();
        assert_eq!(names, vec!["product-list", "vertical-list"]);
    }
}
