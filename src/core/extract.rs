use crate::domain::model::{Link, SelectorQuery};
use crate::utils::error::{Result, ScrapeError};
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

pub fn compile(query: &SelectorQuery) -> Result<Selector> {
    Selector::parse(&query.css).map_err(|e| ScrapeError::SelectorError {
        selector: query.css.clone(),
        message: format!("{:?}", e),
    })
}

/// Runs every query against `html` and collects the matched anchors.
///
/// Results keep query order, then document order. Relative hrefs are
/// resolved against `base_url`. Matches that are not `<a>` elements, or
/// that carry no `href`, are skipped.
pub fn extract_links(html: &str, base_url: &str, queries: &[SelectorQuery]) -> Result<Vec<Link>> {
    let compiled = queries
        .iter()
        .map(|q| compile(q).map(|sel| (q, sel)))
        .collect::<Result<Vec<_>>>()?;

    let base = Url::parse(base_url).ok();
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for (query, selector) in &compiled {
        let mut matched = 0usize;
        let mut skipped = 0usize;

        for element in document.select(selector) {
            if element.value().name() != "a" {
                skipped += 1;
                continue;
            }
            let Some(href) = element.value().attr("href") else {
                skipped += 1;
                continue;
            };

            let text = normalize_text(&element.text().collect::<String>());
            links.push(Link {
                selector: query.name.clone(),
                text,
                href: resolve_href(base.as_ref(), href),
            });
            matched += 1;
        }

        tracing::debug!(
            "Query '{}' ({}) matched {} links, skipped {}",
            query.name,
            query.css,
            matched,
            skipped
        );
    }

    Ok(links)
}

/// Drops links whose href was already seen. First occurrence wins.
pub fn dedup_by_href(links: Vec<Link>) -> Vec<Link> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.href.clone()))
        .collect()
}

pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    match base {
        Some(base) => base
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://docs.vmware.com/allproducts.html";

    const PRODUCT_PAGE: &str = r#"
<html>
  <body>
    <ul class="product-list">
      <li><a href="/en/VMware-vSphere/index.html">VMware
          vSphere</a></li>
      <li><a href="https://docs.vmware.com/en/VMware-NSX/index.html">VMware NSX</a></li>
      <li><a name="anchor-only">No link</a></li>
    </ul>
    <ul class="productsVerticalList">
      <li>Networking</li>
      <ul class="product-list"></ul>
      <li>Compute</li>
      <a href="/en/VMware-Tanzu/index.html">VMware Tanzu</a>
    </ul>
    <a href="/en/unrelated.html">Footer</a>
  </body>
</html>
"#;

    #[test]
    fn test_source_selectors_return_expected_anchor_list() {
        let links = extract_links(PRODUCT_PAGE, BASE, &SelectorQuery::defaults()).unwrap();

        let found: Vec<(&str, &str, &str)> = links
            .iter()
            .map(|l| (l.selector.as_str(), l.text.as_str(), l.href.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![
                (
                    "product-list",
                    "VMware vSphere",
                    "https://docs.vmware.com/en/VMware-vSphere/index.html"
                ),
                (
                    "product-list",
                    "VMware NSX",
                    "https://docs.vmware.com/en/VMware-NSX/index.html"
                ),
                (
                    "vertical-list",
                    "VMware Tanzu",
                    "https://docs.vmware.com/en/VMware-Tanzu/index.html"
                ),
            ]
        );
    }

    #[test]
    fn test_inline_markup_does_not_split_words() {
        let html = r#"<ul class="product-list">
  <li><a href="/en/VMware-vSphere/index.html"><b>v</b>Sphere <span>Client</span></a></li>
</ul>"#;
        let queries = vec![SelectorQuery::new("product-list", "ul.product-list li a")];

        let links = extract_links(html, BASE, &queries).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "vSphere Client");
    }

    #[test]
    fn test_non_anchor_matches_are_skipped() {
        let queries = vec![SelectorQuery::new("items", "ul.product-list li")];
        let links = extract_links(PRODUCT_PAGE, BASE, &queries).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_invalid_selector_fails_before_parsing() {
        let queries = vec![
            SelectorQuery::new("ok", "a"),
            SelectorQuery::new("broken", "ul >"),
        ];
        let err = extract_links(PRODUCT_PAGE, BASE, &queries).unwrap_err();
        assert!(matches!(err, ScrapeError::SelectorError { ref selector, .. } if selector == "ul >"));
    }

    #[test]
    fn test_unparseable_base_keeps_href_verbatim() {
        let queries = vec![SelectorQuery::new("footer", "body > a")];
        let links = extract_links(PRODUCT_PAGE, "not a url", &queries).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/en/unrelated.html");
    }

    #[test]
    fn test_empty_document_yields_no_links() {
        let links = extract_links("", BASE, &SelectorQuery::defaults()).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let link = |selector: &str, href: &str| Link {
            selector: selector.to_string(),
            text: "x".to_string(),
            href: href.to_string(),
        };
        let links = vec![
            link("first", "https://a/1"),
            link("second", "https://a/1"),
            link("second", "https://a/2"),
        ];

        let deduped = dedup_by_href(links);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].selector, "first");
        assert_eq!(deduped[1].href, "https://a/2");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  VMware \n\t vSphere  "), "VMware vSphere");
        assert_eq!(normalize_text(""), "");
    }
}
