// * Link Discoverer: filters a listing page down to same-host detail links.
// * Output is deduplicated and lexicographically ordered so repeated runs
// * process units in the same order.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::engine::urls::{is_same_host, resolve_url};

static SELECTOR_ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

// * True when the path is the detail prefix followed by exactly one
// * non-empty segment, optionally trailing-slashed.
fn is_detail_path(path: &str, prefix: &str) -> bool {
    let Some(rest) = path.strip_prefix(prefix) else {
        return false;
    };
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    !rest.is_empty() && !rest.contains('/')
}

pub fn discover_links(listing_html: &str, listing_url: &str, detail_prefix: &str) -> Vec<Url> {
    let Ok(base) = Url::parse(listing_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(listing_html);
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for anchor in document.select(&SELECTOR_ANCHORS) {
        let href = anchor.value().attr("href").unwrap_or("");
        if href.is_empty() {
            continue;
        }

        let Some(mut link) = resolve_url(href, listing_url) else {
            continue;
        };
        // * Fragments are client-side only; stripping them keeps dedup exact.
        link.set_fragment(None);

        if is_same_host(&link, &base) && is_detail_path(link.path(), detail_prefix) {
            seen.insert(link.into());
        }
    }

    // * BTreeSet iteration is already lexicographic.
    seen.into_iter()
        .filter_map(|u| Url::parse(&u).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_URL: &str = "https://shatterpointdb.com/characters/";

    fn listing_html() -> &'static str {
        r#"
        <html><body>
            <nav><a href="/">Home</a><a href="/sets/">Sets</a></nav>
            <main>
                <a href="/characters/yoda/">Yoda</a>
                <a href="/characters/count-dooku">Count Dooku</a>
                <a href="https://shatterpointdb.com/characters/asajj-ventress/">Asajj</a>
                <a href="/characters/yoda/#stats">Yoda stats anchor</a>
                <a href="/characters/">Back to list</a>
                <a href="/characters/yoda/abilities/">Nested page</a>
                <a href="https://twitter.com/characters/yoda/">Offsite</a>
            </main>
        </body></html>
        "#
    }

    #[test]
    fn test_discovers_only_detail_pages() {
        let links = discover_links(listing_html(), LISTING_URL, "/characters/");
        let paths: Vec<&str> = links.iter().map(|u| u.path()).collect();

        assert_eq!(
            paths,
            vec![
                "/characters/asajj-ventress/",
                "/characters/count-dooku",
                "/characters/yoda/",
            ]
        );
    }

    #[test]
    fn test_discovery_is_deterministic() {
        let first = discover_links(listing_html(), LISTING_URL, "/characters/");
        let second = discover_links(listing_html(), LISTING_URL, "/characters/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fragment_duplicates_collapse() {
        let links = discover_links(listing_html(), LISTING_URL, "/characters/");
        let yoda: Vec<_> = links.iter().filter(|u| u.path() == "/characters/yoda/").collect();
        assert_eq!(yoda.len(), 1);
    }

    #[test]
    fn test_zero_links_is_valid() {
        let links = discover_links("<html><body></body></html>", LISTING_URL, "/characters/");
        assert!(links.is_empty());
    }
}
