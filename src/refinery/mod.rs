// * The refinery: turns one detail page's HTML into a UnitRecord.
// * Every field extractor degrades independently; a page missing a field
// * produces an absent/empty value, never an error. The only structural
// * failure is an empty body, which aborts just that page.

pub mod abilities;
pub mod badges;
pub mod portrait;
pub mod stats;

pub use abilities::extract_abilities;
pub use badges::extract_badges;
pub use portrait::{
    gather_candidates, score_candidate, select_best_image, ImageCandidate, Origin,
};
pub use stats::extract_stats;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

use crate::engine::urls::{page_slug, slug_from_url};
use crate::persistence::schema::{SourceInfo, UnitRecord};

static SELECTOR_H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static SELECTOR_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").unwrap());

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Empty document body")]
    EmptyDocument,
}

// * Whitespace-normalized text of an element and its descendants.
pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// * Display name: first h1, falling back to the document title, falling
// * back to empty.
fn extract_name(document: &Html) -> String {
    if let Some(h1) = document.select(&SELECTOR_H1).next() {
        let text = element_text(&h1);
        if !text.is_empty() {
            return text;
        }
    }

    if let Some(title) = document.select(&SELECTOR_TITLE).next() {
        return element_text(&title);
    }

    String::new()
}

pub fn extract_unit(html: &str, page_url: &Url, scraped_at: u64) -> Result<UnitRecord, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let slug = page_slug(page_url);

    let candidates = gather_candidates(&document, page_url);
    let portrait = select_best_image(&candidates, &slug);

    Ok(UnitRecord {
        id: slug_from_url(page_url),
        url: page_url.to_string(),
        name: extract_name(&document),
        portrait,
        stats: extract_stats(&document),
        factions: extract_badges(&document),
        abilities: extract_abilities(&document),
        source: SourceInfo { scraped_at },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://shatterpointdb.com/characters/count-dooku/").unwrap()
    }

    fn unit_html() -> &'static str {
        r#"
        <html>
        <head>
            <title>Count Dooku | ShatterpointDB</title>
            <meta property="og:image" content="/media/site-logo.png">
        </head>
        <body>
            <main>
                <h1>Count Dooku</h1>
                <img src="/media/count-dooku.png?height=1000">
                <span class="badge">Separatist</span>
                <span class="badge">Force User</span>
                <p><strong>Squad Points:</strong> 8</p>
                <p><strong>Unit Type:</strong> Primary</p>
                <p><strong>Stamina:</strong> 10 pips</p>
                <p><strong>Twin Strike</strong> Make two melee attacks against the same target.</p>
            </main>
        </body>
        </html>
        "#
    }

    #[test]
    fn test_full_page_extraction() {
        let record = extract_unit(unit_html(), &page_url(), 1_724_300_000).unwrap();

        assert_eq!(record.id, "count-dooku");
        assert_eq!(record.name, "Count Dooku");
        assert_eq!(
            record.portrait.as_deref(),
            Some("https://shatterpointdb.com/media/count-dooku.png?height=1000")
        );
        assert_eq!(record.stats.squad_points, Some(8));
        assert_eq!(record.stats.unit_type.as_deref(), Some("Primary"));
        assert_eq!(record.stats.stamina, Some(10));
        assert_eq!(
            record.factions,
            Some(vec!["Separatist".to_string(), "Force User".to_string()])
        );
        assert_eq!(record.abilities.len(), 1);
        assert_eq!(record.abilities[0].title, "Twin Strike");
        assert_eq!(record.source.scraped_at, 1_724_300_000);
    }

    #[test]
    fn test_name_falls_back_to_title() {
        let html = "<html><head><title>Yoda</title></head><body></body></html>";
        let url = Url::parse("https://shatterpointdb.com/characters/yoda/").unwrap();
        let record = extract_unit(html, &url, 0).unwrap();
        assert_eq!(record.name, "Yoda");
    }

    #[test]
    fn test_bare_page_degrades_everywhere() {
        let html = "<html><body><p>Nothing of note here.</p></body></html>";
        let url = Url::parse("https://shatterpointdb.com/characters/ghost/").unwrap();
        let record = extract_unit(html, &url, 0).unwrap();

        assert_eq!(record.name, "");
        assert!(record.portrait.is_none());
        assert_eq!(record.stats, Default::default());
        assert!(record.factions.is_none());
        assert!(record.abilities.is_empty());
    }

    #[test]
    fn test_empty_body_is_structural_failure() {
        let url = page_url();
        assert!(matches!(
            extract_unit("   \n  ", &url, 0),
            Err(ExtractError::EmptyDocument)
        ));
    }
}
