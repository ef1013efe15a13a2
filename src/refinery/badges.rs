// * Faction/tag extraction. Pages mark factions with badge-style classes;
// * when no element carries one outright, a fallback scan looks for short
// * inline elements whose class attribute merely mentions a badge marker.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::constants::{TAG_MAX_LEN, TAG_MAX_SPACES};
use crate::refinery::element_text;

static SELECTOR_BADGES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".badge, .tag, .chip, .pill").unwrap());

static SELECTOR_INLINE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span, a").unwrap());

const BADGE_MARKERS: [&str; 4] = ["tag", "badge", "chip", "pill"];

// * Looks like a standalone tag rather than prose.
fn is_tag_shaped(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() <= TAG_MAX_LEN
        && text.matches(' ').count() <= TAG_MAX_SPACES
        && !text.ends_with('.')
}

pub fn extract_badges(document: &Html) -> Option<Vec<String>> {
    let mut badges: Vec<String> = Vec::new();

    for el in document.select(&SELECTOR_BADGES) {
        let text = element_text(&el);
        if !text.is_empty() && !badges.contains(&text) {
            badges.push(text);
        }
    }

    if badges.is_empty() {
        for el in document.select(&SELECTOR_INLINE) {
            let text = element_text(&el);
            if !is_tag_shaped(&text) {
                continue;
            }
            let class = el.value().attr("class").unwrap_or("").to_lowercase();
            if BADGE_MARKERS.iter().any(|marker| class.contains(marker)) && !badges.contains(&text)
            {
                badges.push(text);
            }
        }
    }

    if badges.is_empty() {
        None
    } else {
        Some(badges)
    }
}
