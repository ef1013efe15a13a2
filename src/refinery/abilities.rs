// * Ability extraction: paragraphs led by a short bold title, with the rest
// * of the block as the description. Stat rows reuse the same markup, so a
// * title matching a stat label is excluded here.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::constants::{ABILITY_DESC_MIN_LEN, ABILITY_TITLE_MAX_LEN};
use crate::persistence::schema::Ability;
use crate::refinery::element_text;

static SELECTOR_PARAGRAPHS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").unwrap());

static SELECTOR_BOLD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong, b").unwrap());

static STAT_LABEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(squad points|force|unit type|stamina|durability)\b").unwrap()
});

pub fn extract_abilities(document: &Html) -> Vec<Ability> {
    let mut abilities: Vec<Ability> = Vec::new();
    let mut seen_titles: Vec<String> = Vec::new();

    for paragraph in document.select(&SELECTOR_PARAGRAPHS) {
        let Some(bold) = paragraph.select(&SELECTOR_BOLD).next() else {
            continue;
        };

        let title = element_text(&bold);
        if title.is_empty() || title.chars().count() > ABILITY_TITLE_MAX_LEN {
            continue;
        }

        // * Stat rows are handled by the stats extractor, never as abilities.
        if STAT_LABEL_PREFIX.is_match(&title) {
            continue;
        }

        let full = element_text(&paragraph);
        let text = full
            .replacen(&title, "", 1)
            .trim_matches([' ', ':', '—', '-'])
            .to_string();

        if text.chars().count() < ABILITY_DESC_MIN_LEN {
            continue;
        }

        if seen_titles.contains(&title) {
            continue;
        }
        seen_titles.push(title.clone());
        abilities.push(Ability { title, text });
    }

    abilities
}
