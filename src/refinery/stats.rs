// * Stat block extraction. Pages carry stats as bold labels followed by a
// * loose text value, e.g. <strong>Stamina:</strong> 4 pips. Only labels in
// * the fixed table participate; everything else is ignored.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::persistence::schema::UnitStats;
use crate::refinery::element_text;

static SELECTOR_BOLD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong, b").unwrap());

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

// * Recognized stat labels after normalization (lowercase, trailing
// * colon/space stripped).
#[derive(Debug, Clone, Copy, PartialEq)]
enum StatKey {
    SquadPoints,
    Force,
    UnitType,
    Stamina,
    Durability,
}

const LABEL_TABLE: [(&str, StatKey); 5] = [
    ("squad points", StatKey::SquadPoints),
    ("force", StatKey::Force),
    ("unit type", StatKey::UnitType),
    ("stamina", StatKey::Stamina),
    ("durability", StatKey::Durability),
];

fn lookup_label(normalized: &str) -> Option<StatKey> {
    LABEL_TABLE
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, key)| *key)
}

// * First run of digits in the raw value text; no digits means 0.
fn first_digit_run(text: &str) -> u32 {
    DIGIT_RUN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

// * Reads the value for a matched label: the immediately following text
// * sibling, or the enclosing block's text with the label removed.
fn value_for_label(bold: &ElementRef, label_text: &str) -> String {
    if let Some(sibling) = bold.next_sibling() {
        if let Node::Text(text) = sibling.value() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    let Some(parent) = bold.parent().and_then(ElementRef::wrap) else {
        return String::new();
    };

    element_text(&parent)
        .replace(label_text, "")
        .trim_matches([':', ' '])
        .to_string()
}

pub fn extract_stats(document: &Html) -> UnitStats {
    let mut stats = UnitStats::default();

    for bold in document.select(&SELECTOR_BOLD) {
        let label_text = element_text(&bold);
        let normalized = label_text
            .to_lowercase()
            .trim_end_matches([':', ' '])
            .to_string();

        let Some(key) = lookup_label(&normalized) else {
            continue;
        };

        let value = value_for_label(&bold, &label_text);

        // * Later occurrences of the same label overwrite earlier ones.
        match key {
            StatKey::SquadPoints => stats.squad_points = Some(first_digit_run(&value)),
            StatKey::Force => stats.force = Some(first_digit_run(&value)),
            StatKey::Stamina => stats.stamina = Some(first_digit_run(&value)),
            StatKey::Durability => stats.durability = Some(first_digit_run(&value)),
            StatKey::UnitType => stats.unit_type = Some(value),
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_sibling_text_value() {
        let doc = parse("<p><strong>Stamina:</strong> 4 pips</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.stamina, Some(4));
    }

    #[test]
    fn test_no_digits_defaults_to_zero() {
        let doc = parse("<p><b>Durability</b></p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.durability, Some(0));
    }

    #[test]
    fn test_value_read_from_parent_block() {
        let doc = parse("<div><strong>Force</strong><span>2</span></div>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.force, Some(2));
    }

    #[test]
    fn test_unit_type_keeps_text() {
        let doc = parse("<p><strong>Unit Type:</strong> Primary</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.unit_type.as_deref(), Some("Primary"));
    }

    #[test]
    fn test_unrecognized_labels_ignored() {
        let doc = parse("<p><strong>Height:</strong> 66 cm</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats, UnitStats::default());
    }

    #[test]
    fn test_absent_labels_leave_keys_unset() {
        let doc = parse("<p><strong>Squad Points:</strong> 8</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.squad_points, Some(8));
        assert_eq!(stats.stamina, None);
        assert_eq!(stats.force, None);
    }

    #[test]
    fn test_first_digit_run_only() {
        let doc = parse("<p><strong>Squad Points:</strong> 8 (was 9)</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.squad_points, Some(8));
    }

    #[test]
    fn test_duplicate_label_last_wins() {
        let doc = parse(
            "<p><strong>Stamina:</strong> 4</p><p><strong>Stamina:</strong> 7</p>",
        );
        let stats = extract_stats(&doc);
        assert_eq!(stats.stamina, Some(7));
    }

    #[test]
    fn test_label_case_and_colon_normalization() {
        let doc = parse("<p><b>STAMINA :</b> 5</p>");
        let stats = extract_stats(&doc);
        assert_eq!(stats.stamina, Some(5));
    }
}
