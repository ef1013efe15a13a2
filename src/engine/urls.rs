use url::Url;

use crate::config::constants::SLUG_MAX_LEN;

// * Resolves an href against its page URL into an absolute URL.
// * Hosts are lowercased by the url crate itself, so two spellings of the
// * same host compare equal downstream.
pub fn resolve_url(href: &str, base_url: &str) -> Option<Url> {
    let base = Url::parse(base_url).ok()?;
    base.join(href).ok()
}

// * True when both URLs point at the same host.
pub fn is_same_host(url: &Url, base: &Url) -> bool {
    url.host_str() == base.host_str()
}

// * Derives the store slug from a URL: last non-empty path segment,
// * sanitized to [A-Za-z0-9._-] and capped. A bare host yields "item".
pub fn slug_from_url(url: &Url) -> String {
    let last = url
        .path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
        .unwrap_or("");

    let sanitized: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .take(SLUG_MAX_LEN)
        .collect();

    if sanitized.is_empty() {
        "item".to_string()
    } else {
        sanitized
    }
}

// * Last raw path segment, lowercased, for the portrait scorer's
// * same-unit check. Unlike the slug this is not sanitized.
pub fn page_slug(url: &Url) -> String {
    url.path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_href() {
        let url = resolve_url("/characters/count-dooku/", "https://shatterpointdb.com/characters/")
            .unwrap();
        assert_eq!(url.as_str(), "https://shatterpointdb.com/characters/count-dooku/");
    }

    #[test]
    fn test_resolve_absolute_href_passes_through() {
        let url = resolve_url(
            "https://other.example/media/x.png",
            "https://shatterpointdb.com/characters/",
        )
        .unwrap();
        assert_eq!(url.host_str(), Some("other.example"));
    }

    #[test]
    fn test_resolve_invalid_base_is_none() {
        assert!(resolve_url("/x", "not a url").is_none());
    }

    #[test]
    fn test_same_host_ignores_path() {
        let a = Url::parse("https://shatterpointdb.com/characters/yoda/").unwrap();
        let b = Url::parse("https://shatterpointdb.com/").unwrap();
        let c = Url::parse("https://cdn.example.net/yoda/").unwrap();

        assert!(is_same_host(&a, &b));
        assert!(!is_same_host(&a, &c));
    }

    #[test]
    fn test_slug_takes_last_segment() {
        let url = Url::parse("https://shatterpointdb.com/characters/count-dooku/").unwrap();
        assert_eq!(slug_from_url(&url), "count-dooku");
    }

    #[test]
    fn test_slug_sanitizes_and_caps() {
        let url = Url::parse("https://shatterpointdb.com/characters/ahsoka%20tano!/").unwrap();
        let slug = slug_from_url(&url);
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.')));

        let long = format!("https://shatterpointdb.com/characters/{}/", "a".repeat(200));
        let url = Url::parse(&long).unwrap();
        assert_eq!(slug_from_url(&url).len(), SLUG_MAX_LEN);
    }

    #[test]
    fn test_slug_bare_host_falls_back() {
        let url = Url::parse("https://shatterpointdb.com/").unwrap();
        assert_eq!(slug_from_url(&url), "item");
    }

    #[test]
    fn test_page_slug_is_lowercased() {
        let url = Url::parse("https://shatterpointdb.com/characters/Count-Dooku").unwrap();
        assert_eq!(page_slug(&url), "count-dooku");
    }
}
