// * Portrait selection. A unit page exposes several image URLs of wildly
// * different quality: social preview tags frequently point at the site
// * logo, while in-body media images are usually the actual unit art. Every
// * candidate is scored and the highest wins; ties keep the first seen.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

// * Score adjustments. The generic penalty outweighs every bonus combined,
// * so a generic asset can never beat a non-generic candidate.
const SCORE_GENERIC_PENALTY: i32 = -1000; // * generic-asset marker in the URL
const SCORE_SLUG_MATCH: i32 = 60;        // * page slug appears in the URL
const SCORE_SITE_ASSET: i32 = 40;        // * known site asset-path marker
const SCORE_HEIGHT_MAX: i32 = 20;        // * cap on the requested-size bonus
const SCORE_CONTENT_ORIGIN: i32 = 10;    // * in-body image over meta tag

// * Requested height divisor for the size bonus.
const HEIGHT_DIVISOR: u32 = 50;

// * URL markers of generic assets that must never win over real art.
const GENERIC_MARKERS: [&str; 4] = ["logo", "favicon", "icon", "placeholder"];

// * Asset-path marker specific to the source site's media storage.
const SITE_ASSET_MARKER: &str = "star-wars-shatterpoint";

// * In-body images are only considered from the media path.
const MEDIA_PATH_MARKER: &str = "/media/";

static SELECTOR_META_IMAGES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:image"], meta[name="twitter:image"]"#).unwrap()
});
static SELECTOR_MAIN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").unwrap());
static SELECTOR_ARTICLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").unwrap());
static SELECTOR_MEDIA_IMAGES: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(r#"img[src*="{MEDIA_PATH_MARKER}"]"#)).unwrap()
});

// * Where a candidate came from. Meta previews are low trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Meta,
    Content,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate {
    pub origin: Origin,
    pub url: String,
}

// * Requested-height bonus from the URL's query string. Malformed query
// * strings and unparsable values contribute exactly 0.
fn height_bonus(url: &str) -> i32 {
    let Ok(parsed) = Url::parse(url) else {
        return 0;
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == "height")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .map(|height| ((height / HEIGHT_DIVISOR) as i32).min(SCORE_HEIGHT_MAX))
        .unwrap_or(0)
}

// * Pure, total scoring function; higher wins.
pub fn score_candidate(url: &str, origin: Origin, page_slug: &str) -> i32 {
    let lowered = url.to_lowercase();
    let mut score = 0;

    if GENERIC_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        score += SCORE_GENERIC_PENALTY;
    }

    if !page_slug.is_empty() && lowered.contains(page_slug) {
        score += SCORE_SLUG_MATCH;
    }

    if lowered.contains(SITE_ASSET_MARKER) {
        score += SCORE_SITE_ASSET;
    }

    score += height_bonus(url);

    if origin == Origin::Content {
        score += SCORE_CONTENT_ORIGIN;
    }

    score
}

// * Picks the best-scoring candidate; strictly-greater comparison keeps the
// * first-seen candidate on ties. No candidates is a valid none result.
pub fn select_best_image(candidates: &[ImageCandidate], page_slug: &str) -> Option<String> {
    let mut best: Option<&ImageCandidate> = None;
    let mut best_score = i32::MIN;

    for candidate in candidates {
        let score = score_candidate(&candidate.url, candidate.origin, page_slug);
        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best.map(|c| c.url.clone())
}

// * Gathers candidates from the meta preview tags and from media images in
// * the page's main content region (main, then article, then anywhere).
pub fn gather_candidates(document: &Html, page_url: &Url) -> Vec<ImageCandidate> {
    let mut candidates = Vec::new();

    for meta in document.select(&SELECTOR_META_IMAGES) {
        if let Some(content) = meta.value().attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                if let Some(absolute) = absolutize(content, page_url) {
                    candidates.push(ImageCandidate {
                        origin: Origin::Meta,
                        url: absolute,
                    });
                }
            }
        }
    }

    let scope: Option<ElementRef> = document
        .select(&SELECTOR_MAIN)
        .next()
        .or_else(|| document.select(&SELECTOR_ARTICLE).next());

    let images: Vec<ElementRef> = match scope {
        Some(region) => region.select(&SELECTOR_MEDIA_IMAGES).collect(),
        None => document.select(&SELECTOR_MEDIA_IMAGES).collect(),
    };

    for img in images {
        if let Some(src) = img.value().attr("src") {
            if !src.is_empty() {
                if let Some(absolute) = absolutize(src, page_url) {
                    candidates.push(ImageCandidate {
                        origin: Origin::Content,
                        url: absolute,
                    });
                }
            }
        }
    }

    candidates
}

fn absolutize(href: &str, page_url: &Url) -> Option<String> {
    page_url.join(href).ok().map(Into::into)
}
