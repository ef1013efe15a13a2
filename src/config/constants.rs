// * Fixed thresholds for the harvest run.
// * Central location for every configurable value with a sane default.

// * Site the harvester targets.
pub const BASE_URL: &str = "https://shatterpointdb.com";

// * Listing endpoint enumerated for detail links.
pub const LIST_PATH: &str = "/characters/";

// * Politeness delay between detail-page requests in milliseconds.
pub const REQUEST_DELAY_MS: u64 = 250;

// * HTTP timeout for page and asset fetches in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// * Safety cap on detail pages processed in a single run.
pub const MAX_PAGES: usize = 2000;

// * Slug length cap; keeps directory names filesystem-safe everywhere.
pub const SLUG_MAX_LEN: usize = 64;

// * Maximum length of a tag picked up by the badge fallback scan.
pub const TAG_MAX_LEN: usize = 28;

// * Maximum interior spaces for the badge fallback scan.
pub const TAG_MAX_SPACES: usize = 3;

// * Maximum length of an ability title lead-in.
pub const ABILITY_TITLE_MAX_LEN: usize = 60;

// * Minimum length of an ability description; anything shorter is noise.
pub const ABILITY_DESC_MIN_LEN: usize = 5;

// * User agent presented to the source site.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; ShPointFetcher/1.0)";

// * Filenames inside each unit directory.
pub const DATA_FILENAME: &str = "data.json";
pub const PORTRAIT_FILENAME: &str = "portrait.png";

// * Aggregate index filename at the store root.
pub const INDEX_FILENAME: &str = "index.json";
