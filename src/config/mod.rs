// * Run configuration.
// * One immutable value built in main and handed to the pipeline, so tests
// * can inject fixture URLs and temp directories instead of process globals.

pub mod constants;

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HarvestConfig {
    // * Absolute base URL of the source site.
    pub base_url: String,
    // * Absolute URL of the listing page to enumerate.
    pub list_url: String,
    // * Path prefix that detail pages live under (single trailing segment).
    pub detail_prefix: String,
    // * Root directory of the on-disk unit store.
    pub out_root: PathBuf,
    // * Delay honored between detail-page requests.
    pub request_delay: Duration,
    // * Safety cap on pages processed per run.
    pub max_pages: usize,
    // * Overwrite existing data and portrait files.
    pub force: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: constants::BASE_URL.to_string(),
            list_url: format!("{}{}", constants::BASE_URL, constants::LIST_PATH),
            detail_prefix: constants::LIST_PATH.to_string(),
            out_root: PathBuf::from("."),
            request_delay: Duration::from_millis(constants::REQUEST_DELAY_MS),
            max_pages: constants::MAX_PAGES,
            force: false,
        }
    }
}
