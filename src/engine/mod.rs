pub mod discovery;
pub mod pipeline;
pub mod urls;

pub use discovery::discover_links;
pub use pipeline::{Pipeline, PipelineError, RunSummary};
pub use urls::{is_same_host, page_slug, resolve_url, slug_from_url};
