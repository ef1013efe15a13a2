// * Network layer: the reqwest-backed client plus the Fetch seam the
// * pipeline is written against, so tests can substitute fixture responses.

pub mod client;
pub mod errors;

pub use client::HttpClient;
pub use errors::FetchError;

use std::path::Path;

// * The transport capability the rest of the system depends on.
// * fetch_page returns the body of an HTTP 200 response; download_to streams
// * opaque asset bytes to a file.
pub trait Fetch {
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>>;

    fn download_to(
        &self,
        url: &str,
        dest: &Path,
    ) -> impl std::future::Future<Output = Result<u64, FetchError>>;
}
