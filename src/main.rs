use shpoint_harvest::config::HarvestConfig;
use shpoint_harvest::engine::Pipeline;
use shpoint_harvest::network::HttpClient;
use shpoint_harvest::persistence::rebuild_index;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("shpoint_harvest=debug,info")
        .with_target(false)
        .json()
        .init();

    // * Usage: shpoint-harvest [out_root] [--force]
    let mut config = HarvestConfig::default();
    for arg in std::env::args().skip(1) {
        if arg == "--force" {
            config.force = true;
        } else {
            config.out_root = arg.into();
        }
    }

    let client = match HttpClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };

    let pipeline = Pipeline::new(&config, &client);
    let summary = match pipeline.run().await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Run aborted: {e}");
            std::process::exit(1);
        }
    };

    if summary.discovered == 0 {
        tracing::warn!("No unit links found on the listing page");
    }

    match rebuild_index(&config.out_root).await {
        Ok(entries) => tracing::info!(entries = entries.len(), "index.json written"),
        Err(e) => {
            tracing::error!("Index rebuild failed: {e}");
            std::process::exit(1);
        }
    }
}
