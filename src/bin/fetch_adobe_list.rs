use adobe_digest::cli::FetchCli;
use adobe_digest::scrapers::adobe::index_bulletin_links;
use adobe_digest::utils::init_tracing;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = FetchCli::parse();
    let config = args.fetch_config();
    debug!(?config, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    let links = match index_bulletin_links(&config).await {
        Ok(links) => links,
        Err(e) => {
            error!(url = %config.page_url, error = %e, "Fetch failed");
            eprintln!("❌ Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Found {} bulletins:", links.len());
    for url in &links {
        println!("{url}");
    }

    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "Execution complete");
    ExitCode::SUCCESS
}
