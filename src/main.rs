// Headless front end: the folder comes from the first argument instead of a
// picker dialog, and every batch notification is printed as one JSON line on
// stdout. Logs go to stderr.

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use image_enhancer_lib::{enhance_folder, BatchEvent};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info,image_enhancer_lib=debug"))
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Image Enhancement Starting ===");

    let directory = std::env::args().nth(1).unwrap_or_default();
    let mut job = enhance_folder(directory);

    while let Some(event) = job.events.recv().await {
        if let BatchEvent::ItemError { file_name, message } = &event {
            warn!("{}: {}", file_name, message);
        }
        println!("{}", serde_json::to_string(&event)?);
    }

    let summary = job.handle.await.context("batch task did not finish")??;
    if !summary.all_succeeded() {
        bail!("{} of {} files could not be enhanced", summary.failed, summary.total);
    }

    info!("Image enhancement completed successfully!");
    Ok(())
}
