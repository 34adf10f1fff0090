use placemark_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("=== Placemark Feed Watcher ===");

    let client = Client::new(Config::new())?;
    info!(
        "Transport configured: base_url={} with_credentials={}",
        client.base_url(),
        client.forwards_credentials()
    );

    let (root, mut feed) = client.effect_root();
    let supervisor = root.start();
    info!("Forked handlers: {:?}", supervisor.names());

    loop {
        tokio::select! {
            changed = feed.changed() => {
                if changed.is_err() {
                    error!("Feed channel closed, exiting");
                    break;
                }
                if let Some(snapshot) = feed.borrow().clone() {
                    info!(
                        "Feed refreshed at {}: {} places, {} bookmarks",
                        snapshot.refreshed_at,
                        snapshot.places.len(),
                        snapshot.bookmarks.len()
                    );
                    for place in &snapshot.places {
                        info!("  {} ({})", place.name, place.address);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, exiting");
                break;
            }
        }
    }

    Ok(())
}
