//! OSI Model Reference application entry point.
//!
//! Wires together the configuration, asset loader, tab notebook, diagram
//! layout, and animation driver, then runs the Tokio dispatch loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML config with full defaults
//!  └─ ViewerApp::new()       -- registry → pages → layout → use cases
//!  └─ ctrl-c task            -- sends ViewerEvent::Shutdown
//!  └─ app.run()              -- single dispatch loop
//!       ├─ Tick                      -> advance marker, publish frame
//!       ├─ PointerMoved/PointerLeft  -> tooltip show/move/hide
//!       ├─ Clicked                   -> reveal the layer's text page
//!       └─ Shutdown                  -> stop the animation, exit
//! ```
//!
//! # Where is the window?
//!
//! The desktop shell renders the scene snapshots exposed by
//! `infrastructure::ui_bridge` and feeds pointer events back through its
//! commands; the Rust side is complete and runs headless without it (the
//! animation ticks, logs flow, Ctrl-C exits).

use tracing::info;
use tracing_subscriber::EnvFilter;

use osi_viewer::app::ViewerApp;
use osi_viewer::application::ViewerEvent;
use osi_viewer::infrastructure::assets::FsArtLoader;
use osi_viewer::infrastructure::storage::config::load_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config first: its log_level seeds the filter when RUST_LOG is unset.
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.viewer.log_level.clone())),
        )
        .init();

    info!("OSI Model Reference starting");

    // Illustrations are optional; the loader maps every failure to a
    // text-only page.
    let art_loader = FsArtLoader::new(config.assets.asset_dir());

    let app = ViewerApp::new(config, &art_loader).await?;

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    let shutdown_tx = app.events();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(ViewerEvent::Shutdown).await;
        }
    });

    app.run().await;

    info!("OSI Model Reference stopped");
    Ok(())
}
