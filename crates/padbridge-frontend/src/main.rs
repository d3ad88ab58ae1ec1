//! PadBridge front-end entry point.
//!
//! Wires together the config, the native engine adapter, the input bridge,
//! and the gesture dispatch loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- button bindings + log level
//!  └─ InputBridge::new()     -- over the engine adapter
//!  └─ bridge.initialize()    -- one-time handshake, before any gesture
//!  └─ run_gesture_loop()
//!       UI recognizers ─ GestureNotice ─> GestureRouter ─ press/release ─> engine
//! ```
//!
//! # Engine adapter
//!
//! The `MockNativeEngine` used here records forwarded transitions rather
//! than driving a real engine. In the shipping build the process bootstrap
//! loads the engine library, resolves its exported entry points, and this
//! binary constructs an `EmbeddedEngine` from the resulting
//! `EngineEntryPoints` table instead.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use padbridge_frontend::application::forward_input::{InputBridge, NativeEngine};
use padbridge_frontend::infrastructure::{
    config::load_config,
    gesture::{run_gesture_loop, GestureNotice, GesturePhase, GestureRouter},
    native_engine::mock::MockNativeEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("PADBRIDGE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("padbridge.toml"));
    let config = load_config(&config_path)?;

    // Initialise structured logging; RUST_LOG overrides the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    info!("PadBridge front-end starting");

    // ── Engine + bridge ───────────────────────────────────────────────────────
    // In the shipping build: EmbeddedEngine::new(entry_points) over the
    // library the bootstrap loaded.
    let engine = Arc::new(MockNativeEngine::new());
    let bridge = InputBridge::new(Arc::clone(&engine) as Arc<dyn NativeEngine>);

    // The handshake happens here, before any gesture handling is wired up;
    // the readiness state persists for the engine's lifetime.
    bridge.initialize()?;

    // ── Gesture routing ───────────────────────────────────────────────────────
    let mut router = GestureRouter::new();
    for entry in &config.buttons {
        info!(element = %entry.element, code = entry.code.name(), "binding button");
        router.bind(entry.element.clone(), entry.code);
    }

    let (tx, rx) = mpsc::channel::<GestureNotice>(64);

    // ── Demo gesture source ───────────────────────────────────────────────────
    // Stands in for the UI toolkit's recognizers, which own `tx` in the
    // shipping build. Taps each stock button once, then holds the channel
    // open until shutdown.
    let demo_tx = tx.clone();
    tokio::spawn(async move {
        for element in ["btn-up", "btn-down"] {
            for phase in [GesturePhase::Began, GesturePhase::Ended] {
                let notice = GestureNotice {
                    element: element.to_string(),
                    phase,
                };
                if demo_tx.send(notice).await.is_err() {
                    return;
                }
            }
        }
    });

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            // Dropping the last sender ends the gesture loop.
            drop(tx);
        }
    });

    info!("PadBridge front-end ready");
    run_gesture_loop(rx, router, &bridge).await;

    info!(
        forwarded = engine.recorded().len(),
        "PadBridge front-end stopped"
    );
    Ok(())
}
