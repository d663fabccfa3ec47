use std::sync::Arc;

use product_api::{config::Config, server, AppState};

#[tokio::main]
async fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   📦  PRODUCT CATALOG API                        ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // ── 1. Load configuration ────────────────────────────────────
    let config = Config::from_env();
    let addr = config.socket_addr();
    let port = config.port;

    // ── 2. Build shared state ────────────────────────────────────
    let state = Arc::new(AppState::new(config));

    // ── 3. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state);

    // ── 4. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("❌ Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    println!("Server listening on http://localhost:{port}");
    println!("Products        → http://localhost:{port}/api/products");
    println!("Search          → http://localhost:{port}/api/products/search?name=");
    println!("Stats           → http://localhost:{port}/api/products/stats");
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
