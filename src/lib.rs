use parking_lot::RwLock;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod store;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Runtime configuration (listen port, API key), read once at startup.
    pub config: config::Config,

    /// The in-memory record store. Reads take the read lock, mutations the
    /// write lock; each operation completes under a single acquisition, so
    /// every request observes a fully serialized store.
    pub store: RwLock<store::ProductStore>,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        Self {
            config,
            store: RwLock::new(store::ProductStore::new()),
        }
    }
}
