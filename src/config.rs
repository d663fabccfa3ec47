use std::env;

/// Runtime configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to bind to (env `PORT`, default: 3000)
    pub port: u16,

    /// Shared secret checked against the `x-api-key` header on mutating
    /// routes (env `API_KEY`, default: "12345")
    pub api_key: String,
}

fn default_port() -> u16 {
    3000
}

fn default_api_key() -> String {
    "12345".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_key: default_api_key(),
        }
    }
}

impl Config {
    /// Reads `PORT` and `API_KEY`, falling back to the defaults when a
    /// variable is unset. An unparsable `PORT` also falls back.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);
        let api_key = env::var("API_KEY").unwrap_or_else(|_| default_api_key());
        Self { port, api_key }
    }

    /// The socket address string the listener binds to.
    pub fn socket_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
