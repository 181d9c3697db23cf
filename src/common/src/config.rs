use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Server {
    pub host: SocketAddr,
}

#[derive(Debug, Clone)]
pub struct Data {
    pub path: PathBuf,
    pub ui_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Auth {
    pub session_token_key: String,
}

#[derive(Debug, Clone)]
pub struct Webhook {
    pub secret: String,
}

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    pub auth: Auth,
    pub webhook: Webhook,
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: Server {
                host: SocketAddr::from_str("0.0.0.0:8080").unwrap(),
            },
            data: Data {
                path: Default::default(),
                ui_path: None,
            },
            auth: Auth {
                session_token_key: "".to_string(),
            },
            webhook: Webhook {
                secret: "".to_string(),
            },
            log: Log {
                level: LevelFilter::INFO,
            },
        }
    }
}
