use std::net::SocketAddr;
use std::path::PathBuf;

use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub host: SocketAddr,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Data {
    pub path: PathBuf,
    pub ui_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Auth {
    pub session_token_key: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    pub secret: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    pub auth: Auth,
    pub webhook: Webhook,
    pub log: Log,
}

impl TryInto<common::config::Config> for Config {
    type Error = crate::error::Error;

    fn try_into(self) -> Result<common::config::Config, Self::Error> {
        Ok(common::config::Config {
            server: common::config::Server {
                host: self.server.host,
            },
            data: common::config::Data {
                path: self.data.path,
                ui_path: self.data.ui_path,
            },
            auth: common::config::Auth {
                session_token_key: self.auth.session_token_key,
            },
            webhook: common::config::Webhook {
                secret: self.webhook.secret,
            },
            log: common::config::Log {
                level: self.log.level.into(),
            },
        })
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
