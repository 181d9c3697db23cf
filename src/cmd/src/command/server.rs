use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use common::config::Config;
use metadata::MetadataProvider;
use platform::PlatformProvider;
use tokio::select;
use tokio::signal::unix::SignalKind;
use tracing::debug;
use tracing::info;

use crate::error::Result;

pub async fn start(cfg: Config) -> Result<()> {
    debug!("data path: {:?}", cfg.data.path);
    fs::create_dir_all(&cfg.data.path)?;

    let db = Arc::new(metadata::rocksdb::new(cfg.data.path.join("md"))?);
    let md = Arc::new(MetadataProvider::try_new(db)?);

    info!("attaching platform routes...");
    let platform = Arc::new(PlatformProvider::try_new(md.clone(), cfg.clone())?);
    let router = platform::http::attach_routes(Router::new(), &md, &platform, cfg.clone());

    let signal = async {
        let mut sig_int =
            tokio::signal::unix::signal(SignalKind::interrupt()).expect("failed to install signal");
        let mut sig_term =
            tokio::signal::unix::signal(SignalKind::terminate()).expect("failed to install signal");
        select! {
            _=sig_int.recv()=>info!("SIGINT received"),
            _=sig_term.recv()=>info!("SIGTERM received"),
        }
    };

    info!("listening on http://{}", cfg.server.host);
    let listener = tokio::net::TcpListener::bind(cfg.server.host).await?;
    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(signal)
    .await?)
}
