use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

use crate::{api, types::PendingAuth};

/// Binds the callback server and serves it in the background.
///
/// Binding happens before returning so a busy port is reported right away
/// instead of after the browser has been opened. Abort the returned handle to
/// stop serving.
pub async fn start_callback_server(
    addr: SocketAddr,
    path: &str,
    state: Arc<Mutex<PendingAuth>>,
) -> std::io::Result<JoinHandle<()>> {
    let app = Router::new().route(path, get(api::callback).layer(Extension(state)));

    let listener = TcpListener::bind(addr).await?;
    Ok(tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    }))
}
