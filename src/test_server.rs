use std::net::{SocketAddr, TcpListener};

use axum::Router;
use reqwest::Client;
use tokio::io::AsyncReadExt;

/// Serves `router` on an ephemeral local port for the rest of the test.
pub(crate) fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());

    tokio::spawn(server);

    addr
}

/// Accepts connections, reads the request and hangs up without answering.
pub(crate) async fn hang_up() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0; 4096];
            let _ = socket.read(&mut buf).await;
        }
    });

    addr
}

/// An address nothing listens on.
pub(crate) fn refused() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub(crate) fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
