use std::time::Duration;

use axum::Router;
use reqwest::Client;
use server::clients::geekdo::GeekdoClient;
use server::config::Config;
use tokio::net::TcpListener;

/// Build a reqwest client for tests. Redirects are not followed so they can be asserted.
pub fn client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Service configuration pointing at a mock upstream.
pub fn config_for(upstream: &str) -> Config {
    Config {
        owner: "megtrinity".to_string(),
        collection_base_url: format!("{upstream}/xmlapi/collection"),
        boardgame_base_url: format!("{upstream}/xmlapi/boardgame"),
        upstream_timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

/// Start the service against `upstream` and return its base URL.
pub async fn spawn_service(config: Config) -> String {
    let client = GeekdoClient::new(&config).unwrap();
    serve(server::app::router(&config, client)).await
}
