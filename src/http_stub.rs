//! Disposable HTTP server for integration tests.
//!
//! Answers exactly one path, [`HELLO_PATH`]. `GET` returns a fixed plaintext
//! body, `HEAD` the same headers without a body, `POST` and `PUT` an empty
//! plaintext response. Other paths get 404 for those four methods. Any other
//! method gets 501 whatever the path. There is no state between requests.

use std::future::Future;

use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// The only path the stub answers.
pub const HELLO_PATH: &str = "/hello";

/// Body returned for `GET /hello`.
pub const HELLO_BODY: &str = "Hello World";

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Routes for the stub.
pub fn router() -> Router {
    Router::new()
        .route(
            HELLO_PATH,
            get(hello)
                .post(acknowledge)
                .put(acknowledge)
                .fallback(not_implemented),
        )
        .fallback(not_found)
}

/// Serve on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolve once `signal` fires.
///
/// If the signal handler could not be installed, log it and never resolve,
/// so the server keeps running instead of stopping at once.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("^C received, shutting down the web server"),
        Err(e) => {
            tracing::error!("Could not listen for ^C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

// HEAD is routed here too; axum drops the body.
async fn hello() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], HELLO_BODY)
}

async fn acknowledge() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")])
}

async fn not_implemented() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

async fn not_found(method: Method) -> StatusCode {
    if is_served(&method) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NOT_IMPLEMENTED
    }
}

fn is_served(method: &Method) -> bool {
    [Method::GET, Method::HEAD, Method::POST, Method::PUT].contains(method)
}
