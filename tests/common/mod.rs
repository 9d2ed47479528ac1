#![allow(dead_code)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use url::Url;

use ordercal::http_config::HttpConfig;
use ordercal::OrderClient;

/// Request bodies received by a stub endpoint, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

async fn spawn(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}/order", addr)).unwrap()
}

/// Answers 200 and echoes the date key of the posted cell.
pub async fn echo_endpoint() -> (Url, Received) {
    async fn handler(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
        let key = body["date"]["date"].clone();
        received.lock().unwrap().push(body);
        Json(json!({ "date": key }))
    }

    let received: Received = Arc::default();
    let router = Router::new()
        .route("/order", post(handler))
        .with_state(received.clone());
    (spawn(router).await, received)
}

/// Answers every order with the given status and an empty body.
pub async fn status_endpoint(status: StatusCode) -> Url {
    let router = Router::new().route("/order", post(move || async move { status }));
    spawn(router).await
}

/// Answers 200 with a body that is not a confirmation.
pub async fn malformed_endpoint() -> Url {
    let router = Router::new().route("/order", post(|| async { "order received" }));
    spawn(router).await
}

/// Never answers within a test's lifetime.
pub async fn stalled_endpoint() -> Url {
    let router = Router::new().route(
        "/order",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(300)).await;
            StatusCode::OK
        }),
    );
    spawn(router).await
}

/// An address nothing listens on.
pub async fn closed_endpoint() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/order", addr)).unwrap()
}

pub fn client(endpoint: Url) -> OrderClient {
    OrderClient::new(endpoint, &HttpConfig::order_api()).unwrap()
}
