//! HTTP front for the [`Forwarder`].

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use hyper::header::CONTENT_TYPE;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use tracing::info;

use super::error::ProxyError;
use super::forwarder::{Forwarder, ProxyReply};
use crate::core::constants::CHAT_ROUTE;

/// Bind `addr` and serve until `shutdown` resolves.
///
/// `on_bound` receives the actual local address, which matters when the
/// caller asked for port 0.
pub async fn serve<F>(
    addr: SocketAddr,
    forwarder: Forwarder,
    shutdown: F,
    on_bound: impl FnOnce(SocketAddr),
) -> Result<(), hyper::Error>
where
    F: Future<Output = ()>,
{
    let make_svc = make_service_fn(move |_conn| {
        let forwarder = forwarder.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let forwarder = forwarder.clone();
                async move { Ok::<_, Infallible>(route(req, &forwarder).await) }
            }))
        }
    });

    let server = Server::try_bind(&addr)?.serve(make_svc);
    let local_addr = server.local_addr();
    info!(%local_addr, route = CHAT_ROUTE, "translation proxy listening");
    on_bound(local_addr);

    server.with_graceful_shutdown(shutdown).await
}

async fn route(req: Request<Body>, forwarder: &Forwarder) -> Response<Body> {
    match (req.method(), req.uri().path()) {
        (&Method::POST, CHAT_ROUTE) => {
            let reply = match hyper::body::to_bytes(req.into_body()).await {
                Ok(bytes) => forwarder.handle(&bytes).await,
                Err(err) => ProxyReply::from_error(&ProxyError::transport(err)),
            };
            json_response(reply.status, &reply.body)
        }
        _ => json_response(
            StatusCode::NOT_FOUND,
            &serde_json::json!({ "error": "Not Found" }),
        ),
    }
}

fn json_response(status: StatusCode, body: &serde_json::Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("{\"error\":\"response build failed\"}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::defaults::PayloadDefaults;
    use crate::proxy::settings::{SettingsSource, UPSTREAM_KEY_VAR, UPSTREAM_URL_VAR};
    use mockito::Server as MockServer;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tokio::sync::oneshot;

    async fn spawn_proxy(settings: SettingsSource) -> (SocketAddr, oneshot::Sender<()>) {
        let forwarder = Forwarder::new(PayloadDefaults::default(), settings);
        let (addr_tx, addr_rx) = oneshot::channel();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = serve(
                "127.0.0.1:0".parse().expect("addr"),
                forwarder,
                async {
                    let _ = stop_rx.await;
                },
                move |addr| {
                    let _ = addr_tx.send(addr);
                },
            )
            .await;
        });
        (addr_rx.await.expect("bound address"), stop_tx)
    }

    fn settings_for(url: &str) -> SettingsSource {
        SettingsSource::fixed(HashMap::from([
            (UPSTREAM_URL_VAR.to_string(), url.to_string()),
            (UPSTREAM_KEY_VAR.to_string(), "k".to_string()),
        ]))
    }

    #[tokio::test]
    async fn chat_route_relays_upstream_json() {
        let mut upstream = MockServer::new_async().await;
        let _mock = upstream
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"Bonjour"}}]}"#)
            .create_async()
            .await;

        let (addr, stop) = spawn_proxy(settings_for(&upstream.url())).await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}{CHAT_ROUTE}"))
            .json(&json!({"messages": [{"role": "user", "content": "Hello"}]}))
            .send()
            .await
            .expect("response");

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("json");
        assert_eq!(body["choices"][0]["message"]["content"], "Bonjour");
        let _ = stop.send(());
    }

    #[tokio::test]
    async fn upstream_status_reaches_the_caller() {
        let mut upstream = MockServer::new_async().await;
        let _mock = upstream
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let (addr, stop) = spawn_proxy(settings_for(&upstream.url())).await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}{CHAT_ROUTE}"))
            .json(&json!({"messages": []}))
            .send()
            .await
            .expect("response");

        assert_eq!(response.status().as_u16(), 503);
        let body: Value = response.json().await.expect("json");
        assert_eq!(body["error"], "External API error: 503");
        assert_eq!(body["details"], "overloaded");
        let _ = stop.send(());
    }

    #[tokio::test]
    async fn unknown_routes_are_404() {
        let (addr, stop) = spawn_proxy(SettingsSource::fixed(HashMap::new())).await;
        let client = reqwest::Client::new();

        let response = client
            .get(format!("http://{addr}{CHAT_ROUTE}"))
            .send()
            .await
            .expect("response");
        assert_eq!(response.status().as_u16(), 404);

        let response = client
            .post(format!("http://{addr}/api/other"))
            .send()
            .await
            .expect("response");
        assert_eq!(response.status().as_u16(), 404);
        let _ = stop.send(());
    }
}
