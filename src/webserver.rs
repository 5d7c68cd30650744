use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::time::Instant;
use tracing::{error, info};

/// Keep-alive HTTP surface. The hosting platform terminates processes that do
/// not bind a port, and an external waker pings these endpoints to keep the
/// instance awake. Not part of the bot's core behavior.
#[derive(Clone, Copy)]
pub struct WebState {
    pub started: Instant,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

pub fn create_app(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/status", get(status))
        .with_state(state)
}

pub async fn serve(port: u16, state: WebState) {
    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(why) => {
            error!("Failed to bind keep-alive listener on {}: {}", addr, why);
            return;
        }
    };
    info!("Keep-alive web server listening on {}", addr);

    if let Err(why) = axum::serve(listener, create_app(state)).await {
        error!("Keep-alive web server error: {}", why);
    }
}

async fn index() -> &'static str {
    "Bot online ✅"
}

async fn status(State(state): State<WebState>) -> Json<StatusResponse> {
    Json(status_payload(state.started.elapsed().as_secs()))
}

fn status_payload(uptime_secs: u64) -> StatusResponse {
    StatusResponse {
        status: "online",
        uptime_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_payload_shape() {
        let value = serde_json::to_value(status_payload(42)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "status": "online", "uptime_secs": 42 })
        );
    }
}
