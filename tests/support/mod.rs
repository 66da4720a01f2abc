//! In-process stand-in for the prediction service.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use parking_lot::Mutex;
use serde_json::Value;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

pub struct MockBackend {
    health_status: StatusCode,
    predict_status: StatusCode,
    predict_body: String,
    delay: Duration,
}

#[derive(Default)]
pub struct Calls {
    pub health: AtomicUsize,
    pub predict: AtomicUsize,
    pub last_payload: Mutex<Option<Value>>,
}

impl Calls {
    pub fn health(&self) -> usize {
        self.health.load(Ordering::SeqCst)
    }

    pub fn predict(&self) -> usize {
        self.predict.load(Ordering::SeqCst)
    }
}

struct Shared {
    cfg: MockBackend,
    calls: Arc<Calls>,
}

pub struct RunningBackend {
    pub url: String,
    pub calls: Arc<Calls>,
}

impl MockBackend {
    /// Healthy service answering every prediction with `prediction`.
    pub fn succeeding(prediction: f64) -> Self {
        Self {
            health_status: StatusCode::OK,
            predict_status: StatusCode::OK,
            predict_body: serde_json::json!({ "status": "success", "prediction": prediction })
                .to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn health(mut self, status: StatusCode) -> Self {
        self.health_status = status;
        self
    }

    pub fn predict_reply(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.predict_status = status;
        self.predict_body = body.into();
        self
    }

    /// Latency added to the health probe.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn start(self) -> RunningBackend {
        let calls = Arc::new(Calls::default());
        let shared = Arc::new(Shared {
            cfg: self,
            calls: calls.clone(),
        });

        let app = Router::new()
            .route("/api/health", get(health))
            .route("/api/predict", post(predict))
            .with_state(shared);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        RunningBackend {
            url: format!("http://{}", addr),
            calls,
        }
    }
}

async fn health(State(s): State<Arc<Shared>>) -> StatusCode {
    s.calls.health.fetch_add(1, Ordering::SeqCst);
    if !s.cfg.delay.is_zero() {
        tokio::time::sleep(s.cfg.delay).await;
    }
    s.cfg.health_status
}

async fn predict(State(s): State<Arc<Shared>>, Json(body): Json<Value>) -> (StatusCode, String) {
    s.calls.predict.fetch_add(1, Ordering::SeqCst);
    *s.calls.last_payload.lock() = Some(body);
    (s.cfg.predict_status, s.cfg.predict_body.clone())
}

/// Base URL of a port nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Service that answers the health probe with 200 and hangs up on every
/// other request without replying.
pub async fn hangup_on_predict_url() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind hangup backend");
    let addr = listener.local_addr().expect("hangup backend addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            if buf[..n].starts_with(b"GET /api/health") {
                let _ = stream
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                    .await;
                let _ = stream.shutdown().await;
            }
            // Any other request: dropping the stream closes the connection.
        }
    });
    format!("http://{}", addr)
}
