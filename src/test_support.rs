//! In-process stand-in for the DeepSeek API used by unit tests.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    http::header,
    routing::post,
};
use serde_json::{Value, json};

use crate::deepseek::DeepSeekClient;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// Local HTTP server that records every request before handing it to a router.
pub struct StubProvider {
    url: String,
    captured: Captured,
}

impl StubProvider {
    pub async fn spawn(router: Router) -> Self {
        let captured: Captured = Arc::default();
        let recorder = captured.clone();
        let app = router.layer(axum::middleware::from_fn(
            move |request: axum::extract::Request, next: axum::middleware::Next| {
                let recorder = recorder.clone();
                async move {
                    let (parts, body) = request.into_parts();
                    let bytes = axum::body::to_bytes(body, usize::MAX)
                        .await
                        .expect("read request body");
                    let header_value = |name: header::HeaderName| {
                        parts
                            .headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    recorder.lock().expect("lock").push(CapturedRequest {
                        authorization: header_value(header::AUTHORIZATION),
                        content_type: header_value(header::CONTENT_TYPE),
                        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
                    });
                    let request =
                        axum::extract::Request::from_parts(parts, axum::body::Body::from(bytes));
                    next.run(request).await
                }
            },
        ));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub provider");
        let addr = listener.local_addr().expect("stub provider address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub provider");
        });

        Self {
            url: format!("http://{addr}{COMPLETIONS_PATH}"),
            captured,
        }
    }

    /// A client aimed at this stub.
    pub fn client(&self, api_key: &str) -> DeepSeekClient {
        DeepSeekClient::new(api_key.to_string()).with_endpoint(self.url.clone())
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("lock").clone()
    }
}

/// Router that answers every completion with `response`.
pub fn answer_with(response: Value) -> Router {
    Router::new().route(
        COMPLETIONS_PATH,
        post(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    )
}

/// Router that answers with `echo: <prompt>`.
pub fn echo_prompt() -> Router {
    Router::new().route(COMPLETIONS_PATH, post(echo))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": format!("echo: {prompt}") } }]
    }))
}
