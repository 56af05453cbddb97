//! Transport seam between the client facade and the wire protocol

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Carries one remote procedure call to the classifier service
///
/// The facade is written against this trait so a mock service can stand in
/// for the real one in tests.
#[async_trait]
pub trait ClassifierTransport: Send + Sync {
    /// Invoke `method` with positional `params`, returning the raw result
    async fn call(&self, method: &str, params: Value) -> Result<Value>;

    /// Release the underlying network resource
    ///
    /// Called exactly once by the owning facade; later `call`s must fail.
    fn close(&mut self);
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    message: String,
}

/// JSON-over-HTTP transport to a classifier service at `host:port`
pub struct HttpTransport {
    endpoint: String,
    http: Option<reqwest::Client>,
    next_id: AtomicU64,
}

impl HttpTransport {
    /// Open a transport with a connection-level timeout in seconds
    pub fn connect(host: &str, port: u16, timeout_secs: f64) -> Result<Self> {
        let timeout = Duration::from_secs_f64(timeout_secs);
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            endpoint: format!("http://{host}:{port}/"),
            http: Some(http),
            next_id: AtomicU64::new(1),
        })
    }
}

#[async_trait]
impl ClassifierTransport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| Error::transport("connection closed"))?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(method, id, "rpc call");

        let response = http
            .post(&self.endpoint)
            .json(&serde_json::json!({
                "method": method,
                "params": params,
                "id": id,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "service returned HTTP {status} for {method}"
            )));
        }

        let body: RpcResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(Error::remote(err.message));
        }
        body.result
            .ok_or_else(|| Error::transport(format!("missing result for {method}")))
    }

    fn close(&mut self) {
        // Dropping the reqwest client tears down its connection pool.
        self.http = None;
    }
}
