//! Scoped facade over one connection to the classifier service

use crate::error::Result;
use crate::transport::{ClassifierTransport, HttpTransport};
use crate::types::{ConfigData, Datum, Estimate, LabeledDatum};
use serde_json::json;
use std::collections::HashMap;

/// Per-node status snapshot, keyed by node identifier
pub type StatusMap = HashMap<String, HashMap<String, String>>;

/// Client facade owning one transport for its whole scope
///
/// The transport is released exactly once on every exit path: either through
/// an explicit [`close`](Self::close) or through `Drop`, whichever comes
/// first. Errors from the remote side propagate unchanged; there is no
/// local retry.
pub struct ClassifierClient<T: ClassifierTransport> {
    transport: T,
    closed: bool,
}

impl ClassifierClient<HttpTransport> {
    /// Connect to the service at `host:port` with a timeout in seconds
    pub fn connect(host: &str, port: u16, timeout_secs: f64) -> Result<Self> {
        Ok(Self::new(HttpTransport::connect(host, port, timeout_secs)?))
    }
}

impl<T: ClassifierTransport> ClassifierClient<T> {
    /// Wrap an already-open transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            closed: false,
        }
    }

    /// Push algorithm and converter configuration to the named instance
    pub async fn set_config(&self, instance: &str, config: &ConfigData) -> Result<()> {
        self.transport
            .call("set_config", json!([instance, config]))
            .await?;
        Ok(())
    }

    /// Fetch the configuration currently held by the named instance
    pub async fn get_config(&self, instance: &str) -> Result<ConfigData> {
        let result = self.transport.call("get_config", json!([instance])).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Fetch per-node status key/value snapshots, for diagnostic logging
    pub async fn get_status(&self, instance: &str) -> Result<StatusMap> {
        let result = self.transport.call("get_status", json!([instance])).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Submit labeled datums for incremental online training
    ///
    /// Submission order is visible to the learner, so callers control it.
    pub async fn train(&self, instance: &str, data: &[LabeledDatum]) -> Result<()> {
        self.transport.call("train", json!([instance, data])).await?;
        Ok(())
    }

    /// Persist the instance's current model under a snapshot id
    pub async fn save(&self, instance: &str, id: &str) -> Result<()> {
        self.transport.call("save", json!([instance, id])).await?;
        Ok(())
    }

    /// Restore a saved snapshot, replacing in-memory model state
    pub async fn load(&self, instance: &str, id: &str) -> Result<()> {
        self.transport.call("load", json!([instance, id])).await?;
        Ok(())
    }

    /// Classify datums; one unordered estimate list per input datum
    pub async fn classify(&self, instance: &str, data: &[Datum]) -> Result<Vec<Vec<Estimate>>> {
        let result = self
            .transport
            .call("classify", json!([instance, data]))
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Release the connection now instead of at end of scope
    pub fn close(&mut self) {
        if !self.closed {
            self.transport.close();
            self.closed = true;
        }
    }
}

impl<T: ClassifierTransport> Drop for ClassifierClient<T> {
    fn drop(&mut self) {
        self.close();
    }
}
