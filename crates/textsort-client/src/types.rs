//! Data types exchanged with the classifier service

use serde::{Deserialize, Serialize};

/// Algorithm selection and converter configuration for one model instance
///
/// Immutable once built; the `config` field is an opaque JSON document
/// forwarded verbatim to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigData {
    /// Algorithm name (e.g. "PA")
    pub method: String,

    /// Serialized feature-converter configuration
    pub config: String,
}

impl ConfigData {
    /// Create a new configuration record
    pub fn new(method: impl Into<String>, config: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            config: config.into(),
        }
    }
}

/// One unit of input data, represented as named string features
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Datum {
    /// Feature name/value pairs
    pub string_values: Vec<(String, String)>,
}

impl Datum {
    /// Create an empty datum
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string feature, builder style
    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.string_values.push((key.into(), value.into()));
        self
    }
}

/// A datum paired with its training label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledDatum {
    /// Expected classification label
    pub label: String,

    /// The datum itself
    pub datum: Datum,
}

impl LabeledDatum {
    /// Create a new labeled datum
    pub fn new(label: impl Into<String>, datum: Datum) -> Self {
        Self {
            label: label.into(),
            datum,
        }
    }
}

/// One candidate label with its probability, returned by classification
///
/// The service gives no ordering guarantee across the estimates for a datum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// Candidate label
    pub label: String,

    /// Probability in [0, 1]
    pub prob: f64,
}
