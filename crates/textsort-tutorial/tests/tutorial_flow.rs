//! End-to-end tutorial flow against a deterministic in-memory service
//!
//! The mock remembers every trained example verbatim. An exact message match
//! classifies with probability 1.0; otherwise labels are scored by shared
//! token counts. Both paths are deterministic, which is what the save/load
//! round-trip assertion relies on.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use textsort_client::{
    ClassifierClient, ClassifierTransport, ConfigData, Datum, Error, Estimate, LabeledDatum,
};
use textsort_tutorial::resources::{self, ManifestEntry};
use textsort_tutorial::{classify, train};

const INSTANCE: &str = "tutorial";

#[derive(Default, Clone)]
struct ServiceState {
    config: Option<ConfigData>,
    examples: Vec<(String, String)>,
    snapshots: HashMap<String, Vec<(String, String)>>,
}

#[derive(Default)]
struct MockService {
    state: Mutex<ServiceState>,
}

/// Newtype so the foreign `ClassifierTransport` trait can be implemented
/// for a shared handle without tripping the orphan rule on `Arc`.
struct SharedService(Arc<MockService>);

fn message_of(datum: &Datum) -> String {
    datum
        .string_values
        .iter()
        .find(|(key, _)| key == "message")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

fn estimates_for(state: &ServiceState, message: &str) -> Vec<Estimate> {
    let mut labels: Vec<String> = state
        .examples
        .iter()
        .map(|(label, _)| label.clone())
        .collect();
    labels.sort();
    labels.dedup();

    if let Some((winner, _)) = state.examples.iter().find(|(_, text)| text == message) {
        return labels
            .into_iter()
            .map(|label| {
                let prob = if &label == winner { 1.0 } else { 0.0 };
                Estimate { label, prob }
            })
            .collect();
    }

    let tokens: HashSet<&str> = message.split_whitespace().collect();
    let scores: Vec<(String, f64)> = labels
        .into_iter()
        .map(|label| {
            let shared: usize = state
                .examples
                .iter()
                .filter(|(example_label, _)| example_label == &label)
                .map(|(_, text)| {
                    text.split_whitespace()
                        .filter(|token| tokens.contains(token))
                        .count()
                })
                .sum();
            (label, shared as f64)
        })
        .collect();

    let total: f64 = scores.iter().map(|(_, score)| score).sum();
    let uniform = 1.0 / scores.len().max(1) as f64;
    scores
        .into_iter()
        .map(|(label, score)| Estimate {
            label,
            prob: if total > 0.0 { score / total } else { uniform },
        })
        .collect()
}

#[async_trait]
impl ClassifierTransport for SharedService {
    async fn call(&self, method: &str, params: Value) -> textsort_client::Result<Value> {
        let args = params
            .as_array()
            .ok_or_else(|| Error::remote("params must be an array"))?;
        let mut state = self.0.state.lock().unwrap();

        match method {
            "set_config" => {
                state.config = Some(serde_json::from_value(args[1].clone())?);
                Ok(Value::Bool(true))
            }
            "get_config" => {
                let config = state
                    .config
                    .clone()
                    .ok_or_else(|| Error::remote("instance is not configured"))?;
                Ok(serde_json::to_value(config)?)
            }
            "get_status" => {
                let mut node = HashMap::new();
                node.insert("num_examples".to_string(), state.examples.len().to_string());
                Ok(serde_json::to_value(HashMap::from([(
                    "node0".to_string(),
                    node,
                )]))?)
            }
            "train" => {
                let batch: Vec<LabeledDatum> = serde_json::from_value(args[1].clone())?;
                for example in batch {
                    let message = message_of(&example.datum);
                    state.examples.push((example.label, message));
                }
                Ok(Value::Bool(true))
            }
            "save" => {
                let id = args[1].as_str().unwrap_or_default().to_string();
                let snapshot = state.examples.clone();
                state.snapshots.insert(id, snapshot);
                Ok(Value::Bool(true))
            }
            "load" => {
                let id = args[1].as_str().unwrap_or_default();
                let snapshot = state
                    .snapshots
                    .get(id)
                    .cloned()
                    .ok_or_else(|| Error::remote(format!("unknown snapshot id: {id}")))?;
                state.examples = snapshot;
                Ok(Value::Bool(true))
            }
            "classify" => {
                let batch: Vec<Datum> = serde_json::from_value(args[1].clone())?;
                let results: Vec<Vec<Estimate>> = batch
                    .iter()
                    .map(|datum| estimates_for(&state, &message_of(datum)))
                    .collect();
                Ok(serde_json::to_value(results)?)
            }
            other => Err(Error::remote(format!("unknown method: {other}"))),
        }
    }

    fn close(&mut self) {}
}

fn tutorial_config() -> ConfigData {
    ConfigData::new("PA", resources::load_text("converter.json").unwrap())
}

fn manifest(name: &str) -> Vec<ManifestEntry> {
    resources::parse_manifest(&resources::load_text(name).unwrap()).unwrap()
}

#[tokio::test]
async fn training_set_classifies_as_trained() {
    let service = Arc::new(MockService::default());
    let client = ClassifierClient::new(SharedService(service.clone()));
    let entries = manifest("train.dat");

    client.set_config(INSTANCE, &tutorial_config()).await.unwrap();
    train::run_training(&client, INSTANCE, &entries).await.unwrap();

    let mut out = Vec::new();
    classify::run_classification(&client, INSTANCE, &entries, &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), entries.len());
    for line in lines {
        assert!(line.starts_with("OK,"), "unexpected verdict: {line}");
        assert!(line.ends_with(",1.000000"), "unexpected probability: {line}");
    }
}

#[tokio::test]
async fn save_then_load_reproduces_classification() {
    let service = Arc::new(MockService::default());
    let client = ClassifierClient::new(SharedService(service.clone()));

    client.set_config(INSTANCE, &tutorial_config()).await.unwrap();
    train::run_training(&client, INSTANCE, &manifest("train.dat"))
        .await
        .unwrap();

    let test_entries = manifest("test.dat");
    let mut before = Vec::new();
    classify::run_classification(&client, INSTANCE, &test_entries, &mut before)
        .await
        .unwrap();

    client.save(INSTANCE, "tutorial").await.unwrap();
    client.load(INSTANCE, "tutorial").await.unwrap();
    client.set_config(INSTANCE, &tutorial_config()).await.unwrap();

    let mut after = Vec::new();
    classify::run_classification(&client, INSTANCE, &test_entries, &mut after)
        .await
        .unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn loading_unknown_snapshot_is_a_remote_error() {
    let service = Arc::new(MockService::default());
    let client = ClassifierClient::new(SharedService(service.clone()));

    let err = client.load(INSTANCE, "nonexistent").await.unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[tokio::test]
async fn missing_message_file_aborts_before_later_lines() {
    let service = Arc::new(MockService::default());
    let client = ClassifierClient::new(SharedService(service.clone()));

    let entries = vec![
        ManifestEntry {
            label: "spam".to_string(),
            path: "messages/spam/0001.txt".to_string(),
        },
        ManifestEntry {
            label: "ham".to_string(),
            path: "messages/ham/9999.txt".to_string(),
        },
        ManifestEntry {
            label: "ham".to_string(),
            path: "messages/ham/0001.txt".to_string(),
        },
    ];

    let err = train::run_training(&client, INSTANCE, &entries)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    // Only the line before the missing file was submitted.
    assert_eq!(service.state.lock().unwrap().examples.len(), 1);
}

#[tokio::test]
async fn status_reflects_training_progress() {
    let service = Arc::new(MockService::default());
    let client = ClassifierClient::new(SharedService(service.clone()));
    let entries = manifest("train.dat");

    train::run_training(&client, INSTANCE, &entries).await.unwrap();

    let status = client.get_status(INSTANCE).await.unwrap();
    assert_eq!(
        status["node0"]["num_examples"],
        entries.len().to_string()
    );
}
