//! Training driver

use crate::resources::{self, ManifestEntry};
use textsort_client::{ClassifierClient, ClassifierTransport, Datum, LabeledDatum, Result};

/// Feature name carrying the full message text
pub const MESSAGE_FEATURE: &str = "message";

/// Build the single-feature datum used for both training and classification
pub fn build_datum(message: impl Into<String>) -> Datum {
    Datum::new().with_string(MESSAGE_FEATURE, message)
}

/// Train the instance from manifest entries, one call per line
///
/// Strictly sequential and strictly in manifest order: the learner is an
/// online one, so submission order is a correctness contract. A missing
/// message file aborts before any later line is submitted.
pub async fn run_training<T: ClassifierTransport>(
    client: &ClassifierClient<T>,
    instance: &str,
    entries: &[ManifestEntry],
) -> Result<()> {
    for entry in entries {
        let message = resources::load_text(&entry.path)?;
        let example = LabeledDatum::new(&entry.label, build_datum(message));

        client.train(instance, &[example]).await?;

        let status = serde_json::to_string(&client.get_status(instance).await?)?;
        tracing::trace!(
            label = %entry.label,
            path = %entry.path,
            status = %status,
            "trained one example"
        );
    }

    Ok(())
}
