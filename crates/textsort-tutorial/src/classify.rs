//! Classification driver

use crate::resources::{self, ManifestEntry};
use crate::train::build_datum;
use std::io::Write;
use textsort_client::{ClassifierClient, ClassifierTransport, Error, Estimate, Result};

/// Pick the most probable estimate
///
/// Ties break deterministically: the first maximal element encountered wins,
/// since the comparison is non-strict.
pub fn most_likely(estimates: &[Estimate]) -> Option<&Estimate> {
    estimates.iter().reduce(|best, candidate| {
        if candidate.prob > best.prob {
            candidate
        } else {
            best
        }
    })
}

/// Render one result line: `<OK|NG>,<expected>,<predicted>,<probability>`
pub fn format_result(expected: &str, estimate: &Estimate) -> String {
    let verdict = if expected == estimate.label { "OK" } else { "NG" };
    format!("{verdict},{expected},{},{:.6}", estimate.label, estimate.prob)
}

/// Classify each manifest entry and write one result line per entry
///
/// One datum per classify call, in manifest order, mirroring how the
/// examples were submitted for training.
pub async fn run_classification<T: ClassifierTransport, W: Write>(
    client: &ClassifierClient<T>,
    instance: &str,
    entries: &[ManifestEntry],
    out: &mut W,
) -> Result<()> {
    for entry in entries {
        let message = resources::load_text(&entry.path)?;
        let results = client.classify(instance, &[build_datum(message)]).await?;

        for estimates in results {
            let best = most_likely(&estimates)
                .ok_or_else(|| Error::remote("empty estimate list"))?;
            writeln!(out, "{}", format_result(&entry.label, best))?;
        }
    }

    Ok(())
}
