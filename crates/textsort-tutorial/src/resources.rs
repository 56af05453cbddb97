//! Loader for the data files bundled into the binary

use rust_embed::Embed;
use std::borrow::Cow;
use textsort_client::{Error, Result};

#[derive(Embed)]
#[folder = "data"]
struct Assets;

/// One `label,relative-path` manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Expected classification label
    pub label: String,

    /// Message file path, relative to the bundled data root
    pub path: String,
}

/// Read a bundled file's raw bytes
pub fn load(path: &str) -> Result<Cow<'static, [u8]>> {
    Assets::get(path)
        .map(|file| file.data)
        .ok_or_else(|| Error::not_found(path))
}

/// Read a bundled file as UTF-8 text
pub fn load_text(path: &str) -> Result<String> {
    let bytes = load(path)?;
    String::from_utf8(bytes.into_owned())
        .map_err(|err| Error::internal(format!("{path} is not UTF-8: {err}")))
}

/// Parse a training/test manifest
///
/// Each line splits on the first comma only: the label may not contain
/// commas, the path may. Blank lines are skipped.
pub fn parse_manifest(text: &str) -> Result<Vec<ManifestEntry>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let (label, path) = line
                .split_once(',')
                .ok_or_else(|| Error::internal(format!("malformed manifest line: {line}")))?;
            Ok(ManifestEntry {
                label: label.to_string(),
                path: path.to_string(),
            })
        })
        .collect()
}
