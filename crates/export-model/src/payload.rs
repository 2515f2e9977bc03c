//! Media payload placeholder.

use serde::{Deserialize, Serialize};

/// Opaque stand-in for the raw media handed to an exporter's `prepare` step.
///
/// No real media flows through the pipeline; the payload only carries a
/// descriptive label so status output and logs can name their source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    /// Human-readable description of the payload origin.
    pub label: String,
}

impl MediaPayload {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
