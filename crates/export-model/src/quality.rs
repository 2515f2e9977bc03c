//! Export quality tiers.

use std::fmt;
use std::str::FromStr;

use mediapress_common::error::MediapressError;
use serde::{Deserialize, Serialize};

/// Quality tier for an export.
///
/// The tier uniquely determines the matched video/audio codec pair used by
/// the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuality {
    /// Fast, small output: H.264 (Baseline) + AAC.
    Low,

    /// High fidelity lossy output: H.264 (Hi422P) + AAC.
    High,

    /// Archival output: Lossless + WAV.
    Master,
}

impl ExportQuality {
    /// All recognized tiers, in prompt order.
    pub const ALL: [ExportQuality; 3] = [
        ExportQuality::Low,
        ExportQuality::High,
        ExportQuality::Master,
    ];

    /// Lowercase tier name as entered at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportQuality::Low => "low",
            ExportQuality::High => "high",
            ExportQuality::Master => "master",
        }
    }
}

impl fmt::Display for ExportQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportQuality {
    type Err = MediapressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ExportQuality::Low),
            "high" => Ok(ExportQuality::High),
            "master" => Ok(ExportQuality::Master),
            other => Err(MediapressError::unknown_quality(other)),
        }
    }
}
