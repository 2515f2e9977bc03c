//! Audio codec exporters.

use std::path::Path;

use mediapress_export_model::payload::MediaPayload;

/// Capability interface for audio codec backends.
///
/// Mirrors [`crate::video::VideoExporter`]: two infallible operations whose
/// only observable effect is a status line on standard output.
pub trait AudioExporter {
    /// Codec label used in status output.
    fn codec(&self) -> &'static str;

    /// Status line announcing preparation of raw audio data.
    fn prepare_status(&self) -> String {
        format!("Preparing audio data for {} export.", self.codec())
    }

    /// Status line announcing the export into `destination`.
    fn export_status(&self, destination: &Path) -> String {
        format!(
            "Exporting audio data for {} format to {}.",
            self.codec(),
            destination.display()
        )
    }

    /// Prepare raw audio data for exporting.
    fn prepare(&self, _data: &MediaPayload) {
        println!("{}", self.prepare_status());
    }

    /// Export the prepared audio data into a destination folder.
    fn export(&self, destination: &Path) {
        println!("{}", self.export_status(destination));
    }
}

/// AAC audio codec backend.
#[derive(Debug, Default)]
pub struct AacAudio;

impl AudioExporter for AacAudio {
    fn codec(&self) -> &'static str {
        "AAC"
    }
}

/// WAV audio codec backend.
#[derive(Debug, Default)]
pub struct WavAudio;

impl AudioExporter for WavAudio {
    fn codec(&self) -> &'static str {
        "WAV"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_audio_statuses_name_audio_data_and_codec() {
        let dest = PathBuf::from("./results");

        assert_eq!(
            AacAudio.prepare_status(),
            "Preparing audio data for AAC export."
        );
        assert_eq!(
            AacAudio.export_status(&dest),
            "Exporting audio data for AAC format to ./results."
        );
        assert_eq!(
            WavAudio.prepare_status(),
            "Preparing audio data for WAV export."
        );
        assert_eq!(
            WavAudio.export_status(&dest),
            "Exporting audio data for WAV format to ./results."
        );
    }
}
