//! Export session: resolves a factory and runs the export sequence.

use std::path::PathBuf;

use mediapress_export_model::payload::MediaPayload;
use mediapress_export_model::quality::ExportQuality;

use crate::factory::factory_for;

/// An export session ready to run.
#[derive(Debug, Clone)]
pub struct ExportSession {
    /// Quality tier selecting the codec pair.
    pub quality: ExportQuality,

    /// Destination folder named in status output. Never created or
    /// written to; no real media is produced.
    pub destination: PathBuf,

    /// Opaque media payload handed to the `prepare` steps.
    pub payload: MediaPayload,
}

impl ExportSession {
    pub fn new(quality: ExportQuality, destination: PathBuf) -> Self {
        Self {
            quality,
            destination,
            payload: MediaPayload::new("placeholder media data"),
        }
    }

    /// The status lines this session will emit, in emission order.
    ///
    /// `prepare` runs for both exporters before either `export`, video
    /// first in each phase.
    pub fn status_lines(&self) -> Vec<String> {
        let factory = factory_for(self.quality);
        let video = factory.video_exporter();
        let audio = factory.audio_exporter();
        vec![
            video.prepare_status(),
            audio.prepare_status(),
            video.export_status(&self.destination),
            audio.export_status(&self.destination),
        ]
    }

    /// Run the export sequence: `prepare` then `export` on the tier's
    /// video and audio exporters. Infallible; every step only emits a
    /// status line.
    pub fn run(&self) {
        tracing::info!(
            quality = %self.quality,
            destination = %self.destination.display(),
            "Starting export"
        );

        let factory = factory_for(self.quality);
        let video = factory.video_exporter();
        let audio = factory.audio_exporter();

        tracing::debug!(
            video_codec = video.codec(),
            audio_codec = audio.codec(),
            "Resolved codec pair"
        );

        video.prepare(&self.payload);
        audio.prepare(&self.payload);
        video.export(&self.destination);
        audio.export(&self.destination);

        tracing::info!(
            quality = %self.quality,
            destination = %self.destination.display(),
            "Export complete"
        );
    }
}
