//! Quality-tier exporter factories.
//!
//! Each factory bundles the matched video/audio codec pair for one quality
//! tier. Factories are stateless: every `*_exporter()` call constructs a
//! fresh boxed instance, nothing is cached or shared across calls.

use mediapress_export_model::quality::ExportQuality;

use crate::audio::{AacAudio, AudioExporter, WavAudio};
use crate::video::{H264BaselineVideo, H264Hi422PVideo, LosslessVideo, VideoExporter};

/// Produces a matched codec pair for one quality tier.
pub trait ExporterFactory {
    /// Human-readable description of the codec pair.
    fn description(&self) -> &'static str;

    /// A freshly constructed video exporter for this tier.
    fn video_exporter(&self) -> Box<dyn VideoExporter>;

    /// A freshly constructed audio exporter for this tier.
    fn audio_exporter(&self) -> Box<dyn AudioExporter>;
}

/// Low quality: H.264 (Baseline) video with AAC audio.
#[derive(Debug, Default)]
pub struct LowQualityFactory;

impl ExporterFactory for LowQualityFactory {
    fn description(&self) -> &'static str {
        "H.264 (Baseline) video, AAC audio"
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264BaselineVideo)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudio)
    }
}

/// High quality: H.264 (Hi422P) video with AAC audio.
#[derive(Debug, Default)]
pub struct HighQualityFactory;

impl ExporterFactory for HighQualityFactory {
    fn description(&self) -> &'static str {
        "H.264 (Hi422P) video, AAC audio"
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264Hi422PVideo)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudio)
    }
}

/// Master quality: Lossless video with WAV audio.
#[derive(Debug, Default)]
pub struct MasterQualityFactory;

impl ExporterFactory for MasterQualityFactory {
    fn description(&self) -> &'static str {
        "Lossless video, WAV audio"
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(LosslessVideo)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(WavAudio)
    }
}

/// Resolve the factory for a quality tier. Never fails: the tier set is
/// closed and every tier has exactly one factory.
pub fn factory_for(quality: ExportQuality) -> Box<dyn ExporterFactory> {
    match quality {
        ExportQuality::Low => Box::new(LowQualityFactory),
        ExportQuality::High => Box::new(HighQualityFactory),
        ExportQuality::Master => Box::new(MasterQualityFactory),
    }
}
