//! Video codec exporters.

use std::path::Path;

use mediapress_export_model::payload::MediaPayload;

/// Capability interface for video codec backends.
///
/// Both operations are infallible: their only observable effect is a
/// status line on standard output. Variants differ solely in the codec
/// label substituted into that line.
pub trait VideoExporter {
    /// Codec label used in status output.
    fn codec(&self) -> &'static str;

    /// Status line announcing preparation of raw video data.
    fn prepare_status(&self) -> String {
        format!("Preparing video data for {} export.", self.codec())
    }

    /// Status line announcing the export into `destination`.
    fn export_status(&self, destination: &Path) -> String {
        format!(
            "Exporting video data for {} format to {}.",
            self.codec(),
            destination.display()
        )
    }

    /// Prepare raw video data for exporting.
    fn prepare(&self, _data: &MediaPayload) {
        println!("{}", self.prepare_status());
    }

    /// Export the prepared video data into a destination folder.
    fn export(&self, destination: &Path) {
        println!("{}", self.export_status(destination));
    }
}

/// Lossless video codec backend.
#[derive(Debug, Default)]
pub struct LosslessVideo;

impl VideoExporter for LosslessVideo {
    fn codec(&self) -> &'static str {
        "Lossless"
    }
}

/// H.264 codec backend, baseline profile.
#[derive(Debug, Default)]
pub struct H264BaselineVideo;

impl VideoExporter for H264BaselineVideo {
    fn codec(&self) -> &'static str {
        "H.264 (Baseline)"
    }
}

/// H.264 codec backend, Hi422P profile.
#[derive(Debug, Default)]
pub struct H264Hi422PVideo;

impl VideoExporter for H264Hi422PVideo {
    fn codec(&self) -> &'static str {
        "H.264 (Hi422P)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_prepare_status_names_the_codec() {
        assert_eq!(
            LosslessVideo.prepare_status(),
            "Preparing video data for Lossless export."
        );
        assert_eq!(
            H264BaselineVideo.prepare_status(),
            "Preparing video data for H.264 (Baseline) export."
        );
        assert_eq!(
            H264Hi422PVideo.prepare_status(),
            "Preparing video data for H.264 (Hi422P) export."
        );
    }

    #[test]
    fn test_export_status_names_codec_and_destination() {
        let dest = PathBuf::from("./results");
        let status = H264BaselineVideo.export_status(&dest);
        assert_eq!(
            status,
            "Exporting video data for H.264 (Baseline) format to ./results."
        );
    }

    #[test]
    fn test_prepare_then_export_statuses_both_carry_the_label() {
        let dest = PathBuf::from("./results");
        for exporter in [
            &LosslessVideo as &dyn VideoExporter,
            &H264BaselineVideo,
            &H264Hi422PVideo,
        ] {
            let lines = [exporter.prepare_status(), exporter.export_status(&dest)];
            assert!(lines[0].starts_with("Preparing"));
            assert!(lines[1].starts_with("Exporting"));
            for line in &lines {
                assert!(line.contains(exporter.codec()));
            }
        }
    }
}
