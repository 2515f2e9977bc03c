//! Run the export sequence for a quality tier.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use mediapress_common::config::AppConfig;
use mediapress_export_engine::session::ExportSession;
use mediapress_export_model::payload::MediaPayload;
use mediapress_export_model::quality::ExportQuality;

pub fn run(
    quality: Option<String>,
    output: Option<PathBuf>,
    label: Option<String>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    // --quality flag, then configured default, then interactive prompt.
    // Flag and config misuse are hard errors; only the prompt re-asks.
    let quality = match quality.or(config.export.quality) {
        Some(tier) => tier
            .parse::<ExportQuality>()
            .map_err(|e| anyhow::anyhow!("{e} Use: low, high, master"))?,
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt_quality(&mut stdin.lock(), &mut stdout)?
        }
    };

    let destination = output.unwrap_or(config.export.destination);

    let mut session = ExportSession::new(quality, destination);
    if let Some(label) = label {
        session.payload = MediaPayload::new(label);
    }

    session.run();
    Ok(())
}

/// Blocking prompt loop: re-asks until one of the recognized tiers is
/// entered. Closing the input stream before that is the only way out.
fn prompt_quality(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<ExportQuality> {
    loop {
        write!(output, "Enter desired quality (low, high, master): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before a valid quality was entered",
            ));
        }

        // The entered line is taken verbatim apart from its terminator;
        // "  low " is not a recognized tier.
        let entered = line.strip_suffix('\n').unwrap_or(&line);
        let entered = entered.strip_suffix('\r').unwrap_or(entered);
        match entered.parse::<ExportQuality>() {
            Ok(quality) => return Ok(quality),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt_with(input: &str) -> (std::io::Result<ExportQuality>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut written = Vec::new();
        let result = prompt_quality(&mut reader, &mut written);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn test_valid_tier_accepted_first_try() {
        let (result, output) = prompt_with("master\n");
        assert_eq!(result.unwrap(), ExportQuality::Master);
        assert_eq!(output, "Enter desired quality (low, high, master): ");
    }

    #[test]
    fn test_invalid_input_reprompts_until_valid() {
        let (result, output) = prompt_with("ultra\nmedium\nlow\n");
        assert_eq!(result.unwrap(), ExportQuality::Low);

        assert_eq!(output.matches("Enter desired quality").count(), 3);
        assert!(output.contains("Unknown output quality option: ultra.\n"));
        assert!(output.contains("Unknown output quality option: medium.\n"));
    }

    #[test]
    fn test_input_is_matched_verbatim() {
        let (result, output) = prompt_with("  high \nhigh\n");
        assert_eq!(result.unwrap(), ExportQuality::High);
        assert!(output.contains("Unknown output quality option:   high .\n"));
    }

    #[test]
    fn test_windows_line_endings_are_stripped() {
        let (result, _) = prompt_with("master\r\n");
        assert_eq!(result.unwrap(), ExportQuality::Master);
    }

    #[test]
    fn test_eof_before_valid_tier_is_an_error() {
        let (result, _) = prompt_with("ultra\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
