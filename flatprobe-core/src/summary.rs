//! Per-stream highlights derived from the parsed report.
//!
//! The full attribute maps carry everything ffprobe printed. These summaries
//! pick out the handful of fields usually wanted at a glance and make
//! fractional frame rates readable. Values stay strings; missing attributes
//! are `None`.

use crate::report::{Attributes, ProbeReport};
use serde::Serialize;

/// Converts an ffprobe rational frame rate such as `30000/1001` into a
/// decimal string with three fractional digits (`29.970`).
///
/// Values without a `/` are returned unchanged. Returns `None` when either
/// side is not an integer or the denominator is zero (ffprobe prints `0/0`
/// for streams without a known rate).
pub fn frame_rate_to_decimal(rate: &str) -> Option<String> {
    let Some((num, den)) = rate.split_once('/') else {
        return Some(rate.to_string());
    };
    let num: i64 = num.trim().parse().ok()?;
    let den: i64 = den.trim().parse().ok()?;
    if den == 0 {
        return None;
    }
    Some(format!("{:.3}", num as f64 / den as f64))
}

/// Frame rate for display: converted when possible, raw otherwise.
fn readable_frame_rate(raw: Option<&String>) -> Option<String> {
    let raw = raw?;
    match frame_rate_to_decimal(raw) {
        Some(rate) => Some(rate),
        None => {
            log::debug!("Could not convert frame rate '{raw}' to a decimal value");
            Some(raw.clone())
        }
    }
}

fn field(attributes: &Attributes, key: &str) -> Option<String> {
    attributes.get(key).cloned()
}

/// Highlights of a video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub width: Option<String>,
    pub height: Option<String>,
    /// Container duration; ffprobe reports it on the wrapper, not the stream.
    pub duration: Option<String>,
    pub codec_name: Option<String>,
    pub pix_fmt: Option<String>,
    pub color_space: Option<String>,
    pub frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
}

impl VideoSummary {
    pub fn from_attributes(stream: &Attributes, wrapper: &Attributes) -> Self {
        Self {
            width: field(stream, "width"),
            height: field(stream, "height"),
            duration: field(wrapper, "duration"),
            codec_name: field(stream, "codec_name"),
            pix_fmt: field(stream, "pix_fmt"),
            color_space: field(stream, "color_space"),
            frame_rate: readable_frame_rate(stream.get("r_frame_rate")),
            avg_frame_rate: readable_frame_rate(stream.get("avg_frame_rate")),
        }
    }

    /// `WIDTHxHEIGHT` when both are known.
    pub fn resolution(&self) -> Option<String> {
        match (&self.width, &self.height) {
            (Some(w), Some(h)) => Some(format!("{w}x{h}")),
            _ => None,
        }
    }
}

/// Highlights of an audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioSummary {
    pub language: Option<String>,
    pub visual_impaired: Option<String>,
    pub channels: Option<String>,
    pub sample_rate: Option<String>,
    pub codec_name: Option<String>,
}

impl AudioSummary {
    pub fn from_attributes(stream: &Attributes) -> Self {
        Self {
            language: field(stream, "tags.language"),
            visual_impaired: field(stream, "disposition.visual_impaired"),
            channels: field(stream, "channels"),
            sample_rate: field(stream, "sample_rate"),
            codec_name: field(stream, "codec_name"),
        }
    }
}

impl ProbeReport {
    /// Summaries of the video streams, in stream order.
    pub fn video_summaries(&self) -> Vec<VideoSummary> {
        self.video_streams
            .iter()
            .map(|stream| VideoSummary::from_attributes(stream, &self.wrapper))
            .collect()
    }

    /// Summaries of the audio streams, in stream order.
    pub fn audio_summaries(&self) -> Vec<AudioSummary> {
        self.audio_streams.iter().map(AudioSummary::from_attributes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_flat_report;

    #[test]
    fn test_frame_rate_to_decimal() {
        assert_eq!(frame_rate_to_decimal("30000/1001").as_deref(), Some("29.970"));
        assert_eq!(frame_rate_to_decimal("25/1").as_deref(), Some("25.000"));
        assert_eq!(frame_rate_to_decimal("24000/1001").as_deref(), Some("23.976"));
        assert_eq!(frame_rate_to_decimal("25").as_deref(), Some("25"));
        assert_eq!(frame_rate_to_decimal("0/0"), None);
        assert_eq!(frame_rate_to_decimal("a/b"), None);
    }

    #[test]
    fn test_video_summary() {
        let report = parse_flat_report([
            "format.duration=\"5400.040000\"",
            "streams.stream.0.codec_type=\"video\"",
            "streams.stream.0.codec_name=\"h264\"",
            "streams.stream.0.width=1920",
            "streams.stream.0.height=1080",
            "streams.stream.0.pix_fmt=\"yuv420p\"",
            "streams.stream.0.r_frame_rate=\"30000/1001\"",
            "streams.stream.0.avg_frame_rate=\"0/0\"",
        ]);

        let summaries = report.video_summaries();
        assert_eq!(summaries.len(), 1);
        let video = &summaries[0];
        assert_eq!(video.resolution().as_deref(), Some("1920x1080"));
        assert_eq!(video.duration.as_deref(), Some("5400.040000"));
        assert_eq!(video.codec_name.as_deref(), Some("h264"));
        assert_eq!(video.frame_rate.as_deref(), Some("29.970"));
        assert_eq!(video.avg_frame_rate.as_deref(), Some("0/0"));
        assert_eq!(video.color_space, None);
    }

    #[test]
    fn test_audio_summary() {
        let report = parse_flat_report([
            "streams.stream.1.codec_type=\"audio\"",
            "streams.stream.1.codec_name=\"ac3\"",
            "streams.stream.1.channels=6",
            "streams.stream.1.sample_rate=\"48000\"",
            "streams.stream.1.disposition.visual_impaired=0",
            "streams.stream.1.tags.language=\"fin\"",
        ]);

        assert_eq!(
            report.audio_summaries(),
            vec![AudioSummary {
                language: Some("fin".to_string()),
                visual_impaired: Some("0".to_string()),
                channels: Some("6".to_string()),
                sample_rate: Some("48000".to_string()),
                codec_name: Some("ac3".to_string()),
            }]
        );
    }
}
