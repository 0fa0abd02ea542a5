//! Result types produced by the flat report parser.

use serde::Serialize;
use std::collections::BTreeMap;

/// Attribute name to attribute value. Values are kept exactly as ffprobe
/// printed them (minus quoting); nothing is converted to numbers.
pub type Attributes = BTreeMap<String, String>;

/// Raw fragments per stream index, in the order they were emitted.
pub type RawStreams = BTreeMap<u32, Vec<String>>;

/// The kind of elementary stream a record was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
}

impl StreamKind {
    /// Maps a `codec_type` value onto a supported kind.
    pub fn from_codec_type(codec_type: &str) -> Option<Self> {
        match codec_type {
            "video" => Some(StreamKind::Video),
            "audio" => Some(StreamKind::Audio),
            _ => None,
        }
    }
}

/// Parsed ffprobe report for a single media file.
///
/// `video_streams` and `audio_streams` are ordered by ascending stream
/// index. Streams that are neither video nor audio are not represented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Container level attributes (`format.*` lines).
    pub wrapper: Attributes,
    pub video_streams: Vec<Attributes>,
    pub audio_streams: Vec<Attributes>,
}

impl ProbeReport {
    /// Returns true when the report holds no wrapper attributes and no streams.
    pub fn is_empty(&self) -> bool {
        self.wrapper.is_empty() && self.video_streams.is_empty() && self.audio_streams.is_empty()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> crate::CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
