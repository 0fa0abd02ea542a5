// ============================================================================
// flatprobe-core/src/parser.rs
// ============================================================================
//
// FLAT REPORT PARSER: ffprobe `-print_format flat` output to stream records
//
// ffprobe's flat writer serialises its nested report as one dotted
// `section.path=value` assignment per line:
//
//   format.duration="120.500000"
//   streams.stream.0.codec_type="video"
//   streams.stream.0.width=1280
//   programs.program.0.streams.stream.0.codec_type="video"
//
// Parsing happens in two passes. The first pass collects wrapper attributes
// and groups stream fragments by stream index. The second pass walks the
// stream indices in ascending order, folds each fragment list into a map and
// classifies it as video or audio. Lines that do not fit are skipped; the
// parser has no error path.

use crate::report::{Attributes, ProbeReport, RawStreams, StreamKind};
use log::{debug, trace};

/// Section prefix for per-stream lines.
pub const STREAM_PREFIX: &str = "streams.stream.";

/// Section prefix for container level lines.
pub const FORMAT_PREFIX: &str = "format";

/// Section prefix for program listings. With several programs in a file
/// ffprobe lists every stream a second time under this prefix.
pub const PROGRAM_PREFIX: &str = "programs.program";

// ============================================================================
// HELPERS
// ============================================================================

/// Strips `prefix` from `line`, returning the remainder.
pub fn strip_section<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)
}

/// Removes surrounding whitespace and one pair of surrounding double quotes
/// from a value.
///
/// Only the outer characters are touched: `"a \"b\""` keeps its escaped
/// closing quote.
pub fn clean_value(value: &str) -> &str {
    let value = value.trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.trim()
}

/// Splits a `key=value` fragment on the first `=`.
///
/// The key is whitespace-trimmed and the value goes through [`clean_value`].
/// Returns `None` when the fragment has no `=` or the key is empty.
pub fn split_fragment(fragment: &str) -> Option<(&str, &str)> {
    let (key, value) = fragment.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, clean_value(value)))
}

/// Extracts the stream index from the part of a line following
/// `streams.stream.`, e.g. `12.codec_name="aac"` gives `Some(12)`.
pub fn stream_index(rest: &str) -> Option<u32> {
    let token = rest.split('.').next()?;
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Splits a stream line into its index and attribute fragment.
fn stream_fragment(line: &str) -> Option<(u32, &str)> {
    let rest = strip_section(line, STREAM_PREFIX)?;
    let index = stream_index(rest)?;
    let token_len = rest.find('.').unwrap_or(rest.len());
    let fragment = rest[token_len..].strip_prefix('.')?;
    Some((index, fragment))
}

// ============================================================================
// PASS ONE: COLLECTION
// ============================================================================

/// Collects wrapper attributes and raw per-stream fragments from the lines.
pub fn collect_raw_streams<I, S>(lines: I) -> (Attributes, RawStreams)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut wrapper = Attributes::new();
    let mut raw_streams = RawStreams::new();

    for line in lines {
        let line = line.as_ref();

        if line.starts_with(PROGRAM_PREFIX) {
            continue;
        }

        if line.starts_with(STREAM_PREFIX) {
            match stream_fragment(line) {
                Some((index, fragment)) => raw_streams
                    .entry(index)
                    .or_default()
                    .push(fragment.to_string()),
                None => trace!("Skipping stream line without a usable index: {line}"),
            }
            continue;
        }

        if line.starts_with(FORMAT_PREFIX) {
            let rest = line.strip_prefix("format.").unwrap_or(line);
            match split_fragment(rest) {
                Some((key, value)) => {
                    wrapper.insert(key.to_string(), value.to_string());
                }
                None => trace!("Skipping format line without a key: {line}"),
            }
        }
    }

    (wrapper, raw_streams)
}

// ============================================================================
// PASS TWO: FOLDING AND CLASSIFICATION
// ============================================================================

/// Folds a fragment list into an attribute map. Later fragments overwrite
/// earlier ones with the same key.
pub fn fold_fragments<S: AsRef<str>>(fragments: &[S]) -> Attributes {
    fragments
        .iter()
        .filter_map(|fragment| split_fragment(fragment.as_ref()))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Classifies a folded stream by its `codec_type` attribute.
pub fn classify(attributes: &Attributes) -> Option<StreamKind> {
    attributes
        .get("codec_type")
        .and_then(|codec_type| StreamKind::from_codec_type(codec_type))
}

/// Parses ffprobe flat output into wrapper, video and audio records.
///
/// `lines` is ffprobe's standard output split on newlines, in emission order.
/// The caller must already have checked that ffprobe succeeded.
pub fn parse_flat_report<I, S>(lines: I) -> ProbeReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (wrapper, raw_streams) = collect_raw_streams(lines);
    let mut report = ProbeReport {
        wrapper,
        ..Default::default()
    };

    for (index, fragments) in &raw_streams {
        let attributes = fold_fragments(fragments);
        match classify(&attributes) {
            Some(StreamKind::Video) => report.video_streams.push(attributes),
            Some(StreamKind::Audio) => report.audio_streams.push(attributes),
            None => debug!(
                "Dropping stream {} (codec_type: {})",
                index,
                attributes.get("codec_type").map_or("none", String::as_str)
            ),
        }
    }

    report
}
