//! Text rendering of probe reports.
//!
//! Every section is a heading, a rule line and `key = value` lines sorted by
//! key. Streams inside a section are separated by a blank line and every
//! section ends with one.

use console::style;
use flatprobe_core::{Attributes, AudioSummary, ProbeOutput, ProbeReport, VideoSummary};
use std::fmt::Write;

const RULE_WIDTH: usize = 63;

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn heading(out: &mut String, title: &str, styled: bool) {
    if styled {
        let _ = writeln!(out, "{}", style(title).bold());
    } else {
        let _ = writeln!(out, "{title}");
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

fn attribute_block(attributes: &Attributes) -> String {
    let mut block = String::new();
    for (key, value) in attributes {
        let _ = writeln!(block, "{key} = {value}");
    }
    block
}

fn optional_block(fields: &[(&str, Option<String>)]) -> String {
    let mut block = String::new();
    for (key, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(block, "{key} = {value}");
        }
    }
    block
}

fn section(out: &mut String, title: &str, blocks: &[String], styled: bool) {
    heading(out, title, styled);
    out.push_str(&blocks.join("\n"));
    out.push('\n');
}

/// Renders wrapper attributes, then video streams, then audio streams.
pub fn render_report(report: &ProbeReport, styled: bool) -> String {
    let mut out = String::new();

    let wrapper_title = format!(
        "Wrapper info ({})",
        plural(report.wrapper.len(), "attribute", "attributes")
    );
    section(&mut out, &wrapper_title, &[attribute_block(&report.wrapper)], styled);

    let video: Vec<String> = report.video_streams.iter().map(attribute_block).collect();
    let video_title = format!("Video stream info ({})", plural(video.len(), "stream", "streams"));
    section(&mut out, &video_title, &video, styled);

    let audio: Vec<String> = report.audio_streams.iter().map(attribute_block).collect();
    let audio_title = format!("Audio stream info ({})", plural(audio.len(), "stream", "streams"));
    section(&mut out, &audio_title, &audio, styled);

    out
}

fn video_summary_block(summary: &VideoSummary) -> String {
    optional_block(&[
        ("resolution", summary.resolution()),
        ("codec_name", summary.codec_name.clone()),
        ("pix_fmt", summary.pix_fmt.clone()),
        ("color_space", summary.color_space.clone()),
        ("frame_rate", summary.frame_rate.clone()),
        ("avg_frame_rate", summary.avg_frame_rate.clone()),
        ("duration", summary.duration.clone()),
    ])
}

fn audio_summary_block(summary: &AudioSummary) -> String {
    optional_block(&[
        ("language", summary.language.clone()),
        ("codec_name", summary.codec_name.clone()),
        ("channels", summary.channels.clone()),
        ("sample_rate", summary.sample_rate.clone()),
        ("visual_impaired", summary.visual_impaired.clone()),
    ])
}

/// Renders the short per-stream summaries instead of full attribute lists.
pub fn render_summary(report: &ProbeReport, styled: bool) -> String {
    let mut out = String::new();

    let video: Vec<String> = report.video_summaries().iter().map(video_summary_block).collect();
    let video_title = format!("Video streams ({})", video.len());
    section(&mut out, &video_title, &video, styled);

    let audio: Vec<String> = report.audio_summaries().iter().map(audio_summary_block).collect();
    let audio_title = format!("Audio streams ({})", audio.len());
    section(&mut out, &audio_title, &audio, styled);

    out
}

/// Renders ffprobe's captured output verbatim.
pub fn render_raw(output: &ProbeOutput, styled: bool) -> String {
    let mut out = String::new();

    heading(&mut out, "ffprobe stdout", styled);
    for line in &output.stdout_lines {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');

    heading(&mut out, "ffprobe stderr", styled);
    let stderr = output.stderr.trim_end();
    if !stderr.is_empty() {
        let _ = writeln!(out, "{stderr}");
    }
    out.push('\n');
    let _ = writeln!(out, "success: {}", output.success);

    out
}
