//! Split a marker-delimited text blob into files on disk.
//!
//! A segment starts at a marker line `// 📄 <relative path>` and runs until the
//! next marker (or end of input). Text before the first marker is ignored.
//! Bodies are written with leading whitespace stripped and a single trailing
//! newline. Paths must stay inside the output root.

use anyhow::{Context, Result, bail};
use regex::Regex;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

const MARKER_PATTERN: &str = r"//\s*📄";
const MARKER_LINE_PATTERN: &str = r"//\s*📄\s*(.+)\n";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One file extracted from the input blob.
pub struct Segment {
    /// Path exactly as written after the marker, trimmed.
    pub path: String,
    /// Body with leading whitespace removed and one trailing newline.
    pub contents: String,
}

/// Extract every segment from `input` in order.
pub fn parse_segments(input: &str) -> Result<Vec<Segment>> {
    let marker = Regex::new(MARKER_PATTERN).context("compiling scaffold marker pattern")?;
    let marker_line =
        Regex::new(MARKER_LINE_PATTERN).context("compiling scaffold marker-line pattern")?;

    let mut segments = Vec::new();
    let mut pos = 0;
    while let Some(caps) = marker_line.captures_at(input, pos) {
        let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = whole.end();
        let body_end = marker
            .find_at(input, body_start)
            .map(|m| m.start())
            .unwrap_or(input.len());
        let body = &input[body_start..body_end];
        segments.push(Segment {
            path: path.as_str().trim().to_string(),
            contents: format!("{}\n", body.trim_start()),
        });
        pos = body_end;
    }
    Ok(segments)
}

/// Resolve a segment path under `root`, refusing anything that would escape
/// it.
pub fn resolve_segment_path(root: &Path, relative: &str) -> Result<PathBuf> {
    if relative.is_empty() {
        bail!("scaffold marker has an empty path");
    }
    let candidate = Path::new(relative);
    for component in candidate.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                bail!("scaffold path '{relative}' escapes the output root");
            }
            Component::RootDir | Component::Prefix(_) => {
                bail!("scaffold path '{relative}' must be relative");
            }
        }
    }
    Ok(root.join(candidate))
}

/// Write every segment under `root`, creating parent directories. Returns
/// the written paths in input order.
pub fn write_segments(root: &Path, segments: &[Segment]) -> Result<Vec<PathBuf>> {
    // Validate everything first so a bad path leaves nothing half-written.
    let targets = segments
        .iter()
        .map(|segment| resolve_segment_path(root, &segment.path))
        .collect::<Result<Vec<_>>>()?;

    for (segment, target) in segments.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(target, &segment.contents)
            .with_context(|| format!("writing {}", target.display()))?;
        info!(path = %target.display(), "wrote file");
    }
    Ok(targets)
}

/// Read `input_file`, split it and write the files under `root`.
pub fn scaffold_from_file(input_file: &Path, root: &Path) -> Result<Vec<PathBuf>> {
    let input = fs::read_to_string(input_file)
        .with_context(|| format!("reading {}", input_file.display()))?;
    let segments = parse_segments(&input)?;
    if segments.is_empty() {
        bail!("no file markers found in {}", input_file.display());
    }
    write_segments(root, &segments)
}
