use csv::{Terminator, WriterBuilder};
use std::{
    convert::Infallible,
    fs::File,
    io::Write,
    path::Path,
    str::FromStr,
};
use tracing::{debug, info, instrument};

use super::row::ExtractRow;
use crate::error::{ExtractError, Result};

/// Whether the first response line is processed or skipped unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Line 0 is a candidate row like any other (kept only if it passes the
    /// secondary-key check, which a header normally does).
    Include,
    /// Line 0 is dropped without inspection.
    #[default]
    Exclude,
}

impl HeaderMode {
    pub fn start_index(self) -> usize {
        match self {
            HeaderMode::Include => 0,
            HeaderMode::Exclude => 1,
        }
    }
}

/// `IncludeHeader` selects [`HeaderMode::Include`]; any other text excludes.
impl FromStr for HeaderMode {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s.trim() == "IncludeHeader" {
            HeaderMode::Include
        } else {
            HeaderMode::Exclude
        })
    }
}

/// Counters for one filter pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: usize,
    pub skipped_before_start: usize,
    pub skipped_empty: usize,
    pub dropped_missing_key: usize,
    pub written: usize,
}

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Filter `lines` and write the retained rows as CSV to `sink`.
///
/// A row is kept when it is at or after the header-mode start index, is not
/// empty, and has a secondary key. Kept rows lose the event column; rows keep
/// their input order and are never merged per participant.
pub fn write_rows<S, W>(lines: &[S], mode: HeaderMode, sink: W) -> Result<FilterStats>
where
    S: AsRef<str>,
    W: Write,
{
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(line_terminator())
        .from_writer(sink);

    let start = mode.start_index();
    let mut stats = FilterStats {
        lines_read: lines.len(),
        ..Default::default()
    };

    for (idx, line) in lines.iter().enumerate() {
        if idx < start {
            stats.skipped_before_start += 1;
            continue;
        }
        let line = line.as_ref();
        if line.is_empty() {
            stats.skipped_empty += 1;
            continue;
        }

        let row = ExtractRow::parse(line, idx)?;
        if !row.has_secondary_key() {
            debug!(line = idx, primary_key = %row.primary_key, event = %row.event, "no secondary key; dropped");
            stats.dropped_missing_key += 1;
            continue;
        }

        writer.write_record(row.into_output())?;
        stats.written += 1;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(stats)
}

/// Create (or truncate) `path` and write the retained rows to it.
///
/// The parent directory must already exist.
#[instrument(level = "info", skip(lines, path), fields(path = %path.as_ref().display(), lines = lines.len()))]
pub fn save_rows<S, P>(lines: &[S], path: P, mode: HeaderMode) -> Result<FilterStats>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExtractError::Filesystem {
        path: path.to_path_buf(),
        source,
    })?;

    let stats = write_rows(lines, mode, file)?;
    info!(
        written = stats.written,
        dropped_missing_key = stats.dropped_missing_key,
        skipped_empty = stats.skipped_empty,
        "rows filtered"
    );
    Ok(stats)
}
