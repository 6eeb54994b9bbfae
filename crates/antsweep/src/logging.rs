//! File logging for the viewer.
//!
//! The terminal is owned by the chart screens, so events only ever go to
//! `<log_dir>/antsweep.log`. An oversized log is cut back to its newest lines
//! before the subscriber opens it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "antsweep.log";

const TRIM_THRESHOLD_BYTES: u64 = 5 * 1024 * 1024;
const RETAINED_BYTES: u64 = 1024 * 1024;
const TRIM_MARKER: &[u8] = b"[antsweep] earlier log entries discarded\n";

/// Cut the log at `path` down to its last whole lines within `RETAINED_BYTES`.
///
/// Returns how many bytes were dropped, or `None` when the file was left alone.
fn trim_oversized_log(path: &Path) -> io::Result<Option<u64>> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if size <= TRIM_THRESHOLD_BYTES {
        return Ok(None);
    }

    let mut tail = Vec::with_capacity(RETAINED_BYTES as usize);
    let mut file = File::open(path)?;
    file.seek(SeekFrom::End(-(RETAINED_BYTES as i64)))?;
    file.read_to_end(&mut tail)?;

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);
    let kept = &tail[line_start..];

    fs::write(path, [TRIM_MARKER, kept].concat())?;
    Ok(Some(size - kept.len() as u64))
}

/// `RUST_LOG`-style directive applying `level` to both crates
fn default_filter(level: &str) -> String {
    format!("antsweep={level},antsweep_core={level}")
}

/// Install the global subscriber writing to `{log_dir}/antsweep.log`.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_logging(log_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(LOG_FILE_NAME);

    let trimmed = trim_oversized_log(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    match trimmed {
        Ok(Some(dropped)) => tracing::info!(dropped, "Trimmed oversized log"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Could not trim log"),
    }
    tracing::info!(log_path = %log_path.display(), "antsweep logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_small_log_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "line one\nline two\n").unwrap();

        assert_eq!(trim_oversized_log(&path).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_oversized_log_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let line = "x".repeat(99) + "\n";
        let lines = (TRIM_THRESHOLD_BYTES / 100 + 10) as usize;
        fs::write(&path, line.repeat(lines)).unwrap();

        let dropped = trim_oversized_log(&path).unwrap().unwrap();

        let trimmed = fs::read_to_string(&path).unwrap();
        let kept: Vec<&str> = trimmed.lines().skip(1).collect();
        assert!(trimmed.as_bytes().starts_with(TRIM_MARKER));
        assert!(kept.iter().all(|l| l.len() == 99));
        assert!((kept.len() as u64) * 100 <= RETAINED_BYTES);
        assert_eq!(dropped, (lines - kept.len()) as u64 * 100);
    }

    #[test]
    fn test_missing_log_is_fine() {
        let dir = tempdir().unwrap();
        assert_eq!(trim_oversized_log(&dir.path().join("absent.log")).unwrap(), None);
    }

    #[test]
    fn test_default_filter_covers_both_crates() {
        assert_eq!(default_filter("debug"), "antsweep=debug,antsweep_core=debug");
    }
}
