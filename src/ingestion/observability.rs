//! Reporting hooks for batch imports.
//!
//! The batch loader reports every dataset outcome through an
//! [`ImportObserver`] so a failed dataset can be logged without stopping the
//! run.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::DataError;
use crate::ingestion::SourceFormat;

/// Context about one dataset import attempt.
#[derive(Debug, Clone)]
pub struct ImportContext {
    /// Where the data came from (e.g. a file path).
    pub source: String,
    /// Format the dataset was parsed as.
    pub format: SourceFormat,
}

/// Minimal stats reported on a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Number of areas in the collection after the import.
    pub areas: usize,
}

/// Observer interface for per-dataset import outcomes.
pub trait ImportObserver: Send + Sync {
    /// Called when a dataset imports successfully.
    fn on_success(&self, _ctx: &ImportContext, _stats: ImportStats) {}

    /// Called when a dataset fails to import.
    fn on_failure(&self, _ctx: &ImportContext, _error: &DataError) {}
}

/// Logs import outcomes to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ImportObserver for StdErrObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        eprintln!(
            "[import][ok] format={:?} source={} areas={}",
            ctx.format, ctx.source, stats.areas
        );
    }

    fn on_failure(&self, ctx: &ImportContext, error: &DataError) {
        eprintln!(
            "[import][failed] format={:?} source={} err={}",
            ctx.format, ctx.source, error
        );
    }
}

/// Appends import outcomes to a local log file.
///
/// Writes are best-effort; failures to open or write the log file are ignored.
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl fmt::Debug for FileObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileObserver").field("path", &self.path).finish()
    }
}

impl ImportObserver for FileObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        self.append_line(&format!(
            "{} ok format={:?} source={} areas={}",
            unix_ts(),
            ctx.format,
            ctx.source,
            stats.areas
        ));
    }

    fn on_failure(&self, ctx: &ImportContext, error: &DataError) {
        self.append_line(&format!(
            "{} failed format={:?} source={} err={}",
            unix_ts(),
            ctx.format,
            ctx.source,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::{FileObserver, ImportContext, ImportObserver, ImportStats};
    use crate::error::DataError;
    use crate::ingestion::SourceFormat;

    #[test]
    fn file_observer_appends_one_line_per_event() {
        let path = std::env::temp_dir().join(format!(
            "area-stats-observer-{}-{}.log",
            std::process::id(),
            super::unix_ts()
        ));
        let observer = FileObserver::new(&path);
        let ctx = ImportContext {
            source: "popu1009.json".to_string(),
            format: SourceFormat::StatsJson,
        };

        observer.on_success(&ctx, ImportStats { areas: 22 });
        observer.on_failure(&ctx, &DataError::Malformed("bad row".to_string()));

        let log = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ok") && lines[0].contains("areas=22"));
        assert!(lines[1].contains("failed") && lines[1].contains("bad row"));
    }
}
