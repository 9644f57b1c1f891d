//! Rotating file writer with size-based rotation and backup retention.
//!
//! Keeps the trace file from growing without bound: once the file passes the
//! size limit it is renamed with a UTC timestamp suffix and a fresh file is
//! started. Only the newest backups are retained.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Sortable timestamp appended to rotated files.
const BACKUP_SUFFIX_FORMAT: &str = "%Y%m%dT%H%M%S%.9f";

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write. Backups are named
/// `<file name>.<timestamp>`, e.g. `zselect-otlp.json.20240101T120000.000000000`.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with custom rotation limits.
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file is over the size limit.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, writing or flushing fails, or if the lock
    /// was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let Some(file) = writer.as_mut() else {
            return Err(io::Error::other("No file available"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() <= self.max_bytes {
            return Ok(());
        }

        *writer = None;
        let backup_path = self.backup_prefix().map(|prefix| {
            self.file_path
                .with_file_name(format!("{prefix}{}", Utc::now().format(BACKUP_SUFFIX_FORMAT)))
        })?;
        fs::rename(&self.file_path, backup_path)?;

        self.cleanup_old_backups()
    }

    /// `<file name>.`, shared by every backup of this file.
    fn backup_prefix(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::other("Invalid file name"))
    }

    /// Deletes all but the newest `max_backups` backups.
    ///
    /// Individual deletion failures are ignored so one stuck file does not
    /// block the rest.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::other("No parent directory"))?;
        let prefix = self.backup_prefix()?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // timestamp suffixes sort chronologically
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("trace.json."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn appends_lines_to_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
        assert!(backups_in(dir.path()).is_empty());
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 10, 2);

        for i in 0..5 {
            writer.write_line(&format!("line number {i} padding")).unwrap();
        }

        let backups = backups_in(dir.path());
        assert_eq!(backups.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join(&backups[1])).unwrap(),
            "line number 3 padding\n"
        );
        assert_eq!(fs::read_to_string(path).unwrap(), "line number 4 padding\n");
    }

    #[test]
    fn unrelated_files_survive_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let other = dir.path().join("other.json.1");
        fs::write(&other, "keep").unwrap();
        let writer = FileWriter::with_limits(dir.path().join("trace.json"), 1, 0);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert!(other.exists());
        assert!(backups_in(dir.path()).is_empty());
    }
}
