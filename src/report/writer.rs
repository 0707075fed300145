//! Report file writing.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{ReportEntry, ReportId};
use crate::error::{OsfLinterError, Result};

/// File name of the report identified by `id`.
pub fn report_file_name(id: &ReportId) -> String {
    format!("ESLintClient.{}.json", id)
}

/// Write `entries` as a compact JSON array to `<dir>/ESLintClient.<id>.json`.
///
/// `dir` is created when missing. An existing report file is never
/// overwritten.
pub fn write_report(dir: &Path, id: &ReportId, entries: &[ReportEntry]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(report_file_name(id));
    write_new_file(&path, |writer| {
        serde_json::to_writer(writer, entries).map_err(std::io::Error::from)
    })?;

    tracing::debug!("Wrote {} report entries to {}", entries.len(), path.display());
    Ok(path)
}

/// Create `path` exclusively and fill it with `write`.
///
/// A file that fails half way is removed rather than left truncated.
fn write_new_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => OsfLinterError::ReportExists {
                path: path.to_path_buf(),
            },
            _ => OsfLinterError::Io(e),
        })?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| writer.flush());
    if let Err(e) = written {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!("Cannot remove partial report {}: {}", path.display(), remove_err);
        }
        return Err(OsfLinterError::Io(e));
    }
    Ok(())
}
