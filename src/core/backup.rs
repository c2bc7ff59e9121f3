use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the session log to `dest_file`, or with `compress` write it into
    /// `dest_file` with a `.zip` extension. Returns the path written.
    pub fn backup(times_file: &Path, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check the session log exists
        if !times_file.exists() {
            return Err(AppError::Backup(format!(
                "session log not found: {}",
                times_file.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never overwrite silently; the copy or the archive is the only
        // file written, `dest` itself is left alone when compressing
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if same_file(&target, times_file) {
            return Err(AppError::Backup(format!(
                "'{}' is the session log itself",
                target.display()
            )));
        }
        if target.exists() && !force {
            return Err(AppError::Backup(format!(
                "'{}' already exists (use --force to overwrite)",
                target.display()
            )));
        }

        // 4️⃣ Copy or compress the log
        if compress {
            compress_backup(times_file, &target)?;
            success(format!("Compressed: {}", target.display()));
        } else {
            fs::copy(times_file, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        Ok(target)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write `source` as the single Deflated entry of a new archive at `zip_path`.
/// The entry is named after the session log file.
fn compress_backup(source: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "work_times.json".to_string());

    let mut f = fs::File::open(source)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    tracing::debug!(source = %source.display(), archive = %zip_path.display(), "compressed backup");
    Ok(())
}
