use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Name of the database entry inside a compressed backup.
const ARCHIVE_ENTRY: &str = "rworker.sqlite";

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing it with a zip.
    /// Returns the path actually written.
    pub fn backup(cfg: &Config, dest_file: &Path, compress: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest_file.parent() {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            compress_backup(src, &dest_file.with_extension("zip"))?
        } else {
            fs::copy(src, dest_file)?;
            dest_file.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        let conn = Connection::open(src)?;
        ttlog(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }

    /// Replace the database with a backup, plain or zipped. The restored
    /// file is migrated to the current schema.
    pub fn restore(cfg: &Config, backup_file: &Path) -> AppResult<()> {
        if !backup_file.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Backup not found: {}", backup_file.display()),
            )
            .into());
        }

        let dest = Path::new(&cfg.database);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Staged next to the target, swapped in only once validated.
        let staging = dest.with_extension("restore");
        if let Err(e) = stage_backup(backup_file, &staging) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        if dest.exists() {
            warning(format!("Replacing {}", dest.display()));
        }
        fs::rename(&staging, dest)?;

        let conn = Connection::open(dest)?;
        run_pending_migrations(&conn)?;
        ttlog(
            &conn,
            "restore",
            &backup_file.to_string_lossy(),
            "Database restored from backup",
        )?;

        success(format!("Database restored from {}", backup_file.display()));
        Ok(())
    }
}

/// Compress the database into a single-entry zip
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file(ARCHIVE_ENTRY, options)?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("📦 Compressed: {}", zip_path.display()));
    Ok(zip_path.to_path_buf())
}

fn is_zip(path: &Path) -> AppResult<bool> {
    use std::io::Read;

    let mut magic = [0u8; 4];
    let mut f = fs::File::open(path)?;
    match f.read_exact(&mut magic) {
        Ok(()) => Ok(magic == *b"PK\x03\x04"),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Extract the database entry, or the only entry of the archive.
fn extract_backup(zip_path: &Path, dest: &Path) -> AppResult<()> {
    let file = fs::File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    let index = match archive.index_for_name(ARCHIVE_ENTRY) {
        Some(i) => i,
        None if archive.len() == 1 => 0,
        None => {
            return Err(AppError::Other(format!(
                "Archive {} does not contain {}",
                zip_path.display(),
                ARCHIVE_ENTRY
            )));
        }
    };

    let mut entry = archive.by_index(index)?;
    let mut out = fs::File::create(dest)?;
    io::copy(&mut entry, &mut out)?;
    Ok(())
}

/// Copy or extract the backup to `staging` and validate the result.
fn stage_backup(backup_file: &Path, staging: &Path) -> AppResult<()> {
    if is_zip(backup_file)? {
        info(format!("Extracting {}", backup_file.display()));
        extract_backup(backup_file, staging)?;
    } else {
        fs::copy(backup_file, staging)?;
    }
    validate_database(staging)
}

/// Tables a restorable database must already hold.
const REQUIRED_TABLES: [&str; 2] = ["projects", "time_intervals"];

fn validate_database(path: &Path) -> AppResult<()> {
    let conn = Connection::open(path)?;
    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity != "ok" {
        return Err(AppError::Other(format!(
            "Backup failed integrity check: {integrity}"
        )));
    }

    for table in REQUIRED_TABLES {
        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;
        if found == 0 {
            return Err(AppError::Other(format!(
                "Backup is not an rworker database (missing table '{table}')"
            )));
        }
    }
    Ok(())
}
