// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{TimeIntervalExport, notify_export_success};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[TimeIntervalExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, rows.len());
    Ok(())
}

/// Export CSV, header row derived by serde.
pub(crate) fn export_csv(rows: &[TimeIntervalExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, rows.len());
    Ok(())
}
