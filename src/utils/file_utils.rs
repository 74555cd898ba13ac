use crate::errors::ReportError;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub fn save_json<T: Serialize>(output_path: &Path, value: &T) -> Result<(), ReportError> {
    let file = File::create(output_path).map_err(|source| ReportError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}

pub fn save_text(output_path: &Path, content: &str) -> Result<(), ReportError> {
    let mut file = File::create(output_path).map_err(|source| ReportError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|source| ReportError::Io {
            path: output_path.to_path_buf(),
            source,
        })
}

pub fn ensure_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn sanitize_filename(url: &str) -> String {
    url.replace(|c: char| !c.is_alphanumeric() && c != '.', &'_'.to_string())
}
