use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `bytes` as `file_name` inside `output_dir`, creating the directory
/// (and any missing parents) first. An existing file is overwritten.
pub fn write_asset(output_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .context("Failed to create output directory")?;

    let output_path = output_dir.join(file_name);
    let mut file = fs::File::create(&output_path)
        .context("Failed to create output file")?;

    file.write_all(bytes)
        .context("Failed to write downloaded data")?;

    log::info!("Wrote {} bytes to {:?}", bytes.len(), output_path);
    Ok(output_path)
}
