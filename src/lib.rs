pub mod download;
pub mod store;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use download::BROWSER_USER_AGENT;

/// Downloads `url` and saves the body as `file_name` inside `output_dir`,
/// returning the path of the written file.
pub fn fetch_logo(
    url: &str,
    user_agent: &str,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let bytes = download::fetch_bytes(url, user_agent)?;
    store::write_asset(output_dir, file_name, &bytes)
}
