use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cv::context::build_context;
use crate::models::cv::CvData;

/// Loads CV data from a JSON document on disk.
/// A missing file yields empty data so the service can still start and answer with the fallback message.
pub fn load_cv(path: impl AsRef<Path>) -> Result<CvData> {
    let path = path.as_ref();

    if !path.exists() {
        warn!("CV data file {} not found, starting with empty CV data", path.display());
        return Ok(CvData::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CV data file '{}'", path.display()))?;
    let data: CvData = serde_json::from_str(&raw)
        .with_context(|| format!("CV data file '{}' is not valid CV JSON", path.display()))?;

    info!(
        "Loaded CV data from {} ({} context chars)",
        path.display(),
        build_context(&data).len()
    );
    Ok(data)
}
