//! Image input loading

use plantid_common::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read an image file for identification
///
/// An empty file is rejected: the recognition service cannot classify it and
/// every method would fail on every attempt.
pub async fn load_image(path: &Path) -> Result<Vec<u8>> {
    let image = tokio::fs::read(path).await?;

    if image.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Image file is empty: {}",
            path.display()
        )));
    }

    debug!(path = %path.display(), bytes = image.len(), "Image loaded");
    Ok(image)
}
