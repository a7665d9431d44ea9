use crate::domain::model::SeedImage;
use crate::utils::error::{AssignerError, Result};
use std::path::Path;

/// Derives a seed from image contents.
///
/// Always returns `0`: no hash over the image bytes is defined yet, so every
/// image yields the same seed.
// TODO: replace with a fixed-width content hash once the hash function is agreed on.
pub fn seed_from_image_bytes(_bytes: &[u8]) -> i64 {
    0
}

/// Reads a local image so it can seed the shuffle and be embedded in the report.
pub async fn read_seed_image(path: &Path) -> Result<SeedImage> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| AssignerError::ImageReadError { source })?;

    Ok(SeedImage {
        path: path.to_path_buf(),
        bytes,
        temporary: false,
    })
}

/// An explicit seed wins; otherwise the seed comes from the image.
pub fn resolve_seed(explicit: Option<i64>, image: &SeedImage) -> i64 {
    match explicit {
        Some(seed) => seed,
        None => seed_from_image_bytes(&image.bytes),
    }
}
