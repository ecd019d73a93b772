use anyhow::{Context, Result};
use image::ImageReader;
use portfolio_media_common::MediaKind;
use std::path::Path;

pub const PREVIEW_WIDTH: u32 = 240;
pub const PREVIEW_HEIGHT: u32 = 180;

/// RGBA pixels of a downscaled preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewData {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

/// Decode `path` into a thumbnail. Videos have no preview.
pub fn load_preview(path: &Path) -> Result<Option<PreviewData>> {
    if MediaKind::from_path(path) == MediaKind::Video {
        return Ok(None);
    }

    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("read {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    let thumb = image.thumbnail(PREVIEW_WIDTH, PREVIEW_HEIGHT);
    Ok(Some(PreviewData {
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    }))
}
