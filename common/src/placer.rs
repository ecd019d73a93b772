//! Asset placer: copy a chosen file into the managed media directories
//! under a slugged, collision-free name.

use crate::error::{Error, Result};
use crate::layout::{create_dir, ProjectLayout};
use crate::slug::slugify;
use crate::types::MediaKind;
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Where an asset ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedAsset {
    pub kind: MediaKind,
    pub dest_path: PathBuf,
    pub public_path: String,
}

impl PlacedAsset {
    pub fn file_name(&self) -> String {
        self.dest_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

pub struct AssetPlacer<'a> {
    layout: &'a ProjectLayout,
}

impl<'a> AssetPlacer<'a> {
    pub fn new(layout: &'a ProjectLayout) -> Self {
        Self { layout }
    }

    /// Copy `source` into the image directory for `category` (or the video
    /// directory) as `slug(title).<ext>`, never overwriting an existing file.
    /// The source is left untouched.
    pub fn place(&self, source: &Path, title: &str, category: &str) -> Result<PlacedAsset> {
        if !source.is_file() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }

        let kind = MediaKind::from_path(source);
        let dest_dir = self.layout.media_dir(kind, category);
        create_dir(&dest_dir)?;

        let ext = lowercase_extension(source);
        let dest_path = resolve_destination(&dest_dir, &slugify(title), ext.as_deref());

        copy_with_metadata(source, &dest_path)?;

        let file_name = dest_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let public_path = ProjectLayout::public_path(kind, category, &file_name);

        tracing::info!(
            kind = kind.as_str(),
            source = %source.display(),
            dest = %dest_path.display(),
            "asset placed"
        );

        Ok(PlacedAsset {
            kind,
            dest_path,
            public_path,
        })
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

/// First of `stem.ext`, `stem-1.ext`, `stem-2.ext`, … that does not exist in `dir`.
pub fn resolve_destination(dir: &Path, stem: &str, ext: Option<&str>) -> PathBuf {
    let file_name = |suffix: Option<u32>| {
        let base = match suffix {
            Some(n) => format!("{stem}-{n}"),
            None => stem.to_string(),
        };
        match ext {
            Some(ext) if !ext.is_empty() => format!("{base}.{ext}"),
            _ => base,
        }
    };

    let candidate = dir.join(file_name(None));
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1;
    loop {
        let candidate = dir.join(file_name(Some(counter)));
        if !candidate.exists() {
            tracing::debug!(file = %candidate.display(), "name taken, using numbered suffix");
            return candidate;
        }
        counter += 1;
    }
}

/// Copy bytes and permissions, then carry over access/modification times.
/// On any failure `dest` is removed again, partial copies included.
fn copy_with_metadata(source: &Path, dest: &Path) -> Result<()> {
    let copied = fs::copy(source, dest)
        .map_err(|e| Error::io(dest, e))
        .and_then(|_| copy_times(source, dest));

    if copied.is_err() && dest.exists() {
        if let Err(err) = fs::remove_file(dest) {
            tracing::warn!(file = %dest.display(), error = %err, "could not remove failed copy");
        }
    }
    copied
}

/// Set by path, so a read-only copy still gets its times.
fn copy_times(source: &Path, dest: &Path) -> Result<()> {
    let meta = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    let accessed = FileTime::from_last_access_time(&meta);
    let modified = FileTime::from_last_modification_time(&meta);
    filetime::set_file_times(dest, accessed, modified).map_err(|e| Error::io(dest, e))
}
