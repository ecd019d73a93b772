//! Catalog ↔ media directory consistency check.

use portfolio_media_common::{CatalogRecord, ProjectLayout};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingAsset {
    pub id: u64,
    pub title: String,
    pub public_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntegrityReport {
    /// Files under the media roots that no record points to
    pub orphan_files: Vec<PathBuf>,
    /// Records whose asset file is not on disk
    pub missing_files: Vec<MissingAsset>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.orphan_files.is_empty() && self.missing_files.is_empty()
    }
}

/// Compare every `image`/`video` pointer against the files under the
/// image root (one level of category directories) and the video root.
/// URLs outside the managed roots are not checked.
pub fn check_catalog(layout: &ProjectLayout, records: &[CatalogRecord]) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let mut referenced = HashSet::new();

    for record in records {
        for public_path in [record.image.as_deref(), record.video.as_deref()].into_iter().flatten() {
            let Some(path) = layout.resolve_public_path(public_path) else {
                continue;
            };
            if !path.is_file() {
                report.missing_files.push(MissingAsset {
                    id: record.id,
                    title: record.title.clone(),
                    public_path: public_path.to_string(),
                });
            }
            referenced.insert(path);
        }
    }

    let mut on_disk = media_files(&layout.image_root, 2);
    on_disk.extend(media_files(&layout.video_root, 1));
    report.orphan_files = on_disk
        .into_iter()
        .filter(|path| !referenced.contains(path))
        .collect();
    report.orphan_files.sort();

    report
}

fn media_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.into_path())
        .collect()
}
