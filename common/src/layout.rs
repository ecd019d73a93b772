//! Project directory layout and the public URL convention.
//!
//! All paths hang off the website project root:
//!
//! ```text
//! <root>/src/lib/data/portfolio-data.json
//! <root>/static/images/portfolio/<category>/
//! <root>/static/videos/portfolio/
//! ```

use crate::category::Category;
use crate::error::{Error, Result};
use crate::types::MediaKind;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: [&str; 4] = ["src", "lib", "data", "portfolio-data.json"];
const IMAGE_ROOT: [&str; 3] = ["static", "images", "portfolio"];
const VIDEO_ROOT: [&str; 3] = ["static", "videos", "portfolio"];

pub const IMAGE_URL_PREFIX: &str = "/images/portfolio";
pub const VIDEO_URL_PREFIX: &str = "/videos/portfolio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub data_path: PathBuf,
    pub image_root: PathBuf,
    pub video_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let join = |parts: &[&str]| parts.iter().fold(root.clone(), |acc, p| acc.join(p));
        Self {
            data_path: join(&DATA_FILE),
            image_root: join(&IMAGE_ROOT),
            video_root: join(&VIDEO_ROOT),
            root,
        }
    }

    /// Directory a new asset of `kind` lands in.
    pub fn media_dir(&self, kind: MediaKind, category: &str) -> PathBuf {
        match kind {
            MediaKind::Video => self.video_root.clone(),
            MediaKind::Image => self.image_root.join(category),
        }
    }

    /// Web-root-relative URL for a file placed by `media_dir`.
    pub fn public_path(kind: MediaKind, category: &str, file_name: &str) -> String {
        match kind {
            MediaKind::Video => format!("{VIDEO_URL_PREFIX}/{file_name}"),
            MediaKind::Image => format!("{IMAGE_URL_PREFIX}/{category}/{file_name}"),
        }
    }

    /// Map a public URL back to a file under `static/`. `None` for URLs
    /// outside the managed roots.
    pub fn resolve_public_path(&self, public_path: &str) -> Option<PathBuf> {
        let (base, rest) = if let Some(rest) = public_path.strip_prefix(IMAGE_URL_PREFIX) {
            (&self.image_root, rest)
        } else if let Some(rest) = public_path.strip_prefix(VIDEO_URL_PREFIX) {
            (&self.video_root, rest)
        } else {
            return None;
        };
        let rest = rest.strip_prefix('/')?;
        if rest.is_empty() {
            return None;
        }
        Some(rest.split('/').fold(base.clone(), |acc, part| acc.join(part)))
    }

    /// Create the media roots, one image directory per category, and an
    /// empty catalog if none exists yet.
    pub fn ensure_dirs(&self) -> Result<()> {
        create_dir(&self.image_root)?;
        create_dir(&self.video_root)?;
        for category in Category::ALL {
            create_dir(&self.image_root.join(category.key()))?;
        }
        crate::catalog::CatalogStore::new(&self.data_path).ensure_exists()
    }
}

pub(crate) fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths() {
        let layout = ProjectLayout::new("/site");
        assert_eq!(layout.data_path, Path::new("/site/src/lib/data/portfolio-data.json"));
        assert_eq!(layout.image_root, Path::new("/site/static/images/portfolio"));
        assert_eq!(layout.video_root, Path::new("/site/static/videos/portfolio"));
        assert_eq!(
            layout.media_dir(MediaKind::Image, "drone"),
            Path::new("/site/static/images/portfolio/drone")
        );
        assert_eq!(layout.media_dir(MediaKind::Video, "drone"), layout.video_root);
    }

    #[test]
    fn test_public_path() {
        assert_eq!(
            ProjectLayout::public_path(MediaKind::Image, "interior", "warm.jpg"),
            "/images/portfolio/interior/warm.jpg"
        );
        assert_eq!(
            ProjectLayout::public_path(MediaKind::Video, "interior", "tour.mp4"),
            "/videos/portfolio/tour.mp4"
        );
    }

    #[test]
    fn test_resolve_public_path() {
        let layout = ProjectLayout::new("/site");
        assert_eq!(
            layout.resolve_public_path("/images/portfolio/interior/warm.jpg"),
            Some(PathBuf::from("/site/static/images/portfolio/interior/warm.jpg"))
        );
        assert_eq!(
            layout.resolve_public_path("/videos/portfolio/tour.mp4"),
            Some(PathBuf::from("/site/static/videos/portfolio/tour.mp4"))
        );
        assert_eq!(layout.resolve_public_path("https://cdn.example.com/a.jpg"), None);
        assert_eq!(layout.resolve_public_path("/images/portfolio/"), None);
    }

    #[test]
    fn test_ensure_dirs_creates_everything() {
        let dir = tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        layout.ensure_dirs().unwrap();

        assert!(layout.video_root.is_dir());
        for category in Category::ALL {
            assert!(layout.image_root.join(category.key()).is_dir());
        }
        assert_eq!(std::fs::read_to_string(&layout.data_path).unwrap(), "[]");

        // second run leaves an existing catalog alone
        std::fs::write(&layout.data_path, "[{\"id\": 1}]").unwrap();
        layout.ensure_dirs().unwrap();
        assert_eq!(std::fs::read_to_string(&layout.data_path).unwrap(), "[{\"id\": 1}]");
    }
}
