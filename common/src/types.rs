//! Catalog record types
//!
//! One `CatalogRecord` per portfolio entry in `portfolio-data.json`.
//! The website renderer reads the same file, so field names and the
//! null-for-absent convention on `image`/`video` are part of its contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Extensions (lowercase, no dot) treated as video. Everything else is an image.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "avi", "mkv", "webm"];

/// Extensions offered by the file chooser's "Media" filter.
pub const MEDIA_FILTER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "gif", "mp4", "mov", "m4v", "avi", "mkv", "webm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_extension(ext: &str) -> MediaKind {
        let ext = ext.trim_start_matches('.').to_lowercase();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn from_path(path: &Path) -> MediaKind {
        path.extension()
            .map(|ext| MediaKind::from_extension(&ext.to_string_lossy()))
            .unwrap_or(MediaKind::Image)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A portfolio entry as persisted in the catalog.
///
/// Fields are read leniently: a hand-edited value of the wrong type (a null
/// client, a string id) degrades to a default instead of failing the whole
/// catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: u64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    /// Category key. Kept as a string so hand-edited catalogs with
    /// unlisted keys still load.
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    /// `/images/portfolio/<category>/<file>`, null for videos
    #[serde(default, deserialize_with = "lenient::pointer")]
    pub image: Option<String>,

    /// `/videos/portfolio/<file>`, null for images
    #[serde(default, deserialize_with = "lenient::pointer")]
    pub video: Option<String>,

    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,

    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub client: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub results: String,

    /// Fields this tool doesn't know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogRecord {
    /// Which asset pointer this record carries. A record with a video path
    /// is a video even if a poster image is also set by hand.
    pub fn kind(&self) -> MediaKind {
        if self.video.is_some() {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// The public URL of the asset, whichever pointer is set.
    pub fn asset_path(&self) -> Option<&str> {
        match self.kind() {
            MediaKind::Video => self.video.as_deref(),
            MediaKind::Image => self.image.as_deref(),
        }
    }

    /// Point the record at `public_path`, clearing the other pointer.
    pub fn set_asset(&mut self, kind: MediaKind, public_path: String) {
        match kind {
            MediaKind::Image => {
                self.image = Some(public_path);
                self.video = None;
            }
            MediaKind::Video => {
                self.video = Some(public_path);
                self.image = None;
            }
        }
    }

    /// `#<id> [<category>] <title>` as shown in the record list.
    pub fn list_line(&self) -> String {
        format!("#{} [{}] {}", self.id, self.category, self.title)
    }
}

/// Field readers that never reject a well-formed JSON value.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Integers, floats and numeric strings; anything else (negative values
    /// included) reads as 0.
    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Ok(id_from_value(&Value::deserialize(deserializer)?))
    }

    pub(super) fn id_from_value(value: &Value) -> u64 {
        let id = match value {
            Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole))
            }
            _ => None,
        };
        id.unwrap_or(0)
    }

    fn whole(f: f64) -> Option<u64> {
        (f.is_finite() && f >= 0.0).then(|| f.trunc() as u64)
    }

    /// Null reads as empty; numbers and booleans keep their JSON text.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(text_from_value(Value::deserialize(deserializer)?))
    }

    fn text_from_value(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    /// Only a string is a path; any other value means "no asset".
    pub fn pointer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Null reads as no tags, a lone string as a single tag.
    pub fn tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(text_from_value)
                .collect(),
            Value::String(s) if !s.is_empty() => vec![s],
            _ => Vec::new(),
        })
    }
}
