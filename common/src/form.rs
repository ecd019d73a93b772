//! Form field values and how they turn into a catalog record.

use crate::category::Category;
use crate::error::{Error, Result};
use crate::types::CatalogRecord;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const NO_FILE_LABEL: &str = "No file selected";

/// Today's local date as YYYY-MM-DD.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Split comma-separated input, trimming each tag and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ok if `date` is a real YYYY-MM-DD calendar date.
pub fn check_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| Error::DateFormat(date.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaForm {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub client: String,
    pub results: String,
    /// Free text; blank means today at submit time.
    pub date: String,
    /// Comma-separated
    pub tags: String,
    selected_file: Option<PathBuf>,
}

impl Default for MediaForm {
    fn default() -> Self {
        Self {
            category: Category::default(),
            title: String::new(),
            description: String::new(),
            client: String::new(),
            results: String::new(),
            date: today(),
            tags: String::new(),
            selected_file: None,
        }
    }
}

impl MediaForm {
    /// Remember `path` as the file to add, made absolute against the
    /// current directory.
    pub fn choose_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        self.selected_file = Some(absolute);
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Name shown next to the "Choose file" button.
    pub fn file_label(&self) -> String {
        self.selected_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| NO_FILE_LABEL.to_string())
    }

    /// Record for the current field values, without id or asset pointer.
    /// Blank title falls back to the file stem, blank date to today.
    pub fn build_record(&self, source: &Path) -> CatalogRecord {
        let title = match self.title.trim() {
            "" => source
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            title => title.to_string(),
        };
        let date = match self.date.trim() {
            "" => today(),
            date => date.to_string(),
        };

        CatalogRecord {
            title,
            category: self.category.key().to_string(),
            description: self.description.trim().to_string(),
            tags: parse_tags(&self.tags),
            date,
            client: self.client.trim().to_string(),
            results: self.results.trim().to_string(),
            ..Default::default()
        }
    }
}
