//! Title → filesystem/URL safe token.

use regex::Regex;

/// Returned when the input has nothing alphanumeric to keep.
pub const FALLBACK_SLUG: &str = "media";

/// Lowercase `text` and collapse every run of non `[a-z0-9]` characters
/// into a single hyphen, trimming hyphens at both ends.
///
/// ```
/// use portfolio_media_common::slugify;
/// assert_eq!(slugify("Downtown Loft -- 3D Tour!"), "downtown-loft-3d-tour");
/// assert_eq!(slugify("???"), "media");
/// ```
pub fn slugify(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref SEPARATOR_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let lowered = text.to_lowercase();
    let dashed = SEPARATOR_RE.replace_all(&lowered, "-");
    let trimmed = dashed.trim_matches('-');

    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}
