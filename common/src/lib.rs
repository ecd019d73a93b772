//! Portfolio media common library
//!
//! Catalog store, asset placement and the form controller shared by the
//! `portfolio-media` CLI and the desktop app.

pub mod catalog;
pub mod category;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod layout;
pub mod placer;
pub mod slug;
pub mod types;

pub use catalog::{listing, next_id, CatalogStore};
pub use category::Category;
pub use config::Config;
pub use controller::{AddOutcome, FormController, FormPhase};
pub use error::{Error, Result};
pub use form::{parse_tags, today, MediaForm};
pub use layout::ProjectLayout;
pub use placer::{AssetPlacer, PlacedAsset};
pub use slug::slugify;
pub use types::{CatalogRecord, MediaKind, MEDIA_FILTER_EXTENSIONS, VIDEO_EXTENSIONS};
