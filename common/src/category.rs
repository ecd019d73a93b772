//! Fixed portfolio categories.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    ThreeDTours,
    Interior,
    Exterior,
    Drone,
    VirtualStaging,
    Floorplans,
    Portraits,
}

impl Category {
    /// Display order; the first entry is the form default.
    pub const ALL: [Category; 7] = [
        Category::ThreeDTours,
        Category::Interior,
        Category::Exterior,
        Category::Drone,
        Category::VirtualStaging,
        Category::Floorplans,
        Category::Portraits,
    ];

    /// Key stored in the catalog and used as the image subdirectory name.
    pub fn key(self) -> &'static str {
        match self {
            Category::ThreeDTours => "3d-tours",
            Category::Interior => "interior",
            Category::Exterior => "exterior",
            Category::Drone => "drone",
            Category::VirtualStaging => "virtual-staging",
            Category::Floorplans => "floorplans",
            Category::Portraits => "portraits",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ThreeDTours => "3D Tours",
            Category::Interior => "Interior Photography",
            Category::Exterior => "Exterior Photography",
            Category::Drone => "Drone & Aerial",
            Category::VirtualStaging => "Virtual Staging",
            Category::Floorplans => "Floorplans (Cubicasa)",
            Category::Portraits => "Portraits & Headshots",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Category::from_key(&key).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
