//! Catalog categories.
//!
//! A [`Category`] picks the API path segment, the list icon and the detail
//! layout. The set is closed: SWAPI exposes more resources, but only these three
//! have a detail layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported catalog item types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    People,
    Planets,
    Starships,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Self; 3] = [Self::People, Self::Planets, Self::Starships];

    /// API path segment, e.g. `people` in `/api/people/?page=1`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
            Self::Starships => "starships",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Planets => "Planets",
            Self::Starships => "Starships",
        }
    }

    /// Icon asset filename for this category.
    #[must_use]
    pub fn icon_src(self) -> &'static str {
        icon_src(self.path_segment())
    }

    /// Single-cell glyph drawn in place of the icon in the terminal.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::People => '☺',
            Self::Planets => '◍',
            Self::Starships => '➤',
        }
    }

    /// The next category in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::People => Self::Planets,
            Self::Planets => Self::Starships,
            Self::Starships => Self::People,
        }
    }
}

/// Maps a path segment to its icon filename.
///
/// Unknown segments have no icon and yield an empty source.
///
/// ```
/// use holocron::domain::category::icon_src;
///
/// assert_eq!(icon_src("planets"), "planet.png");
/// assert_eq!(icon_src("vehicles"), "");
/// ```
#[must_use]
pub fn icon_src(segment: &str) -> &'static str {
    match segment {
        "people" => "people.png",
        "planets" => "planet.png",
        "starships" => "starship.png",
        _ => "",
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Category {
    type Err = crate::domain::HolocronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.path_segment().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Self::Err::Config(format!("unknown category '{s}'")))
    }
}
