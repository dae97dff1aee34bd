//! Baked theme stylesheets.
//!
//! Exactly two palettes exist; each maps to one immutable CSS constant scoped
//! under the `.anteprima-preview` root class. The light and dark variants
//! share an identical selector set and differ only in color values.

use serde::{Deserialize, Serialize};

const LIGHT_CSS: &str = include_str!("../assets/theme-light.css");
const DARK_CSS: &str = include_str!("../assets/theme-dark.css");

/// Identifier for one of the two fixed preview palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Complete stylesheet text for this theme. Pure lookup.
    pub fn css(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_CSS,
            Theme::Dark => DARK_CSS,
        }
    }
}
