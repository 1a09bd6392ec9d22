//! Text helpers for chat messages.
//!
//! - [`color`] - tag / color-code translation
//! - [`template`] - `%placeholder%` substitution
//! - [`distance`] - Levenshtein edit distance

pub mod color;
pub mod distance;
pub mod template;

pub use color::{
    ChatColor, SECTION_SIGN, colorize, colorize_all, convert_tag, decolorize, decolorize_all,
    strip_colors,
};
pub use distance::levenshtein_distance;
pub use template::{substitute, substitute_all};
