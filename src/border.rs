//! Depth-to-border-glyph resolution for section titles.
//!
//! reStructuredText marks a title by underlining it with a repeated
//! punctuation character; which character depends on how deeply the
//! section is nested. The priority order, outermost level first:
//!
//! ```text
//! # * = - ^ " ' : . / ; \ , ` [ { ( <
//! ```
//!
//! The first two levels are overlined as well as underlined. Depths past
//! the end of the table cannot be given a unique, non-colliding glyph and
//! fail with [`Error::DepthExceeded`](crate::Error::DepthExceeded).

use crate::error::{Error, Result};

/// Border characters ordered from the outermost section level inward.
const GLYPHS: [char; 18] = [
    '#', '*', '=', '-', '^', '"', '\'', ':', '.', '/', ';', '\\', ',', '`', '[', '{', '(', '<',
];

/// Levels below this value get an overline in addition to the underline.
const OVERLINED_LEVELS: i32 = 2;

/// The border treatment for one nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Character repeated to the title's width.
    pub glyph: char,
    /// Whether the glyph line also appears above the title.
    pub overline: bool,
}

/// Resolve the border for a nesting depth.
///
/// Pure: the same depth always resolves to the same border, regardless of
/// tree shape.
///
/// # Examples
///
/// ```
/// use rubric::border::resolve;
///
/// assert_eq!(resolve(0).unwrap().glyph, '#');
/// assert_eq!(resolve(2).unwrap().glyph, '=');
/// assert!(resolve(1).unwrap().overline);
/// assert!(!resolve(2).unwrap().overline);
/// assert!(resolve(18).is_err());
/// ```
pub fn resolve(level: i32) -> Result<Border> {
    if level < 0 || level as usize >= GLYPHS.len() {
        return Err(Error::DepthExceeded(level));
    }
    Ok(Border {
        glyph: GLYPHS[level as usize],
        overline: level < OVERLINED_LEVELS,
    })
}

/// Render a complete title block: optional overline, title, underline.
///
/// The border line repeats the glyph once per character of the title.
pub(crate) fn title_block(title: &str, level: i32) -> Result<String> {
    let border = resolve(level)?;
    let line = border.glyph.to_string().repeat(title.chars().count());
    if border.overline {
        Ok(format!("{}\n{}\n{}", line, title, line))
    } else {
        Ok(format!("{}\n{}", title, line))
    }
}
