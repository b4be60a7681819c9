/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Turns counter values into numeral text in the predefined CSS counter
//! styles, along with the suffix a list marker in that style ends with.
//!
//! Formatting never fails: a value a system cannot represent is rendered in
//! decimal instead, and the suffix follows the system actually used.

mod cjk;
mod glyphs;
mod list_style_type;
mod positional;
mod regional;

use log::trace;

pub use crate::list_style_type::{ListStyleType, MAX_SYMBOLIC_LENGTH};
use crate::list_style_type::Algorithm;

/// Render `value` in `style`, returning the numeral text and the marker
/// suffix.
pub fn format(style: ListStyleType, value: i32) -> (String, char) {
    let effective = style.effective_for(value);
    if effective != style {
        trace!("{style} cannot represent {value}, using decimal");
    }
    let definition = effective.definition();
    let text = match definition.algorithm {
        Algorithm::Bullet(glyph) => glyph.to_owned(),
        Algorithm::Numeric(digits) => positional::numeric(value, digits),
        Algorithm::Alphabetic(letters) => positional::alphabetic(value, letters),
        Algorithm::Symbolic(symbols) => positional::symbolic(value, symbols),
        Algorithm::DecimalLeadingZero => positional::decimal_leading_zero(value),
        Algorithm::Roman { upper } => positional::roman(value, upper),
        Algorithm::Ideographic(table) => cjk::ideographic(value, table),
        Algorithm::Hebrew => regional::hebrew(value),
        Algorithm::Armenian { upper } => regional::armenian(value, upper),
        Algorithm::Georgian => regional::georgian(value),
    };
    (text, definition.suffix)
}

/// The numeral text alone, as produced by CSS `counter()`.
pub fn counter_text(style: ListStyleType, value: i32) -> String {
    format(style, value).0
}

/// The complete text of a list marker: the numeral followed by its suffix.
/// Bullets are followed by a space, and `none` produces nothing.
pub fn marker_text(style: ListStyleType, value: i32) -> String {
    if style == ListStyleType::None {
        return String::new();
    }
    let (mut text, suffix) = format(style, value);
    text.push(suffix);
    text
}
