/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Numbering systems driven entirely by a glyph table.

/// <https://drafts.csswg.org/css-counter-styles/#numeric-system>
pub(crate) fn numeric(value: i32, digits: &[char]) -> String {
    let base = digits.len() as u32;
    let mut magnitude = value.unsigned_abs();
    let mut glyphs = Vec::new();
    loop {
        glyphs.push(digits[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        glyphs.push('-');
    }
    glyphs.iter().rev().collect()
}

/// Bijective base-N: there is no zero glyph, so the units position runs
/// through every letter before carrying. Callers guarantee `value >= 1`.
///
/// <https://drafts.csswg.org/css-counter-styles/#alphabetic-system>
pub(crate) fn alphabetic(value: i32, letters: &[char]) -> String {
    let base = letters.len() as u32;
    let mut remaining = value.max(1) as u32;
    let mut glyphs = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        glyphs.push(letters[(remaining % base) as usize]);
        remaining /= base;
    }
    glyphs.iter().rev().collect()
}

/// <https://drafts.csswg.org/css-counter-styles/#symbolic-system>
pub(crate) fn symbolic(value: i32, symbols: &[char]) -> String {
    let ordinal = value.max(1) as usize - 1;
    let symbol = symbols[ordinal % symbols.len()];
    std::iter::repeat_n(symbol, ordinal / symbols.len() + 1).collect()
}

pub(crate) fn decimal_leading_zero(value: i32) -> String {
    match value {
        0..=9 => format!("0{value}"),
        -9..=-1 => format!("-0{}", -value),
        _ => value.to_string(),
    }
}

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Subtractive Roman notation. Callers keep `value` within 1..=3999.
pub(crate) fn roman(value: i32, upper: bool) -> String {
    let mut remaining = value.max(0) as u32;
    let mut text = String::new();
    for &(weight, numeral) in ROMAN_NUMERALS.iter() {
        while remaining >= weight {
            text.push_str(numeral);
            remaining -= weight;
        }
    }
    if upper { text } else { text.to_ascii_lowercase() }
}
