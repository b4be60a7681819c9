/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Additive alphabets with their own closed-form rules: Hebrew, Armenian and
//! Georgian. Every function here expects a value within its system's range.

fn glyph(code_point: u32) -> char {
    char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER)
}

const HEBREW_TAV: char = '\u{05EA}';
const HEBREW_TENS: [char; 9] = [
    '\u{05D9}', '\u{05DB}', '\u{05DC}', '\u{05DE}', '\u{05E0}', '\u{05E1}', '\u{05E2}', '\u{05E4}',
    '\u{05E6}',
];

fn push_hebrew_under_1000(number: u32, text: &mut String) {
    let mut number = number;
    // Tav (400) repeats as often as needed.
    for _ in 0..number / 400 {
        text.push(HEBREW_TAV);
    }
    number %= 400;
    if number >= 100 {
        text.push(glyph(0x05E7 + number / 100 - 1));
        number %= 100;
    }
    // 15 and 16 would spell a divine name, so they are written 9+6 and 9+7.
    if number == 15 || number == 16 {
        text.push('\u{05D8}');
        text.push(glyph(0x05D0 + number - 10));
        return;
    }
    if number >= 10 {
        text.push(HEBREW_TENS[(number / 10 - 1) as usize]);
        number %= 10;
    }
    if number > 0 {
        text.push(glyph(0x05D0 + number - 1));
    }
}

/// Hebrew numbering for 0..=999_999. Thousands are separated from the rest
/// by an apostrophe.
pub(crate) fn hebrew(value: i32) -> String {
    if value <= 0 {
        return "\u{05D0}\u{05E4}\u{05E1}".to_owned();
    }
    let mut number = value as u32;
    let mut text = String::new();
    if number >= 1000 {
        push_hebrew_under_1000(number / 1000, &mut text);
        text.push('\'');
        number %= 1000;
    }
    push_hebrew_under_1000(number, &mut text);
    text
}

const COMBINING_CIRCUMFLEX: char = '\u{0302}';

fn push_armenian_under_10000(number: u32, upper: bool, add_circumflex: bool, text: &mut String) {
    let lower_offset = if upper { 0 } else { 0x30 };
    // Thousands, hundreds, tens and ones each have their own run of nine letters.
    let tiers = [
        (number / 1000, 0x054C),
        ((number / 100) % 10, 0x0543),
        ((number / 10) % 10, 0x053A),
        (number % 10, 0x0531),
    ];
    for (digit, first_letter) in tiers {
        if digit == 0 {
            continue;
        }
        text.push(glyph(first_letter + lower_offset + digit - 1));
        if add_circumflex {
            text.push(COMBINING_CIRCUMFLEX);
        }
    }
}

/// Armenian numbering for 1..=99_999_999. Digits of the ten-thousands group
/// carry a combining circumflex.
pub(crate) fn armenian(value: i32, upper: bool) -> String {
    let number = value.max(0) as u32;
    let mut text = String::new();
    push_armenian_under_10000(number / 10000, upper, true, &mut text);
    push_armenian_under_10000(number % 10000, upper, false, &mut text);
    text
}

const GEORGIAN_THOUSANDS: [char; 9] = [
    '\u{10E9}', '\u{10EA}', '\u{10EB}', '\u{10EC}', '\u{10ED}', '\u{10EE}', '\u{10F4}', '\u{10EF}',
    '\u{10F0}',
];
const GEORGIAN_HUNDREDS: [char; 9] = [
    '\u{10E0}', '\u{10E1}', '\u{10E2}', '\u{10F3}', '\u{10E4}', '\u{10E5}', '\u{10E6}', '\u{10E7}',
    '\u{10E8}',
];
const GEORGIAN_TENS: [char; 9] = [
    '\u{10D8}', '\u{10D9}', '\u{10DA}', '\u{10DB}', '\u{10DC}', '\u{10F2}', '\u{10DD}', '\u{10DE}',
    '\u{10DF}',
];
const GEORGIAN_ONES: [char; 9] = [
    '\u{10D0}', '\u{10D1}', '\u{10D2}', '\u{10D3}', '\u{10D4}', '\u{10D5}', '\u{10D6}', '\u{10F1}',
    '\u{10D7}',
];

/// Georgian numbering for 1..=19_999; ten thousand is written with its own
/// letter.
pub(crate) fn georgian(value: i32) -> String {
    let mut number = value.max(0) as u32;
    let mut text = String::new();
    if number > 9999 {
        text.push('\u{10F5}');
        number %= 10000;
    }
    let tiers = [
        (number / 1000, &GEORGIAN_THOUSANDS),
        ((number / 100) % 10, &GEORGIAN_HUNDREDS),
        ((number / 10) % 10, &GEORGIAN_TENS),
        (number % 10, &GEORGIAN_ONES),
    ];
    for (digit, letters) in tiers {
        if digit > 0 {
            text.push(letters[digit as usize - 1]);
        }
    }
    text
}
