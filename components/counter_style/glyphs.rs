/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Static glyph tables referenced by the numbering system definitions.

/// Ten consecutive code points starting at `zero`.
const fn digits_from(zero: u32) -> [char; 10] {
    let mut digits = ['0'; 10];
    let mut i = 0;
    while i < 10 {
        digits[i] = match char::from_u32(zero + i as u32) {
            Some(digit) => digit,
            None => '?',
        };
        i += 1;
    }
    digits
}

/// Shift every glyph of `table` by `offset` code points. Katakana sits exactly
/// 0x60 above the hiragana block.
const fn shifted<const N: usize>(table: [char; N], offset: u32) -> [char; N] {
    let mut result = table;
    let mut i = 0;
    while i < N {
        result[i] = match char::from_u32(table[i] as u32 + offset) {
            Some(glyph) => glyph,
            None => '?',
        };
        i += 1;
    }
    result
}

pub(crate) static DECIMAL: [char; 10] = digits_from(0x30);
pub(crate) static BINARY: [char; 2] = ['0', '1'];
pub(crate) static OCTAL: [char; 8] = ['0', '1', '2', '3', '4', '5', '6', '7'];
pub(crate) static LOWER_HEXADECIMAL: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];
pub(crate) static UPPER_HEXADECIMAL: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

pub(crate) static ARABIC_INDIC: [char; 10] = digits_from(0x0660);
pub(crate) static PERSIAN: [char; 10] = digits_from(0x06F0);
pub(crate) static DEVANAGARI: [char; 10] = digits_from(0x0966);
pub(crate) static BENGALI: [char; 10] = digits_from(0x09E6);
pub(crate) static GURMUKHI: [char; 10] = digits_from(0x0A66);
pub(crate) static GUJARATI: [char; 10] = digits_from(0x0AE6);
pub(crate) static ORIYA: [char; 10] = digits_from(0x0B66);
pub(crate) static TAMIL: [char; 10] = digits_from(0x0BE6);
pub(crate) static TELUGU: [char; 10] = digits_from(0x0C66);
pub(crate) static KANNADA: [char; 10] = digits_from(0x0CE6);
pub(crate) static MALAYALAM: [char; 10] = digits_from(0x0D66);
pub(crate) static THAI: [char; 10] = digits_from(0x0E50);
pub(crate) static LAO: [char; 10] = digits_from(0x0ED0);
pub(crate) static TIBETAN: [char; 10] = digits_from(0x0F20);
pub(crate) static MYANMAR: [char; 10] = digits_from(0x1040);
pub(crate) static KHMER: [char; 10] = digits_from(0x17E0);
pub(crate) static MONGOLIAN: [char; 10] = digits_from(0x1810);
pub(crate) static CJK_DECIMAL: [char; 10] = [
    '〇', '一', '二', '三', '四', '五', '六', '七', '八', '九',
];

pub(crate) static LOWER_LATIN: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub(crate) static UPPER_LATIN: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

// Greek skips the final sigma slot (U+03C2 / U+03A2).
pub(crate) static LOWER_GREEK: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ',
    'υ', 'φ', 'χ', 'ψ', 'ω',
];
pub(crate) static UPPER_GREEK: [char; 24] = [
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'Σ', 'Τ',
    'Υ', 'Φ', 'Χ', 'Ψ', 'Ω',
];

const HIRAGANA_GLYPHS: [char; 48] = [
    'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す', 'せ', 'そ', 'た',
    'ち', 'つ', 'て', 'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は', 'ひ', 'ふ', 'へ', 'ほ', 'ま', 'み',
    'む', 'め', 'も', 'や', 'ゆ', 'よ', 'ら', 'り', 'る', 'れ', 'ろ', 'わ', 'ゐ', 'ゑ', 'を', 'ん',
];
const HIRAGANA_IROHA_GLYPHS: [char; 47] = [
    'い', 'ろ', 'は', 'に', 'ほ', 'へ', 'と', 'ち', 'り', 'ぬ', 'る', 'を', 'わ', 'か', 'よ', 'た',
    'れ', 'そ', 'つ', 'ね', 'な', 'ら', 'む', 'う', 'ゐ', 'の', 'お', 'く', 'や', 'ま', 'け', 'ふ',
    'こ', 'え', 'て', 'あ', 'さ', 'き', 'ゆ', 'め', 'み', 'し', 'ゑ', 'ひ', 'も', 'せ', 'す',
];
pub(crate) static HIRAGANA: [char; 48] = HIRAGANA_GLYPHS;
pub(crate) static HIRAGANA_IROHA: [char; 47] = HIRAGANA_IROHA_GLYPHS;
pub(crate) static KATAKANA: [char; 48] = shifted(HIRAGANA_GLYPHS, 0x60);
pub(crate) static KATAKANA_IROHA: [char; 47] = shifted(HIRAGANA_IROHA_GLYPHS, 0x60);

pub(crate) static HANGUL_CONSONANT: [char; 14] = [
    'ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];
pub(crate) static HANGUL: [char; 14] = [
    '가', '나', '다', '라', '마', '바', '사', '아', '자', '차', '카', '타', '파', '하',
];
pub(crate) static CJK_EARTHLY_BRANCH: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
pub(crate) static CJK_HEAVENLY_STEM: [char; 10] =
    ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
pub(crate) static THAI_ALPHABETIC: [char; 41] = [
    'ก', 'ข', 'ค', 'ง', 'จ', 'ฉ', 'ช', 'ซ', 'ฌ', 'ญ', 'ฎ', 'ฏ', 'ฐ', 'ฑ', 'ฒ', 'ณ', 'ด', 'ต', 'ถ',
    'ท', 'ธ', 'น', 'บ', 'ป', 'ผ', 'ฝ', 'พ', 'ฟ', 'ภ', 'ม', 'ย', 'ร', 'ล', 'ว', 'ศ', 'ษ', 'ส', 'ห',
    'ฬ', 'อ', 'ฮ',
];

pub(crate) static ASTERISKS: [char; 1] = ['*'];
pub(crate) static FOOTNOTES: [char; 4] = ['*', '⁑', '†', '‡'];
