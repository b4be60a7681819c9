/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::cjk::{self, CjkTable};
use crate::glyphs;

/// A numbering system a counter or list marker can be rendered in, named by
/// its CSS `list-style-type` keyword.
///
/// <https://drafts.csswg.org/css-counter-styles/#predefined-counters>
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ListStyleType {
    None,
    Disc,
    Circle,
    Square,
    DisclosureOpen,
    DisclosureClosed,
    Decimal,
    DecimalLeadingZero,
    Binary,
    Octal,
    LowerHexadecimal,
    UpperHexadecimal,
    ArabicIndic,
    Bengali,
    Cambodian,
    CjkDecimal,
    Devanagari,
    Gujarati,
    Gurmukhi,
    Kannada,
    Khmer,
    Lao,
    Malayalam,
    Mongolian,
    Myanmar,
    Oriya,
    Persian,
    Tamil,
    Telugu,
    Thai,
    Tibetan,
    Urdu,
    LowerAlpha,
    UpperAlpha,
    LowerLatin,
    UpperLatin,
    LowerGreek,
    UpperGreek,
    Hiragana,
    HiraganaIroha,
    Katakana,
    KatakanaIroha,
    HangulConsonant,
    Hangul,
    CjkEarthlyBranch,
    CjkHeavenlyStem,
    ThaiAlphabetic,
    Asterisks,
    Footnotes,
    LowerRoman,
    UpperRoman,
    Armenian,
    LowerArmenian,
    UpperArmenian,
    Georgian,
    Hebrew,
    SimpChineseInformal,
    SimpChineseFormal,
    TradChineseInformal,
    TradChineseFormal,
    CjkIdeographic,
    JapaneseInformal,
    JapaneseFormal,
    KoreanHangulFormal,
    KoreanHanjaInformal,
    KoreanHanjaFormal,
}

/// The longest marker a symbolic system produces before falling back to
/// decimal.
pub const MAX_SYMBOLIC_LENGTH: i32 = 60;

/// How a numbering system turns a value into glyphs.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Algorithm {
    /// A fixed glyph, whatever the value.
    Bullet(&'static str),
    /// Positional notation over the glyph table, the first glyph being zero.
    Numeric(&'static [char]),
    /// Bijective notation over the glyph table.
    Alphabetic(&'static [char]),
    /// The glyph for `value % len`, repeated once per full cycle.
    Symbolic(&'static [char]),
    DecimalLeadingZero,
    Roman { upper: bool },
    Ideographic(&'static CjkTable),
    Hebrew,
    Armenian { upper: bool },
    Georgian,
}

/// One row of the numbering system table.
#[derive(Clone, Debug)]
pub(crate) struct SystemDefinition {
    pub algorithm: Algorithm,
    /// Values outside this range render as decimal. `None` means unbounded.
    pub range: Option<RangeInclusive<i32>>,
    pub suffix: char,
}

impl SystemDefinition {
    fn new(algorithm: Algorithm, range: Option<RangeInclusive<i32>>, suffix: char) -> Self {
        Self {
            algorithm,
            range,
            suffix,
        }
    }

    fn bullet(glyph: &'static str) -> Self {
        Self::new(Algorithm::Bullet(glyph), None, ' ')
    }

    fn numeric(digits: &'static [char]) -> Self {
        Self::new(Algorithm::Numeric(digits), None, '.')
    }

    fn alphabetic(letters: &'static [char]) -> Self {
        Self::new(Algorithm::Alphabetic(letters), Some(1..=i32::MAX), '.')
    }

    /// Symbolic markers grow by one glyph per cycle, so they are cut off at
    /// `MAX_SYMBOLIC_LENGTH` glyphs.
    fn symbolic(symbols: &'static [char]) -> Self {
        let last = MAX_SYMBOLIC_LENGTH.saturating_mul(symbols.len() as i32);
        Self::new(Algorithm::Symbolic(symbols), Some(1..=last), '.')
    }

    fn ideographic(table: &'static CjkTable) -> Self {
        Self::new(Algorithm::Ideographic(table), None, table.suffix())
    }
}

impl ListStyleType {
    pub(crate) fn definition(self) -> SystemDefinition {
        use glyphs::*;

        match self {
            ListStyleType::None => SystemDefinition::bullet(""),
            ListStyleType::Disc => SystemDefinition::bullet("•"),
            ListStyleType::Circle => SystemDefinition::bullet("◦"),
            ListStyleType::Square => SystemDefinition::bullet("▪"),
            ListStyleType::DisclosureOpen => SystemDefinition::bullet("▾"),
            ListStyleType::DisclosureClosed => SystemDefinition::bullet("‣"),
            ListStyleType::Decimal => SystemDefinition::numeric(&DECIMAL),
            ListStyleType::DecimalLeadingZero => {
                SystemDefinition::new(Algorithm::DecimalLeadingZero, None, '.')
            },
            ListStyleType::Binary => SystemDefinition::numeric(&BINARY),
            ListStyleType::Octal => SystemDefinition::numeric(&OCTAL),
            ListStyleType::LowerHexadecimal => SystemDefinition::numeric(&LOWER_HEXADECIMAL),
            ListStyleType::UpperHexadecimal => SystemDefinition::numeric(&UPPER_HEXADECIMAL),
            ListStyleType::ArabicIndic => SystemDefinition::numeric(&ARABIC_INDIC),
            ListStyleType::Bengali => SystemDefinition::numeric(&BENGALI),
            ListStyleType::Cambodian | ListStyleType::Khmer => SystemDefinition::numeric(&KHMER),
            ListStyleType::CjkDecimal => SystemDefinition::numeric(&CJK_DECIMAL),
            ListStyleType::Devanagari => SystemDefinition::numeric(&DEVANAGARI),
            ListStyleType::Gujarati => SystemDefinition::numeric(&GUJARATI),
            ListStyleType::Gurmukhi => SystemDefinition::numeric(&GURMUKHI),
            ListStyleType::Kannada => SystemDefinition::numeric(&KANNADA),
            ListStyleType::Lao => SystemDefinition::numeric(&LAO),
            ListStyleType::Malayalam => SystemDefinition::numeric(&MALAYALAM),
            ListStyleType::Mongolian => SystemDefinition::numeric(&MONGOLIAN),
            ListStyleType::Myanmar => SystemDefinition::numeric(&MYANMAR),
            ListStyleType::Oriya => SystemDefinition::numeric(&ORIYA),
            ListStyleType::Persian | ListStyleType::Urdu => SystemDefinition::numeric(&PERSIAN),
            ListStyleType::Tamil => SystemDefinition::numeric(&TAMIL),
            ListStyleType::Telugu => SystemDefinition::numeric(&TELUGU),
            ListStyleType::Thai => SystemDefinition::numeric(&THAI),
            ListStyleType::Tibetan => SystemDefinition::numeric(&TIBETAN),
            ListStyleType::LowerAlpha | ListStyleType::LowerLatin => {
                SystemDefinition::alphabetic(&LOWER_LATIN)
            },
            ListStyleType::UpperAlpha | ListStyleType::UpperLatin => {
                SystemDefinition::alphabetic(&UPPER_LATIN)
            },
            ListStyleType::LowerGreek => SystemDefinition::alphabetic(&LOWER_GREEK),
            ListStyleType::UpperGreek => SystemDefinition::alphabetic(&UPPER_GREEK),
            ListStyleType::Hiragana => SystemDefinition::alphabetic(&HIRAGANA),
            ListStyleType::HiraganaIroha => SystemDefinition::alphabetic(&HIRAGANA_IROHA),
            ListStyleType::Katakana => SystemDefinition::alphabetic(&KATAKANA),
            ListStyleType::KatakanaIroha => SystemDefinition::alphabetic(&KATAKANA_IROHA),
            ListStyleType::HangulConsonant => SystemDefinition::alphabetic(&HANGUL_CONSONANT),
            ListStyleType::Hangul => SystemDefinition::alphabetic(&HANGUL),
            ListStyleType::CjkEarthlyBranch => SystemDefinition::alphabetic(&CJK_EARTHLY_BRANCH),
            ListStyleType::CjkHeavenlyStem => SystemDefinition::alphabetic(&CJK_HEAVENLY_STEM),
            ListStyleType::ThaiAlphabetic => SystemDefinition::alphabetic(&THAI_ALPHABETIC),
            ListStyleType::Asterisks => SystemDefinition::symbolic(&ASTERISKS),
            ListStyleType::Footnotes => SystemDefinition::symbolic(&FOOTNOTES),
            ListStyleType::LowerRoman => {
                SystemDefinition::new(Algorithm::Roman { upper: false }, Some(1..=3999), '.')
            },
            ListStyleType::UpperRoman => {
                SystemDefinition::new(Algorithm::Roman { upper: true }, Some(1..=3999), '.')
            },
            ListStyleType::Armenian | ListStyleType::UpperArmenian => SystemDefinition::new(
                Algorithm::Armenian { upper: true },
                Some(1..=99_999_999),
                '.',
            ),
            ListStyleType::LowerArmenian => SystemDefinition::new(
                Algorithm::Armenian { upper: false },
                Some(1..=99_999_999),
                '.',
            ),
            ListStyleType::Georgian => {
                SystemDefinition::new(Algorithm::Georgian, Some(1..=19_999), '.')
            },
            ListStyleType::Hebrew => {
                SystemDefinition::new(Algorithm::Hebrew, Some(0..=999_999), '.')
            },
            ListStyleType::SimpChineseInformal => {
                SystemDefinition::ideographic(&cjk::SIMP_CHINESE_INFORMAL)
            },
            ListStyleType::SimpChineseFormal => {
                SystemDefinition::ideographic(&cjk::SIMP_CHINESE_FORMAL)
            },
            ListStyleType::TradChineseInformal | ListStyleType::CjkIdeographic => {
                SystemDefinition::ideographic(&cjk::TRAD_CHINESE_INFORMAL)
            },
            ListStyleType::TradChineseFormal => {
                SystemDefinition::ideographic(&cjk::TRAD_CHINESE_FORMAL)
            },
            ListStyleType::JapaneseInformal => {
                SystemDefinition::ideographic(&cjk::JAPANESE_INFORMAL)
            },
            ListStyleType::JapaneseFormal => SystemDefinition::ideographic(&cjk::JAPANESE_FORMAL),
            ListStyleType::KoreanHangulFormal => {
                SystemDefinition::ideographic(&cjk::KOREAN_HANGUL_FORMAL)
            },
            ListStyleType::KoreanHanjaInformal => {
                SystemDefinition::ideographic(&cjk::KOREAN_HANJA_INFORMAL)
            },
            ListStyleType::KoreanHanjaFormal => {
                SystemDefinition::ideographic(&cjk::KOREAN_HANJA_FORMAL)
            },
        }
    }

    /// The values this system can represent, or `None` when every `i32` is
    /// representable.
    pub fn range(self) -> Option<RangeInclusive<i32>> {
        self.definition().range
    }

    pub fn can_represent(self, value: i32) -> bool {
        self.range().is_none_or(|range| range.contains(&value))
    }

    /// The system actually used to render `value`: `self`, or decimal when
    /// `value` falls outside this system's range.
    pub fn effective_for(self, value: i32) -> ListStyleType {
        if self.can_represent(value) {
            self
        } else {
            ListStyleType::Decimal
        }
    }

    /// The character a list marker in this system ends with.
    pub fn suffix(self) -> char {
        self.definition().suffix
    }

    /// Whether this system ignores the value entirely.
    pub fn is_bullet(self) -> bool {
        matches!(self.definition().algorithm, Algorithm::Bullet(_))
    }

    /// The CSS keyword naming this system.
    pub fn keyword(self) -> &'static str {
        self.into()
    }
}
