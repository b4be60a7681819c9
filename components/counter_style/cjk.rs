/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Chinese, Japanese and Korean ideographic numbering.
//!
//! Values are split into up to four groups of four decimal digits. Inside a
//! group each digit is followed by its "ten", "hundred" or "thousand" marker,
//! and every group but the least significant one is followed by its group
//! marker ("ten thousand", "hundred million", ...).
//!
//! <https://drafts.csswg.org/css-counter-styles/#limited-chinese>

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CjkLanguage {
    Chinese,
    Japanese,
    Korean,
}

#[derive(Debug)]
pub(crate) struct CjkTable {
    language: CjkLanguage,
    informal: bool,
    /// Markers following the second, third and fourth groups.
    group_markers: [&'static str; 3],
    /// "ten", "hundred" and "thousand".
    digit_markers: [char; 3],
    digits: [char; 10],
    negative_sign: &'static str,
}

impl CjkTable {
    pub(crate) fn suffix(&self) -> char {
        match self.language {
            CjkLanguage::Chinese | CjkLanguage::Japanese => '、',
            CjkLanguage::Korean => ',',
        }
    }
}

const CHINESE_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

pub(crate) static SIMP_CHINESE_INFORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Chinese,
    informal: true,
    group_markers: ["万", "亿", "万亿"],
    digit_markers: ['十', '百', '千'],
    digits: CHINESE_DIGITS,
    negative_sign: "负",
};

pub(crate) static SIMP_CHINESE_FORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Chinese,
    informal: false,
    group_markers: ["万", "亿", "万亿"],
    digit_markers: ['拾', '佰', '仟'],
    digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
    negative_sign: "负",
};

pub(crate) static TRAD_CHINESE_INFORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Chinese,
    informal: true,
    group_markers: ["萬", "億", "兆"],
    digit_markers: ['十', '百', '千'],
    digits: CHINESE_DIGITS,
    negative_sign: "負",
};

pub(crate) static TRAD_CHINESE_FORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Chinese,
    informal: false,
    group_markers: ["萬", "億", "兆"],
    digit_markers: ['拾', '佰', '仟'],
    digits: ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖'],
    negative_sign: "負",
};

pub(crate) static JAPANESE_INFORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Japanese,
    informal: true,
    group_markers: ["万", "億", "兆"],
    digit_markers: ['十', '百', '千'],
    digits: ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    negative_sign: "マイナス",
};

pub(crate) static JAPANESE_FORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Japanese,
    informal: false,
    group_markers: ["萬", "億", "兆"],
    digit_markers: ['拾', '百', '阡'],
    digits: ['零', '壱', '弐', '参', '四', '伍', '六', '七', '八', '九'],
    negative_sign: "マイナス",
};

pub(crate) static KOREAN_HANGUL_FORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Korean,
    informal: false,
    group_markers: ["만", "억", "조"],
    digit_markers: ['십', '백', '천'],
    digits: ['영', '일', '이', '삼', '사', '오', '육', '칠', '팔', '구'],
    negative_sign: "마이너스 ",
};

pub(crate) static KOREAN_HANJA_INFORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Korean,
    informal: true,
    group_markers: ["萬", "億", "兆"],
    digit_markers: ['十', '百', '千'],
    digits: CHINESE_DIGITS,
    negative_sign: "마이너스 ",
};

pub(crate) static KOREAN_HANJA_FORMAL: CjkTable = CjkTable {
    language: CjkLanguage::Korean,
    informal: false,
    group_markers: ["萬", "億", "兆"],
    digit_markers: ['拾', '百', '仟'],
    digits: ['零', '壹', '貳', '參', '四', '五', '六', '七', '八', '九'],
    negative_sign: "마이너스 ",
};

/// One position of the expanded number, before glyphs are chosen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Digit(u32),
    /// Index into `digit_markers`.
    DigitMarker(usize),
    /// Index into `group_markers`.
    GroupMarker(usize),
}

/// Expand one group of four digits, most significant first. `more_groups`
/// is set when a more significant nonzero group precedes this one, in which
/// case leading zeros are kept so the zero rules below can see them.
fn expand_group(
    table: &CjkTable,
    group_value: u32,
    group_index: usize,
    more_groups: bool,
    slots: &mut Vec<Slot>,
) {
    let drop_one = table.informal && table.language != CjkLanguage::Chinese;
    let positions = [(1000, 2), (100, 1), (10, 0)];
    for (weight, marker) in positions {
        if !more_groups && group_value < weight {
            continue;
        }
        let digit = (group_value / weight) % 10;
        let omit_digit = if weight == 10 &&
            table.informal &&
            table.language == CjkLanguage::Chinese
        {
            // 十二 rather than 一十二, but only at the start of the number.
            !more_groups && (10..20).contains(&group_value)
        } else {
            drop_one && digit == 1
        };
        if !omit_digit {
            slots.push(Slot::Digit(digit));
        }
        if digit != 0 {
            slots.push(Slot::DigitMarker(marker));
        }
    }
    slots.push(Slot::Digit(group_value % 10));
    if group_value != 0 && group_index > 0 {
        slots.push(Slot::GroupMarker(group_index - 1));
    }
}

/// Render `value` with `table`. Defined for every `i32`.
pub(crate) fn ideographic(value: i32, table: &CjkTable) -> String {
    if value == 0 {
        return table.digits[0].to_string();
    }

    let mut magnitude = value.unsigned_abs();
    let mut groups = Vec::with_capacity(4);
    let mut group_index = 0;
    while magnitude != 0 {
        let group_value = magnitude % 10000;
        magnitude /= 10000;
        let mut slots = Vec::with_capacity(9);
        expand_group(table, group_value, group_index, magnitude != 0, &mut slots);
        groups.push(slots);
        group_index += 1;
    }

    let mut text = String::new();
    if value < 0 {
        text.push_str(table.negative_sign);
    }
    // Chinese writes a single zero for a run of zeros followed by a nonzero
    // digit; Japanese and Korean write none.
    let mut pending_zero = false;
    for &slot in groups.iter().rev().flatten() {
        match slot {
            Slot::Digit(0) => pending_zero = table.language == CjkLanguage::Chinese,
            Slot::Digit(digit) => {
                if pending_zero {
                    text.push(table.digits[0]);
                    pending_zero = false;
                }
                text.push(table.digits[digit as usize]);
            },
            Slot::DigitMarker(marker) => text.push(table.digit_markers[marker]),
            Slot::GroupMarker(marker) => {
                text.push_str(table.group_markers[marker]);
                if table.language == CjkLanguage::Korean {
                    text.push(' ');
                }
            },
        }
    }

    if table.language == CjkLanguage::Korean && text.ends_with(' ') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_zero_runs() {
        assert_eq!(ideographic(0, &SIMP_CHINESE_INFORMAL), "零");
        assert_eq!(ideographic(101, &SIMP_CHINESE_INFORMAL), "一百零一");
        assert_eq!(ideographic(1001, &SIMP_CHINESE_INFORMAL), "一千零一");
        assert_eq!(ideographic(10005, &SIMP_CHINESE_INFORMAL), "一万零五");
        assert_eq!(ideographic(100000, &SIMP_CHINESE_INFORMAL), "十万");
        assert_eq!(ideographic(100_000_001, &SIMP_CHINESE_INFORMAL), "一亿零一");
        assert_eq!(ideographic(110, &SIMP_CHINESE_INFORMAL), "一百一十");
        assert_eq!(ideographic(10100, &SIMP_CHINESE_INFORMAL), "一万零一百");
        assert_eq!(ideographic(1_010_000, &SIMP_CHINESE_INFORMAL), "一百零一万");
        assert_eq!(ideographic(100_010, &SIMP_CHINESE_INFORMAL), "十万零一十");
    }

    #[test]
    fn test_chinese_leading_ten() {
        assert_eq!(ideographic(10, &SIMP_CHINESE_INFORMAL), "十");
        assert_eq!(ideographic(12, &SIMP_CHINESE_INFORMAL), "十二");
        assert_eq!(ideographic(20, &SIMP_CHINESE_INFORMAL), "二十");
        assert_eq!(ideographic(12, &SIMP_CHINESE_FORMAL), "壹拾贰");
    }

    #[test]
    fn test_japanese_and_korean_skip_zeros() {
        assert_eq!(ideographic(101, &JAPANESE_INFORMAL), "百一");
        assert_eq!(ideographic(1111, &JAPANESE_INFORMAL), "千百十一");
        assert_eq!(ideographic(10000, &JAPANESE_INFORMAL), "一万");
        assert_eq!(ideographic(101, &KOREAN_HANGUL_FORMAL), "일백일");
        assert_eq!(ideographic(10001, &KOREAN_HANGUL_FORMAL), "일만 일");
        assert_eq!(ideographic(10000, &KOREAN_HANGUL_FORMAL), "일만");
    }

    #[test]
    fn test_negative_sign() {
        assert_eq!(ideographic(-5, &TRAD_CHINESE_INFORMAL), "負五");
        assert_eq!(ideographic(-5, &KOREAN_HANJA_INFORMAL), "마이너스 五");
        assert_eq!(ideographic(-3, &JAPANESE_INFORMAL), "マイナス三");
    }
}
