//! 英文数字读法模块
//!
//! 将 0 ~ 9999 的整数转换为首字母大写的英文单词
//!
//! 超出范围或无法解析的输入原样返回，不做部分转换

/// 可转换的最大值
pub const MAX_SPELLABLE: i64 = 9999;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen",
    "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// 英文数字读法转换器
pub struct EnglishNumberSpeller;

impl EnglishNumberSpeller {
    /// 将整数转换为英文读法
    ///
    /// # 返回
    /// - 0 ~ 9999: 英文单词（例如 101 → "One Hundred and One"）
    /// - 其他: 十进制数字字符串
    pub fn spell(value: i64) -> String {
        if !(0..=MAX_SPELLABLE).contains(&value) {
            return value.to_string();
        }

        if value == 0 {
            return "Zero".to_string();
        }

        let n = value as usize;
        if n < 1000 {
            return Self::spell_below_thousand(n);
        }

        let mut words = format!("{} Thousand", Self::spell_below_thousand(n / 1000));
        let rest = n % 1000;
        if rest != 0 {
            words.push(' ');
            words.push_str(&Self::spell_below_thousand(rest));
        }
        words
    }

    /// 将数字文本转换为英文读法
    ///
    /// 接受任意 Unicode 十进制数字（全角 "５０"、阿拉伯-印度 "٣" 等），
    /// 数字之间允许单个下划线分隔（"1_000"）。
    /// 解析失败时原样返回；超长数字串必然超出范围，返回去掉前导零的十进制形式
    pub fn spell_text(text: &str) -> String {
        let Some(ascii) = Self::to_ascii_integer(text.trim()) else {
            return text.to_string();
        };

        match ascii.parse::<i64>() {
            Ok(value) => Self::spell(value),
            Err(_) => Self::canonical_decimal(&ascii),
        }
    }

    /// 1 ~ 999
    fn spell_below_thousand(n: usize) -> String {
        match n {
            0..=9 => ONES[n].to_string(),
            10..=19 => TEENS[n - 10].to_string(),
            20..=99 => {
                let ones = n % 10;
                if ones == 0 {
                    TENS[n / 10].to_string()
                } else {
                    format!("{} {}", TENS[n / 10], ONES[ones])
                }
            }
            _ => {
                let rest = n % 100;
                if rest == 0 {
                    format!("{} Hundred", ONES[n / 100])
                } else {
                    format!(
                        "{} Hundred and {}",
                        ONES[n / 100],
                        Self::spell_below_thousand(rest)
                    )
                }
            }
        }
    }

    /// 转换为 ASCII 整数文本：可选符号 + 数字
    fn to_ascii_integer(text: &str) -> Option<String> {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.strip_prefix('+').unwrap_or(text)),
        };

        if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
            return None;
        }

        let mut ascii = String::with_capacity(body.len() + 1);
        ascii.push_str(sign);
        for ch in body.chars().filter(|&ch| ch != '_') {
            ascii.push(char::from(b'0' + decimal_digit_value(ch)?));
        }
        Some(ascii)
    }

    fn canonical_decimal(ascii: &str) -> String {
        let (sign, digits) = match ascii.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", ascii),
        };

        let stripped = digits.trim_start_matches('0');
        if stripped.is_empty() {
            "0".to_string()
        } else {
            format!("{}{}", sign, stripped)
        }
    }
}

/// Unicode 十进制数字（Nd）各组 "0" 的码位，每组连续 10 个
const DECIMAL_ZERO_POINTS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730,
    0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50,
    0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950,
    0x1FBF0,
];

/// 十进制数字字符的数值，非数字返回 None
fn decimal_digit_value(ch: char) -> Option<u8> {
    let code = ch as u32;
    let idx = DECIMAL_ZERO_POINTS.partition_point(|&zero| zero <= code);
    let zero = *DECIMAL_ZERO_POINTS.get(idx.checked_sub(1)?)?;
    let value = code - zero;
    (value < 10).then_some(value as u8)
}
