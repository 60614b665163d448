//! 语言环境判断
//!
//! 统计英文字母与中文汉字数量，判断文本是否以英文为主

/// 字符统计结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    /// 英文字母数量（a-z, A-Z）
    pub latin: usize,
    /// 中文汉字数量（U+4E00 ~ U+9FFF）
    pub cjk: usize,
}

impl ScriptStats {
    /// 英文字母严格多于汉字时视为英文环境
    ///
    /// 相等（包括都为 0）时返回 false
    pub fn is_latin_dominant(&self) -> bool {
        self.latin > self.cjk
    }
}

/// 语言环境检测器
pub struct ScriptDetector;

impl ScriptDetector {
    /// 判断文本是否以英文为主
    pub fn is_latin_dominant(text: &str) -> bool {
        Self::stats(text).is_latin_dominant()
    }

    /// 统计文本中的英文字母和汉字
    ///
    /// 先丢弃空白和标点，只保留文字字符（字母、数字、下划线）；
    /// 数字、其他文字和符号不计入任何一类
    pub fn stats(text: &str) -> ScriptStats {
        let mut stats = ScriptStats::default();

        for ch in text.chars().filter(|&ch| Self::is_word_char(ch)) {
            if ch.is_ascii_alphabetic() {
                stats.latin += 1;
            } else if Self::is_cjk_ideograph(ch) {
                stats.cjk += 1;
            }
        }

        stats
    }

    /// 文字字符：字母、数字、下划线
    fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }

    /// CJK 统一表意文字基本区
    fn is_cjk_ideograph(ch: char) -> bool {
        matches!(ch, '\u{4E00}'..='\u{9FFF}')
    }
}
