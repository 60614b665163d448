//! 改写规则模块
//!
//! CurrencyRule, SectionRule, StandaloneNumberRule
//!
//! 每条规则扫描上一条规则的输出，顺序由引擎决定

use std::fmt;

use regex::{Captures, Regex};

use crate::tn::engine::TNChange;
use crate::tn::EnglishNumberSpeller;

/// 规则类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// 金额：$50 → Fifty dollars
    Currency,
    /// 章节编号：Part 1 → Part One
    Section,
    /// 独立数字：2 apples → Two apples
    StandaloneNumber,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Currency => "currency",
            RuleKind::Section => "section",
            RuleKind::StandaloneNumber => "standalone_number",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文本改写规则
pub trait RewriteRule: Send + Sync {
    /// 规则类型
    fn kind(&self) -> RuleKind;

    /// 改写文本，并把每一处替换追加到 `changes`
    ///
    /// 不可失败：规则不可用时原样返回
    fn rewrite(&self, text: &str, changes: &mut Vec<TNChange>) -> String;
}

/// 编译规则正则，失败时记录错误并禁用该规则
fn compile(kind: RuleKind, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("{} 规则正则编译失败，规则已禁用: {}", kind, e);
            None
        }
    }
}

/// 按匹配逐段重建文本
///
/// `replace` 返回 None 表示保留该匹配原文。
/// 变更记录中的 span 是替换文本在输出中的字节范围
fn rewrite_matches<F>(
    pattern: Option<&Regex>,
    kind: RuleKind,
    text: &str,
    changes: &mut Vec<TNChange>,
    mut replace: F,
) -> String
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let Some(re) = pattern else {
        return text.to_string();
    };

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        result.push_str(&text[last_end..whole.start()]);

        match replace(&caps) {
            Some(replaced) if replaced != whole.as_str() => {
                let start = result.len();
                result.push_str(&replaced);
                tracing::debug!("{}: {:?} → {:?}", kind, whole.as_str(), replaced);
                changes.push(TNChange {
                    rule: kind,
                    span: start..result.len(),
                    original_text: whole.as_str().to_string(),
                    normalized_text: replaced,
                });
            }
            _ => result.push_str(whole.as_str()),
        }

        last_end = whole.end();
    }

    result.push_str(&text[last_end..]);
    result
}

/// CurrencyRule - 金额改写规则
///
/// `$` 后紧跟数字（中间不允许空格），数字可以是任意 Unicode 十进制数字
pub struct CurrencyRule {
    pattern: Option<Regex>,
    unit: String,
}

impl CurrencyRule {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            pattern: compile(RuleKind::Currency, r"\$(\d+)"),
            unit: unit.into(),
        }
    }

    /// 金额单位
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl Default for CurrencyRule {
    fn default() -> Self {
        Self::new("dollars")
    }
}

impl RewriteRule for CurrencyRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Currency
    }

    fn rewrite(&self, text: &str, changes: &mut Vec<TNChange>) -> String {
        rewrite_matches(self.pattern.as_ref(), self.kind(), text, changes, |caps| {
            let words = EnglishNumberSpeller::spell_text(&caps[1]);
            Some(format!("{} {}", words, self.unit))
        })
    }
}

/// SectionRule - 章节编号改写规则
///
/// "Part" 不区分大小写，保留原始前缀（含空白）
pub struct SectionRule {
    pattern: Option<Regex>,
}

impl SectionRule {
    pub fn new() -> Self {
        Self {
            pattern: compile(RuleKind::Section, r"(?i)\b(part\s+)(\d+)\b"),
        }
    }
}

impl Default for SectionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteRule for SectionRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Section
    }

    fn rewrite(&self, text: &str, changes: &mut Vec<TNChange>) -> String {
        rewrite_matches(self.pattern.as_ref(), self.kind(), text, changes, |caps| {
            let words = EnglishNumberSpeller::spell_text(&caps[2]);
            Some(format!("{}{}", &caps[1], words))
        })
    }
}

/// StandaloneNumberRule - 独立数字改写规则
///
/// 只转换不超过 `max_digits` 位的数字（按字符计，全角数字同样一位），
/// 避免把年份、型号读成单词
pub struct StandaloneNumberRule {
    pattern: Option<Regex>,
    max_digits: usize,
}

impl StandaloneNumberRule {
    pub fn new(max_digits: usize) -> Self {
        Self {
            pattern: compile(RuleKind::StandaloneNumber, r"\b\d+\b"),
            max_digits,
        }
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }
}

impl Default for StandaloneNumberRule {
    fn default() -> Self {
        Self::new(2)
    }
}

impl RewriteRule for StandaloneNumberRule {
    fn kind(&self) -> RuleKind {
        RuleKind::StandaloneNumber
    }

    fn rewrite(&self, text: &str, changes: &mut Vec<TNChange>) -> String {
        rewrite_matches(self.pattern.as_ref(), self.kind(), text, changes, |caps| {
            let digits = &caps[0];
            if digits.chars().count() <= self.max_digits {
                Some(EnglishNumberSpeller::spell_text(digits))
            } else {
                None
            }
        })
    }
}
