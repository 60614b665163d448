//! TN Engine - 主管道
//!
//! 语言环境判断 + 按顺序执行改写规则

use std::ops::Range;

use crate::tn::rules::{CurrencyRule, RewriteRule, RuleKind, SectionRule, StandaloneNumberRule};
use crate::tn::{ScriptDetector, TNConfig, TNMode};

/// TN 变更记录（用于回滚）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TNChange {
    /// 产生该变更的规则
    pub rule: RuleKind,
    /// 替换文本在该规则输出中的字节范围
    pub span: Range<usize>,
    /// 原始文本
    pub original_text: String,
    /// 规范化后的文本
    pub normalized_text: String,
}

/// TN 处理结果
#[derive(Debug, Clone)]
pub struct TNResult {
    /// 规范化后的文本
    pub text: String,
    /// 是否走了英文改写流程
    pub latin_dominant: bool,
    /// 变更记录列表（按规则顺序，同一规则内从左到右）
    pub changes: Vec<TNChange>,
}

impl TNResult {
    fn unchanged(text: &str, latin_dominant: bool) -> Self {
        Self {
            text: text.to_string(),
            latin_dominant,
            changes: Vec::new(),
        }
    }

    /// 是否有改动
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// TN 引擎
///
/// 只持有预编译的规则，无跨调用状态，可在线程间共享
pub struct TNEngine {
    mode: TNMode,
    rules: Vec<Box<dyn RewriteRule>>,
}

impl TNEngine {
    /// 创建新的 TN 引擎（默认规则参数）
    pub fn new(mode: TNMode) -> Self {
        Self::with_config(&TNConfig {
            mode,
            ..TNConfig::default()
        })
    }

    /// 按配置创建 TN 引擎
    ///
    /// 规则顺序固定：金额 → 章节编号 → 独立数字
    pub fn with_config(config: &TNConfig) -> Self {
        let rules: Vec<Box<dyn RewriteRule>> = vec![
            Box::new(CurrencyRule::new(config.currency_unit.clone())),
            Box::new(SectionRule::new()),
            Box::new(StandaloneNumberRule::new(config.standalone_max_digits)),
        ];

        Self {
            mode: config.mode,
            rules,
        }
    }

    /// 规范化文本，只返回结果字符串
    pub fn normalize(&self, text: &str) -> String {
        self.process(text).text
    }

    /// 处理文本
    pub fn process(&self, text: &str) -> TNResult {
        let latin_dominant = match self.mode {
            TNMode::Raw => return TNResult::unchanged(text, false),
            TNMode::Always => true,
            TNMode::Auto => ScriptDetector::is_latin_dominant(text),
        };

        // 中文为主：原样返回，交给合成引擎自身处理
        if !latin_dominant {
            tracing::debug!("非英文环境，跳过规范化");
            return TNResult::unchanged(text, false);
        }

        let mut changes = Vec::new();
        let mut current = text.to_string();

        for rule in &self.rules {
            current = rule.rewrite(&current, &mut changes);
        }

        tracing::debug!("英文环境规范化完成: {} 处改写", changes.len());

        TNResult {
            text: current,
            latin_dominant,
            changes,
        }
    }

    /// 设置模式
    pub fn set_mode(&mut self, mode: TNMode) {
        self.mode = mode;
    }

    /// 获取当前模式
    pub fn mode(&self) -> TNMode {
        self.mode
    }

    /// 规则执行顺序
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// 回滚 TN 结果
    ///
    /// 从最后一条规则的最右侧变更开始逆序撤销，
    /// 每条变更的 span 恰好对应撤销到该规则输出时的文本
    pub fn rollback(result: &TNResult) -> String {
        let mut text = result.text.clone();

        for change in result.changes.iter().rev() {
            let in_bounds = change.span.end <= text.len()
                && text.get(change.span.clone()) == Some(change.normalized_text.as_str());

            if !in_bounds {
                tracing::warn!("回滚失败，变更记录与文本不一致: {:?}", change);
                return text;
            }

            text.replace_range(change.span.clone(), &change.original_text);
        }

        text
    }
}

impl Default for TNEngine {
    fn default() -> Self {
        Self::new(TNMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_no_conversion() {
        let engine = TNEngine::new(TNMode::Raw);
        let result = engine.process("It's $50.");

        assert_eq!(result.text, "It's $50.");
        assert!(!result.changed());
        assert!(!result.latin_dominant);
    }

    #[test]
    fn test_currency_conversion() {
        let engine = TNEngine::default();
        let result = engine.process("It's $50.");

        assert!(result.latin_dominant);
        assert!(result.text.contains("Fifty dollars"));
        assert!(!result.text.contains("$50"));
    }

    #[test]
    fn test_chinese_text_untouched() {
        let engine = TNEngine::default();
        let text = "我有3个苹果，花了$50，第2部分";
        let result = engine.process(text);

        assert_eq!(result.text, text);
        assert!(!result.latin_dominant);
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_always_mode_skips_detection() {
        let engine = TNEngine::new(TNMode::Always);
        let result = engine.process("价格 $5");

        assert_eq!(result.text, "价格 Five dollars");
        assert!(result.latin_dominant);
    }

    #[test]
    fn test_rule_order() {
        let engine = TNEngine::default();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                RuleKind::Currency,
                RuleKind::Section,
                RuleKind::StandaloneNumber
            ]
        );
    }

    #[test]
    fn test_earlier_rules_claim_numbers() {
        let engine = TNEngine::default();
        let result = engine.process("Part 3 costs $7 for 2 people");

        assert_eq!(result.text, "Part Three costs Seven dollars for Two people");
        let rules: Vec<RuleKind> = result.changes.iter().map(|c| c.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleKind::Currency,
                RuleKind::Section,
                RuleKind::StandaloneNumber
            ]
        );
    }

    #[test]
    fn test_large_numbers_degrade() {
        let engine = TNEngine::default();
        assert_eq!(
            engine.normalize("Pay $123456 for Part 20000"),
            "Pay 123456 dollars for Part 20000"
        );
    }

    #[test]
    fn test_rollback() {
        let engine = TNEngine::default();
        let original = "Part 1: It's $50 for 2 tickets, 5 left.";
        let result = engine.process(original);

        assert_eq!(
            result.text,
            "Part One: It's Fifty dollars for Two tickets, Five left."
        );
        assert_eq!(TNEngine::rollback(&result), original);
    }

    #[test]
    fn test_rollback_overlapping_words() {
        let engine = TNEngine::default();
        let original = "$5 and 5";
        let result = engine.process(original);

        assert_eq!(result.text, "Five dollars and Five");
        assert_eq!(TNEngine::rollback(&result), original);
    }

    #[test]
    fn test_mode_switching() {
        let mut engine = TNEngine::default();
        assert_eq!(engine.normalize("I have 3 cats"), "I have Three cats");

        engine.set_mode(TNMode::Raw);
        assert_eq!(engine.mode(), TNMode::Raw);
        assert_eq!(engine.normalize("I have 3 cats"), "I have 3 cats");
    }

    #[test]
    fn test_custom_config() {
        let config = TNConfig {
            currency_unit: "USD".to_string(),
            standalone_max_digits: 4,
            ..TNConfig::default()
        };
        let engine = TNEngine::with_config(&config);

        assert_eq!(
            engine.normalize("In 2023 it cost $9"),
            "In Two Thousand Twenty Three it cost Nine USD"
        );
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TNEngine>();
    }
}
