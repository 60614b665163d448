//! TN (Text Normalization) 模块
//!
//! 语音合成前的文本规范化：英文环境下把数字改写为英文读法

pub mod script;
pub mod english_number;
pub mod config;
pub mod rules;
pub mod engine;

// 导出核心类型
pub use script::{ScriptDetector, ScriptStats};
pub use english_number::EnglishNumberSpeller;
pub use config::{TNConfig, TNMode};
pub use rules::{CurrencyRule, RewriteRule, RuleKind, SectionRule, StandaloneNumberRule};
pub use engine::{TNChange, TNEngine, TNResult};
