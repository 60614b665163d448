//! 文本规范化配置

use serde::{Deserialize, Serialize};

/// 规范化模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TNMode {
    /// 自动模式 - 先判断语言环境，英文为主时才改写
    #[default]
    Auto,
    /// 强制模式 - 跳过语言判断，始终改写
    Always,
    /// 原始模式 - 不做任何改写
    Raw,
}

/// 规范化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TNConfig {
    /// 规范化模式
    pub mode: TNMode,
    /// 金额单位（跟在读法之后）
    pub currency_unit: String,
    /// 独立数字最多转换的位数（更长的数字通常是年份或型号）
    pub standalone_max_digits: usize,
}

impl Default for TNConfig {
    fn default() -> Self {
        Self {
            mode: TNMode::Auto,
            currency_unit: "dollars".to_string(),
            standalone_max_digits: 2,
        }
    }
}
