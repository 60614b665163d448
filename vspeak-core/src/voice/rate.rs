//! 语速调节
//!
//! 有符号百分比，范围 -50 ~ +50，步长 5

use std::fmt;

use crate::error::{VSpeakError, VSpeakResult};

/// 语速调节（百分比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeechRate(i32);

impl SpeechRate {
    pub const MIN: i32 = -50;
    pub const MAX: i32 = 50;
    pub const STEP: i32 = 5;

    /// 创建语速调节
    ///
    /// 超出范围或不是步长倍数时返回 `InvalidRate`
    pub fn new(percent: i32) -> VSpeakResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&percent) || percent % Self::STEP != 0 {
            return Err(VSpeakError::InvalidRate(percent));
        }
        Ok(Self(percent))
    }

    /// 百分比数值
    pub fn percent(&self) -> i32 {
        self.0
    }

    /// 合成服务参数格式（总是带符号，例如 "+0%"、"-20%"）
    pub fn as_param(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}
