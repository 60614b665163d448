//! V-Speak Core Engine
//!
//! 语音合成前置文本规范化核心：判断文本是否以英文为主，
//! 并把金额、章节编号、独立小数字改写为英文读法

#![warn(rust_2018_idioms)]

pub mod tn;
pub mod voice;
pub mod source;
pub mod synthesis;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{VSpeakError, VSpeakResult};
pub use tn::{TNEngine, TNMode, TNResult};

/// 使用默认引擎规范化文本
///
/// 全函数：任何情况下都返回字符串，最坏情况下原样返回输入
pub fn normalize(raw_text: &str) -> String {
    TNEngine::default().normalize(raw_text)
}

/// 初始化日志系统
///
/// 生产模式: 静默运行
/// 调试模式 (--features debug-logs): 由 VSPEAK_LOG 控制级别，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("VSPEAK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 重复初始化时 try_init 返回 Err，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_entry_point() {
        assert_eq!(normalize("It's $50."), "It's Fifty dollars.");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
