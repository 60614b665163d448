//! 文本来源模块
//!
//! 直接输入的文本或上传的纯文本文件

pub mod document;

pub use document::{DocumentOrigin, TextDocument, DEFAULT_PREVIEW_CHARS};
