//! 文本文档
//!
//! 读取 UTF-8 纯文本文件；PDF 提取由外部组件负责

use std::path::{Path, PathBuf};

use crate::error::{VSpeakError, VSpeakResult};

/// 预览默认字符数
pub const DEFAULT_PREVIEW_CHARS: usize = 1000;

/// 文本来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// 直接输入
    Inline,
    /// 本地文件
    File(PathBuf),
}

/// 待合成的文本文档
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// 文本内容
    pub text: String,
    /// 来源
    pub origin: DocumentOrigin,
}

impl TextDocument {
    /// 直接输入的文本
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: DocumentOrigin::Inline,
        }
    }

    /// 从文件加载
    ///
    /// - `.pdf`: 返回 `UnsupportedDocument`
    /// - 其他: 按 UTF-8 纯文本读取
    pub fn from_path(path: impl AsRef<Path>) -> VSpeakResult<Self> {
        let path = path.as_ref();

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Err(VSpeakError::UnsupportedDocument(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| VSpeakError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("读取文件成功: {:?}，共 {} 个字符", path, text.chars().count());

        Ok(Self {
            text,
            origin: DocumentOrigin::File(path.to_path_buf()),
        })
    }

    /// 字符数
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// 是否为空白文本
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 文本预览，超长时截断并追加 "..."
    pub fn preview(&self, max_chars: usize) -> String {
        match self.text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.text[..cut]),
            None => self.text.clone(),
        }
    }
}
