use thiserror::Error;

#[derive(Error, Debug)]
pub enum VSpeakError {
    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 文本来源错误
    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    #[error("Document decode failed: {path} - {reason}")]
    Decode { path: String, reason: String },

    #[error("Input text is empty")]
    EmptyInput,

    // 语音参数错误
    #[error("Invalid speech rate: {0}% (expected -50..=50 in steps of 5)")]
    InvalidRate(i32),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type VSpeakResult<T> = Result<T, VSpeakError>;
