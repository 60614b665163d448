//! V-Speak 配置模块
//!
//! 统一的配置管理，从 ~/.config/vspeak/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{VSpeakError, VSpeakResult};
use crate::tn::TNConfig;
use crate::voice::{AgeGroup, Gender, SpeechRate, VoiceCatalog};

/// 音色配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// 性别
    pub gender: Gender,
    /// 年龄段
    pub age_group: AgeGroup,
    /// 语速调节百分比（-50 ~ 50，步长 5）
    pub rate_percent: i32,
}

impl VoiceConfig {
    /// 当前角色对应的音色
    pub fn voice_id(&self) -> &'static str {
        VoiceCatalog::resolve(self.gender, self.age_group)
    }

    /// 校验后的语速
    pub fn rate(&self) -> VSpeakResult<SpeechRate> {
        SpeechRate::new(self.rate_percent)
    }
}

/// V-Speak 完整配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VSpeakConfig {
    /// 文本规范化配置
    pub tn: TNConfig,
    /// 音色配置
    pub voice: VoiceConfig,
}

impl VSpeakConfig {
    /// 加载配置文件，不存在时使用默认配置
    pub fn load() -> VSpeakResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 保存配置文件
    pub fn save(&self) -> VSpeakResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> VSpeakResult<Self> {
        if !path.exists() {
            return Err(VSpeakError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, &path.display().to_string())?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!(
            "规范化配置: mode={:?}, currency_unit={}, standalone_max_digits={}",
            config.tn.mode,
            config.tn.currency_unit,
            config.tn.standalone_max_digits
        );
        Ok(config)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> VSpeakResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| VSpeakError::Generic(format!("config serialize failed: {}", e)))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(content: &str) -> VSpeakResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> VSpeakResult<Self> {
        toml::from_str(content).map_err(|e| VSpeakError::ConfigParse {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// 获取配置文件路径
    pub fn config_path() -> VSpeakResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| VSpeakError::Generic("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("vspeak").join("config.toml"))
    }
}
