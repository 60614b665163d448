//! 音色目录
//!
//! 默认全部使用中文模型，中文模型支持中英混读

use serde::{Deserialize, Serialize};

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    /// 解析性别名称（英文或中文）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "female" | "f" | "woman" | "女" => Some(Gender::Female),
            "male" | "m" | "man" | "男" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// 年龄段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 儿童
    Child,
    /// 青年
    #[default]
    Young,
    /// 中年
    MiddleAged,
    /// 老年
    Senior,
}

impl AgeGroup {
    /// 解析年龄段名称（英文或中文）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "child" | "kid" | "儿童" => Some(AgeGroup::Child),
            "young" | "youth" | "青年" => Some(AgeGroup::Young),
            "middle_aged" | "middle-aged" | "middle" | "中年" => Some(AgeGroup::MiddleAged),
            "senior" | "elderly" | "old" | "老年" => Some(AgeGroup::Senior),
            _ => None,
        }
    }
}

/// 音色目录
pub struct VoiceCatalog;

impl VoiceCatalog {
    /// 默认音色
    pub const DEFAULT_VOICE: &'static str = "zh-CN-XiaoxiaoNeural";

    /// 根据角色选择音色
    pub fn resolve(gender: Gender, age: AgeGroup) -> &'static str {
        match (gender, age) {
            (Gender::Female, AgeGroup::Child) => "zh-CN-XiaoyiNeural",
            (Gender::Female, AgeGroup::Young) => "zh-CN-XiaoxiaoNeural",
            (Gender::Female, AgeGroup::MiddleAged) => "zh-CN-Liaoning-XiaobeiNeural",
            (Gender::Female, AgeGroup::Senior) => "zh-HK-HiuGaaiNeural",
            (Gender::Male, AgeGroup::Child) => "zh-CN-YunjianNeural",
            (Gender::Male, AgeGroup::Young) => "zh-CN-YunxiNeural",
            (Gender::Male, AgeGroup::MiddleAged) => "zh-CN-YunyangNeural",
            (Gender::Male, AgeGroup::Senior) => "zh-CN-YunyeNeural",
        }
    }

    /// 根据名称选择音色，名称无法识别时返回默认音色
    pub fn resolve_names(gender: &str, age: &str) -> &'static str {
        match (Gender::from_name(gender), AgeGroup::from_name(age)) {
            (Some(gender), Some(age)) => Self::resolve(gender, age),
            _ => {
                tracing::warn!("未知角色 ({}, {})，使用默认音色", gender, age);
                Self::DEFAULT_VOICE
            }
        }
    }
}
