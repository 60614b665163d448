//! 语音参数模块
//!
//! 角色（性别 + 年龄段）到合成音色的映射，以及语速调节

pub mod catalog;
pub mod rate;

pub use catalog::{AgeGroup, Gender, VoiceCatalog};
pub use rate::SpeechRate;
