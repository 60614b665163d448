//! 语音合成边界
//!
//! 组装合成请求；远程合成服务本身由外部实现 `SpeechSynthesizer`

use crate::error::{VSpeakError, VSpeakResult};
use crate::source::TextDocument;
use crate::tn::TNEngine;
use crate::voice::SpeechRate;

/// 合成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    /// 规范化后的文本
    pub text: String,
    /// 音色 ID
    pub voice: String,
    /// 语速参数（例如 "+10%"）
    pub rate: String,
}

impl SynthesisRequest {
    /// 规范化文档并组装请求
    ///
    /// 空白文档返回 `EmptyInput`
    pub fn prepare(
        engine: &TNEngine,
        document: &TextDocument,
        voice: &str,
        rate: SpeechRate,
    ) -> VSpeakResult<Self> {
        if document.is_blank() {
            return Err(VSpeakError::EmptyInput);
        }

        let result = engine.process(&document.text);
        if result.latin_dominant {
            tracing::info!("检测到英文环境，已优化 {} 处数字与符号读音", result.changes.len());
        } else {
            tracing::info!("检测到中文环境，保持原样");
        }

        Ok(Self {
            text: result.text,
            voice: voice.to_string(),
            rate: rate.as_param(),
        })
    }
}

/// 语音合成服务
///
/// 返回编码后的音频数据（例如 MP3）
pub trait SpeechSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest) -> VSpeakResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{AgeGroup, Gender, VoiceCatalog};
    use std::cell::RefCell;

    /// 记录请求的假合成器
    struct RecordingSynthesizer {
        requests: RefCell<Vec<SynthesisRequest>>,
    }

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn synthesize(&self, request: &SynthesisRequest) -> VSpeakResult<Vec<u8>> {
            self.requests.borrow_mut().push(request.clone());
            Ok(request.text.as_bytes().to_vec())
        }
    }

    #[test]
    fn test_prepare_english() {
        let engine = TNEngine::default();
        let doc = TextDocument::inline("Hairdresser: It's $50.");
        let voice = VoiceCatalog::resolve(Gender::Male, AgeGroup::Young);

        let request = SynthesisRequest::prepare(&engine, &doc, voice, SpeechRate::new(10).unwrap())
            .unwrap();

        assert_eq!(request.text, "Hairdresser: It's Fifty dollars.");
        assert_eq!(request.voice, "zh-CN-YunxiNeural");
        assert_eq!(request.rate, "+10%");
    }

    #[test]
    fn test_prepare_chinese_unchanged() {
        let engine = TNEngine::default();
        let doc = TextDocument::inline("第1部分：价格是50元");

        let request =
            SynthesisRequest::prepare(&engine, &doc, VoiceCatalog::DEFAULT_VOICE, SpeechRate::default())
                .unwrap();

        assert_eq!(request.text, "第1部分：价格是50元");
        assert_eq!(request.rate, "+0%");
    }

    #[test]
    fn test_prepare_empty_input() {
        let engine = TNEngine::default();
        let doc = TextDocument::inline("   \n");

        assert!(matches!(
            SynthesisRequest::prepare(&engine, &doc, VoiceCatalog::DEFAULT_VOICE, SpeechRate::default()),
            Err(VSpeakError::EmptyInput)
        ));
    }

    #[test]
    fn test_synthesizer_receives_normalized_text() {
        let engine = TNEngine::default();
        let synth = RecordingSynthesizer {
            requests: RefCell::new(Vec::new()),
        };
        let doc = TextDocument::inline("Part 2");

        let request =
            SynthesisRequest::prepare(&engine, &doc, VoiceCatalog::DEFAULT_VOICE, SpeechRate::default())
                .unwrap();
        let audio = synth.synthesize(&request).unwrap();

        assert_eq!(audio, b"Part Two".to_vec());
        assert_eq!(synth.requests.borrow().len(), 1);
    }
}
