//! 读取文本文件（或命令行文本），输出规范化后的合成请求
//!
//! 用法: cargo run --example prepare_request -- <file.txt | text>

use std::path::Path;

use vspeak_core::config::VSpeakConfig;
use vspeak_core::source::{TextDocument, DEFAULT_PREVIEW_CHARS};
use vspeak_core::synthesis::SynthesisRequest;
use vspeak_core::tn::TNEngine;
use vspeak_core::VSpeakResult;

fn main() -> VSpeakResult<()> {
    vspeak_core::init_logging();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "Part 1\nIt's $50.".to_string());
    let document = if Path::new(&arg).is_file() {
        TextDocument::from_path(&arg)?
    } else {
        TextDocument::inline(arg)
    };

    let config = VSpeakConfig::load()?;
    let engine = TNEngine::with_config(&config.tn);

    println!("📄 {} 个字符", document.char_count());
    println!("{}", document.preview(DEFAULT_PREVIEW_CHARS));
    println!("{}", "-".repeat(60));

    let request = SynthesisRequest::prepare(
        &engine,
        &document,
        config.voice.voice_id(),
        config.voice.rate()?,
    )?;

    println!("voice: {}", request.voice);
    println!("rate:  {}", request.rate);
    println!("{}", request.text);

    Ok(())
}
