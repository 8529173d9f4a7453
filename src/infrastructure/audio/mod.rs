mod ffmpeg_normalizer;
mod whisper_cli_engine;

pub use ffmpeg_normalizer::{FfmpegNormalizer, TARGET_SAMPLE_RATE};
pub use whisper_cli_engine::WhisperCliEngine;
