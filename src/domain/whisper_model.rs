use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WhisperModel {
    Tiny,
    Base,
    Small,
    Medium,
    #[default]
    LargeV3Turbo,
}

const ALL_MODELS: [WhisperModel; 5] = [
    WhisperModel::Tiny,
    WhisperModel::Base,
    WhisperModel::Small,
    WhisperModel::Medium,
    WhisperModel::LargeV3Turbo,
];

impl WhisperModel {
    pub fn all() -> &'static [WhisperModel] {
        &ALL_MODELS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WhisperModel::Tiny => "tiny",
            WhisperModel::Base => "base",
            WhisperModel::Small => "small",
            WhisperModel::Medium => "medium",
            WhisperModel::LargeV3Turbo => "large-v3-turbo",
        }
    }

    /// ggml weights file name inside the configured model directory.
    pub fn file_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }
}

impl FromStr for WhisperModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MODELS
            .iter()
            .copied()
            .find(|model| model.as_str() == s.trim())
            .ok_or_else(|| {
                let expected: Vec<&str> = ALL_MODELS.iter().map(WhisperModel::as_str).collect();
                format!(
                    "Invalid whisper model: {}. Expected one of: {}",
                    s,
                    expected.join(", ")
                )
            })
    }
}

impl fmt::Display for WhisperModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
