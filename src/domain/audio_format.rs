#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mpeg,
    Wav,
    Ogg,
    Mp4,
    Flac,
    Aac,
}

impl AudioFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "audio/mpeg" => Some(Self::Mpeg),
            "audio/wav" | "audio/x-wav" => Some(Self::Wav),
            "audio/ogg" => Some(Self::Ogg),
            "audio/mp4" => Some(Self::Mp4),
            "audio/flac" => Some(Self::Flac),
            "audio/aac" => Some(Self::Aac),
            _ => None,
        }
    }
}
