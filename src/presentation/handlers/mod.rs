mod error_response;
mod health;
mod models;
mod transcriptions;
mod transcripts;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use models::{models_handler, set_model_handler};
pub use transcriptions::transcription_handler;
pub use transcripts::transcript_download_handler;
